use crate::models::Dataset;
use crate::utils::constants::KDE_GRID_POINTS;
use serde::Serialize;
use std::f64::consts::PI;
use tracing::debug;

/// Equal-width temperature histogram with a count-scaled density overlay.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TemperatureHistogram {
    /// `bins + 1` edges; empty when there are no finite readings.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
    /// `(temperature, expected count per bin)` points of the smoothed curve.
    pub density: Vec<(f64, f64)>,
    pub bandwidth: Option<f64>,
    pub observations: usize,
}

impl TemperatureHistogram {
    pub fn bin_width(&self) -> Option<f64> {
        match self.edges.as_slice() {
            [first, second, ..] => Some(second - first),
            _ => None,
        }
    }

    pub fn range(&self) -> Option<(f64, f64)> {
        Some((*self.edges.first()?, *self.edges.last()?))
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Every `(temperature_celsius, humidity)` pair in table order.
pub fn temperature_humidity_pairs(dataset: &Dataset) -> Vec<(f64, f64)> {
    dataset
        .iter()
        .map(|r| (r.temperature_celsius, r.humidity))
        .collect()
}

pub fn temperature_histogram(dataset: &Dataset, bins: usize) -> TemperatureHistogram {
    let values: Vec<f64> = dataset
        .iter()
        .map(|r| r.temperature_celsius)
        .filter(|t| t.is_finite())
        .collect();
    histogram(&values, bins)
}

/// Bucket `values` into `bins` equal-width bins over their observed range.
/// The last bin is closed on the right.
pub fn histogram(values: &[f64], bins: usize) -> TemperatureHistogram {
    if values.is_empty() {
        return TemperatureHistogram::default();
    }
    let bins = bins.max(1);

    let (mut lo, mut hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &value in values {
        let index = (((value - lo) / width).floor() as usize).min(bins - 1);
        counts[index] += 1;
    }
    let mut edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();
    edges[bins] = hi;

    let bandwidth = scott_bandwidth(values);
    let scale = values.len() as f64 * width;
    let density = bandwidth
        .map(|h| {
            gaussian_kde(values, h, lo, hi, KDE_GRID_POINTS)
                .into_iter()
                .map(|(x, d)| (x, d * scale))
                .collect()
        })
        .unwrap_or_default();

    debug!(
        observations = values.len(),
        bins,
        bandwidth = ?bandwidth,
        "Computed temperature histogram"
    );

    TemperatureHistogram {
        edges,
        counts,
        density,
        bandwidth,
        observations: values.len(),
    }
}

/// Scott's rule: sample standard deviation times n^(-1/5).
pub fn scott_bandwidth(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let bandwidth = variance.sqrt() * (n as f64).powf(-0.2);

    (bandwidth.is_finite() && bandwidth > 0.0).then_some(bandwidth)
}

/// Gaussian kernel density evaluated at `points` evenly spaced positions over [lo, hi].
pub fn gaussian_kde(values: &[f64], bandwidth: f64, lo: f64, hi: f64, points: usize) -> Vec<(f64, f64)> {
    if values.is_empty() || points < 2 {
        return Vec::new();
    }

    let norm = 1.0 / (values.len() as f64 * bandwidth * (2.0 * PI).sqrt());
    let step = (hi - lo) / (points - 1) as f64;

    (0..points)
        .map(|i| {
            let x = lo + step * i as f64;
            let sum: f64 = values
                .iter()
                .map(|v| {
                    let z = (x - v) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum();
            (x, sum * norm)
        })
        .collect()
}
