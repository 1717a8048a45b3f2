use crate::models::{AqiStatus, Dataset};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryMean {
    pub country: String,
    pub mean_pm25: f64,
    pub readings: usize,
}

/// Five-number summary of carbon monoxide readings for one condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxStats {
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionCo {
    pub condition: String,
    pub stats: BoxStats,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CoDistribution {
    /// Most frequent conditions, most frequent first.
    pub conditions: Vec<String>,
    /// `(condition_text, carbon_monoxide)` for every retained row, in table order.
    #[serde(skip)]
    pub readings: Vec<(String, f64)>,
    pub per_condition: Vec<ConditionCo>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AqiShare {
    pub status: AqiStatus,
    pub count: usize,
    pub percentage: f64,
}

impl AqiShare {
    /// Percentage rounded to one decimal place, as displayed.
    pub fn rounded_percentage(&self) -> f64 {
        (self.percentage * 10.0).round() / 10.0
    }
}

/// Count occurrences, most frequent first. Equal counts keep first-seen order.
pub(crate) fn value_counts<K, I>(values: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for value in values {
        match index.get(&value) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    // sort_by is stable
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Countries ranked by mean PM2.5, highest first, at most `limit` entries.
/// Equal means are ordered by country name.
pub fn top_countries_by_pm25(dataset: &Dataset, limit: usize) -> Vec<CountryMean> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();

    for record in dataset {
        let entry = groups.entry(record.country.as_str()).or_insert((0.0, 0));
        entry.0 += record.pm25;
        entry.1 += 1;
    }

    let mut means: Vec<CountryMean> = groups
        .into_iter()
        .map(|(country, (sum, readings))| CountryMean {
            country: country.to_string(),
            mean_pm25: sum / readings as f64,
            readings,
        })
        .collect();

    means.sort_by(|a, b| b.mean_pm25.total_cmp(&a.mean_pm25));
    means.truncate(limit);

    debug!(countries = means.len(), "Computed top countries by PM2.5");
    means
}

/// Carbon monoxide readings restricted to the `limit` most frequent conditions.
pub fn co_by_top_conditions(dataset: &Dataset, limit: usize) -> CoDistribution {
    let conditions: Vec<String> = value_counts(dataset.iter().map(|r| r.condition_text.as_str()))
        .into_iter()
        .take(limit)
        .map(|(condition, _)| condition.to_string())
        .collect();

    let readings: Vec<(String, f64)> = dataset
        .iter()
        .filter(|r| conditions.contains(&r.condition_text))
        .map(|r| (r.condition_text.clone(), r.carbon_monoxide))
        .collect();

    let per_condition = conditions
        .iter()
        .filter_map(|condition| {
            let values: Vec<f64> = readings
                .iter()
                .filter(|(c, _)| c == condition)
                .map(|(_, co)| *co)
                .collect();
            box_stats(&values).map(|stats| ConditionCo {
                condition: condition.clone(),
                stats,
            })
        })
        .collect();

    debug!(
        conditions = conditions.len(),
        rows = readings.len(),
        "Filtered CO readings to top conditions"
    );

    CoDistribution {
        conditions,
        readings,
        per_condition,
    }
}

/// Share of each AQI tier present in the data, most common first.
pub fn aqi_distribution(dataset: &Dataset) -> Vec<AqiShare> {
    let total = dataset.len();
    if total == 0 {
        return Vec::new();
    }

    value_counts(dataset.iter().map(|r| r.aqi_status))
        .into_iter()
        .map(|(status, count)| AqiShare {
            status,
            count,
            percentage: count as f64 * 100.0 / total as f64,
        })
        .collect()
}

/// Quartiles with linear interpolation between closest ranks.
pub fn box_stats(values: &[f64]) -> Option<BoxStats> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    Some(BoxStats {
        count: sorted.len(),
        min: sorted[0],
        q1: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q3: quantile(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    })
}

fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}
