use plotters::style::RGBColor;

pub const PURPLE: RGBColor = RGBColor(128, 0, 128);
pub const FOREST_GREEN: RGBColor = RGBColor(0, 128, 0);

const REDS_DARK: RGBColor = RGBColor(103, 0, 13);
const REDS_LIGHT: RGBColor = RGBColor(252, 187, 161);
const COPPER_DARK: RGBColor = RGBColor(255, 199, 127);
const COPPER_LIGHT: RGBColor = RGBColor(92, 58, 37);
const PINK_DARK: RGBColor = RGBColor(170, 100, 120);
const PINK_LIGHT: RGBColor = RGBColor(240, 215, 220);

fn lerp(from: RGBColor, to: RGBColor, t: f64) -> RGBColor {
    let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    RGBColor(
        channel(from.0, to.0),
        channel(from.1, to.1),
        channel(from.2, to.2),
    )
}

/// `n` colours evenly spaced from `from` to `to`.
fn gradient(from: RGBColor, to: RGBColor, n: usize) -> Vec<RGBColor> {
    match n {
        0 => Vec::new(),
        1 => vec![from],
        _ => (0..n)
            .map(|i| lerp(from, to, i as f64 / (n - 1) as f64))
            .collect(),
    }
}

/// Reversed reds: darkest first, for bars ranked highest first.
pub fn reds_reversed(n: usize) -> Vec<RGBColor> {
    gradient(REDS_DARK, REDS_LIGHT, n)
}

/// Reversed copper, for the condition boxes.
pub fn copper_reversed(n: usize) -> Vec<RGBColor> {
    gradient(COPPER_DARK, COPPER_LIGHT, n)
}

/// Muted pinks for the AQI pie slices.
pub fn pinks(n: usize) -> Vec<RGBColor> {
    gradient(PINK_DARK, PINK_LIGHT, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_endpoints() {
        let reds = reds_reversed(10);
        assert_eq!(reds.len(), 10);
        assert_eq!(reds[0], REDS_DARK);
        assert_eq!(reds[9], REDS_LIGHT);

        assert_eq!(pinks(1), vec![PINK_DARK]);
        assert!(copper_reversed(0).is_empty());
    }
}
