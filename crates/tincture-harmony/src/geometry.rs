//! Ordering and hue geometry shared by the generators.

use std::cmp::Ordering;

use tincture_core::Color;
use tincture_core::hue::FULL_TURN;

/// Three-way numeric comparison.
///
/// Incomparable values (NaN) compare equal.
pub fn compare_numeric(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Total order on colors: hue, then saturation, then value, all ascending.
pub fn compare_colors(a: &Color, b: &Color) -> Ordering {
    compare_numeric(a.hue(), b.hue())
        .then_with(|| compare_numeric(a.saturation(), b.saturation()))
        .then_with(|| compare_numeric(a.value(), b.value()))
}

/// Sort colors in place by [`compare_colors`].
pub fn sort_colors(colors: &mut [Color]) {
    colors.sort_by(compare_colors);
}

/// Shortest angular distance between two hues, in `[0, 180]`.
pub fn angular_delta(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % FULL_TURN;
    if d > FULL_TURN / 2.0 { FULL_TURN - d } else { d }
}

/// Angular distances between every pair of colors, sorted ascending.
///
/// A grouping of `n` colors yields `n * (n - 1) / 2` distances.
pub fn relative_hue_list(colors: &[Color]) -> Vec<f64> {
    let mut deltas = Vec::with_capacity(colors.len() * colors.len().saturating_sub(1) / 2);
    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            deltas.push(angular_delta(a.hue(), b.hue()));
        }
    }
    deltas.sort_by(|a, b| compare_numeric(*a, *b));
    deltas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_numeric() {
        assert_eq!(compare_numeric(1.0, 2.0), Ordering::Less);
        assert_eq!(compare_numeric(2.0, 1.0), Ordering::Greater);
        assert_eq!(compare_numeric(3.0, 3.0), Ordering::Equal);
        assert_eq!(compare_numeric(f64::NAN, 3.0), Ordering::Equal);
    }

    #[test]
    fn test_compare_colors_orders_by_hue_first() {
        let a = Color::hsv(10.0, 90.0, 90.0);
        let b = Color::hsv(20.0, 10.0, 10.0);
        assert_eq!(compare_colors(&a, &b), Ordering::Less);
        assert_eq!(compare_colors(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_compare_colors_falls_through() {
        let a = Color::hsv(10.0, 40.0, 90.0);
        let b = Color::hsv(10.0, 50.0, 10.0);
        assert_eq!(compare_colors(&a, &b), Ordering::Less);

        let c = Color::hsv(10.0, 50.0, 20.0);
        assert_eq!(compare_colors(&b, &c), Ordering::Less);
        assert_eq!(compare_colors(&c, &c.clone()), Ordering::Equal);
    }

    #[test]
    fn test_sort_colors() {
        let mut colors = vec![
            Color::hsv(200.0, 50.0, 50.0),
            Color::hsv(10.0, 50.0, 50.0),
            Color::hsv(10.0, 20.0, 50.0),
        ];
        sort_colors(&mut colors);
        let hues: Vec<f64> = colors.iter().map(Color::hue).collect();
        assert_eq!(hues, vec![10.0, 10.0, 200.0]);
        assert_eq!(colors[0].saturation(), 20.0);
    }

    #[test]
    fn test_angular_delta() {
        assert_eq!(angular_delta(0.0, 0.0), 0.0);
        assert_eq!(angular_delta(10.0, 350.0), 20.0);
        assert_eq!(angular_delta(350.0, 10.0), 20.0);
        assert_eq!(angular_delta(0.0, 180.0), 180.0);
        assert_eq!(angular_delta(0.0, 270.0), 90.0);
        assert_eq!(angular_delta(-90.0, 90.0), 180.0);
        assert_eq!(angular_delta(30.0, 750.0), 0.0);
    }

    #[test]
    fn test_relative_hue_list() {
        let colors = [
            Color::hsv(0.0, 50.0, 50.0),
            Color::hsv(120.0, 50.0, 50.0),
            Color::hsv(240.0, 50.0, 50.0),
        ];
        assert_eq!(relative_hue_list(&colors), vec![120.0, 120.0, 120.0]);
        assert!(relative_hue_list(&colors[..1]).is_empty());
        assert!(relative_hue_list(&[]).is_empty());
    }
}
