use serde::{Deserialize, Serialize};

use crate::model::RestaurantRecord;

/// quantile of the surplus distribution used as the starting threshold.
pub const DEFAULT_THRESHOLD_QUANTILE: f64 = 0.8;

/// bounds and starting value of the minimum-surplus slider. computed once from
/// the full restaurant dataset and never recomputed as the threshold moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurplusFilter {
    /// smallest observed surplus
    pub min: f64,
    /// largest observed surplus
    pub max: f64,
    /// the configured quantile of the observed surplus
    pub default_threshold: f64,
}

impl SurplusFilter {
    /// builds the slider from observed values. an empty dataset yields a
    /// degenerate `[0, 0]` slider.
    pub fn from_restaurants(restaurants: &[RestaurantRecord], quantile_q: f64) -> SurplusFilter {
        let values = restaurants
            .iter()
            .map(|r| r.predicted_surplus)
            .collect::<Vec<_>>();
        let min = values.iter().copied().reduce(f64::min).unwrap_or(0.0);
        let max = values.iter().copied().reduce(f64::max).unwrap_or(0.0);
        let default_threshold = quantile(&values, quantile_q).unwrap_or(min);
        SurplusFilter {
            min,
            max,
            default_threshold,
        }
    }

    /// the threshold to apply for a request. absent or non-finite values fall back
    /// to the default; finite values are used as given, so a threshold above
    /// [`SurplusFilter::max`] selects nothing.
    pub fn resolve_threshold(&self, requested: Option<f64>) -> f64 {
        requested
            .filter(|t| t.is_finite())
            .unwrap_or(self.default_threshold)
    }
}

/// restaurants whose surplus is at least `threshold`, in dataset order.
pub fn filter_restaurants(
    restaurants: &[RestaurantRecord],
    threshold: f64,
) -> Vec<&RestaurantRecord> {
    restaurants
        .iter()
        .filter(|r| r.predicted_surplus >= threshold)
        .collect()
}

/// quantile with linear interpolation between the closest ranks.
///
/// # Arguments
/// * `values` - unsorted sample, must not contain NaN
/// * `q` - quantile in `[0, 1]`, clamped
///
/// # Returns
/// None for an empty sample
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurants(surplus: &[f64]) -> Vec<RestaurantRecord> {
        surplus
            .iter()
            .enumerate()
            .map(|(i, s)| RestaurantRecord::new(Some(format!("r{i}")), None, *s))
            .collect()
    }

    #[test]
    fn test_quantile_interpolates() {
        let q80 = quantile(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.8).unwrap();
        assert!((q80 - 4.2).abs() < 1e-9);
        assert_eq!(quantile(&[5.0, 1.0, 3.0], 0.5), Some(3.0));
        assert_eq!(quantile(&[2.0], 0.8), Some(2.0));
        assert_eq!(quantile(&[], 0.8), None);
    }

    #[test]
    fn test_slider_bounds_and_default() {
        let data = restaurants(&[4.0, 0.0, 10.0, 2.0, 6.0]);
        let filter = SurplusFilter::from_restaurants(&data, DEFAULT_THRESHOLD_QUANTILE);
        assert_eq!(filter.min, 0.0);
        assert_eq!(filter.max, 10.0);
        // sorted [0, 2, 4, 6, 10], position 3.2 -> 6 + 0.2 * 4
        assert!((filter.default_threshold - 6.8).abs() < 1e-9);
    }

    #[test]
    fn test_empty_dataset_slider() {
        let filter = SurplusFilter::from_restaurants(&[], DEFAULT_THRESHOLD_QUANTILE);
        assert_eq!(filter.min, 0.0);
        assert_eq!(filter.max, 0.0);
        assert_eq!(filter.default_threshold, 0.0);
        assert!(filter_restaurants(&[], filter.default_threshold).is_empty());
    }

    #[test]
    fn test_filter_is_inclusive_and_bounded() {
        let data = restaurants(&[4.0, 0.0, 10.0, 2.0, 6.0]);
        let filter = SurplusFilter::from_restaurants(&data, DEFAULT_THRESHOLD_QUANTILE);
        assert_eq!(filter_restaurants(&data, filter.min).len(), data.len());
        assert_eq!(filter_restaurants(&data, 6.0).len(), 2);
        assert!(filter_restaurants(&data, filter.max + 1e-9).is_empty());
    }

    #[test]
    fn test_filter_is_monotonic() {
        let data = restaurants(&[3.5, 0.0, 0.0, 8.25, 1.0, 12.0, 7.0, 3.5]);
        let mut previous = usize::MAX;
        for step in 0..=130 {
            let threshold = step as f64 * 0.1;
            let count = filter_restaurants(&data, threshold).len();
            assert!(count <= previous, "count rose at threshold {threshold}");
            previous = count;
        }
    }

    #[test]
    fn test_filter_keeps_source_untouched() {
        let data = restaurants(&[1.0, 5.0, 9.0]);
        let before = data.clone();
        let subset = filter_restaurants(&data, 5.0);
        assert_eq!(subset.len(), 2);
        assert_eq!(subset[0].name.as_deref(), Some("r1"));
        assert_eq!(data, before);
    }

    #[test]
    fn test_resolve_threshold() {
        let filter = SurplusFilter {
            min: 0.0,
            max: 10.0,
            default_threshold: 6.8,
        };
        assert_eq!(filter.resolve_threshold(None), 6.8);
        assert_eq!(filter.resolve_threshold(Some(f64::NAN)), 6.8);
        assert_eq!(filter.resolve_threshold(Some(2.5)), 2.5);
        assert_eq!(filter.resolve_threshold(Some(11.0)), 11.0);
    }
}
