use super::region::PureRegion;
use super::threshold::clamp_threshold;

/// Keep the significant, non-redundant regions.
///
/// Dominance runs first and thresholding second. A large region that fails
/// the threshold has still removed the smaller regions it contains by then.
pub fn filter_significant(regions: Vec<PureRegion>, threshold: f64) -> Vec<PureRegion> {
    let threshold = clamp_threshold(threshold);
    let mut kept = dominant_regions(regions);
    kept.retain(|r| r.is_significant(threshold));
    kept
}

/// Drop every region dominated by a larger one, without any threshold.
///
/// Regions are ranked by row count, then by width, both descending; the sort
/// is stable so equal regions keep their finder order. A region is kept
/// unless an already kept region dominates it.
pub fn dominant_regions(mut regions: Vec<PureRegion>) -> Vec<PureRegion> {
    regions.sort_by(|a, b| {
        b.row_count
            .cmp(&a.row_count)
            .then_with(|| b.width().total_cmp(&a.width()))
    });

    let mut kept: Vec<PureRegion> = Vec::new();
    for region in regions {
        if !kept.iter().any(|k| k.dominates(&region)) {
            kept.push(region);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::finder::find_regions_at;
    use crate::analysis::test_support::{four_rows, noisy_dataset, region};

    fn with_coverage(mut r: PureRegion, of_class: f64, of_dataset: f64) -> PureRegion {
        r.coverage_of_class = of_class;
        r.coverage_of_dataset = of_dataset;
        r
    }

    #[test]
    fn test_four_row_example_low_threshold() {
        let raw = find_regions_at(&four_rows(), 1);
        let kept = filter_significant(raw, 50.0);
        assert_eq!(kept.len(), 2);
        assert_eq!((kept[0].start, kept[0].end), (1.0, 3.0));
        assert_eq!(kept[0].dominant_class, "A");
        assert_eq!(kept[0].row_count, 3);
        assert_eq!((kept[1].start, kept[1].end), (10.0, 10.0));
        assert_eq!(kept[1].dominant_class, "B");
    }

    #[test]
    fn test_four_row_example_class_coverage_carries_threshold() {
        // Both regions cover 100% of their class, so 80 keeps them.
        let kept = filter_significant(find_regions_at(&four_rows(), 1), 80.0);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_either_measure_clears_threshold() {
        let regions = vec![
            with_coverage(region("x", 0.0, 1.0, "A", 4), 10.0, 60.0),
            with_coverage(region("y", 0.0, 1.0, "A", 4), 60.0, 10.0),
            with_coverage(region("z", 0.0, 1.0, "A", 4), 59.9, 59.9),
        ];
        let kept = filter_significant(regions, 60.0);
        let names: Vec<&str> = kept.iter().map(|r| r.attribute.as_str()).collect();
        assert_eq!(names, ["x", "y"]);
    }

    #[test]
    fn test_different_classes_coexist() {
        let regions = vec![
            region("x", 0.0, 5.0, "A", 3),
            region("x", 0.0, 5.0, "B", 3),
        ];
        assert_eq!(dominant_regions(regions).len(), 2);
    }

    #[test]
    fn test_wider_region_ranks_first_on_equal_count() {
        let regions = vec![
            region("x", 1.0, 2.0, "A", 2),
            region("x", 0.0, 2.0, "A", 2),
        ];
        let kept = dominant_regions(regions);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].start, 0.0);
    }

    #[test]
    fn test_filtered_out_container_still_suppresses() {
        // The container fails the threshold but has already removed the
        // smaller region, which would have passed on its own.
        let regions = vec![
            with_coverage(region("x", 0.0, 10.0, "A", 5), 40.0, 40.0),
            with_coverage(region("x", 2.0, 3.0, "A", 5), 40.0, 40.0),
            with_coverage(region("y", 0.0, 1.0, "A", 1), 5.0, 5.0),
        ];
        assert!(filter_significant(regions, 50.0).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let raw = find_regions_at(&noisy_dataset(), 2);
        for threshold in [0.0, 5.0, 25.0, 60.0] {
            let once = filter_significant(raw.clone(), threshold);
            let twice = filter_significant(once.clone(), threshold);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_threshold_monotonicity() {
        let raw = find_regions_at(&noisy_dataset(), 2);
        let mut previous = usize::MAX;
        for threshold in 0..=100 {
            let n = filter_significant(raw.clone(), threshold as f64).len();
            assert!(n <= previous, "threshold {threshold}: {n} > {previous}");
            previous = n;
        }
    }

    #[test]
    fn test_out_of_range_threshold_is_clamped() {
        let raw = find_regions_at(&four_rows(), 1);
        assert_eq!(
            filter_significant(raw.clone(), -20.0),
            filter_significant(raw.clone(), 0.0)
        );
        assert_eq!(
            filter_significant(raw.clone(), 250.0),
            filter_significant(raw, 100.0)
        );
    }
}
