//! Property tests for the binning engine

use distview_histogram::{
    compute_cumulative, compute_histogram, cumulative_from_sample, FixedWidthBuilder,
    HistogramBuilder,
};
use proptest::prelude::*;

fn finite_sample() -> impl Strategy<Value = Vec<f64>> {
    use prop::num::f64::{NEGATIVE, NORMAL, POSITIVE, SUBNORMAL, ZERO};
    let any_finite = POSITIVE | NEGATIVE | NORMAL | SUBNORMAL | ZERO;
    prop::collection::vec(prop_oneof![-1.0e6..1.0e6f64, any_finite], 1..300)
}

proptest! {
    #[test]
    fn prop_counts_cover_sample(data in finite_sample(), bins in 1usize..120) {
        let hist = compute_histogram(&data, bins).unwrap();
        prop_assert_eq!(hist.counts().iter().sum::<usize>(), data.len());
        prop_assert_eq!(hist.total_count(), data.len());
    }

    #[test]
    fn prop_shape(data in finite_sample(), bins in 1usize..120) {
        let hist = compute_histogram(&data, bins).unwrap();
        let edges = hist.edges().as_slice();
        prop_assert_eq!(edges.len(), bins + 1);
        prop_assert_eq!(hist.counts().len(), bins);
        prop_assert!(edges.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_range_boundaries(data in finite_sample(), bins in 1usize..120) {
        let hist = compute_histogram(&data, bins).unwrap();
        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(hist.edges().min(), min);
        prop_assert_eq!(hist.edges().max(), max);
        prop_assert_eq!(hist.find_bin(min), Some(0));
        if min < max {
            prop_assert_eq!(hist.find_bin(max), Some(bins - 1));
        }
    }

    #[test]
    fn prop_first_match_membership(data in finite_sample(), bins in 1usize..60) {
        let hist = compute_histogram(&data, bins).unwrap();
        let edges = hist.edges().as_slice();
        let mut expected = vec![0usize; bins];
        for &v in &data {
            let i = (0..bins).find(|&i| v <= edges[i + 1]).unwrap();
            expected[i] += 1;
        }
        prop_assert_eq!(hist.counts(), &expected[..]);
    }

    #[test]
    fn prop_sorted_build_agrees(data in finite_sample(), bins in 1usize..60) {
        let mut sorted = data.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let builder = FixedWidthBuilder::new(bins);
        prop_assert_eq!(builder.build(&data).unwrap(), builder.build_sorted(&sorted).unwrap());
    }

    #[test]
    fn prop_cumulative_monotone(data in finite_sample(), bins in 1usize..120) {
        let hist = compute_histogram(&data, bins).unwrap();
        let cum = compute_cumulative(hist.counts()).unwrap();
        prop_assert_eq!(cum.len(), bins);
        prop_assert!(cum.values().windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(cum.total(), hist.counts().iter().sum::<usize>());
    }

    #[test]
    fn prop_cumulative_paths_agree(data in finite_sample(), bins in 1usize..120) {
        let hist = compute_histogram(&data, bins).unwrap();
        let (edges, cum) = cumulative_from_sample(&data, bins).unwrap();
        prop_assert_eq!(&edges, hist.edges());
        prop_assert_eq!(cum, hist.cumulative());
    }
}

#[test]
fn known_partition() {
    let data: Vec<f64> = (0..10).map(f64::from).collect();
    let hist = compute_histogram(&data, 5).unwrap();
    assert_eq!(hist.counts(), &[2, 2, 2, 2, 2]);
    assert_eq!(hist.counts().iter().sum::<usize>(), 10);

    let cum = compute_cumulative(hist.counts()).unwrap();
    assert_eq!(cum.values(), &[2, 4, 6, 8, 10]);
}

#[test]
fn degenerate_range() {
    let hist = compute_histogram(&[5.0, 5.0, 5.0], 4).unwrap();
    assert_eq!(hist.counts(), &[3, 0, 0, 0]);
    assert_eq!(hist.edges().as_slice(), &[5.0; 5]);
    assert_eq!(compute_cumulative(hist.counts()).unwrap().values(), &[3, 3, 3, 3]);
}

#[test]
fn single_value_sample() {
    let hist = compute_histogram(&[-2.5], 1).unwrap();
    assert_eq!(hist.counts(), &[1]);
    assert!(hist.is_degenerate());
}

#[test]
fn boundary_values_stay_left() {
    // 0, 2.5, 5, 7.5, 10 sit exactly on the edges of 4 bins
    let data = vec![0.0, 2.5, 5.0, 7.5, 10.0];
    let hist = compute_histogram(&data, 4).unwrap();
    assert_eq!(hist.edges().as_slice(), &[0.0, 2.5, 5.0, 7.5, 10.0]);
    assert_eq!(hist.counts(), &[2, 1, 1, 1]);
}

#[test]
fn huge_range_keeps_max_in_last_bin() {
    let hist = compute_histogram(&[-1e308, 0.0, 1e308], 4).unwrap();
    assert_eq!(hist.counts(), &[1, 1, 0, 1]);
    assert_eq!(hist.find_bin(-1e308), Some(0));
    assert_eq!(hist.find_bin(1e308), Some(3));
    assert!(hist.edges().as_slice().iter().all(|e| e.is_finite()));

    let sorted = FixedWidthBuilder::new(4).build_sorted(&[-1e308, 0.0, 1e308]).unwrap();
    assert_eq!(sorted, hist);
}

#[test]
fn rejects_invalid_input() {
    assert!(compute_histogram(&[], 5).unwrap_err().is_invalid_sample());
    assert!(compute_histogram(&[f64::NAN, f64::INFINITY], 5)
        .unwrap_err()
        .is_invalid_sample());
    assert!(compute_histogram(&[1.0, 2.0], 0).unwrap_err().is_invalid_argument());
    assert!(compute_cumulative(&[]).unwrap_err().is_invalid_argument());
}
