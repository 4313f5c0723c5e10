//! End-to-end checks over the public API.

use kselect::dataset::synthetic_segments;
use kselect::{
    calinski_harabasz_score, cluster, Analysis, AnalysisOptions, ClusterError, KMeans, KRange,
    Metric, Point, ResultTable, Summary, ValiditySweep,
};
use ndarray::array;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn scenario_a() -> Vec<Point> {
    Point::from_rows(&array![[0.0, 0.0], [0.0, 1.0], [10.0, 10.0], [10.0, 11.0]])
}

#[test]
fn separated_pairs_converge_for_any_draw() {
    let points = scenario_a();
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = cluster(&points, 2, 100, &mut rng).unwrap();
        let labels = result.labels();

        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[2], labels[3]);
        assert_ne!(labels[0], labels[2]);

        let mut centroids: Vec<(f64, f64)> =
            result.centroids().iter().map(|c| (c[0], c[1])).collect();
        centroids.sort_by(|a, b| a.0.total_cmp(&b.0));
        assert!((centroids[0].0 - 0.0).abs() < 1e-9 && (centroids[0].1 - 0.5).abs() < 1e-9);
        assert!((centroids[1].0 - 10.0).abs() < 1e-9 && (centroids[1].1 - 10.5).abs() < 1e-9);
    }
}

#[test]
fn identical_points_have_zero_variance_ratio() {
    let points = Point::from_rows(&array![[5.0, 5.0], [5.0, 5.0], [5.0, 5.0], [5.0, 5.0]]);
    let result = KMeans::new(2).random_state(13).fit(&points).unwrap();

    assert_eq!(result.centroids().len(), 2);
    assert_eq!(calinski_harabasz_score(result.points(), result.centroids()), 0.0);
    assert_eq!(Metric::CalinskiHarabasz.score(&result), 0.0);
}

#[test]
fn sweep_over_small_range() {
    let report = ValiditySweep::new(KRange::new(2, 4).unwrap())
        .run(&scenario_a())
        .unwrap();

    for metric in Metric::ALL {
        let curve = report.curve(metric);
        assert_eq!(curve.len(), 3);
        for k in 2..=4 {
            assert!(curve.get(k).is_some_and(f64::is_finite));
        }
    }
}

#[test]
fn k_below_range_is_rejected() {
    let range = KRange::new(2, 7).unwrap();
    assert_eq!(
        range.check(1),
        Err(ClusterError::InvalidClusterCount { k: 1, min: 2, max: 7 })
    );

    let raw = array![[0.0, 0.0], [0.0, 1.0], [10.0, 10.0], [10.0, 11.0]];
    assert!(Analysis::run(&raw, 1, range, &AnalysisOptions::default()).is_err());
}

#[test]
fn zero_points_cannot_be_clustered() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        cluster(&[], 1, 100, &mut rng),
        Err(ClusterError::InvalidClusterCount { k: 1, min: 1, max: 0 })
    );
}

#[test]
fn segments_are_recovered_at_four_clusters() {
    let mut rng = StdRng::seed_from_u64(2024);
    let dataset = synthetic_segments(50, &mut rng);
    let options = AnalysisOptions {
        random_state: Some(11),
        parallel_sweep: true,
        ..Default::default()
    };

    let analysis = Analysis::run(&dataset.features, 4, KRange::default(), &options).unwrap();

    assert_eq!(analysis.sweep.silhouette.len(), 6);
    assert_eq!(analysis.sweep.calinski_harabasz.len(), 6);
    assert!(analysis.normalized.iter().all(|v| (0.0..=1.0).contains(v)));

    let table = ResultTable::new(&dataset.features, &analysis.result, &dataset.feature_names).unwrap();
    assert_eq!(table.rows().len(), 200);

    let summary = Summary::new(&analysis.result, &analysis.sweep, &dataset.feature_names);
    assert_eq!(summary.k, 4);
    assert_eq!(summary.centroids.len(), 4);
    assert!(summary.to_string().contains("Annual Income (k$)"));
}
