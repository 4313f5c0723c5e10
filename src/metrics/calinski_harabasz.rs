use crate::point::{mean_of, squared_distance, Centroid, Point};

/// Calinski–Harabasz variance-ratio index:
///
/// `(Tr(B) / (k - 1)) / (Tr(W) / (N - k))`
///
/// where `Tr(B)` is the size-weighted dispersion of the centroids around the
/// global mean and `Tr(W)` the dispersion of points around their own
/// centroid. `k` is the number of centroids, so empty clusters still count.
///
/// Returns `0.0` when `k <= 1`, `N <= k`, or the clusters have no internal
/// dispersion at all.
pub fn calinski_harabasz_score(points: &[Point], centroids: &[Centroid]) -> f64 {
    let n = points.len();
    let k = centroids.len();
    if k <= 1 || n <= k {
        return 0.0;
    }

    let dim = points[0].dim();
    let Some(global) = mean_of(points.iter().map(|p| &p.features), dim) else {
        return 0.0;
    };

    let mut sizes = vec![0usize; k];
    let mut tr_w = 0.0;
    for p in points {
        let Some(id) = p.cluster_id.filter(|&id| id < k) else {
            continue;
        };
        sizes[id] += 1;
        tr_w += squared_distance(&p.features.view(), &centroids[id].view());
    }

    let tr_b: f64 = centroids
        .iter()
        .zip(&sizes)
        .map(|(c, &n_i)| n_i as f64 * squared_distance(&c.view(), &global.view()))
        .sum();

    if tr_w <= 0.0 {
        return 0.0;
    }

    let score = (tr_b / (k - 1) as f64) / (tr_w / (n - k) as f64);
    if score.is_finite() { score } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_two_groups() {
        let points = vec![
            Point::with_cluster(array![0.0, 0.0], 0),
            Point::with_cluster(array![0.0, 1.0], 0),
            Point::with_cluster(array![10.0, 10.0], 1),
            Point::with_cluster(array![10.0, 11.0], 1),
        ];
        let centroids = vec![array![0.0, 0.5], array![10.0, 10.5]];

        // Tr(B) = 2 * 50 + 2 * 50 = 200, Tr(W) = 4 * 0.25 = 1.
        let score = calinski_harabasz_score(&points, &centroids);
        assert!((score - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_identical_points() {
        let points: Vec<Point> = (0..4)
            .map(|i| Point::with_cluster(array![5.0, 5.0], (i == 3) as usize))
            .collect();
        let centroids = vec![array![5.0, 5.0], array![5.0, 5.0]];
        assert_eq!(calinski_harabasz_score(&points, &centroids), 0.0);
    }

    #[test]
    fn test_degenerate_k() {
        let points = vec![
            Point::with_cluster(array![0.0], 0),
            Point::with_cluster(array![1.0], 1),
        ];
        assert_eq!(calinski_harabasz_score(&points, &[array![0.0]]), 0.0);
        assert_eq!(
            calinski_harabasz_score(&points, &[array![0.0], array![1.0]]),
            0.0
        );
        assert_eq!(calinski_harabasz_score(&[], &[]), 0.0);
    }

    #[test]
    fn test_empty_cluster_contributes_nothing() {
        let points = vec![
            Point::with_cluster(array![0.0], 0),
            Point::with_cluster(array![1.0], 0),
            Point::with_cluster(array![9.0], 1),
            Point::with_cluster(array![10.0], 1),
        ];
        let centroids = vec![array![0.5], array![9.5], array![100.0]];

        // Tr(B) = 2 * 20.25 * 2 = 81, Tr(W) = 1, k = 3, N = 4.
        let score = calinski_harabasz_score(&points, &centroids);
        assert!((score - 40.5).abs() < 1e-9);
    }
}
