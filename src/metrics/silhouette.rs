use crate::point::Point;
use std::collections::BTreeMap;

/// Mean silhouette coefficient over all points, in `[-1, 1]`.
///
/// For point `i` in cluster `C`:
/// - `a(i)` = mean distance to the other members of `C` (0 for a singleton)
/// - `b(i)` = smallest mean distance to the members of any other cluster
/// - `s(i) = (b(i) - a(i)) / max(a(i), b(i))`
///
/// Returns `0.0` for fewer than two points or fewer than two clusters.
pub fn silhouette_score(points: &[Point]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }

    let clusters = group_indices(points);
    if clusters.len() < 2 {
        return 0.0;
    }

    let total: f64 = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let own = &clusters[&p.cluster_id];
            let a = mean_intra_cluster_distance(points, i, own);
            match min_inter_cluster_distance(points, i, &clusters) {
                Some(b) => silhouette_coefficient(a, b),
                None => 0.0,
            }
        })
        .sum();

    total / points.len() as f64
}

/// Point indices keyed by cluster id; only ids that occur are present.
fn group_indices(points: &[Point]) -> BTreeMap<Option<usize>, Vec<usize>> {
    let mut clusters: BTreeMap<Option<usize>, Vec<usize>> = BTreeMap::new();
    for (i, p) in points.iter().enumerate() {
        clusters.entry(p.cluster_id).or_default().push(i);
    }
    clusters
}

fn mean_distance<'a>(points: &[Point], i: usize, members: impl Iterator<Item = &'a usize>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for &j in members {
        sum += points[i].distance_to(&points[j].features);
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}

fn mean_intra_cluster_distance(points: &[Point], i: usize, own: &[usize]) -> f64 {
    // Exclude the point itself by position, not by value.
    mean_distance(points, i, own.iter().filter(|&&j| j != i)).unwrap_or(0.0)
}

fn min_inter_cluster_distance(
    points: &[Point],
    i: usize,
    clusters: &BTreeMap<Option<usize>, Vec<usize>>,
) -> Option<f64> {
    let own = points[i].cluster_id;
    clusters
        .iter()
        .filter(|(id, _)| **id != own)
        .filter_map(|(_, members)| mean_distance(points, i, members.iter()))
        .min_by(|a, b| a.total_cmp(b))
}

fn silhouette_coefficient(a: f64, b: f64) -> f64 {
    let max_ab = a.max(b);
    if max_ab == 0.0 {
        0.0
    } else {
        (b - a) / max_ab
    }
}
