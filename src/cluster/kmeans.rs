use crate::error::{ClusterError, Result};
use crate::point::{common_dim, euclidean_distance, mean_of, Centroid, Point};
use crate::{Vector, CONVERGENCE_TOLERANCE, DEFAULT_MAX_ITER};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

/// Outcome of one Lloyd's run. Always carries exactly `k` centroids, even
/// when some clusters ended up empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterResult {
    points: Vec<Point>,
    centroids: Vec<Centroid>,
    iterations: usize,
    converged: bool,
}

impl ClusterResult {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn centroids(&self) -> &[Centroid] {
        &self.centroids
    }

    pub fn k(&self) -> usize {
        self.centroids.len()
    }

    /// Number of update steps that ran before the loop stopped.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn converged(&self) -> bool {
        self.converged
    }

    pub fn labels(&self) -> Vec<usize> {
        self.points
            .iter()
            .map(|p| p.cluster_id.unwrap_or_default())
            .collect()
    }

    /// Within-cluster sum of squared distances.
    pub fn inertia(&self) -> f64 {
        self.points
            .iter()
            .filter_map(|p| {
                let c = &self.centroids[p.cluster_id?];
                let d = p.distance_to(c);
                Some(d * d)
            })
            .sum()
    }

    /// Member count for every cluster id that has at least one point.
    pub fn cluster_sizes(&self) -> BTreeMap<usize, usize> {
        let mut sizes = BTreeMap::new();
        for id in self.points.iter().filter_map(|p| p.cluster_id) {
            *sizes.entry(id).or_insert(0) += 1;
        }
        sizes
    }

    /// Index of the centroid nearest to `features`.
    pub fn predict(&self, features: &Vector) -> Result<usize> {
        let expected = self.centroids.first().map_or(0, |c| c.len());
        if features.len() != expected {
            return Err(ClusterError::DimensionMismatch {
                expected,
                actual: features.len(),
            });
        }
        Ok(nearest_centroid(features, &self.centroids))
    }

    /// Two chosen coordinates of every point along with its cluster id, for
    /// scatter plots.
    pub fn project(&self, x_dim: usize, y_dim: usize) -> Result<Vec<(f64, f64, Option<usize>)>> {
        let dim = self.centroids.first().map_or(0, |c| c.len());
        for d in [x_dim, y_dim] {
            if d >= dim {
                return Err(ClusterError::DimensionMismatch {
                    expected: dim,
                    actual: d + 1,
                });
            }
        }
        Ok(self
            .points
            .iter()
            .map(|p| (p.features[x_dim], p.features[y_dim], p.cluster_id))
            .collect())
    }
}

#[derive(Clone, Debug)]
pub struct KMeans {
    n_clusters: usize,
    max_iter: usize,
    random_state: Option<u64>,
}

impl KMeans {
    pub fn new(n_clusters: usize) -> Self {
        Self {
            n_clusters,
            max_iter: DEFAULT_MAX_ITER,
            random_state: None,
        }
    }

    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self
    }

    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }

    pub fn fit(&self, points: &[Point]) -> Result<ClusterResult> {
        let mut rng = match self.random_state {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        cluster(points, self.n_clusters, self.max_iter, &mut rng)
    }
}

/// Partitions `points` into `k` clusters with Lloyd's algorithm.
///
/// The input is never modified; the returned result owns assigned copies.
/// Fails before any centroid is drawn when `k` is zero or larger than the
/// number of points, or when `max_iter` is zero.
pub fn cluster<R: Rng + ?Sized>(
    points: &[Point],
    k: usize,
    max_iter: usize,
    rng: &mut R,
) -> Result<ClusterResult> {
    if k == 0 || k > points.len() {
        return Err(ClusterError::InvalidClusterCount {
            k,
            min: 1,
            max: points.len(),
        });
    }
    if max_iter == 0 {
        return Err(ClusterError::InvalidParameter {
            name: "max_iter",
            reason: "must be >= 1".to_string(),
        });
    }
    let dim = common_dim(points)?;

    let mut points = points.to_vec();
    let mut centroids = initialize_centroids(&points, k, rng);

    let mut iterations = 0;
    let mut converged = false;
    while iterations < max_iter {
        assign(&mut points, &centroids);
        let (next, max_shift) = update(&points, &centroids, dim);
        centroids = next;
        iterations += 1;
        trace!("iteration {}: max centroid shift {:.3e}", iterations, max_shift);

        if max_shift <= CONVERGENCE_TOLERANCE {
            converged = true;
            break;
        }
    }

    // The last update may have moved centroids; bring assignments in line.
    assign(&mut points, &centroids);

    debug!(
        "k={} finished after {} iterations (converged: {})",
        k, iterations, converged
    );

    Ok(ClusterResult {
        points,
        centroids,
        iterations,
        converged,
    })
}

/// Seeds centroids from `k` distinct points drawn without replacement.
fn initialize_centroids<R: Rng + ?Sized>(points: &[Point], k: usize, rng: &mut R) -> Vec<Centroid> {
    rand::seq::index::sample(rng, points.len(), k)
        .into_iter()
        .map(|idx| points[idx].features.clone())
        .collect()
}

/// Index of the closest centroid; ties go to the lowest index.
fn nearest_centroid(features: &Vector, centroids: &[Centroid]) -> usize {
    let mut min_distance = f64::INFINITY;
    let mut closest = 0;

    for (i, c) in centroids.iter().enumerate() {
        let distance = euclidean_distance(&features.view(), &c.view());
        if distance < min_distance {
            min_distance = distance;
            closest = i;
        }
    }

    closest
}

fn assign(points: &mut [Point], centroids: &[Centroid]) {
    for p in points.iter_mut() {
        p.cluster_id = Some(nearest_centroid(&p.features, centroids));
    }
}

/// Builds the next generation of centroids and reports the largest move.
/// Empty clusters keep their previous centroid.
fn update(points: &[Point], centroids: &[Centroid], dim: usize) -> (Vec<Centroid>, f64) {
    let mut max_shift: f64 = 0.0;

    let next = centroids
        .iter()
        .enumerate()
        .map(|(i, old)| {
            let members = points
                .iter()
                .filter(|p| p.cluster_id == Some(i))
                .map(|p| &p.features);

            match mean_of(members, dim) {
                Some(mean) => {
                    let shift = euclidean_distance(&old.view(), &mean.view());
                    max_shift = max_shift.max(shift);
                    mean
                }
                None => old.clone(),
            }
        })
        .collect();

    (next, max_shift)
}
