use crate::error::{ClusterError, Result};
use crate::{Matrix, Vector};
use ndarray::ArrayView1;

/// A centroid is just the mean position of a cluster.
pub type Centroid = Vector;

#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub features: Vector,
    /// `None` until the point has been through an assign step.
    pub cluster_id: Option<usize>,
}

impl Point {
    pub fn new(features: Vector) -> Self {
        Self {
            features,
            cluster_id: None,
        }
    }

    pub fn with_cluster(features: Vector, cluster_id: usize) -> Self {
        Self {
            features,
            cluster_id: Some(cluster_id),
        }
    }

    /// One unassigned point per row of `x`.
    pub fn from_rows(x: &Matrix) -> Vec<Point> {
        x.rows()
            .into_iter()
            .map(|row| Point::new(row.to_owned()))
            .collect()
    }

    pub fn dim(&self) -> usize {
        self.features.len()
    }

    pub fn distance_to(&self, other: &Vector) -> f64 {
        euclidean_distance(&self.features.view(), &other.view())
    }
}

pub fn squared_distance(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
}

pub fn euclidean_distance(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
    squared_distance(a, b).sqrt()
}

/// Checks that every point shares one dimensionality and returns it.
pub(crate) fn common_dim(points: &[Point]) -> Result<usize> {
    let Some(first) = points.first() else {
        return Ok(0);
    };
    let expected = first.dim();
    for p in points {
        if p.dim() != expected {
            return Err(ClusterError::DimensionMismatch {
                expected,
                actual: p.dim(),
            });
        }
    }
    Ok(expected)
}

/// Coordinate-wise mean, or `None` when there is nothing to average.
pub(crate) fn mean_of<'a, I>(features: I, dim: usize) -> Option<Vector>
where
    I: IntoIterator<Item = &'a Vector>,
{
    let mut sum = Vector::zeros(dim);
    let mut count = 0usize;
    for f in features {
        sum += f;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
