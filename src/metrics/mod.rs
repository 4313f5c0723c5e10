//! Cluster validity indices.
//!
//! - `silhouette_score`: cohesion against nearest-cluster separation, in `[-1, 1]`
//! - `calinski_harabasz_score`: between/within dispersion ratio, unbounded
//!
//! Both are total functions. Degenerate inputs (a single cluster, too few
//! points) score `0.0` rather than failing.
//!
//! # Examples
//!
//! ```rust
//! use kselect::{calinski_harabasz_score, silhouette_score, Point};
//! use ndarray::array;
//!
//! let points = vec![
//!     Point::with_cluster(array![0.0, 0.0], 0),
//!     Point::with_cluster(array![0.0, 1.0], 0),
//!     Point::with_cluster(array![10.0, 10.0], 1),
//!     Point::with_cluster(array![10.0, 11.0], 1),
//! ];
//! let centroids = vec![array![0.0, 0.5], array![10.0, 10.5]];
//!
//! assert!(silhouette_score(&points) > 0.9);
//! assert!(calinski_harabasz_score(&points, &centroids) > 100.0);
//! ```

mod calinski_harabasz;
mod silhouette;

pub use calinski_harabasz::calinski_harabasz_score;
pub use silhouette::silhouette_score;

use crate::cluster::ClusterResult;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    Silhouette,
    CalinskiHarabasz,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Silhouette, Metric::CalinskiHarabasz];

    pub fn score(self, result: &ClusterResult) -> f64 {
        match self {
            Metric::Silhouette => silhouette_score(result.points()),
            Metric::CalinskiHarabasz => calinski_harabasz_score(result.points(), result.centroids()),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Silhouette => write!(f, "Silhouette"),
            Metric::CalinskiHarabasz => write!(f, "Calinski-Harabasz"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KMeans, Point};
    use ndarray::array;

    #[test]
    fn test_metric_score_dispatch() {
        let x = array![[0.0, 0.0], [0.0, 1.0], [10.0, 10.0], [10.0, 11.0]];
        let result = KMeans::new(2).random_state(4).fit(&Point::from_rows(&x)).unwrap();

        let sil = Metric::Silhouette.score(&result);
        let ch = Metric::CalinskiHarabasz.score(&result);
        assert!((sil - silhouette_score(result.points())).abs() < 1e-12);
        assert!((ch - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_metric_names() {
        assert_eq!(Metric::Silhouette.to_string(), "Silhouette");
        assert_eq!(Metric::CalinskiHarabasz.to_string(), "Calinski-Harabasz");
    }
}
