#[macro_use]
extern crate log;

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod analysis;
pub mod cluster;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod point;
pub mod preprocessing;
pub mod report;
pub mod sweep;

pub use analysis::{Analysis, AnalysisOptions};
pub use cluster::{cluster, ClusterResult, KMeans};
pub use dataset::Dataset;
pub use error::{ClusterError, Result};
pub use metrics::{calinski_harabasz_score, silhouette_score, Metric};
pub use point::{euclidean_distance, squared_distance, Centroid, Point};
pub use preprocessing::{normalize, MinMaxScaler, NormalizationBounds};
pub use report::{ResultTable, Summary};
pub use sweep::{KRange, ScoreCurve, SweepReport, ValiditySweep};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

/// Iteration cap used when none is configured.
pub const DEFAULT_MAX_ITER: usize = 100;
/// A centroid that moves less than this between iterations counts as settled.
pub const CONVERGENCE_TOLERANCE: f64 = 1e-6;
pub const DEFAULT_MIN_K: usize = 2;
pub const DEFAULT_MAX_K: usize = 7;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_types_work() {
        let vec = Vector::zeros(5);
        let mat = Matrix::zeros((3, 4));
        assert_eq!(vec.len(), 5);
        assert_eq!(mat.shape(), &[3, 4]);
    }
}
