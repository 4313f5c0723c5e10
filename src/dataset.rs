use crate::error::{ClusterError, Result};
use crate::point::Point;
use crate::Matrix;
use ndarray::{concatenate, Axis};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct Dataset {
    pub features: Matrix,
    pub feature_names: Vec<String>,
}

impl Dataset {
    pub fn new(features: Matrix, feature_names: Vec<String>) -> Result<Self> {
        if features.ncols() != feature_names.len() {
            return Err(ClusterError::DimensionMismatch {
                expected: feature_names.len(),
                actual: features.ncols(),
            });
        }

        Ok(Self {
            features,
            feature_names,
        })
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    pub fn points(&self) -> Vec<Point> {
        Point::from_rows(&self.features)
    }
}

pub const SEGMENT_FEATURES: [&str; 4] = [
    "Annual Income (k$)",
    "Spending Score (1-100)",
    "Age (years)",
    "Credit Score (1-10)",
];

/// Lower bound of each feature per segment; every feature spans
/// `[low, low + width)` with the widths below.
const SEGMENT_LOWS: [[f64; 4]; 4] = [
    [20.0, 10.0, 20.0, 1.0], // low income, low spend
    [70.0, 70.0, 30.0, 8.0], // high income, high spend
    [20.0, 70.0, 50.0, 5.0], // low income, high spend
    [70.0, 10.0, 60.0, 3.0], // high income, low spend
];
const SEGMENT_WIDTHS: [f64; 4] = [20.0, 20.0, 20.0, 2.0];

/// Four well separated customer segments of `n_per_segment` rows each,
/// drawn uniformly inside fixed boxes.
pub fn synthetic_segments<R: Rng + ?Sized>(n_per_segment: usize, rng: &mut R) -> Dataset {
    let blocks: Vec<Matrix> = SEGMENT_LOWS
        .iter()
        .map(|lows| {
            let mut block = Matrix::zeros((n_per_segment, lows.len()));
            for (j, (&low, &width)) in lows.iter().zip(&SEGMENT_WIDTHS).enumerate() {
                let column = ndarray::Array1::random_using(
                    n_per_segment,
                    Uniform::new(low, low + width),
                    &mut *rng,
                );
                block.column_mut(j).assign(&column);
            }
            block
        })
        .collect();

    let views: Vec<_> = blocks.iter().map(|b| b.view()).collect();
    // All blocks share a column count, so concatenation cannot fail.
    let features = concatenate(Axis(0), &views)
        .unwrap_or_else(|_| Matrix::zeros((0, SEGMENT_FEATURES.len())));

    Dataset {
        features,
        feature_names: SEGMENT_FEATURES.iter().map(|s| s.to_string()).collect(),
    }
}
