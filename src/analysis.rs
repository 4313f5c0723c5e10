//! End-to-end run: normalize, cluster at the chosen `k`, sweep the range.
//!
//! Everything the run needs comes in as arguments and everything it produces
//! goes out in [`Analysis`]; nothing is kept between runs.

use crate::cluster::{ClusterResult, KMeans};
use crate::error::Result;
use crate::point::Point;
use crate::preprocessing::{normalize, NormalizationBounds};
use crate::sweep::{KRange, SweepReport, ValiditySweep};
use crate::{Matrix, DEFAULT_MAX_ITER};

#[derive(Clone, Debug)]
pub struct AnalysisOptions {
    pub max_iter: usize,
    pub random_state: Option<u64>,
    pub parallel_sweep: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            max_iter: DEFAULT_MAX_ITER,
            random_state: None,
            parallel_sweep: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Analysis {
    pub bounds: Option<NormalizationBounds>,
    pub normalized: Matrix,
    pub result: ClusterResult,
    pub sweep: SweepReport,
}

impl Analysis {
    /// `k` is checked against `range` before anything is computed.
    pub fn run(raw: &Matrix, k: usize, range: KRange, options: &AnalysisOptions) -> Result<Self> {
        let k = range.check(k)?;

        let (bounds, normalized) = normalize(raw);
        let points = Point::from_rows(&normalized);

        let mut kmeans = KMeans::new(k).max_iter(options.max_iter);
        let mut sweep = ValiditySweep::new(range)
            .max_iter(options.max_iter)
            .parallel(options.parallel_sweep);
        if let Some(seed) = options.random_state {
            kmeans = kmeans.random_state(seed);
            sweep = sweep.random_state(seed);
        }

        let result = kmeans.fit(&points)?;
        // The sweep reclusters every k, including the one just fitted.
        let sweep = sweep.run(&points)?;

        info!(
            "k={}: inertia {:.4}, {} clusters populated",
            k,
            result.inertia(),
            result.cluster_sizes().len()
        );

        Ok(Self {
            bounds,
            normalized,
            result,
            sweep,
        })
    }
}
