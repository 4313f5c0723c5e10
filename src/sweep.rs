//! Scores a range of candidate cluster counts.
//!
//! Every `k` gets its own clustering run on a fresh copy of the points with
//! its own random source, so per-k results never depend on each other or on
//! whatever clustering the caller is currently holding.
//!
//! ```rust
//! use kselect::{KRange, Point, ValiditySweep};
//! use ndarray::array;
//!
//! let x = array![[0.0, 0.0], [0.0, 1.0], [10.0, 10.0], [10.0, 11.0]];
//! let report = ValiditySweep::new(KRange::new(2, 4).unwrap())
//!     .random_state(7)
//!     .run(&Point::from_rows(&x))
//!     .unwrap();
//!
//! assert_eq!(report.silhouette.len(), 3);
//! assert_eq!(report.calinski_harabasz.len(), 3);
//! ```

use crate::cluster::{cluster, ClusterResult};
use crate::error::{ClusterError, Result};
use crate::metrics::Metric;
use crate::point::Point;
use crate::{DEFAULT_MAX_ITER, DEFAULT_MAX_K, DEFAULT_MIN_K};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Inclusive range of cluster counts a caller may request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KRange {
    min: usize,
    max: usize,
}

impl Default for KRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_K,
            max: DEFAULT_MAX_K,
        }
    }
}

impl KRange {
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if min == 0 || min > max {
            return Err(ClusterError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn contains(&self, k: usize) -> bool {
        (self.min..=self.max).contains(&k)
    }

    pub fn iter(&self) -> RangeInclusive<usize> {
        self.min..=self.max
    }

    pub fn len(&self) -> usize {
        self.max - self.min + 1
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Rejects `k` outside the range.
    pub fn check(&self, k: usize) -> Result<usize> {
        if self.contains(k) {
            Ok(k)
        } else {
            Err(self.invalid(k))
        }
    }

    fn invalid(&self, k: usize) -> ClusterError {
        ClusterError::InvalidClusterCount {
            k,
            min: self.min,
            max: self.max,
        }
    }
}

/// Score per candidate cluster count, ordered by `k`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScoreCurve(BTreeMap<usize, f64>);

impl ScoreCurve {
    pub fn get(&self, k: usize) -> Option<f64> {
        self.0.get(&k).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.0.iter().map(|(&k, &s)| (k, s))
    }

    /// `k` with the highest score; ties go to the smaller `k`.
    pub fn best_k(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (k, s) in self.iter() {
            if best.is_none_or(|(_, b)| s > b) {
                best = Some((k, s));
            }
        }
        best.map(|(k, _)| k)
    }

    fn insert(&mut self, k: usize, score: f64) {
        self.0.insert(k, score);
    }
}

impl FromIterator<(usize, f64)> for ScoreCurve {
    fn from_iter<I: IntoIterator<Item = (usize, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SweepReport {
    pub silhouette: ScoreCurve,
    pub calinski_harabasz: ScoreCurve,
}

impl SweepReport {
    pub fn curve(&self, metric: Metric) -> &ScoreCurve {
        match metric {
            Metric::Silhouette => &self.silhouette,
            Metric::CalinskiHarabasz => &self.calinski_harabasz,
        }
    }

    /// Score for `k`, or `0.0` when the sweep did not cover it.
    pub fn score_at(&self, metric: Metric, k: usize) -> f64 {
        self.curve(metric).get(k).unwrap_or(0.0)
    }

    pub fn best_k(&self, metric: Metric) -> Option<usize> {
        self.curve(metric).best_k()
    }
}

#[derive(Clone, Debug)]
pub struct ValiditySweep {
    range: KRange,
    max_iter: usize,
    random_state: Option<u64>,
    parallel: bool,
}

impl ValiditySweep {
    pub fn new(range: KRange) -> Self {
        Self {
            range,
            max_iter: DEFAULT_MAX_ITER,
            random_state: None,
            parallel: false,
        }
    }

    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Base seed; the run for `k` is seeded with `seed + k`.
    pub fn random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self
    }

    /// Spread the per-k runs over the rayon pool.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn range(&self) -> KRange {
        self.range
    }

    pub fn run(&self, points: &[Point]) -> Result<SweepReport> {
        if self.range.max() > points.len() {
            return Err(ClusterError::InvalidClusterCount {
                k: self.range.max(),
                min: self.range.min(),
                max: points.len(),
            });
        }

        debug!(
            "sweeping k in [{}, {}] over {} points (parallel: {})",
            self.range.min(),
            self.range.max(),
            points.len(),
            self.parallel
        );

        let scored: Vec<(usize, f64, f64)> = if self.parallel {
            self.range
                .iter()
                .collect::<Vec<_>>()
                .into_par_iter()
                .map(|k| self.score_k(points, k))
                .collect::<Result<_>>()?
        } else {
            self.range
                .iter()
                .map(|k| self.score_k(points, k))
                .collect::<Result<_>>()?
        };

        let mut report = SweepReport::default();
        for (k, sil, ch) in scored {
            report.silhouette.insert(k, sil);
            report.calinski_harabasz.insert(k, ch);
        }

        info!(
            "sweep done: best silhouette k={:?}, best calinski-harabasz k={:?}",
            report.silhouette.best_k(),
            report.calinski_harabasz.best_k()
        );

        Ok(report)
    }

    fn score_k(&self, points: &[Point], k: usize) -> Result<(usize, f64, f64)> {
        let result = self.cluster_k(points, k)?;
        let sil = Metric::Silhouette.score(&result);
        let ch = Metric::CalinskiHarabasz.score(&result);
        debug!("k={}: silhouette {:.4}, calinski-harabasz {:.4}", k, sil, ch);
        Ok((k, sil, ch))
    }

    fn cluster_k(&self, points: &[Point], k: usize) -> Result<ClusterResult> {
        let mut rng = match self.random_state {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(k as u64)),
            None => StdRng::from_entropy(),
        };
        cluster(points, k, self.max_iter, &mut rng)
    }
}
