//! Plain-text views of a clustering for tables and result panels.

use crate::cluster::ClusterResult;
use crate::error::{ClusterError, Result};
use crate::metrics::Metric;
use crate::sweep::SweepReport;
use crate::{Matrix, Vector};
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub raw: Vector,
    pub normalized: Vector,
    pub cluster_id: Option<usize>,
}

/// Raw and normalized features side by side with the assigned cluster.
#[derive(Clone, Debug)]
pub struct ResultTable {
    feature_names: Vec<String>,
    rows: Vec<TableRow>,
}

impl ResultTable {
    pub fn new(raw: &Matrix, result: &ClusterResult, feature_names: &[String]) -> Result<Self> {
        let points = result.points();
        if raw.nrows() != points.len() {
            return Err(ClusterError::DimensionMismatch {
                expected: points.len(),
                actual: raw.nrows(),
            });
        }
        if raw.ncols() != feature_names.len() {
            return Err(ClusterError::DimensionMismatch {
                expected: feature_names.len(),
                actual: raw.ncols(),
            });
        }

        let rows = raw
            .rows()
            .into_iter()
            .zip(points)
            .map(|(r, p)| TableRow {
                raw: r.to_owned(),
                normalized: p.features.clone(),
                cluster_id: p.cluster_id,
            })
            .collect();

        Ok(Self {
            feature_names: feature_names.to_vec(),
            rows,
        })
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn header(&self) -> Vec<String> {
        let raw = self.feature_names.iter().map(|n| format!("{n} (raw)"));
        let norm = self.feature_names.iter().map(|n| format!("{n} (norm)"));
        raw.chain(norm).chain(std::iter::once("Cluster".to_string())).collect()
    }
}

impl fmt::Display for ResultTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header().join("\t"))?;
        for row in &self.rows {
            for v in &row.raw {
                write!(f, "{v:.2}\t")?;
            }
            for v in &row.normalized {
                write!(f, "{v:.4}\t")?;
            }
            match row.cluster_id {
                Some(id) => writeln!(f, "{id}")?,
                None => writeln!(f, "-")?,
            }
        }
        Ok(())
    }
}

/// Scores for the selected `k` and its centroids.
#[derive(Clone, Debug)]
pub struct Summary {
    pub k: usize,
    pub silhouette: f64,
    pub calinski_harabasz: f64,
    pub centroids: Vec<Vector>,
    feature_names: Vec<String>,
}

impl Summary {
    /// Scores are looked up in `sweep` and default to `0.0` when `k` was not
    /// covered.
    pub fn new(result: &ClusterResult, sweep: &SweepReport, feature_names: &[String]) -> Self {
        let k = result.k();
        Self {
            k,
            silhouette: sweep.score_at(Metric::Silhouette, k),
            calinski_harabasz: sweep.score_at(Metric::CalinskiHarabasz, k),
            centroids: result.centroids().to_vec(),
            feature_names: feature_names.to_vec(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results (K={})", self.k)?;
        writeln!(f, "{}: {:.4}", Metric::Silhouette, self.silhouette)?;
        writeln!(f, "{}: {:.4}", Metric::CalinskiHarabasz, self.calinski_harabasz)?;
        writeln!(f, "Centroids (K={}):", self.k)?;
        for (i, c) in self.centroids.iter().enumerate() {
            let fields: Vec<String> = c
                .iter()
                .enumerate()
                .map(|(j, v)| match self.feature_names.get(j) {
                    Some(name) => format!("{name}: {v:.4}"),
                    None => format!("{v:.4}"),
                })
                .collect();
            writeln!(f, "C{}: {}", i + 1, fields.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::ScoreCurve;
    use crate::{normalize, KMeans, Point};
    use ndarray::array;

    fn names() -> Vec<String> {
        vec!["x".to_string(), "y".to_string()]
    }

    #[test]
    fn test_result_table() {
        let raw = array![[0.0, 0.0], [0.0, 10.0], [100.0, 100.0], [100.0, 110.0]];
        let (_, normalized) = normalize(&raw);
        let result = KMeans::new(2)
            .random_state(1)
            .fit(&Point::from_rows(&normalized))
            .unwrap();

        let table = ResultTable::new(&raw, &result, &names()).unwrap();
        assert_eq!(table.rows().len(), 4);
        assert_eq!(table.rows()[2].raw, array![100.0, 100.0]);
        assert!((table.rows()[1].normalized[1] - 10.0 / 110.0).abs() < 1e-12);
        assert_eq!(table.header().len(), 5);

        let text = table.to_string();
        assert!(text.starts_with("x (raw)\ty (raw)\tx (norm)\ty (norm)\tCluster"));
        assert!(text.contains("100.00\t110.00\t1.0000\t1.0000\t"));
    }

    #[test]
    fn test_result_table_shape_mismatch() {
        let raw = array![[0.0, 0.0], [1.0, 1.0]];
        let result = KMeans::new(1).fit(&Point::from_rows(&raw)).unwrap();
        assert!(ResultTable::new(&array![[0.0, 0.0]], &result, &names()).is_err());
        assert!(ResultTable::new(&raw, &result, &["x".to_string()]).is_err());
    }

    #[test]
    fn test_summary() {
        let x = array![[0.0, 0.0], [0.0, 1.0], [10.0, 10.0], [10.0, 11.0]];
        let result = KMeans::new(2).random_state(8).fit(&Point::from_rows(&x)).unwrap();
        let sweep = SweepReport {
            silhouette: [(2, 0.75)].into_iter().collect::<ScoreCurve>(),
            calinski_harabasz: ScoreCurve::default(),
        };

        let summary = Summary::new(&result, &sweep, &names());
        assert_eq!(summary.silhouette, 0.75);
        assert_eq!(summary.calinski_harabasz, 0.0);

        let text = summary.to_string();
        assert!(text.contains("Results (K=2)"));
        assert!(text.contains("Silhouette: 0.7500"));
        assert!(text.contains("C2: x: "));
    }
}
