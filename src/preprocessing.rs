use crate::error::{ClusterError, Result};
use crate::{Matrix, Vector};
use ndarray::Axis;

/// Per-feature `(min, max)` of the dataset a scaler was fitted on.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizationBounds {
    pub min: Vector,
    pub max: Vector,
}

impl NormalizationBounds {
    /// Returns `None` when `data` has no rows.
    pub fn from_data(data: &Matrix) -> Option<Self> {
        if data.nrows() == 0 {
            return None;
        }
        let min = data.fold_axis(Axis(0), f64::INFINITY, |&acc, &v| acc.min(v));
        let max = data.fold_axis(Axis(0), f64::NEG_INFINITY, |&acc, &v| acc.max(v));
        Some(Self { min, max })
    }

    pub fn n_features(&self) -> usize {
        self.min.len()
    }

    pub fn range(&self) -> Vector {
        &self.max - &self.min
    }
}

/// Rescales every feature into `[0, 1]` using the fitted min and max.
/// A constant feature maps to `0.5`.
pub struct MinMaxScaler {
    bounds: Option<NormalizationBounds>,
}

impl Default for MinMaxScaler {
    fn default() -> Self {
        Self::new()
    }
}

impl MinMaxScaler {
    pub fn new() -> Self {
        Self { bounds: None }
    }

    pub fn bounds(&self) -> Option<&NormalizationBounds> {
        self.bounds.as_ref()
    }

    pub fn fit(&mut self, data: &Matrix) -> Result<()> {
        // An empty batch leaves nothing to learn from; keep the column count
        // so transform() can still check shapes.
        self.bounds = Some(NormalizationBounds::from_data(data).unwrap_or_else(|| {
            NormalizationBounds {
                min: Vector::zeros(data.ncols()),
                max: Vector::zeros(data.ncols()),
            }
        }));
        Ok(())
    }

    pub fn transform(&self, data: &Matrix) -> Result<Matrix> {
        let bounds = self.bounds.as_ref().ok_or(ClusterError::NotFitted)?;
        check_columns(bounds, data)?;

        Ok(scale(bounds, data))
    }

    pub fn fit_transform(&mut self, data: &Matrix) -> Result<Matrix> {
        self.fit(data)?;
        self.transform(data)
    }

    /// Maps normalized values back into raw feature units.
    pub fn inverse_transform(&self, data: &Matrix) -> Result<Matrix> {
        let bounds = self.bounds.as_ref().ok_or(ClusterError::NotFitted)?;
        check_columns(bounds, data)?;

        let range = bounds.range();
        let mut result = data.clone();
        for mut row in result.axis_iter_mut(Axis(0)) {
            row *= &range;
            row += &bounds.min;
        }

        Ok(result)
    }
}

fn scale(bounds: &NormalizationBounds, data: &Matrix) -> Matrix {
    let range = bounds.range();
    let mut result = data.clone();
    for mut row in result.axis_iter_mut(Axis(0)) {
        for (j, v) in row.iter_mut().enumerate() {
            *v = if range[j] == 0.0 {
                0.5
            } else {
                ((*v - bounds.min[j]) / range[j]).clamp(0.0, 1.0)
            };
        }
    }
    result
}

fn check_columns(bounds: &NormalizationBounds, data: &Matrix) -> Result<()> {
    if data.ncols() != bounds.n_features() {
        return Err(ClusterError::DimensionMismatch {
            expected: bounds.n_features(),
            actual: data.ncols(),
        });
    }
    Ok(())
}

/// Fits a fresh scaler on `raw` and returns its bounds with the scaled data.
/// An empty dataset yields `None` bounds and an empty matrix.
pub fn normalize(raw: &Matrix) -> (Option<NormalizationBounds>, Matrix) {
    let Some(bounds) = NormalizationBounds::from_data(raw) else {
        return (None, Matrix::zeros((0, raw.ncols())));
    };
    let scaled = scale(&bounds, raw);
    (Some(bounds), scaled)
}
