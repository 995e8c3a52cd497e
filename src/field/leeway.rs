// leeway.rs - Leeway angle evaluated over a coordinate grid
//
// Owns the grid it was computed from, so axis values travel
// with the field to whatever renders it.

use ndarray::Array2;
use tracing::debug;

use super::model::LeewayModel;
use crate::error::LeewayError;
use crate::grid::CoordinateGrid;

#[derive(Debug, Clone, PartialEq)]
pub struct LeewayField {
    grid: CoordinateGrid,
    values: Array2<f64>,
    k: f64,
}

impl LeewayField {
    pub fn compute(grid: CoordinateGrid, model: &LeewayModel) -> Result<Self, LeewayError> {
        let values = model.evaluate(grid.speed().view(), grid.heel().view())?;
        let field = Self { grid, values, k: model.k() };

        let (min, max) = field.range();
        debug!(k = field.k, min, max, "evaluated leeway field");
        Ok(field)
    }

    pub fn values(&self) -> &Array2<f64> { &self.values }
    pub fn grid(&self) -> &CoordinateGrid { &self.grid }
    pub fn k(&self) -> f64 { self.k }
    pub fn dim(&self) -> (usize, usize) { self.values.dim() }

    /// Value at (heel row, speed column)
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get((row, col)).copied()
    }

    /// (min, max) over finite cells. (NaN, NaN) if there are none.
    pub fn range(&self) -> (f64, f64) {
        let (min, max) = self
            .values
            .iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(mn, mx), &v| (mn.min(v), mx.max(v)));
        if min > max { (f64::NAN, f64::NAN) } else { (min, max) }
    }

    /// Bilinear interpolation between grid nodes.
    /// None when (speed, heel) falls outside the grid.
    pub fn sample(&self, speed: f64, heel: f64) -> Option<f64> {
        let fx = self.grid.speed_axis().position(speed)?;
        let fy = self.grid.heel_axis().position(heel)?;
        let (rows, cols) = self.dim();

        let (j0, i0) = (fx.floor() as usize, fy.floor() as usize);
        let (j1, i1) = ((j0 + 1).min(cols - 1), (i0 + 1).min(rows - 1));
        let (tx, ty) = (fx - j0 as f64, fy - i0 as f64);

        let v = &self.values;
        Some(
            v[[i0, j0]] * (1.0 - tx) * (1.0 - ty)
                + v[[i0, j1]] * tx * (1.0 - ty)
                + v[[i1, j0]] * (1.0 - tx) * ty
                + v[[i1, j1]] * tx * ty,
        )
    }
}
