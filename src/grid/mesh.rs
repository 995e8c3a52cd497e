// mesh.rs - Speed x heel coordinate grid
//
// Row index follows heel, column index follows speed:
//   speed[[i, j]] = speed_values[j]
//   heel[[i, j]]  = heel_values[i]

use ndarray::{Array1, Array2};
use tracing::debug;

use super::axis::{AxisSpec, linspace};
use crate::error::LeewayError;

#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateGrid {
    speed_axis: AxisSpec,
    heel_axis: AxisSpec,
    speed_values: Array1<f64>,
    heel_values: Array1<f64>,
    speed: Array2<f64>,
    heel: Array2<f64>,
}

impl CoordinateGrid {
    /// Validate both axes, then form the full cross-product.
    /// Nothing is allocated when validation fails.
    pub fn build(speed: AxisSpec, heel: AxisSpec) -> Result<Self, LeewayError> {
        speed.validate("speed")?;
        if speed.low <= 0.0 {
            return Err(LeewayError::invalid_range(
                "speed",
                format!("lower bound must be strictly positive, got {}", speed.low),
            ));
        }
        if speed.high <= speed.low {
            return Err(LeewayError::invalid_range(
                "speed",
                format!("upper bound {} must exceed lower bound {}", speed.high, speed.low),
            ));
        }
        heel.validate("heel")?;

        let speed_values = linspace(&speed);
        let heel_values = linspace(&heel);
        let shape = (heel.count, speed.count);

        let speed_grid = Array2::from_shape_fn(shape, |(_, j)| speed_values[j]);
        let heel_grid = Array2::from_shape_fn(shape, |(i, _)| heel_values[i]);

        debug!(
            rows = shape.0,
            cols = shape.1,
            speed_step = speed.step(),
            heel_step = heel.step(),
            "built coordinate grid"
        );

        Ok(Self {
            speed_axis: speed,
            heel_axis: heel,
            speed_values,
            heel_values,
            speed: speed_grid,
            heel: heel_grid,
        })
    }

    pub fn speed_axis(&self) -> &AxisSpec { &self.speed_axis }
    pub fn heel_axis(&self) -> &AxisSpec { &self.heel_axis }
    pub fn speed_values(&self) -> &Array1<f64> { &self.speed_values }
    pub fn heel_values(&self) -> &Array1<f64> { &self.heel_values }
    pub fn speed(&self) -> &Array2<f64> { &self.speed }
    pub fn heel(&self) -> &Array2<f64> { &self.heel }

    /// (rows, cols) = (heel count, speed count)
    pub fn dim(&self) -> (usize, usize) {
        self.speed.dim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> CoordinateGrid {
        CoordinateGrid::build(AxisSpec::new(0.1, 10.0, 100), AxisSpec::new(0.0, 25.0, 100)).unwrap()
    }

    #[test]
    fn grids_share_shape() {
        let grid = CoordinateGrid::build(AxisSpec::new(1.0, 5.0, 7), AxisSpec::new(0.0, 20.0, 3)).unwrap();
        assert_eq!(grid.dim(), (3, 7));
        assert_eq!(grid.speed().dim(), grid.heel().dim());
        assert_eq!(grid.speed_values().len(), 7);
        assert_eq!(grid.heel_values().len(), 3);
    }

    #[test]
    fn speed_varies_along_columns_heel_along_rows() {
        let grid = reference();
        let (rows, cols) = grid.dim();
        for i in 0..rows {
            for j in 0..cols {
                assert_eq!(grid.speed()[[i, j]], grid.speed_values()[j]);
                assert_eq!(grid.heel()[[i, j]], grid.heel_values()[i]);
            }
        }
    }

    #[test]
    fn zero_speed_is_rejected() {
        let err = CoordinateGrid::build(AxisSpec::new(0.0, 10.0, 100), AxisSpec::new(0.0, 25.0, 100))
            .unwrap_err();
        assert!(matches!(err, LeewayError::InvalidRange { axis: "speed", .. }));
    }

    #[test]
    fn negative_speed_is_rejected() {
        let err = CoordinateGrid::build(AxisSpec::new(-1.0, 10.0, 10), AxisSpec::new(0.0, 25.0, 10))
            .unwrap_err();
        assert!(matches!(err, LeewayError::InvalidRange { axis: "speed", .. }));
    }

    #[test]
    fn empty_counts_are_rejected() {
        let speed = CoordinateGrid::build(AxisSpec::new(0.1, 10.0, 0), AxisSpec::new(0.0, 25.0, 10));
        assert!(matches!(speed, Err(LeewayError::InvalidRange { axis: "speed", .. })));

        let heel = CoordinateGrid::build(AxisSpec::new(0.1, 10.0, 10), AxisSpec::new(0.0, 25.0, 0));
        assert!(matches!(heel, Err(LeewayError::InvalidRange { axis: "heel", .. })));
    }

    #[test]
    fn speed_bounds_must_be_ordered() {
        let err = CoordinateGrid::build(AxisSpec::new(5.0, 5.0, 1), AxisSpec::new(0.0, 25.0, 10))
            .unwrap_err();
        assert!(matches!(err, LeewayError::InvalidRange { axis: "speed", .. }));
    }

    #[test]
    fn flat_heel_axis_with_one_sample_is_allowed() {
        let grid = CoordinateGrid::build(AxisSpec::new(0.5, 2.0, 4), AxisSpec::new(10.0, 10.0, 1)).unwrap();
        assert_eq!(grid.dim(), (1, 4));
        assert!(grid.heel().iter().all(|&h| h == 10.0));
    }
}
