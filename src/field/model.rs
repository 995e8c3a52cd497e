// model.rs - Leeway formula
//
//   leeway = k * heel / speed^2
//
// Knots and degrees in, degrees out. `estimate` takes the SI
// units a boat's instruments report and rescales k accordingly.

use ndarray::{Array2, ArrayView2, Zip};

use crate::error::LeewayError;

pub const KNOTS_PER_METRE_PER_SECOND: f64 = 1.94384;

#[inline]
pub fn to_knots(metres_per_second: f64) -> f64 {
    KNOTS_PER_METRE_PER_SECOND * metres_per_second
}

#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeewayModel {
    k: f64,
}

impl LeewayModel {
    pub fn new(k: f64) -> Result<Self, LeewayError> {
        if !k.is_finite() {
            return Err(LeewayError::InvalidCoefficient(k));
        }
        Ok(Self { k })
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    /// Leeway in degrees for speed in knots and heel in degrees
    #[inline]
    pub fn angle(&self, speed: f64, heel: f64) -> f64 {
        self.k * heel / (speed * speed)
    }

    /// Elementwise leeway over two same-shaped grids.
    /// Any zero speed aborts before the output is allocated.
    pub fn evaluate(
        &self,
        speed: ArrayView2<f64>,
        heel: ArrayView2<f64>,
    ) -> Result<Array2<f64>, LeewayError> {
        if speed.dim() != heel.dim() {
            return Err(LeewayError::ShapeMismatch {
                speed: speed.dim(),
                heel: heel.dim(),
            });
        }
        if let Some(((row, col), _)) = speed.indexed_iter().find(|(_, s)| **s == 0.0) {
            return Err(LeewayError::DivisionByZero { row, col });
        }

        Ok(Zip::from(speed)
            .and(heel)
            .map_collect(|&s, &h| self.angle(s, h)))
    }

    /// Signed leeway from instrument data: boat speed in m/s, apparent
    /// wind angle and roll in radians. Result is in radians and points
    /// away from the wind. A boat at rest makes no leeway.
    pub fn estimate(&self, boat_speed: f64, wind_angle: f64, roll: f64) -> f64 {
        if boat_speed == 0.0 {
            return 0.0;
        }
        let k = self.k / KNOTS_PER_METRE_PER_SECOND.powi(2);
        let direction = if wind_angle > 0.0 { -1.0 } else { 1.0 };
        direction * k * roll.abs() / boat_speed.powi(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn point_formula() {
        let model = LeewayModel::new(9.0).unwrap();
        assert_eq!(model.angle(0.1, 0.0), 0.0);
        assert_relative_eq!(model.angle(0.1, 25.0), 22500.0, max_relative = 1e-12);
        assert_relative_eq!(model.angle(3.0, 10.0), 10.0, max_relative = 1e-12);
    }

    #[test]
    fn non_finite_coefficient_is_rejected() {
        assert_eq!(LeewayModel::new(f64::NAN).unwrap_err().to_string(), "leeway coefficient must be finite, got NaN");
        assert!(LeewayModel::new(f64::INFINITY).is_err());
        assert!(LeewayModel::new(-2.0).is_ok());
    }

    #[test]
    fn evaluate_is_elementwise() {
        let model = LeewayModel::new(2.0).unwrap();
        let speed = array![[1.0, 2.0], [1.0, 2.0]];
        let heel = array![[0.0, 0.0], [4.0, 4.0]];
        let out = model.evaluate(speed.view(), heel.view()).unwrap();
        assert_eq!(out, array![[0.0, 0.0], [8.0, 2.0]]);
    }

    #[test]
    fn zero_speed_reports_cell() {
        let model = LeewayModel::new(9.0).unwrap();
        let speed = array![[1.0, 2.0, 3.0], [1.0, 0.0, 3.0]];
        let heel = array![[1.0, 1.0, 1.0], [2.0, 2.0, 2.0]];
        let err = model.evaluate(speed.view(), heel.view()).unwrap_err();
        assert_eq!(err, LeewayError::DivisionByZero { row: 1, col: 1 });
    }

    #[test]
    fn mismatched_shapes_are_rejected() {
        let model = LeewayModel::new(9.0).unwrap();
        let speed = array![[1.0, 2.0]];
        let heel = array![[1.0], [2.0]];
        let err = model.evaluate(speed.view(), heel.view()).unwrap_err();
        assert_eq!(err, LeewayError::ShapeMismatch { speed: (1, 2), heel: (2, 1) });
    }

    #[test]
    fn estimate_points_away_from_wind() {
        let model = LeewayModel::new(10.0).unwrap();
        let roll = 0.2;
        let speed = 3.0;
        let expected = 10.0 / (1.94384f64 * 1.94384) * roll / 9.0;

        assert_relative_eq!(model.estimate(speed, 0.7, roll), -expected, max_relative = 1e-12);
        assert_relative_eq!(model.estimate(speed, -0.7, -roll), expected, max_relative = 1e-12);
        assert_eq!(model.estimate(0.0, 0.7, roll), 0.0);
    }

    #[test]
    fn unit_conversions() {
        assert_relative_eq!(to_knots(1.0), 1.94384);
        assert_relative_eq!(to_degrees(std::f64::consts::PI), 180.0);
    }
}
