// config.rs - Fixed parameters of the leeway plot
//
// Nothing here is read from files or the environment.

use crate::grid::AxisSpec;

pub const K_FACTOR: f64 = 9.0;
pub const SAMPLES: usize = 100;

// Speed starts just above zero, the formula is singular at rest
pub const SPEED_LOW: f64 = 0.1;
pub const SPEED_HIGH: f64 = 10.0;

pub const HEEL_LOW: f64 = 0.0;
pub const HEEL_HIGH: f64 = 25.0;

pub const SPEED_LABEL: &str = "Speed (knots)";
pub const HEEL_LABEL: &str = "Heel (degrees)";
pub const LEEWAY_LABEL: &str = "Leeway angle (°)";
pub const TITLE: &str = "Leeway angle as a function of Speed and Heel";

/// Upper bound on the number of filled contour bands
pub const MAX_BANDS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeewayConfig {
    pub speed: AxisSpec,
    pub heel: AxisSpec,
    pub k: f64,
}

impl Default for LeewayConfig {
    fn default() -> Self {
        Self {
            speed: AxisSpec::new(SPEED_LOW, SPEED_HIGH, SAMPLES),
            heel: AxisSpec::new(HEEL_LOW, HEEL_HIGH, SAMPLES),
            k: K_FACTOR,
        }
    }
}
