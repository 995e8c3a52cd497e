// axis.rs - Evenly spaced coordinate sequences
//
// Both endpoints are included. The last sample is pinned to `high`
// so accumulated rounding never moves the upper bound.

use ndarray::Array1;

use crate::error::LeewayError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSpec {
    pub low: f64,
    pub high: f64,
    pub count: usize,
}

impl AxisSpec {
    pub const fn new(low: f64, high: f64, count: usize) -> Self {
        Self { low, high, count }
    }

    /// Distance between consecutive samples (0 for a single sample)
    #[inline]
    pub fn step(&self) -> f64 {
        if self.count > 1 {
            (self.high - self.low) / (self.count - 1) as f64
        } else {
            0.0
        }
    }

    /// Checks shared by every axis. Callers add their own domain rules.
    pub fn validate(&self, axis: &'static str) -> Result<(), LeewayError> {
        if self.count == 0 {
            return Err(LeewayError::invalid_range(axis, "sample count must be positive"));
        }
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(LeewayError::invalid_range(
                axis,
                format!("bounds must be finite, got [{}, {}]", self.low, self.high),
            ));
        }
        if self.high < self.low {
            return Err(LeewayError::invalid_range(
                axis,
                format!("upper bound {} is below lower bound {}", self.high, self.low),
            ));
        }
        if self.high == self.low && self.count > 1 {
            return Err(LeewayError::invalid_range(
                axis,
                format!("{} samples over the single value {} are not increasing", self.count, self.low),
            ));
        }
        Ok(())
    }

    /// Fractional sample index of `value`, None outside [low, high]
    pub fn position(&self, value: f64) -> Option<f64> {
        if !(self.low..=self.high).contains(&value) {
            return None;
        }
        let step = self.step();
        if step == 0.0 {
            return Some(0.0);
        }
        let last = (self.count - 1) as f64;
        Some(((value - self.low) / step).min(last))
    }
}

/// Evenly spaced samples over [low, high], endpoints included
pub fn linspace(axis: &AxisSpec) -> Array1<f64> {
    let n = axis.count;
    let step = axis.step();
    Array1::from_shape_fn(n, |i| {
        if n > 1 && i == n - 1 {
            axis.high
        } else {
            axis.low + step * i as f64
        }
    })
}
