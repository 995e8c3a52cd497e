// levels.rs - Contour levels and axis ticks
//
// Steps are drawn from {1, 2, 2.5, 5} x 10^n, smallest first,
// until the covering range fits in the requested bin count.

const NICE_MULTIPLES: [f64; 4] = [1.0, 2.0, 2.5, 5.0];

// Enough decades to go from any raw step to one that covers the range
const MAX_CANDIDATES: usize = 64;

/// Nice step sizes >= `raw`, ascending
fn nice_steps(raw: f64) -> impl Iterator<Item = f64> {
    let mag = 10f64.powf(raw.log10().floor());
    (0..)
        .flat_map(move |e| NICE_MULTIPLES.into_iter().map(move |m| m * mag * 10f64.powi(e)))
        .filter(move |&s| s >= raw * (1.0 - 1e-9))
        .take(MAX_CANDIDATES)
}

/// Fewest decimals that print `step` exactly (capped at 6)
fn decimals_for(step: f64) -> usize {
    (0..6)
        .find(|&d| {
            let scaled = step * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() < 1e-6 * scaled.abs().max(1.0)
        })
        .unwrap_or(6)
}

pub fn format_tick(value: f64, step: f64) -> String {
    let s = format!("{:.*}", decimals_for(step), value);
    // "-0" and friends
    if s.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        s.trim_start_matches('-').to_string()
    } else {
        s
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContourLevels {
    values: Vec<f64>,
    step: f64,
}

impl ContourLevels {
    /// Levels covering [min, max] with at most `max_bins` bands
    pub fn auto(min: f64, max: f64, max_bins: usize) -> Self {
        if !min.is_finite() || !max.is_finite() {
            return Self { values: vec![0.0, 1.0], step: 1.0 };
        }
        if max <= min {
            return Self { values: vec![min - 0.5, min + 0.5], step: 1.0 };
        }

        let span = max - min;
        // Finite endpoints whose difference overflows f64
        if !span.is_finite() {
            return Self { values: vec![min, max], step: min.abs().max(max.abs()) };
        }

        let bins = max_bins.max(2);
        let raw = span / bins as f64;
        for step in nice_steps(raw) {
            if !step.is_finite() {
                break;
            }
            let first = (min / step).floor();
            let last = (max / step).ceil();
            let n = (last - first).round() as usize;
            if (1..=bins).contains(&n) {
                let values: Vec<f64> = (0..=n).map(|i| (first + i as f64) * step).collect();
                if values.iter().all(|v| v.is_finite()) {
                    return Self { values, step };
                }
            }
        }

        Self { values: vec![min, max], step: span }
    }

    pub fn values(&self) -> &[f64] { &self.values }
    pub fn step(&self) -> f64 { self.step }

    pub fn bands(&self) -> usize {
        self.values.len().saturating_sub(1)
    }

    /// Band holding `value`; values past either end land in the outer band
    pub fn band_of(&self, value: f64) -> Option<usize> {
        if value.is_nan() || self.bands() == 0 {
            return None;
        }
        let above = self.values.partition_point(|&l| l <= value);
        Some(above.saturating_sub(1).min(self.bands() - 1))
    }

    /// Band position in [0, 1] for colour lookup
    pub fn band_fraction(&self, band: usize) -> f64 {
        match self.bands() {
            0 | 1 => 0.5,
            n => band.min(n - 1) as f64 / (n - 1) as f64,
        }
    }

    pub fn labels(&self) -> Vec<String> {
        self.values.iter().map(|&v| format_tick(v, self.step)).collect()
    }
}

/// Axis tick positions within [low, high]
#[derive(Debug, Clone, PartialEq)]
pub struct Ticks {
    pub values: Vec<f64>,
    pub step: f64,
}

impl Ticks {
    pub fn labels(&self) -> Vec<String> {
        self.values.iter().map(|&v| format_tick(v, self.step)).collect()
    }
}

pub fn nice_ticks(low: f64, high: f64, max_ticks: usize) -> Ticks {
    if !low.is_finite() || !high.is_finite() || high <= low {
        return Ticks { values: vec![low], step: 1.0 };
    }

    let max_ticks = max_ticks.max(2);
    let raw = (high - low) / (max_ticks - 1) as f64;
    for step in nice_steps(raw) {
        let first = (low / step - 1e-9).ceil() as i64;
        let last = (high / step + 1e-9).floor() as i64;
        if last >= first && ((last - first + 1) as usize) <= max_ticks {
            let values = (first..=last).map(|i| i as f64 * step).collect();
            return Ticks { values, step };
        }
    }

    Ticks { values: vec![low, high], step: high - low }
}
