use js_sys::{Float64Array, Uint8Array};
use tracing::info;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod field;
pub mod grid;
pub mod render;

use config::{LeewayConfig, MAX_BANDS};
use error::LeewayError;
use field::{LeewayField, LeewayModel};
use grid::CoordinateGrid;
use render::{ContourLevels, Encoder, band_color};

// ============================================================================
// Pipeline
// ============================================================================

/// Build the grid, then evaluate the leeway formula over it
pub fn compute(config: &LeewayConfig) -> Result<LeewayField, LeewayError> {
    let model = LeewayModel::new(config.k)?;
    let grid = CoordinateGrid::build(config.speed, config.heel)?;
    let field = LeewayField::compute(grid, &model)?;

    let (rows, cols) = field.dim();
    info!(rows, cols, k = config.k, "leeway field ready");
    Ok(field)
}

// ============================================================================
// LEEWAY PLOT - Contour bands for a browser canvas
// ============================================================================

#[wasm_bindgen]
pub struct LeewayPlot {
    field: LeewayField,
    levels: ContourLevels,
    encoder: Encoder,
}

#[wasm_bindgen]
impl LeewayPlot {
    #[wasm_bindgen(constructor)]
    pub fn new(w: u32, h: u32) -> Result<LeewayPlot, JsError> {
        let field = compute(&LeewayConfig::default())?;
        let (min, max) = field.range();
        let levels = ContourLevels::auto(min, max, MAX_BANDS);

        let mut encoder = Encoder::new(w, h);
        encoder.encode_field(&field, &levels);
        Ok(Self { field, levels, encoder })
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        self.encoder.resize(w, h);
        self.encoder.encode_field(&self.field, &self.levels);
    }

    /// Contour level boundaries, one more than the band count
    pub fn levels(&self) -> Float64Array {
        Float64Array::from(self.level_values())
    }

    pub fn band_rgb(&self, band: usize) -> Uint8Array {
        Uint8Array::from(&self.band_rgb_values(band)[..])
    }

    /// Interpolated leeway, NaN outside the plotted domain
    pub fn leeway_at(&self, speed: f64, heel: f64) -> f64 {
        self.field.sample(speed, heel).unwrap_or(f64::NAN)
    }

    pub fn speed_bounds(&self) -> Float64Array {
        let (low, high) = self.speed_range();
        Float64Array::from(&[low, high][..])
    }

    pub fn heel_bounds(&self) -> Float64Array {
        let (low, high) = self.heel_range();
        Float64Array::from(&[low, high][..])
    }

    // Accessors for WASM
    pub fn output_ptr(&self) -> *const u8 { self.encoder.ptr() }
    pub fn output_len(&self) -> usize { self.encoder.len() }
    pub fn width(&self) -> u32 { self.encoder.width() }
    pub fn height(&self) -> u32 { self.encoder.height() }
}

impl LeewayPlot {
    pub fn field(&self) -> &LeewayField { &self.field }
    pub fn contour_levels(&self) -> &ContourLevels { &self.levels }
    pub fn bands(&self) -> &[u8] { self.encoder.as_slice() }
    pub fn level_values(&self) -> &[f64] { self.levels.values() }

    pub fn band_rgb_values(&self, band: usize) -> [u8; 3] {
        band_color(&self.levels, band)
    }

    pub fn speed_range(&self) -> (f64, f64) {
        let a = self.field.grid().speed_axis();
        (a.low, a.high)
    }

    pub fn heel_range(&self) -> (f64, f64) {
        let a = self.field.grid().heel_axis();
        (a.low, a.high)
    }
}
