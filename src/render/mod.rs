// render/ - Filled contour rendering
//
// Levels split the field into bands, the encoder rasterizes bands,
// the colour map turns bands into pixels. Drawing text and axes is
// left to whoever owns the surface.

mod colormap;
mod encoder;
mod levels;

pub use colormap::viridis;
pub use encoder::Encoder;
pub use levels::{ContourLevels, Ticks, format_tick, nice_ticks};

/// Colour of a contour band
pub fn band_color(levels: &ContourLevels, band: usize) -> [u8; 3] {
    viridis(levels.band_fraction(band))
}
