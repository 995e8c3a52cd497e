// encoder.rs - Rasterize a leeway field into contour bands
//
// Output encoding (one byte per pixel, row-major):
//   0      = no data
//   1-255  = contour band + 1
//
// x grows with speed, y grows downward with decreasing heel.

use crate::field::LeewayField;
use crate::render::levels::ContourLevels;

// Widen before multiplying; w * h overflows u32 past 65535 x 65536
fn pixel_count(w: u32, h: u32) -> usize {
    w as usize * h as usize
}

fn index(w: u32, x: u32, y: u32) -> usize {
    y as usize * w as usize + x as usize
}

pub struct Encoder {
    out: Vec<u8>,
    w: u32,
    h: u32,
}

impl Encoder {
    pub fn new(w: u32, h: u32) -> Self {
        Self {
            out: vec![0; pixel_count(w, h)],
            w,
            h,
        }
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        self.w = w;
        self.h = h;
        self.out.resize(pixel_count(w, h), 0);
    }

    pub fn clear(&mut self) {
        self.out.fill(0);
    }

    pub fn ptr(&self) -> *const u8 {
        self.out.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn width(&self) -> u32 { self.w }
    pub fn height(&self) -> u32 { self.h }

    pub fn as_slice(&self) -> &[u8] {
        &self.out
    }

    /// Band at pixel, None for no data or out of bounds
    pub fn band_at(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.w || y >= self.h { return None; }
        match self.out[index(self.w, x, y)] {
            0 => None,
            b => Some(b as usize - 1),
        }
    }

    /// Encode every pixel by sampling the field at the pixel centre
    pub fn encode_field(&mut self, field: &LeewayField, levels: &ContourLevels) {
        self.clear();
        let (w, h) = (self.w as usize, self.h as usize);
        if w == 0 || h == 0 { return; }

        let speed = field.grid().speed_axis();
        let heel = field.grid().heel_axis();

        for y in 0..h {
            let ty = (y as f64 + 0.5) / h as f64;
            let hv = heel.high - ty * (heel.high - heel.low);
            for x in 0..w {
                let tx = (x as f64 + 0.5) / w as f64;
                let sv = speed.low + tx * (speed.high - speed.low);

                let Some(band) = field.sample(sv, hv).and_then(|v| levels.band_of(v)) else {
                    continue;
                };
                self.out[y * w + x] = u8::try_from(band + 1).unwrap_or(u8::MAX);
            }
        }
    }
}
