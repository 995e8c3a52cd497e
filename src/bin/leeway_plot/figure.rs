// figure.rs - Compose the contour figure
//
// Layout (pixels, 1000x600):
//   title on top, filled contours in the plot area, speed ticks
//   below, heel ticks left, colour bar right of the plot.

use image::{Rgb, RgbImage};

use leeway_engine::config::{HEEL_LABEL, LEEWAY_LABEL, SPEED_LABEL, TITLE};
use leeway_engine::field::LeewayField;
use leeway_engine::render::{ContourLevels, Encoder, band_color, nice_ticks};

use crate::font::{draw_text, draw_text_vertical, text_height, text_width};

pub const WIDTH: u32 = 1000;
pub const HEIGHT: u32 = 600;

const PLOT_X: u32 = 90;
const PLOT_Y: u32 = 50;
const PLOT_W: u32 = 740;
const PLOT_H: u32 = 480;

const BAR_GAP: u32 = 30;
const BAR_W: u32 = 24;

const TICK_LEN: u32 = 5;
const MAX_TICKS: usize = 8;
const TEXT_SCALE: u32 = 2;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const INK: Rgb<u8> = Rgb([0, 0, 0]);

pub fn draw(field: &LeewayField, levels: &ContourLevels) -> RgbImage {
    let mut img = RgbImage::from_pixel(WIDTH, HEIGHT, WHITE);

    draw_contours(&mut img, field, levels);
    frame(&mut img, PLOT_X, PLOT_Y, PLOT_W, PLOT_H);
    draw_speed_axis(&mut img, field);
    draw_heel_axis(&mut img, field);
    draw_colorbar(&mut img, levels);

    let tw = text_width(TITLE, TEXT_SCALE);
    let tx = PLOT_X as i64 + (PLOT_W as i64 - tw as i64) / 2;
    draw_text(&mut img, tx, 16, TITLE, TEXT_SCALE, INK);

    img
}

// ============================================================================
// Plot area
// ============================================================================

fn draw_contours(img: &mut RgbImage, field: &LeewayField, levels: &ContourLevels) {
    let mut enc = Encoder::new(PLOT_W, PLOT_H);
    enc.encode_field(field, levels);

    for y in 0..PLOT_H {
        for x in 0..PLOT_W {
            if let Some(band) = enc.band_at(x, y) {
                img.put_pixel(PLOT_X + x, PLOT_Y + y, Rgb(band_color(levels, band)));
            }
        }
    }
}

fn hline(img: &mut RgbImage, x0: u32, x1: u32, y: u32) {
    for x in x0..=x1.min(WIDTH - 1) {
        if y < HEIGHT { img.put_pixel(x, y, INK); }
    }
}

fn vline(img: &mut RgbImage, x: u32, y0: u32, y1: u32) {
    for y in y0..=y1.min(HEIGHT - 1) {
        if x < WIDTH { img.put_pixel(x, y, INK); }
    }
}

/// One-pixel border just outside the given rectangle
fn frame(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32) {
    hline(img, x - 1, x + w, y - 1);
    hline(img, x - 1, x + w, y + h);
    vline(img, x - 1, y - 1, y + h);
    vline(img, x + w, y - 1, y + h);
}

// ============================================================================
// Axes
// ============================================================================

fn draw_speed_axis(img: &mut RgbImage, field: &LeewayField) {
    let axis = field.grid().speed_axis();
    let ticks = nice_ticks(axis.low, axis.high, MAX_TICKS);
    let base = PLOT_Y + PLOT_H;

    for (v, label) in ticks.values.iter().zip(ticks.labels()) {
        let t = (v - axis.low) / (axis.high - axis.low);
        let px = PLOT_X + ((t * (PLOT_W - 1) as f64).round() as u32).min(PLOT_W - 1);
        vline(img, px, base, base + TICK_LEN);

        let lw = text_width(&label, TEXT_SCALE) as i64;
        draw_text(img, px as i64 - lw / 2, (base + TICK_LEN + 4) as i64, &label, TEXT_SCALE, INK);
    }

    let lw = text_width(SPEED_LABEL, TEXT_SCALE) as i64;
    let lx = PLOT_X as i64 + (PLOT_W as i64 - lw) / 2;
    draw_text(img, lx, (base + 38) as i64, SPEED_LABEL, TEXT_SCALE, INK);
}

fn draw_heel_axis(img: &mut RgbImage, field: &LeewayField) {
    let axis = field.grid().heel_axis();
    let ticks = nice_ticks(axis.low, axis.high, MAX_TICKS);
    let half = text_height(TEXT_SCALE) as i64 / 2;

    for (v, label) in ticks.values.iter().zip(ticks.labels()) {
        let t = (v - axis.low) / (axis.high - axis.low);
        let py = PLOT_Y + PLOT_H - 1 - ((t * (PLOT_H - 1) as f64).round() as u32).min(PLOT_H - 1);
        hline(img, PLOT_X - 1 - TICK_LEN, PLOT_X - 1, py);

        let lw = text_width(&label, TEXT_SCALE) as i64;
        let right = (PLOT_X - 1 - TICK_LEN - 4) as i64;
        draw_text(img, right - lw, py as i64 - half, &label, TEXT_SCALE, INK);
    }

    let lw = text_width(HEEL_LABEL, TEXT_SCALE) as i64;
    let bottom = PLOT_Y as i64 + (PLOT_H as i64 + lw) / 2;
    draw_text_vertical(img, 16, bottom, HEEL_LABEL, TEXT_SCALE, INK);
}

// ============================================================================
// Colour bar
// ============================================================================

fn draw_colorbar(img: &mut RgbImage, levels: &ContourLevels) {
    let x0 = PLOT_X + PLOT_W + BAR_GAP;
    let n = levels.bands() as u32;
    let bottom = PLOT_Y + PLOT_H;
    // Top edge of band b, counted from the bottom of the bar
    let edge = |b: u32| bottom - b * PLOT_H / n;

    for b in 0..n {
        let color = Rgb(band_color(levels, b as usize));
        for y in edge(b + 1)..edge(b) {
            for x in x0..x0 + BAR_W {
                img.put_pixel(x, y, color);
            }
        }
    }
    frame(img, x0, PLOT_Y, BAR_W, PLOT_H);

    let half = text_height(TEXT_SCALE) as i64 / 2;
    let label_x = x0 + BAR_W + TICK_LEN + 4;
    let mut widest = 0;
    for (i, label) in levels.labels().iter().enumerate() {
        let py = edge(i as u32).min(bottom - 1);
        hline(img, x0 + BAR_W, x0 + BAR_W + TICK_LEN, py);
        draw_text(img, label_x as i64, py as i64 - half, label, TEXT_SCALE, INK);
        widest = widest.max(text_width(label, TEXT_SCALE));
    }

    let lw = text_width(LEEWAY_LABEL, TEXT_SCALE) as i64;
    let bottom_y = PLOT_Y as i64 + (PLOT_H as i64 + lw) / 2;
    draw_text_vertical(img, (label_x + widest + 10) as i64, bottom_y, LEEWAY_LABEL, TEXT_SCALE, INK);
}
