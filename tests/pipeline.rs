use approx::assert_relative_eq;

use leeway_engine::config::LeewayConfig;
use leeway_engine::error::LeewayError;
use leeway_engine::grid::AxisSpec;
use leeway_engine::render::viridis;
use leeway_engine::{LeewayPlot, compute};

#[test]
fn reference_field_boundary_values() {
    let field = compute(&LeewayConfig::default()).unwrap();
    assert_eq!(field.dim(), (100, 100));
    assert_eq!(field.get(0, 0), Some(0.0));
    assert_relative_eq!(field.get(99, 0).unwrap(), 22500.0, max_relative = 1e-9);
}

#[test]
fn all_arrays_share_shape() {
    let config = LeewayConfig {
        speed: AxisSpec::new(0.5, 12.0, 37),
        heel: AxisSpec::new(0.0, 30.0, 11),
        k: 9.0,
    };
    let field = compute(&config).unwrap();
    assert_eq!(field.dim(), (11, 37));
    assert_eq!(field.grid().speed().dim(), (11, 37));
    assert_eq!(field.grid().heel().dim(), (11, 37));
}

#[test]
fn zero_speed_fails_before_grid() {
    let config = LeewayConfig {
        speed: AxisSpec::new(0.0, 10.0, 100),
        ..LeewayConfig::default()
    };
    assert!(matches!(compute(&config), Err(LeewayError::InvalidRange { axis: "speed", .. })));
}

#[test]
fn non_finite_k_fails() {
    let config = LeewayConfig { k: f64::NAN, ..LeewayConfig::default() };
    assert!(matches!(compute(&config), Err(LeewayError::InvalidCoefficient(_))));
}

#[test]
fn pipeline_is_deterministic() {
    let a = compute(&LeewayConfig::default()).unwrap();
    let b = compute(&LeewayConfig::default()).unwrap();
    assert_eq!(a.values(), b.values());
}

#[test]
fn error_messages_name_the_axis() {
    let config = LeewayConfig {
        heel: AxisSpec::new(0.0, 25.0, 0),
        ..LeewayConfig::default()
    };
    let msg = compute(&config).unwrap_err().to_string();
    assert_eq!(msg, "invalid heel range: sample count must be positive");
}

#[test]
fn plot_encodes_every_pixel() {
    let Ok(mut plot) = LeewayPlot::new(120, 80) else { panic!("plot construction failed") };
    assert_eq!(plot.output_len(), 120 * 80);
    assert!(plot.bands().iter().all(|&b| b != 0));
    assert!(plot.bands().iter().all(|&b| (b as usize) <= plot.contour_levels().bands()));

    plot.resize(40, 30);
    assert_eq!((plot.width(), plot.height()), (40, 30));
    assert_eq!(plot.output_len(), 1200);
}

#[test]
fn plot_lookup_matches_formula_at_nodes() {
    let Ok(plot) = LeewayPlot::new(10, 10) else { panic!("plot construction failed") };
    assert_relative_eq!(plot.leeway_at(10.0, 25.0), 2.25, max_relative = 1e-9);
    assert_eq!(plot.leeway_at(0.1, 0.0), 0.0);
    assert!(plot.leeway_at(0.05, 10.0).is_nan());
}

#[test]
fn plot_exposes_levels_and_band_colours() {
    let Ok(plot) = LeewayPlot::new(20, 20) else { panic!("plot construction failed") };
    assert_eq!(plot.level_values(), &[0.0, 5000.0, 10000.0, 15000.0, 20000.0, 25000.0]);
    assert_eq!(plot.contour_levels().bands(), 5);

    assert_eq!(plot.band_rgb_values(0), viridis(0.0));
    assert_eq!(plot.band_rgb_values(0), [68, 1, 84]);
    assert_eq!(plot.band_rgb_values(4), [253, 231, 37]);
    // past the top band clamps to the top colour
    assert_eq!(plot.band_rgb_values(9), plot.band_rgb_values(4));
}

#[test]
fn plot_reports_axis_bounds() {
    let Ok(plot) = LeewayPlot::new(8, 8) else { panic!("plot construction failed") };
    assert_eq!(plot.speed_range(), (0.1, 10.0));
    assert_eq!(plot.heel_range(), (0.0, 25.0));
}
