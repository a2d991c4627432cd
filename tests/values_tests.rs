// Host-side tests for pure DOM value conversions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod values {
    include!("../src/values.rs");
}

use glowsphere_core::{Hsla, Rgba};
use values::*;

#[test]
fn css_rgba_scales_channels_to_bytes() {
    assert_eq!(css_rgba(Rgba::BLACK), "rgba(0, 0, 0, 1.000)");
    assert_eq!(
        css_rgba(Rgba::new(1.0, 0.5, 0.0, 0.25)),
        "rgba(255, 128, 0, 0.250)"
    );
}

#[test]
fn css_rgba_clamps_out_of_range_channels() {
    assert_eq!(
        css_rgba(Rgba::new(-0.2, 1.7, 0.0, 3.0)),
        "rgba(0, 255, 0, 1.000)"
    );
}

#[test]
fn particle_colour_renders_as_css() {
    let c = Hsla {
        hue: 0.0,
        saturation: 0.8,
        lightness: 0.6,
        alpha: 0.5,
    }
    .to_rgba();
    // hsl(0, 80%, 60%) is #eb4747.
    assert_eq!(css_rgba(c), "rgba(235, 71, 71, 0.500)");
}

#[test]
fn slider_values_parse_or_are_rejected() {
    assert_eq!(parse_slider_value("280"), Some(280.0));
    assert_eq!(parse_slider_value(" 1.25 "), Some(1.25));
    assert_eq!(parse_slider_value(""), None);
    assert_eq!(parse_slider_value("abc"), None);
    assert_eq!(parse_slider_value("NaN"), None);
    assert_eq!(parse_slider_value("inf"), None);
}

#[test]
fn backing_size_follows_device_pixel_ratio() {
    assert_eq!(backing_size(400.0, 300.0, 2.0), (800, 600));
    assert_eq!(backing_size(400.5, 300.0, 1.0), (400, 300));
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
}
