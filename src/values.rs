// Pure conversions between DOM values and core types.
use glowsphere_core::Rgba;

/// CSS `rgba()` string for a colour with channels in 0..=1.
pub fn css_rgba(color: Rgba) -> String {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {:.3})",
        channel(color.r),
        channel(color.g),
        channel(color.b),
        color.a.clamp(0.0, 1.0)
    )
}

/// Numeric value of a range input, if it parses to a finite number.
#[inline]
pub fn parse_slider_value(raw: &str) -> Option<f32> {
    raw.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

/// Backing-store size in device pixels for a CSS box, never below 1x1.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let w = (css_width * device_pixel_ratio) as u32;
    let h = (css_height * device_pixel_ratio) as u32;
    (w.max(1), h.max(1))
}
