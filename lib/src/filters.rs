use crate::config::RenderConfig;

/// Full-scale value of a 16-bit channel
pub const CHANNEL_MAX: f64 = 65535.0;

/// Blend a color with alpha against a white backdrop
///
/// Formula: C' = C * α + 65535 * (1 - α), with α = a / 65535, applied to the
/// premultiplied channels. Opaque colors are returned unchanged.
///
/// # Arguments
/// * `rgba` - 16-bit color with premultiplied alpha
///
/// # Returns
/// The opaque `[r, g, b]` equivalent, still on the 16-bit scale
pub fn composite_over_white(rgba: [u16; 4]) -> [f64; 3] {
    let [r, g, b, a] = rgba;
    let rgb = [r as f64, g as f64, b as f64];
    if a == u16::MAX {
        return rgb;
    }

    let alpha = a as f64 / CHANNEL_MAX;
    rgb.map(|c| c * alpha + CHANNEL_MAX * (1.0 - alpha))
}

/// Perceptual luminance of an opaque color
///
/// Formula: Y = 0.299*R + 0.587*G + 0.114*B (ITU-R BT.601 weights)
pub fn luminance(rgb: [f64; 3]) -> f64 {
    0.299 * rgb[0] + 0.587 * rgb[1] + 0.114 * rgb[2]
}

/// Apply gamma, brightness and contrast to a normalized luminance
///
/// The order is fixed: gamma runs first so its base is never negative, then the
/// additive brightness offset, then contrast pivoting on mid-gray. The result is
/// clamped to [0, 1].
///
/// # Arguments
/// * `normalized` - Luminance in [0, 1]
/// * `config` - Tone parameters
pub fn adjust_tone(normalized: f64, config: &RenderConfig) -> f64 {
    if config.is_neutral() {
        return normalized.clamp(0.0, 1.0);
    }

    let mut n = normalized;

    if config.gamma != 1.0 {
        n = n.powf(1.0 / config.gamma);
    }

    n += config.brightness;

    if config.contrast != 1.0 {
        n = (n - 0.5) * config.contrast + 0.5;
    }

    n.clamp(0.0, 1.0)
}

/// Convert a sampled color to a 16-bit brightness value
///
/// Pipeline: alpha compositing over white, luminance, normalization, tone
/// adjustment (see [`adjust_tone`]), then rounding back to 16 bits.
///
/// # Arguments
/// * `rgba` - 16-bit color with premultiplied alpha, as returned by
///   [`crate::source::PixelSource::rgba16`]
/// * `config` - Tone parameters
///
/// # Returns
/// Brightness in [0, 65535], 0 being black
pub fn calculate_luminance(rgba: [u16; 4], config: &RenderConfig) -> u16 {
    let gray = luminance(composite_over_white(rgba));
    let normalized = adjust_tone(gray / CHANNEL_MAX, config);
    (normalized * CHANNEL_MAX).round() as u16
}
