use std::ops::RangeInclusive;

use crate::error::ConfigError;

/// Accepted output widths, in characters
pub const WIDTH_RANGE: RangeInclusive<u32> = 10..=300;
/// Accepted contrast factors
pub const CONTRAST_RANGE: RangeInclusive<f64> = 0.5..=3.0;
/// Accepted gamma factors
pub const GAMMA_RANGE: RangeInclusive<f64> = 0.5..=2.0;
/// Accepted brightness offsets
pub const BRIGHTNESS_RANGE: RangeInclusive<f64> = -0.5..=0.5;

/// Configuration for ASCII text rendering
///
/// Built once per invocation and only read while rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Output width in characters
    pub width: u32, // 10-300, default 80

    /// Ramp selection
    pub invert: bool,   // reverse the ramp (for light-on-dark terminals), default false
    pub detailed: bool, // 70-character ramp instead of the 10-character one, default false

    /// Tone adjustments, applied in the order gamma, brightness, contrast
    pub contrast: f64,   // 0.5-3.0, default 1.0
    pub gamma: f64,      // 0.5-2.0, default 1.0
    pub brightness: f64, // -0.5-0.5, default 0.0
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 80,

            invert: false,
            detailed: false,

            contrast: 1.0,
            gamma: 1.0,
            brightness: 0.0,
        }
    }
}

impl RenderConfig {
    /// Validates the configuration parameters
    ///
    /// Rendering itself accepts any configuration; this is the check front ends
    /// run on user input before handing it to [`crate::render`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !WIDTH_RANGE.contains(&self.width) {
            return Err(ConfigError::Width(self.width));
        }
        if !CONTRAST_RANGE.contains(&self.contrast) {
            return Err(ConfigError::Contrast(self.contrast));
        }
        if !GAMMA_RANGE.contains(&self.gamma) {
            return Err(ConfigError::Gamma(self.gamma));
        }
        if !BRIGHTNESS_RANGE.contains(&self.brightness) {
            return Err(ConfigError::Brightness(self.brightness));
        }
        Ok(())
    }

    /// Whether every tone adjustment is the identity
    pub fn is_neutral(&self) -> bool {
        self.gamma == 1.0 && self.contrast == 1.0 && self.brightness == 0.0
    }
}
