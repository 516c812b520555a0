//! Character ramps used to turn brightness into text
//!
//! Ramps are ordered from darkest (index 0) to lightest (last index).

/// Standard ramp, 10 levels from darkest (space) to brightest (@)
pub const STANDARD_RAMP: &str = " .:-=+*#%@";

/// Detailed ramp, 70 levels from darkest (space) to brightest ($)
pub const DETAILED_RAMP: &str =
    " .'`^\",:;Il!i><~+_-?][}{1)(|/\\tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// An ordered character ramp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ramp {
    chars: Vec<char>,
}

impl Ramp {
    /// Build a ramp from characters ordered dark to light
    ///
    /// # Panics
    /// If `chars` is empty.
    pub fn new(chars: &str) -> Self {
        let chars: Vec<char> = chars.chars().collect();
        assert!(!chars.is_empty(), "Ramp must contain at least one character");
        Self { chars }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_RAMP)
    }

    pub fn detailed() -> Self {
        Self::new(DETAILED_RAMP)
    }

    /// Pick the ramp for a render: detailed or standard, reversed when `invert` is set
    pub fn select(detailed: bool, invert: bool) -> Self {
        let ramp = if detailed {
            Self::detailed()
        } else {
            Self::standard()
        };
        if invert { ramp.reversed() } else { ramp }
    }

    /// The same ramp ordered light to dark
    pub fn reversed(&self) -> Self {
        Self {
            chars: self.chars.iter().rev().copied().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Ramp index for a 16-bit brightness
    ///
    /// Formula: floor(g * (L - 1) / 65535), clamped to the last index.
    pub fn index_for(&self, brightness: u16) -> usize {
        let last = self.chars.len() - 1;
        let index = brightness as usize * last / u16::MAX as usize;
        index.min(last)
    }

    /// Character for a 16-bit brightness
    pub fn char_for(&self, brightness: u16) -> char {
        self.chars[self.index_for(brightness)]
    }
}

impl Default for Ramp {
    fn default() -> Self {
        Self::standard()
    }
}
