//! Nearest-neighbour mapping from the character grid back to source pixels

use crate::source::Bounds;

/// Height/width correction for terminal cells, which are roughly 2.2x taller than wide
pub const CHAR_ASPECT_CORRECTION: f64 = 0.45;

/// Maps target cells to source pixel coordinates
///
/// No averaging is done: each cell takes the single pixel at the top-left of the
/// area it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sampler {
    bounds: Bounds,
    width: u64,
    height: u64,
}

impl Sampler {
    /// Build a sampler for an image with `bounds` rendered `width` characters wide
    pub fn new(bounds: Bounds, width: u32) -> Self {
        let width = width as u64;
        Self {
            bounds,
            width,
            height: target_height(bounds.width(), bounds.height(), width),
        }
    }

    /// Grid width in characters
    pub fn width(&self) -> u64 {
        self.width
    }

    /// Grid height in rows
    pub fn height(&self) -> u64 {
        self.height
    }

    /// Source coordinate for grid cell `(x, y)`
    ///
    /// `x` must be below [`Sampler::width`] and `y` below [`Sampler::height`].
    pub fn source_coord(&self, x: u64, y: u64) -> (i64, i64) {
        (
            offset(self.bounds.min_x, x, self.bounds.width(), self.width),
            offset(self.bounds.min_y, y, self.bounds.height(), self.height),
        )
    }
}

// min + floor(cell * span / cells), in i128 so bounds spanning the whole i64 range
// cannot overflow; the result is always below min + span
fn offset(min: i64, cell: u64, span: u64, cells: u64) -> i64 {
    let step = cell as u128 * span as u128 / cells.max(1) as u128;
    (min as i128 + step as i128) as i64
}

/// Number of rows for an `img_width`×`img_height` image rendered `width` characters wide
///
/// Zero when the image has no width or the result rounds down to nothing.
pub fn target_height(img_width: u64, img_height: u64, width: u64) -> u64 {
    if img_width == 0 {
        return 0;
    }
    let aspect = img_height as f64 / img_width as f64;
    (aspect * width as f64 * CHAR_ASPECT_CORRECTION).floor() as u64
}
