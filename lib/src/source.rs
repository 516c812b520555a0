//! Pixel sources consumed by the renderer
//!
//! The renderer only needs the bounds of an image and a way to read one pixel as
//! 16-bit RGBA with premultiplied alpha. Decoded `image` buffers (straight alpha)
//! are adapted here; anything else can implement [`PixelSource`] directly.

use image::{DynamicImage, GenericImageView, ImageBuffer, Rgba, RgbaImage};
use std::ops::Deref;

/// Rectangular pixel bounds, `min` inclusive and `max` exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl Bounds {
    /// Bounds of a `width`×`height` image anchored at the origin
    pub fn from_size(width: u32, height: u32) -> Self {
        Self {
            min_x: 0,
            min_y: 0,
            max_x: width as i64,
            max_y: height as i64,
        }
    }

    /// Span along x; zero for inverted bounds, never overflows
    pub fn width(&self) -> u64 {
        span(self.min_x, self.max_x)
    }

    /// Span along y; zero for inverted bounds, never overflows
    pub fn height(&self) -> u64 {
        span(self.min_y, self.max_y)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

// i64::MIN..i64::MAX spans u64::MAX - 1 pixels, so the difference is taken in i128
fn span(min: i64, max: i64) -> u64 {
    (max as i128 - min as i128).max(0) as u64
}

/// Read-only access to a decoded image
pub trait PixelSource {
    /// The rectangle of valid coordinates
    fn bounds(&self) -> Bounds;

    /// Color at `(x, y)` as `[r, g, b, a]`, each channel in `0..=65535`
    ///
    /// Color channels are premultiplied by alpha, so no channel exceeds `a`.
    /// Only called with coordinates inside [`PixelSource::bounds`].
    fn rgba16(&self, x: i64, y: i64) -> [u16; 4];
}

/// Widen an 8-bit channel to 16 bits so that 255 maps to 65535
#[inline]
pub fn widen(channel: u8) -> u16 {
    channel as u16 * 257
}

/// Convert straight-alpha 16-bit RGBA to premultiplied alpha
///
/// Formula: C' = C * a / 65535, truncated.
#[inline]
pub fn premultiply(rgba: [u16; 4]) -> [u16; 4] {
    let [r, g, b, a] = rgba;
    if a == u16::MAX {
        return rgba;
    }
    let scale = |c: u16| (c as u32 * a as u32 / u16::MAX as u32) as u16;
    [scale(r), scale(g), scale(b), a]
}

/// Quantize a float channel in [0, 1] to 16 bits
#[inline]
fn quantize(channel: f32) -> u16 {
    (channel.clamp(0.0, 1.0) * u16::MAX as f32).round() as u16
}

impl<C> PixelSource for ImageBuffer<Rgba<u16>, C>
where
    C: Deref<Target = [u16]>,
{
    fn bounds(&self) -> Bounds {
        Bounds::from_size(self.width(), self.height())
    }

    fn rgba16(&self, x: i64, y: i64) -> [u16; 4] {
        premultiply(self.get_pixel(x as u32, y as u32).0)
    }
}

impl PixelSource for RgbaImage {
    fn bounds(&self) -> Bounds {
        Bounds::from_size(self.width(), self.height())
    }

    fn rgba16(&self, x: i64, y: i64) -> [u16; 4] {
        premultiply(self.get_pixel(x as u32, y as u32).0.map(widen))
    }
}

impl PixelSource for DynamicImage {
    fn bounds(&self) -> Bounds {
        Bounds::from_size(self.width(), self.height())
    }

    fn rgba16(&self, x: i64, y: i64) -> [u16; 4] {
        let (px, py) = (x as u32, y as u32);
        let straight = match self {
            DynamicImage::ImageLuma16(buf) => {
                let [l] = buf.get_pixel(px, py).0;
                [l, l, l, u16::MAX]
            }
            DynamicImage::ImageLumaA16(buf) => {
                let [l, a] = buf.get_pixel(px, py).0;
                [l, l, l, a]
            }
            DynamicImage::ImageRgb16(buf) => {
                let [r, g, b] = buf.get_pixel(px, py).0;
                [r, g, b, u16::MAX]
            }
            DynamicImage::ImageRgba16(buf) => buf.get_pixel(px, py).0,
            DynamicImage::ImageRgb32F(buf) => {
                let [r, g, b] = buf.get_pixel(px, py).0.map(quantize);
                [r, g, b, u16::MAX]
            }
            DynamicImage::ImageRgba32F(buf) => buf.get_pixel(px, py).0.map(quantize),
            // 8-bit variants; GenericImageView on DynamicImage yields Rgba<u8>
            other => other.get_pixel(px, py).0.map(widen),
        };
        premultiply(straight)
    }
}
