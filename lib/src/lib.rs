//! img2ascii - luminance-based image to ASCII text converter
//!
//! Each character cell samples one source pixel (nearest neighbour), turns it into a
//! brightness value and picks a character from a dark-to-light ramp. The output is
//! plain text meant for a terminal.
//!
//! # Example
//! ```no_run
//! use img2ascii::{render, RenderConfig};
//!
//! let input = image::open("photo.jpg").unwrap().to_rgba16();
//! let config = RenderConfig {
//!     width: 120,
//!     detailed: true,
//!     ..Default::default()
//! };
//! print!("{}", render(&input, &config));
//! ```

pub mod config;
pub mod error;
pub mod filters;
pub mod lut;
pub mod processor;
pub mod sampler;
pub mod source;

// Re-export main types for convenience
pub use config::RenderConfig;
pub use error::{ConfigError, Error, Result};
pub use lut::Ramp;
pub use processor::{load_image, render, render_path, render_with_ramp};
pub use source::{Bounds, PixelSource};
