use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::filters::calculate_luminance;
use crate::lut::Ramp;
use crate::sampler::Sampler;
use crate::source::PixelSource;
use image::{DynamicImage, ImageReader};
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Renders an image as ASCII text
///
/// Pipeline:
/// 1. Compute the grid size from the image aspect ratio and `config.width`
/// 2. Pick the character ramp (standard or detailed, optionally reversed)
/// 3. For every cell, sample the nearest source pixel
/// 4. Convert the pixel to a 16-bit brightness (alpha, luminance, tone)
/// 5. Map the brightness to a ramp character
///
/// # Arguments
/// * `source` - The decoded image
/// * `config` - Rendering parameters; not validated here
///
/// # Returns
/// One line per row, each `config.width` characters long and terminated by `\n`.
/// Images with no width, or too short to produce a row, render to an empty string.
pub fn render<S: PixelSource + ?Sized>(source: &S, config: &RenderConfig) -> String {
    let ramp = Ramp::select(config.detailed, config.invert);
    render_with_ramp(source, config, &ramp)
}

/// Same as [`render`], with an explicit ramp
///
/// `config.detailed` and `config.invert` are ignored; `ramp` is used as given.
pub fn render_with_ramp<S: PixelSource + ?Sized>(
    source: &S,
    config: &RenderConfig,
    ramp: &Ramp,
) -> String {
    let bounds = source.bounds();
    if bounds.is_empty() {
        debug!("empty source bounds {:?}, nothing to render", bounds);
        return String::new();
    }

    let sampler = Sampler::new(bounds, config.width);
    let (width, height) = (sampler.width(), sampler.height());

    debug!(
        "rendering {}x{} source into {}x{} grid ({} levels)",
        bounds.width(),
        bounds.height(),
        width,
        height,
        ramp.len()
    );

    let mut output = String::with_capacity(((width + 1) * height) as usize);

    for y in 0..height {
        for x in 0..width {
            let (src_x, src_y) = sampler.source_coord(x, y);
            let gray = calculate_luminance(source.rgba16(src_x, src_y), config);
            output.push(ramp.char_for(gray));
        }
        output.push('\n');
    }

    output
}

/// Decode an image file, guessing the format from its contents
///
/// JPEG, PNG and WebP are supported.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let reader = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let img = reader.decode().map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        "decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img)
}

/// Validate `config`, decode the image at `path` and render it
pub fn render_path(path: &Path, config: &RenderConfig) -> Result<String> {
    config.validate()?;
    let img = load_image(path)?;
    Ok(render(&img.to_rgba16(), config))
}
