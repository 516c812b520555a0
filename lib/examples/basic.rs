/// Basic example: Render a synthetic image as ASCII text
///
/// Draws a white disc on a gray background with a dark diagonal and prints it
/// with both ramps
use img2ascii::{RenderConfig, render};
use image::{Rgba, RgbaImage};

fn main() {
    println!("img2ascii - Basic Example");
    println!("=========================\n");

    let width = 160;
    let height = 120;
    let mut img = RgbaImage::from_pixel(width, height, Rgba([100, 100, 100, 255]));

    // White disc in the center
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 40.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            if (dx * dx + dy * dy).sqrt() < radius {
                img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            }
        }
    }

    // Dark diagonal
    for i in 0..height {
        img.put_pixel(i, i, Rgba([0, 0, 0, 255]));
    }

    println!("Created test image: {}x{}\n", width, height);

    let config = RenderConfig {
        width: 60,
        ..Default::default()
    };
    println!("Standard ramp:");
    print!("{}", render(&img, &config));

    let config = RenderConfig {
        width: 60,
        detailed: true,
        invert: true,
        ..Default::default()
    };
    println!("\nDetailed ramp, inverted:");
    print!("{}", render(&img, &config));
}
