use img2ascii::{RenderConfig, render};
use image::{Rgba, RgbaImage};

fn main() {
    println!("img2ascii - Tone Adjustment Demo");
    println!("================================\n");

    // Horizontal gradient, black on the left to white on the right
    let img = RgbaImage::from_fn(256, 16, |x, _| {
        let gray = x as u8;
        Rgba([gray, gray, gray, 255])
    });

    let cases = vec![
        ("neutral", 1.0, 1.0, 0.0),
        ("gamma 2.0", 1.0, 2.0, 0.0),
        ("gamma 0.5", 1.0, 0.5, 0.0),
        ("contrast 2.0", 2.0, 1.0, 0.0),
        ("brightness +0.3", 1.0, 1.0, 0.3),
        ("contrast 1.5, gamma 0.8", 1.5, 0.8, 0.0),
    ];

    for (description, contrast, gamma, brightness) in cases {
        let config = RenderConfig {
            width: 64,
            contrast,
            gamma,
            brightness,
            ..Default::default()
        };
        let output = render(&img, &config);
        let first_row = output.lines().next().unwrap_or_default();
        println!("{:<24} |{}|", description, first_row);
    }
}
