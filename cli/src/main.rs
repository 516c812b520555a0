use anyhow::{Context, Result};
use clap::Parser;
use img2ascii::{RenderConfig, render_path};
use log::{LevelFilter, info};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Image to ASCII art converter
#[derive(Parser, Debug)]
#[command(name = "img2ascii", version, about = "Image to ASCII art converter")]
#[command(after_help = "EXAMPLES:
    img2ascii image.webp
    img2ascii image.jpg
    img2ascii -w 120 photo.jpeg
    img2ascii -i -d image.png
    img2ascii -c 1.5 -g 0.8 image.webp   # Enhanced contrast and gamma
    img2ascii -o output.txt image.webp")]
struct Cli {
    /// Image to convert (webp, jpg, jpeg or png)
    #[arg(value_name = "IMAGE")]
    image: PathBuf,

    /// Width of ASCII output in characters (10-300)
    #[arg(short, long, default_value_t = 80)]
    width: u32,

    /// Invert brightness (for dark terminals)
    #[arg(short, long)]
    invert: bool,

    /// Use detailed character set
    #[arg(short, long)]
    detailed: bool,

    /// Save output to file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Contrast adjustment (0.5-3.0)
    #[arg(short, long, default_value_t = 1.0)]
    contrast: f64,

    /// Gamma correction (0.5-2.0)
    #[arg(short, long, default_value_t = 1.0)]
    gamma: f64,

    /// Brightness adjustment (-0.5 to 0.5)
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    brightness: f64,

    /// Log decoding and rendering details to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            invert: self.invert,
            detailed: self.detailed,
            contrast: self.contrast,
            gamma: self.gamma,
            brightness: self.brightness,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Configure logging
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(&cli, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Validate, decode, render and write, in that order
///
/// Nothing is written until the whole grid has been rendered.
fn run(cli: &Cli, stdout: &mut impl Write) -> Result<()> {
    let ascii = render_path(&cli.image, &cli.render_config())?;

    match &cli.output {
        Some(path) => {
            write_output(path, &ascii)?;
            info!("wrote {} bytes to {}", ascii.len(), path.display());
            writeln!(stdout, "ASCII art saved to {}", path.display())?;
        }
        None => {
            stdout.write_all(ascii.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn write_output(path: &Path, ascii: &str) -> Result<()> {
    std::fs::write(path, ascii).with_context(|| format!("error writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("img2ascii").chain(args.iter().copied())).unwrap()
    }

    /// 2x3 image, left column black and right column white
    fn write_test_png(dir: &Path) -> PathBuf {
        let mut img = RgbaImage::new(2, 3);
        for y in 0..3 {
            img.put_pixel(0, y, Rgba([0, 0, 0, 255]));
            img.put_pixel(1, y, Rgba([255, 255, 255, 255]));
        }
        let path = dir.join("split.png");
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["photo.png"]);
        assert_eq!(cli.render_config(), RenderConfig::default());
        assert_eq!(cli.image, PathBuf::from("photo.png"));
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_short_flags() {
        let cli = parse(&[
            "-w", "120", "-i", "-d", "-c", "1.5", "-g", "0.8", "-b", "-0.2", "-o", "out.txt",
            "in.webp",
        ]);
        let config = cli.render_config();
        assert_eq!(config.width, 120);
        assert!(config.invert);
        assert!(config.detailed);
        assert_eq!(config.contrast, 1.5);
        assert_eq!(config.gamma, 0.8);
        assert_eq!(config.brightness, -0.2);
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_long_flags() {
        let cli = parse(&[
            "--width", "40", "--invert", "--detailed", "--contrast", "2", "--gamma", "1.2",
            "--brightness", "0.1", "--output", "o.txt", "in.jpg",
        ]);
        let config = cli.render_config();
        assert_eq!(config.width, 40);
        assert!(config.invert && config.detailed);
        assert_eq!(config.brightness, 0.1);
    }

    #[test]
    fn test_missing_image_is_rejected() {
        assert!(Cli::try_parse_from(["img2ascii"]).is_err());
        assert!(Cli::try_parse_from(["img2ascii", "a.png", "b.png"]).is_err());
    }

    #[test]
    fn test_out_of_range_width_fails_before_decoding() {
        let cli = parse(&["-w", "5", "missing.png"]);
        let mut stdout: Vec<u8> = Vec::new();
        let err = run(&cli, &mut stdout).unwrap_err();
        assert!(err.to_string().contains("width should be between 10 and 300"));
        assert!(stdout.is_empty());
    }

    #[test]
    fn test_out_of_range_gamma() {
        let cli = parse(&["-g", "2.5", "missing.png"]);
        let err = run(&cli, &mut Vec::<u8>::new()).unwrap_err();
        assert!(err.to_string().contains("gamma"));
    }

    #[test]
    fn test_missing_file() {
        let cli = parse(&["definitely-missing.png"]);
        let err = run(&cli, &mut Vec::<u8>::new()).unwrap_err();
        assert!(err.to_string().contains("error opening"));
    }

    #[test]
    fn test_undecodable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"not an image").unwrap();

        let cli = parse(&[path.to_str().unwrap()]);
        let err = run(&cli, &mut Vec::<u8>::new()).unwrap_err();
        assert!(err.to_string().contains("error decoding"));
    }

    #[test]
    fn test_render_to_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_png(dir.path());

        // 3/2 * 10 * 0.45 = 6.75 -> 6 rows of 10
        let cli = parse(&["-w", "10", path.to_str().unwrap()]);
        let mut stdout: Vec<u8> = Vec::new();
        run(&cli, &mut stdout).unwrap();

        let text = String::from_utf8(stdout).unwrap();
        assert_eq!(text.lines().count(), 6);
        assert!(text.lines().all(|line| line == "     @@@@@"));
        assert!(text.ends_with("@\n"));
    }

    #[test]
    fn test_render_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_png(dir.path());
        let out = dir.path().join("art.txt");

        let cli = parse(&[
            "-w",
            "10",
            "-i",
            "-o",
            out.to_str().unwrap(),
            path.to_str().unwrap(),
        ]);
        let mut stdout: Vec<u8> = Vec::new();
        run(&cli, &mut stdout).unwrap();

        let saved = std::fs::read_to_string(&out).unwrap();
        assert!(saved.lines().all(|line| line == "@@@@@     "));
        assert_eq!(
            String::from_utf8(stdout).unwrap(),
            format!("ASCII art saved to {}\n", out.display())
        );
    }

    #[test]
    fn test_unwritable_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_png(dir.path());
        let out = dir.path().join("no-such-dir").join("art.txt");

        let cli = parse(&["-o", out.to_str().unwrap(), path.to_str().unwrap()]);
        let mut stdout: Vec<u8> = Vec::new();
        let err = run(&cli, &mut stdout).unwrap_err();
        assert!(err.to_string().contains("error writing"));
        assert!(stdout.is_empty());
    }
}
