use std::path::PathBuf;

/// A rendering parameter outside its accepted range
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("width should be between 10 and 300 characters, got {0}")]
    Width(u32),

    #[error("contrast should be between 0.5 and 3.0, got {0}")]
    Contrast(f64),

    #[error("gamma should be between 0.5 and 2.0, got {0}")]
    Gamma(f64),

    #[error("brightness should be between -0.5 and 0.5, got {0}")]
    Brightness(f64),
}

/// Errors raised at the boundary of the pipeline (configuration, file access, decoding)
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("error opening {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error decoding {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
