//! Error types for the carousel library.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by the carousel.
#[derive(Error, Debug)]
pub enum CarouselError {
    /// The host supplied no renderable panels.
    #[error("carousel needs at least one renderable panel")]
    NoPanels,

    /// A selection targeted a panel that does not exist.
    #[error("panel {index} is out of range for {count} panels")]
    PanelOutOfRange {
        /// Requested panel.
        index: usize,
        /// Number of panels available.
        count: usize,
    },

    /// A configuration value is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::CarouselConfig`].
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type for carousel operations.
pub type Result<T> = std::result::Result<T, CarouselError>;
