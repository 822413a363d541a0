//! Error type for conversion and configuration failures.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Everything that can go wrong while converting a note or handling config.
///
/// The CLI collapses all of these into a single generic user notice; the
/// specific variant only reaches the developer log.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Reading the source note failed.
    #[error("failed to read note {path}: {source}")]
    NoteRead {
        /// Path of the note that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Creating the output bundle directory failed.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Writing the converted document failed.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Copying a referenced image into the bundle failed.
    #[error("failed to copy image {from} to {to}: {source}")]
    ImageCopy {
        /// Source path of the image.
        from: PathBuf,
        /// Destination path inside the bundle.
        to: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Reading the config file failed.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Writing the config file failed.
    #[error("failed to write config {path}: {source}")]
    ConfigWrite {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file exists but is not valid TOML.
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// The config could not be serialized (should not happen in practice).
    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// No config directory could be determined for this platform.
    #[error("could not determine config directory")]
    NoConfigDir,
}
