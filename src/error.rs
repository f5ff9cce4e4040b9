//! Crate-level error type.
//!
//! Only configuration validation and spectral-source I/O can fail. The
//! synchronization and simulation core never errors: parsing degrades to
//! fewer cues, index lookup yields `None`, and a missing spectral source
//! leaves the session idling at zero energy.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A parameter struct failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Reading or decoding a WAV file failed.
    #[error("audio decode error: {0}")]
    Audio(#[from] hound::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
