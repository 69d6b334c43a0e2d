//! Error types for Folio.
use std::fmt::{self, Debug, Formatter};
use std::path::PathBuf;
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Errors returned from main are printed with Debug, show the readable message instead.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

/// Errors that can happen while loading [`SiteOptions`](crate::options::SiteOptions).
///
/// Rendering itself never fails, every input maps to some markup.
#[derive(Error)]
pub enum ConfigError {
    #[error("Failed to read options file: {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse options: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid root path `{path}`, it must start with `/`")]
    InvalidRootPath { path: String },

    #[error("Invalid typography option `{field}`: expected a positive number, got {value}")]
    InvalidTypography { field: &'static str, value: f64 },
}

impl_debug_for_error!(ConfigError);
