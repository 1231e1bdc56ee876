use crate::options::ConfigError;
use thiserror::Error;

/// Top-level error type for the optfile library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("options error: {0}")]
    Config(#[from] ConfigError),

    #[error("application context requires an options store")]
    MissingOptions,
}
