use thiserror::Error;

use crate::ConfigError;

/// Unified error type covering rule deserialization, validation, and I/O.
///
/// Returned by convenience constructors like
/// [`Engine::from_json()`](crate::Engine::from_json) and
/// [`Engine::from_file()`](crate::Engine::from_file).
#[derive(Debug, Error)]
pub enum GavelError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
