//! Types d'erreurs pour mvpresets

/// Erreurs du stockage des presets
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Preset not found: {0}")]
    NotFound(String),

    #[error("Invalid preset name: {0:?}")]
    InvalidName(String),

    #[error("Malformed preset file: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Type Result spécialisé pour mvpresets
pub type Result<T> = std::result::Result<T, Error>;
