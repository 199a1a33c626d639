use std::path::PathBuf;

/// Errors surfaced by the dataset provider, the training engine and the
/// export / config helpers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested dataset name is not one of the built-ins.
    #[error("unknown dataset `{name}`")]
    UnknownDataset { name: String },
    /// A caller-supplied parameter is out of range (non-positive learning
    /// rate or animation speed, zero max epochs, empty dataset).
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: String },
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(name: &'static str, value: impl ToString) -> Self {
        Error::InvalidParameter { name, value: value.to_string() }
    }
}

/// Returns `value` if it is finite and strictly positive.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::invalid(name, value))
    }
}
