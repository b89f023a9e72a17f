//! Error types

use forkparams::ParamsError;
use thiserror::Error;

/// Errors a command can report before exiting
#[derive(Debug, Error)]
pub enum Error {
    /// Loading or parsing a parameter set failed
    #[error("{0}")]
    Params(#[from] ParamsError),
    /// Rendering output failed
    #[error("error serializing output: {0}")]
    Serialization(#[from] serde_json::Error),
}
