use thiserror::Error;

use crate::generator::LoaderError;

/// Main error type for ApiGen
#[derive(Error, Debug)]
pub enum ApiGenError {
    #[error("Loader error: {0}")]
    LoaderError(#[from] LoaderError),

    #[error("Element not found: {0}")]
    ElementNotFound(String),
}
