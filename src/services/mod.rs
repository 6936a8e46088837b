use thiserror::Error;

use crate::forms::ValidationReport;
use crate::repository::errors::RepositoryError;

pub mod api;

/// Errors surfaced by the service layer to the transport.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid request: {0}")]
    Validation(ValidationReport),

    #[error("{0} not found")]
    NotFound(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
