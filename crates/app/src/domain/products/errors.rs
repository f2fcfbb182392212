//! Products service errors.

use std::num::TryFromIntError;

use catalog::products::ProductError;
use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product not found")]
    NotFound,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error(transparent)]
    Invalid(#[from] ProductError),

    #[error("storage error")]
    Sql(#[source] Error),

    #[error("invalid quantity value")]
    InvalidQuantity(#[from] TryFromIntError),
}

impl ProductsServiceError {
    /// Whether the error was caused by the submitted data rather than by the store.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Invalid(_) | Self::InvalidData | Self::MissingRequiredData
        )
    }
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
