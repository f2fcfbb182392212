//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::error;

/// Map errors to HTTP errors.
pub(crate) trait ResultExt<T> {
    /// Logs the error and answers with an internal server error.
    fn or_500(self, context: &str) -> Result<T, StatusError>;

    /// Answers with a bad request carrying `context` and the error message.
    fn or_400(self, context: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error()
        })
    }

    fn or_400(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| StatusError::bad_request().brief(format!("{context}: {error}")))
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn or_400_keeps_the_message() {
        let result: Result<(), StatusError> = Err::<(), _>("bad digit").or_400("invalid price");

        let error = result.err();

        assert_eq!(error.as_ref().map(|e| e.code), Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            error.map(|e| e.brief),
            Some("invalid price: bad digit".to_string())
        );
    }

    #[test]
    fn or_500_hides_the_message() {
        let result: Result<(), StatusError> = Err::<(), _>("connection reset").or_500("failed");

        assert_eq!(
            result.err().map(|e| e.code),
            Some(StatusCode::INTERNAL_SERVER_ERROR)
        );
    }
}
