//! Result helper extensions for HTTP handlers.

use std::error::Error;

use tracing::error;

use crate::errors::ApiError;

/// Map any error to a logged internal server error.
///
/// The error and its full source chain are logged, never echoed to the client.
pub(crate) trait ResultExt<T> {
    fn or_500(self, message: &str) -> Result<T, ApiError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Error,
{
    fn or_500(self, message: &str) -> Result<T, ApiError> {
        self.map_err(|error| {
            error!("{message}: {}", error_chain(&error));

            ApiError::internal_server_error(message)
        })
    }
}

/// Join an error with each of its sources, outermost first.
pub(crate) fn error_chain(error: &dyn Error) -> String {
    let mut chain = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }

    chain
}
