use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::closer_models::CompletionResponse;

/// Failures of the closer endpoint.
///
/// Each variant's message is what the caller sees in `output`.
#[derive(Error, Debug)]
pub enum CloserError {
    #[error("No input provided.")]
    BadRequest,
    #[error("OpenAI API key not set.")]
    Configuration,
    #[error("Error contacting OpenAI.")]
    Upstream(#[from] reqwest::Error),
}

impl CloserError {
    pub fn status(&self) -> StatusCode {
        match self {
            CloserError::BadRequest => StatusCode::BAD_REQUEST,
            CloserError::Configuration | CloserError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CloserError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(CompletionResponse { output: self.to_string() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_error_kind() {
        assert_eq!(CloserError::BadRequest.status(), StatusCode::BAD_REQUEST);
        assert_eq!(CloserError::Configuration.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn messages_are_the_user_facing_fallbacks() {
        assert_eq!(CloserError::BadRequest.to_string(), "No input provided.");
        assert_eq!(CloserError::Configuration.to_string(), "OpenAI API key not set.");
    }
}
