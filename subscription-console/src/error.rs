use crate::forms::{self, FormError};
use crate::services::ApiError;
use crate::views::htmx::toast_redirect;
use crate::views::ToastTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use validator::ValidationErrors;

/// Failure of a console request, rendered as an error toast.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("{}", forms::describe(.0))]
    Validation(ValidationErrors),

    #[error("{0}")]
    InvalidForm(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<FormError> for ConsoleError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Fields(errors) => ConsoleError::Validation(errors),
            other => ConsoleError::InvalidForm(other.to_string()),
        }
    }
}

impl ConsoleError {
    pub fn status(&self) -> StatusCode {
        match self {
            ConsoleError::Api(ApiError::Rejected(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ConsoleError::Api(ApiError::Transport(_)) => StatusCode::BAD_GATEWAY,
            ConsoleError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ConsoleError::InvalidForm(_) => StatusCode::BAD_REQUEST,
            ConsoleError::NotFound(_) => StatusCode::NOT_FOUND,
            ConsoleError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text shown to the operator.
    pub fn user_message(&self) -> String {
        match self {
            ConsoleError::Internal(_) => "Something went wrong, please retry".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ConsoleError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Console request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "Console request rejected");
        }

        (
            status,
            toast_redirect(),
            ToastTemplate::error(self.user_message()),
        )
            .into_response()
    }
}
