use poem::{Response, error::ResponseError, http::StatusCode};

use crate::domain::errors::DomainError;

impl ResponseError for DomainError {
    fn status(&self) -> StatusCode {
        match self {
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
            DomainError::Unauthorized => StatusCode::UNAUTHORIZED,
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn as_response(&self) -> Response {
        let message = match self {
            DomainError::NotFound(_) => "Not found".to_string(),
            DomainError::Forbidden(_) => "Forbidden".to_string(),
            DomainError::Unauthorized => "Unauthorized".to_string(),
            DomainError::Validation(reason) => reason.clone(),
            DomainError::Other(err) => {
                tracing::error!(error = ?err, "request failed");
                "Internal server error".to_string()
            }
        };

        Response::builder()
            .status(self.status())
            .content_type("application/json")
            .body(serde_json::json!({ "error": message }).to_string())
    }
}
