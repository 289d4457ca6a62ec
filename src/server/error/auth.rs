use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer credential was supplied with the request.
    ///
    /// The `Authorization` header (or the `token` query parameter for WebSocket
    /// connections) is missing. Results in a 401 Unauthorized response.
    #[error("Missing bearer credential")]
    MissingCredentials,

    /// The supplied bearer credential could not be verified.
    ///
    /// The token is malformed, has an invalid signature, or is expired.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid bearer credential: {0}")]
    InvalidCredentials(String),

    /// The credential resolved to a user id that no longer exists.
    ///
    /// Results in a 404 Not Found response with a generic "User not found" message.
    #[error("User {0} from credential not found in database")]
    UserNotInDatabase(i32),

    /// The user attempted an action they are not permitted to perform.
    ///
    /// Carries the user id and a server-side description of the denied action.
    /// Results in a 403 Forbidden response with a generic message.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-facing error
/// messages. Detailed failure reasons are logged server-side while client-facing
/// messages stay generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - For missing or invalid credentials
/// - 403 Forbidden - For denied actions
/// - 404 Not Found - For users missing from the database
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingCredentials | Self::InvalidCredentials(_) => {
                tracing::debug!("{}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Authentication required".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::UserNotInDatabase(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "User not found".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(user_id, ref reason) => {
                tracing::debug!("Access denied for user {}: {}", user_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You are not allowed to perform this action".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
