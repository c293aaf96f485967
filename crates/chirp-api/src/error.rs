use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use chirp_service::ServiceError;
use tracing::{debug, error};

/// Maps a service failure to the status the HTTP contract promises.
pub fn status_for(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::Validation(e) => {
            debug!("Rejected request: {}", e);
            StatusCode::BAD_REQUEST
        }
        ServiceError::Conflict => StatusCode::CONFLICT,
        ServiceError::Auth(e) => {
            debug!("Authentication failed: {}", e);
            StatusCode::UNAUTHORIZED
        }
        // Only message update reports NotFound, and it answers 400 for any failure.
        ServiceError::NotFound(_) => StatusCode::BAD_REQUEST,
        ServiceError::Credential(_) | ServiceError::Store(_) => {
            error!("Request failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Malformed JSON, wrong field types and a missing content type all answer 400.
pub fn bad_body(rejection: JsonRejection) -> StatusCode {
    debug!("Rejected request body: {}", rejection.body_text());
    StatusCode::BAD_REQUEST
}
