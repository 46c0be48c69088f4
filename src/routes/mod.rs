// Route exports
pub mod connections;
pub mod matches;
pub mod profiles;

use actix_web::{http::StatusCode, web, HttpResponse};
use std::sync::Arc;

use crate::core::MatchError;
use crate::models::ErrorResponse;
use crate::services::{PostgresClient, PostgresError, SessionError, SessionStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
    pub sessions: Arc<SessionStore>,
    /// Presentation bound on listed profiles; the core itself never limits
    pub max_results: Option<usize>,
}

impl AppState {
    /// Apply the configured presentation bound to a result list
    pub fn bounded<T>(&self, mut items: Vec<T>) -> Vec<T> {
        if let Some(max) = self.max_results {
            items.truncate(max);
        }
        items
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure)
            .configure(profiles::configure)
            .configure(connections::configure),
    );
}

/// Build a JSON error response
pub fn error_response(status: StatusCode, error: &str, message: impl ToString) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message: message.to_string(),
        status_code: status.as_u16(),
    })
}

pub fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    error_response(StatusCode::BAD_REQUEST, "Validation failed", errors)
}

/// Incomplete seeker profiles are user-correctable, hence 422
pub fn match_error(err: MatchError) -> HttpResponse {
    match err {
        MatchError::IncompleteProfile { .. } => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, "incomplete_profile", err)
        }
    }
}

pub fn postgres_error(context: &str, err: PostgresError) -> HttpResponse {
    match err {
        PostgresError::NotFound(message) => {
            error_response(StatusCode::NOT_FOUND, "Profile not found", message)
        }
        err => {
            tracing::error!("{}: {}", context, err);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, context, err)
        }
    }
}

pub fn session_error(context: &str, err: SessionError) -> HttpResponse {
    tracing::error!("{}: {}", context, err);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, context, err)
}
