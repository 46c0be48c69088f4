use actix_web::{http::StatusCode, web, HttpResponse};
use validator::Validate;

use crate::models::{ConnectionRequest, ConnectionsResponse, RemoveConnectionResponse};
use crate::routes::{error_response, postgres_error, session_error, validation_error, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/connections", web::get().to(list_connections))
        .route("/connections", web::post().to(add_connection))
        .route("/connections", web::delete().to(remove_connection));
}

/// GET /api/v1/connections?email={email}
async fn list_connections(
    state: web::Data<AppState>,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> HttpResponse {
    let email = match query.get("email") {
        Some(email) => email,
        None => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "Missing email parameter",
                "email query parameter is required",
            );
        }
    };

    match state.sessions.connections(email).await {
        Ok(connections) => HttpResponse::Ok().json(ConnectionsResponse {
            email: email.clone(),
            count: connections.len(),
            connections,
        }),
        Err(e) => session_error("Failed to load connections", e),
    }
}

/// Connect with another profile
///
/// POST /api/v1/connections
///
/// Request body:
/// ```json
/// { "email": "string", "targetEmail": "string" }
/// ```
async fn add_connection(
    state: web::Data<AppState>,
    req: web::Json<ConnectionRequest>,
) -> HttpResponse {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    if req.email == req.target_email {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Invalid connection",
            "a profile cannot connect with itself",
        );
    }

    let target = match state.postgres.get_profile(&req.target_email).await {
        Ok(profile) => profile,
        Err(e) => return postgres_error("Failed to fetch target profile", e),
    };

    match state.sessions.add_connection(&req.email, target).await {
        Ok(connections) => {
            tracing::info!("{} connected with {}", req.email, req.target_email);
            HttpResponse::Ok().json(ConnectionsResponse {
                email: req.email.clone(),
                count: connections.len(),
                connections,
            })
        }
        Err(e) => session_error("Failed to store connection", e),
    }
}

/// DELETE /api/v1/connections
async fn remove_connection(
    state: web::Data<AppState>,
    req: web::Json<ConnectionRequest>,
) -> HttpResponse {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    match state
        .sessions
        .remove_connection(&req.email, &req.target_email)
        .await
    {
        Ok((removed, remaining)) => HttpResponse::Ok().json(RemoveConnectionResponse {
            removed,
            count: remaining.len(),
        }),
        Err(e) => session_error("Failed to remove connection", e),
    }
}
