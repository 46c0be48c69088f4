use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::models::{Profile, ProfileRecord};
use crate::routes::{postgres_error, validation_error, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/profiles/{email}", web::get().to(get_profile))
        .route("/profiles", web::post().to(upsert_profile));
}

/// GET /api/v1/profiles/{email}
async fn get_profile(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let email = path.into_inner();

    match state.postgres.get_profile(&email).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => postgres_error("Failed to fetch profile", e),
    }
}

/// Create or update a profile
///
/// POST /api/v1/profiles
///
/// Accepts any known profile document shape (see [`ProfileRecord`]) and
/// returns the stored canonical profile.
async fn upsert_profile(
    state: web::Data<AppState>,
    req: web::Json<ProfileRecord>,
) -> HttpResponse {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let profile = Profile::from(req.into_inner());

    match state.postgres.upsert_profile(&profile).await {
        Ok(stored) => {
            tracing::info!("Saved profile for {}", stored.email);
            HttpResponse::Ok().json(stored)
        }
        Err(e) => postgres_error("Failed to save profile", e),
    }
}
