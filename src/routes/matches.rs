use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{browse, filter_profiles, SeekerSkills};
use crate::models::{
    FindMatchesRequest, FindMatchesResponse, HealthResponse, MatchedProfile, Profile,
    ProfileListResponse, SearchRequest, SuggestionsRequest,
};
use crate::routes::{match_error, postgres_error, validation_error, AppState};

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/profiles/search", web::post().to(search_profiles))
        .route("/suggestions", web::post().to(suggestions));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let pg_healthy = state.postgres.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find reciprocal matches
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// { "email": "string" }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> HttpResponse {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return validation_error(errors);
    }

    let email = &req.email;
    tracing::info!("Finding matches for user: {}", email);

    let seeker = match state.postgres.get_profile(email).await {
        Ok(profile) => profile,
        Err(e) => return postgres_error("Failed to fetch seeker profile", e),
    };

    // Fail before loading candidates when the seeker cannot be matched
    let skills = match SeekerSkills::from_profile(&seeker) {
        Ok(skills) => skills,
        Err(e) => {
            tracing::info!("Seeker {} has an incomplete profile: {}", email, e);
            return match_error(e);
        }
    };

    let candidates = match state.postgres.list_profiles().await {
        Ok(candidates) => candidates,
        Err(e) => return postgres_error("Failed to load candidates", e),
    };

    let matches: Vec<MatchedProfile> = skills
        .matches_in(&candidates)
        .map(|candidate| {
            let exchange = skills.exchange_with(candidate);
            debug_assert!(exchange.is_reciprocal(), "accepted {} without overlap", candidate.email);
            MatchedProfile {
                exchange,
                profile: candidate.clone(),
            }
        })
        .collect();
    let total_matches = matches.len();

    let response = FindMatchesResponse {
        matches: state.bounded(matches),
        total_matches,
        total_candidates: candidates.len(),
    };

    tracing::info!(
        "Returning {} matches for user {} (from {} candidates)",
        response.matches.len(),
        email,
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}

/// Plain-text profile search
///
/// POST /api/v1/profiles/search
///
/// Request body:
/// ```json
/// { "query": "string", "wants": "string", "location": "All" }
/// ```
async fn search_profiles(
    state: web::Data<AppState>,
    req: web::Json<SearchRequest>,
) -> HttpResponse {
    let candidates = match state.postgres.list_profiles().await {
        Ok(candidates) => candidates,
        Err(e) => return postgres_error("Failed to load candidates", e),
    };

    let results = filter_profiles(&candidates, &req.to_query());

    tracing::debug!(
        "Search {:?} matched {} of {} profiles",
        req.query,
        results.len(),
        candidates.len()
    );

    HttpResponse::Ok().json(list_response(&state, results))
}

/// Suggestions page: reciprocal matches or search results
///
/// POST /api/v1/suggestions
///
/// Request body:
/// ```json
/// { "email": "string", "mode": "match|search", "query": "string", "wants": "string", "location": "All" }
/// ```
async fn suggestions(
    state: web::Data<AppState>,
    req: web::Json<SuggestionsRequest>,
) -> HttpResponse {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    // Search mode lists profiles for anyone, known seeker or not
    let seeker = match req.seeker_email() {
        Some(email) => match state.postgres.get_profile(email).await {
            Ok(profile) => Some(profile),
            Err(e) => return postgres_error("Failed to fetch seeker profile", e),
        },
        None => None,
    };

    let candidates = match state.postgres.list_profiles().await {
        Ok(candidates) => candidates,
        Err(e) => return postgres_error("Failed to load candidates", e),
    };

    let outcome = match &seeker {
        Some(seeker) => browse(&req.to_browse(), seeker, &candidates),
        None => Ok(filter_profiles(&candidates, &req.search.to_query())),
    };

    match outcome {
        Ok(results) => {
            tracing::info!(
                "Returning {} {:?} suggestions for user {}",
                results.len(),
                req.mode,
                req.email
            );
            HttpResponse::Ok().json(list_response(&state, results))
        }
        Err(e) => match_error(e),
    }
}

fn list_response(state: &AppState, results: Vec<&Profile>) -> ProfileListResponse {
    let total_results = results.len();
    let profiles = state.bounded(results).into_iter().cloned().collect();

    ProfileListResponse {
        profiles,
        total_results,
    }
}
