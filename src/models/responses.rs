use serde::{Deserialize, Serialize};

use crate::core::Exchange;
use crate::models::domain::Profile;

/// A matched profile together with what the two users can trade
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedProfile {
    #[serde(flatten)]
    pub profile: Profile,
    pub exchange: Exchange,
}

/// Response for find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub matches: Vec<MatchedProfile>,
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for search and suggestion listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileListResponse {
    pub profiles: Vec<Profile>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// A user's stored connections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionsResponse {
    pub email: String,
    pub connections: Vec<Profile>,
    pub count: usize,
}

/// Result of removing a connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveConnectionResponse {
    pub removed: bool,
    pub count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
