use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::{Browse, LocationFilter, SearchQuery, ALL_LOCATIONS};

/// Request to find reciprocal matches
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(email)]
    pub email: String,
}

/// Request for a plain-text profile search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default, alias = "search")]
    pub query: String,
    #[serde(default)]
    pub wants: String,
    #[serde(default = "default_location")]
    pub location: String,
}

fn default_location() -> String {
    ALL_LOCATIONS.to_string()
}

impl SearchRequest {
    pub fn to_query(&self) -> SearchQuery {
        SearchQuery {
            name_or_skill: self.query.clone(),
            wants: self.wants.clone(),
            location: LocationFilter::parse(&self.location),
        }
    }
}

/// Listing mode requested by the suggestions page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowseMode {
    Match,
    Search,
}

/// Request for the suggestions page: match mode or search mode, never both
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SuggestionsRequest {
    #[validate(email)]
    pub email: String,
    pub mode: BrowseMode,
    #[serde(flatten)]
    pub search: SearchRequest,
}

impl SuggestionsRequest {
    pub fn to_browse(&self) -> Browse {
        match self.mode {
            BrowseMode::Match => Browse::Match,
            BrowseMode::Search => Browse::Search(self.search.to_query()),
        }
    }

    /// Email whose profile must be loaded; search mode never reads it
    pub fn seeker_email(&self) -> Option<&str> {
        match self.mode {
            BrowseMode::Match => Some(self.email.as_str()),
            BrowseMode::Search => None,
        }
    }
}

/// Request to add or remove a connection
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConnectionRequest {
    #[validate(email)]
    pub email: String,
    #[validate(email)]
    #[serde(alias = "target_email", rename = "targetEmail")]
    pub target_email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request_defaults_to_all_locations() {
        let req: SearchRequest = serde_json::from_str(r#"{"query": "java"}"#).unwrap();

        assert_eq!(req.location, "All");
        assert_eq!(req.to_query().location, LocationFilter::Any);
    }

    #[test]
    fn test_suggestions_request_modes() {
        let matching: SuggestionsRequest =
            serde_json::from_str(r#"{"email": "a@mail.com", "mode": "match", "query": "x"}"#).unwrap();
        let searching: SuggestionsRequest = serde_json::from_str(
            r#"{"email": "a@mail.com", "mode": "search", "query": "java", "location": "Pune"}"#,
        )
        .unwrap();

        assert_eq!(matching.to_browse(), Browse::Match);
        assert_eq!(
            searching.to_browse(),
            Browse::Search(SearchQuery::new("java", "", "Pune"))
        );
    }

    #[test]
    fn test_only_match_mode_needs_seeker_profile() {
        let matching: SuggestionsRequest =
            serde_json::from_str(r#"{"email": "a@mail.com", "mode": "match"}"#).unwrap();
        let searching: SuggestionsRequest =
            serde_json::from_str(r#"{"email": "ghost@mail.com", "mode": "search", "query": "java"}"#)
                .unwrap();

        assert_eq!(matching.seeker_email(), Some("a@mail.com"));
        assert_eq!(searching.seeker_email(), None);
    }

    #[test]
    fn test_connection_request_validation() {
        let req = ConnectionRequest {
            email: "a@mail.com".to_string(),
            target_email: "nope".to_string(),
        };

        assert!(req.validate().is_err());
    }
}
