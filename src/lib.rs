//! SkillXchange - reciprocal skill-exchange matching service
//!
//! This library provides the matching core used by SkillXchange: skill text
//! normalization, the reciprocity predicate, reciprocal match finding and the
//! plain-text search filter, plus the HTTP service that wraps them.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    browse, filter_profiles, find_matches, is_reciprocal_match, normalize, search, Browse,
    LocationFilter, MatchError, SearchQuery, SkillSet,
};
pub use models::{Profile, ProfileRecord, SkillList};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let set = normalize(Some("Rust, rust"));
        assert_eq!(set.len(), 1);
        assert_eq!(LocationFilter::parse("All"), LocationFilter::Any);
    }
}
