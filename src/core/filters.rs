use serde::{Deserialize, Serialize};

use crate::models::Profile;

/// Location value that disables the location predicate
pub const ALL_LOCATIONS: &str = "All";

/// Location predicate for search mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LocationFilter {
    Any,
    Exactly(String),
}

impl LocationFilter {
    /// `"All"` matches every location, anything else is an exact match
    pub fn parse(value: &str) -> Self {
        if value == ALL_LOCATIONS {
            LocationFilter::Any
        } else {
            LocationFilter::Exactly(value.to_string())
        }
    }

    #[inline]
    pub fn matches(&self, location: &str) -> bool {
        match self {
            LocationFilter::Any => true,
            LocationFilter::Exactly(wanted) => wanted == location,
        }
    }
}

impl Default for LocationFilter {
    fn default() -> Self {
        LocationFilter::Any
    }
}

impl From<String> for LocationFilter {
    fn from(value: String) -> Self {
        LocationFilter::parse(&value)
    }
}

impl From<LocationFilter> for String {
    fn from(value: LocationFilter) -> Self {
        match value {
            LocationFilter::Any => ALL_LOCATIONS.to_string(),
            LocationFilter::Exactly(location) => location,
        }
    }
}

/// Plain-text search over candidate profiles
///
/// Unlike reciprocal matching this never normalizes skills into sets: it is
/// a case-insensitive substring filter on the raw fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    #[serde(default)]
    pub name_or_skill: String,
    #[serde(default)]
    pub wants: String,
    #[serde(default)]
    pub location: LocationFilter,
}

impl SearchQuery {
    pub fn new(name_or_skill: &str, wants: &str, location: &str) -> Self {
        Self {
            name_or_skill: name_or_skill.to_string(),
            wants: wants.to_string(),
            location: LocationFilter::parse(location),
        }
    }

    /// All three predicates ANDed
    pub fn matches(&self, profile: &Profile) -> bool {
        let name_or_skill = self.name_or_skill.to_lowercase();
        let wants = self.wants.to_lowercase();
        self.matches_lowered(profile, &name_or_skill, &wants)
    }

    #[inline]
    fn matches_lowered(&self, profile: &Profile, name_or_skill: &str, wants: &str) -> bool {
        matches_name_or_skill(profile, name_or_skill)
            && matches_wants(profile, wants)
            && self.location.matches(profile.location_str())
    }
}

/// Name or headline skill contains the (already lower-cased) query
#[inline]
pub fn matches_name_or_skill(profile: &Profile, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    profile.name.to_lowercase().contains(query)
        || profile
            .headline_skill
            .as_deref()
            .map(|skill| skill.to_lowercase().contains(query))
            .unwrap_or(false)
}

/// Raw "wants to learn" text contains the (already lower-cased) query
#[inline]
pub fn matches_wants(profile: &Profile, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    profile
        .want_to_learn
        .as_deref()
        .map(|wants| wants.to_lowercase().contains(query))
        .unwrap_or(false)
}

/// Filter candidates by a search query, preserving order
pub fn filter_profiles<'a>(candidates: &'a [Profile], query: &SearchQuery) -> Vec<&'a Profile> {
    // Lower-case the queries once rather than per candidate
    let name_or_skill = query.name_or_skill.to_lowercase();
    let wants = query.wants.to_lowercase();

    candidates
        .iter()
        .filter(|profile| query.matches_lowered(profile, &name_or_skill, &wants))
        .collect()
}

/// Positional form of [`filter_profiles`]
pub fn search<'a>(
    candidates: &'a [Profile],
    name_or_skill: &str,
    wants: &str,
    location: &str,
) -> Vec<&'a Profile> {
    filter_profiles(candidates, &SearchQuery::new(name_or_skill, wants, location))
}
