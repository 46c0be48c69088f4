use crate::core::filters::{filter_profiles, SearchQuery};
use crate::core::matcher::{find_matches, MatchError};
use crate::models::Profile;

/// Which listing the caller wants
///
/// The two modes are exclusive: search results are never intersected with
/// reciprocal matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Browse {
    Match,
    Search(SearchQuery),
}

/// Run exactly one of the matcher or the search filter
///
/// Search mode ignores the seeker and cannot fail.
pub fn browse<'a>(
    mode: &Browse,
    seeker: &'a Profile,
    candidates: &'a [Profile],
) -> Result<Vec<&'a Profile>, MatchError> {
    match mode {
        Browse::Match => find_matches(seeker, candidates),
        Browse::Search(query) => Ok(filter_profiles(candidates, query)),
    }
}
