use serde::{Deserialize, Serialize};

use crate::core::normalize::SkillSet;

/// What each side of a match brings to the exchange
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    /// Skills the candidate knows and the seeker wants
    pub teaches: Vec<String>,
    /// Skills the seeker knows and the candidate wants
    pub learns: Vec<String>,
}

impl Exchange {
    /// Both directions overlap; agrees with [`is_reciprocal_match`]
    pub fn is_reciprocal(&self) -> bool {
        !self.teaches.is_empty() && !self.learns.is_empty()
    }
}

/// True iff the two sets share at least one exact token
#[inline]
pub fn intersects(a: &SkillSet, b: &SkillSet) -> bool {
    a.intersects(b)
}

/// Reciprocity predicate
///
/// The candidate must be able to teach something the seeker wants AND want
/// something the seeker knows. An empty set on either side never matches.
#[inline]
pub fn is_reciprocal_match(
    seeker_knows: &SkillSet,
    seeker_wants: &SkillSet,
    candidate_knows: &SkillSet,
    candidate_wants: &SkillSet,
) -> bool {
    intersects(candidate_knows, seeker_wants) && intersects(candidate_wants, seeker_knows)
}

/// Overlap in both directions, used to explain a match
pub fn exchange(
    seeker_knows: &SkillSet,
    seeker_wants: &SkillSet,
    candidate_knows: &SkillSet,
    candidate_wants: &SkillSet,
) -> Exchange {
    Exchange {
        teaches: candidate_knows.intersection(seeker_wants),
        learns: candidate_wants.intersection(seeker_knows),
    }
}
