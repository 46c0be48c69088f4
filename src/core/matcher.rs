use thiserror::Error;

use crate::core::normalize::SkillSet;
use crate::core::reciprocity::{exchange, is_reciprocal_match, Exchange};
use crate::models::Profile;

/// Profile fields the matcher needs from a seeker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    KnownSkills,
    WantToLearn,
}

impl ProfileField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::KnownSkills => "knownSkills",
            ProfileField::WantToLearn => "wantToLearn",
        }
    }
}

impl std::fmt::Display for ProfileField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that stop matching before any candidate is examined
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("Incomplete profile: {missing} is empty")]
    IncompleteProfile { missing: ProfileField },
}

/// A seeker's normalized skills, computed once per request
#[derive(Debug, Clone)]
pub struct SeekerSkills<'a> {
    email: &'a str,
    knows: SkillSet,
    wants: SkillSet,
}

impl<'a> SeekerSkills<'a> {
    /// Normalize the seeker and check both skill fields are usable
    ///
    /// Text that normalizes to nothing (blank, only commas) counts as missing.
    pub fn from_profile(seeker: &'a Profile) -> Result<Self, MatchError> {
        let knows = seeker.known_set();
        if knows.is_empty() {
            return Err(MatchError::IncompleteProfile {
                missing: ProfileField::KnownSkills,
            });
        }

        let wants = seeker.wants_set();
        if wants.is_empty() {
            return Err(MatchError::IncompleteProfile {
                missing: ProfileField::WantToLearn,
            });
        }

        Ok(Self {
            email: &seeker.email,
            knows,
            wants,
        })
    }

    pub fn knows(&self) -> &SkillSet {
        &self.knows
    }

    pub fn wants(&self) -> &SkillSet {
        &self.wants
    }

    pub fn is_self(&self, candidate: &Profile) -> bool {
        candidate.email == self.email
    }

    /// Apply the reciprocity predicate to one candidate
    ///
    /// Self-exclusion is not applied here; see [`SeekerSkills::accepts`].
    #[inline]
    pub fn matches(&self, candidate: &Profile) -> bool {
        is_reciprocal_match(
            &self.knows,
            &self.wants,
            &candidate.known_set(),
            &candidate.wants_set(),
        )
    }

    /// Self-exclusion followed by the reciprocity predicate
    #[inline]
    pub fn accepts(&self, candidate: &Profile) -> bool {
        !self.is_self(candidate) && self.matches(candidate)
    }

    /// Lazily yield the candidates this seeker accepts, in input order
    pub fn matches_in<'s, 'c>(
        &'s self,
        candidates: &'c [Profile],
    ) -> impl Iterator<Item = &'c Profile> + 's
    where
        'c: 's,
    {
        candidates.iter().filter(move |candidate| self.accepts(candidate))
    }

    /// Overlap between the seeker and a candidate in both directions
    pub fn exchange_with(&self, candidate: &Profile) -> Exchange {
        exchange(
            &self.knows,
            &self.wants,
            &candidate.known_set(),
            &candidate.wants_set(),
        )
    }
}

/// Lazily yield every candidate that reciprocally matches the seeker
///
/// Validation happens up front, so an incomplete seeker fails before the
/// iterator touches a single candidate. The seeker's own profile is always
/// skipped.
pub fn matching_candidates<'a>(
    seeker: &'a Profile,
    candidates: &'a [Profile],
) -> Result<impl Iterator<Item = &'a Profile> + 'a, MatchError> {
    let skills = SeekerSkills::from_profile(seeker)?;

    Ok(candidates
        .iter()
        .filter(move |candidate| skills.accepts(candidate)))
}

/// Find every reciprocal match for a seeker, preserving candidate order
///
/// # Arguments
/// * `seeker` - The profile looking for an exchange partner
/// * `candidates` - Materialized candidate list, possibly including the seeker
///
/// # Returns
/// References into `candidates`; an empty list is a normal outcome
pub fn find_matches<'a>(
    seeker: &'a Profile,
    candidates: &'a [Profile],
) -> Result<Vec<&'a Profile>, MatchError> {
    Ok(matching_candidates(seeker, candidates)?.collect())
}
