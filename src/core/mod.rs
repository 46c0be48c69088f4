// Core algorithm exports
pub mod browse;
pub mod filters;
pub mod matcher;
pub mod normalize;
pub mod reciprocity;

pub use browse::{browse, Browse};
pub use filters::{filter_profiles, search, LocationFilter, SearchQuery, ALL_LOCATIONS};
pub use matcher::{find_matches, matching_candidates, MatchError, ProfileField, SeekerSkills};
pub use normalize::{normalize, SkillSet};
pub use reciprocity::{exchange, intersects, is_reciprocal_match, Exchange};
