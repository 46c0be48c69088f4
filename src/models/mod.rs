// Model exports
pub mod domain;
pub mod records;
pub mod requests;
pub mod responses;

pub use domain::{Profile, SkillList};
pub use records::ProfileRecord;
pub use requests::{BrowseMode, ConnectionRequest, FindMatchesRequest, SearchRequest, SuggestionsRequest};
pub use responses::{
    ConnectionsResponse, ErrorResponse, FindMatchesResponse, HealthResponse, MatchedProfile,
    ProfileListResponse, RemoveConnectionResponse,
};
