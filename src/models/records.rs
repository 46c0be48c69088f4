use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::models::domain::{Profile, SkillList};

/// Profile document as clients and older stores send it
///
/// Field names drifted over time (`learn` / `wantToLearn`, `skills` /
/// `knownSkills`, `fullName` / `name`, `about` / `bio`) and known skills may
/// be a string or an array. Everything is folded into [`Profile`] here so the
/// matching core only sees one shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProfileRecord {
    #[validate(email)]
    #[serde(deserialize_with = "trimmed")]
    pub email: String,
    #[validate(length(min = 1))]
    #[serde(alias = "fullName", alias = "full_name", default)]
    pub name: String,
    #[serde(alias = "skill", alias = "headline_skill", rename = "headlineSkill", default)]
    pub headline_skill: Option<String>,
    #[serde(alias = "skills", alias = "known_skills", rename = "knownSkills", default)]
    pub known_skills: Option<SkillList>,
    #[serde(alias = "learn", alias = "want_to_learn", rename = "wantToLearn", default)]
    pub want_to_learn: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(alias = "about", default)]
    pub bio: Option<String>,
    #[serde(alias = "profile_image", rename = "profileImage", default)]
    pub profile_image: Option<String>,
}

/// Trim surrounding whitespace before validation sees the value
fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(String::deserialize(deserializer)?.trim().to_string())
}

/// Drop blank strings so "" and a missing field look the same downstream
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<ProfileRecord> for Profile {
    fn from(record: ProfileRecord) -> Self {
        // An explicit location wins over the city of a structured address
        let location = non_blank(record.location).or_else(|| non_blank(record.city));

        Profile {
            email: record.email.trim().to_string(),
            name: record.name.trim().to_string(),
            headline_skill: non_blank(record.headline_skill),
            known_skills: record.known_skills.unwrap_or_default(),
            want_to_learn: non_blank(record.want_to_learn),
            location: location.map(|l| l.trim().to_string()),
            bio: non_blank(record.bio),
            profile_image: non_blank(record.profile_image),
        }
    }
}
