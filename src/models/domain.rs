use serde::{Deserialize, Serialize};

use crate::core::normalize::{normalize, SkillSet};

/// Known skills as users enter them: free text or discrete tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillList {
    Text(String),
    Tokens(Vec<String>),
}

impl SkillList {
    pub fn to_set(&self) -> SkillSet {
        match self {
            SkillList::Text(text) => normalize(Some(text)),
            SkillList::Tokens(tokens) => SkillSet::from_tokens(tokens),
        }
    }

    /// True when no non-blank text is present
    pub fn is_blank(&self) -> bool {
        match self {
            SkillList::Text(text) => text.trim().is_empty(),
            SkillList::Tokens(tokens) => tokens.iter().all(|t| t.trim().is_empty()),
        }
    }
}

impl Default for SkillList {
    fn default() -> Self {
        SkillList::Tokens(Vec::new())
    }
}

/// Canonical user profile seen by the matching core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub email: String,
    pub name: String,
    #[serde(rename = "headlineSkill", default)]
    pub headline_skill: Option<String>,
    #[serde(rename = "knownSkills", default)]
    pub known_skills: SkillList,
    #[serde(rename = "wantToLearn", default)]
    pub want_to_learn: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(rename = "profileImage", default)]
    pub profile_image: Option<String>,
}

impl Profile {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            headline_skill: None,
            known_skills: SkillList::default(),
            want_to_learn: None,
            location: None,
            bio: None,
            profile_image: None,
        }
    }

    /// Merged known skills: headline plus the skill list
    pub fn known_set(&self) -> SkillSet {
        let mut set = normalize(self.headline_skill.as_deref());
        set.extend(self.known_skills.to_set());
        set
    }

    pub fn wants_set(&self) -> SkillSet {
        normalize(self.want_to_learn.as_deref())
    }

    /// Location as a plain string, empty when not set
    pub fn location_str(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }
}
