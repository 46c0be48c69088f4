use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Canonical set of skill tokens
///
/// Every member is trimmed, lower-cased and non-empty. Backed by a `BTreeSet`
/// so iteration (and therefore serialized output) is always in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Build a set from discrete tokens
    ///
    /// A token without commas is inserted as a single skill. A token that
    /// still carries commas is treated as free text and split.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for token in tokens {
            set.insert_text(token.as_ref());
        }
        set
    }

    /// Split comma-separated text and insert every surviving token
    pub fn insert_text(&mut self, text: &str) {
        for piece in text.split(',') {
            if let Some(token) = normalize_token(piece) {
                self.0.insert(token);
            }
        }
    }

    /// Merge another set into this one
    pub fn extend(&mut self, other: SkillSet) {
        self.0.extend(other.0);
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(skill)
    }

    /// True iff both sets share at least one token (exact equality)
    #[inline]
    pub fn intersects(&self, other: &SkillSet) -> bool {
        // Probe the smaller set against the larger one
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.0.iter().any(|skill| large.0.contains(skill))
    }

    /// Tokens present in both sets, in lexicographic order
    pub fn intersection(&self, other: &SkillSet) -> Vec<String> {
        self.0.intersection(&other.0).cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a SkillSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Turn raw skill text into a canonical [`SkillSet`]
///
/// Absent or empty text gives an empty set. Extra commas, blank segments and
/// surrounding whitespace are dropped; this never fails.
pub fn normalize(text: Option<&str>) -> SkillSet {
    let mut set = SkillSet::new();
    if let Some(text) = text {
        set.insert_text(text);
    }
    set
}

/// Trim and lower-case a single token, `None` when nothing is left
#[inline]
pub fn normalize_token(token: &str) -> Option<String> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_empty_input() {
        assert!(normalize(None).is_empty());
        assert!(normalize(Some("")).is_empty());
        assert!(normalize(Some(" , ,  ")).is_empty());
    }

    #[test]
    fn test_normalize_dedups_and_case_folds() {
        let set = normalize(Some("Java, java , JAVA,"));

        assert_eq!(set.len(), 1);
        assert!(set.contains("java"));
    }

    #[test]
    fn test_normalize_keeps_inner_whitespace() {
        let set = normalize(Some("  Spring Boot ,UI Design"));

        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["spring boot", "ui design"]);
    }

    #[test]
    fn test_from_tokens_does_not_split_plain_tokens() {
        let set = SkillSet::from_tokens(["Adobe XD", " Figma ", ""]);

        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["adobe xd", "figma"]);
    }

    #[test]
    fn test_from_tokens_splits_tokens_with_commas() {
        let set = SkillSet::from_tokens(["SEO, Google Ads"]);

        assert!(set.contains("seo"));
        assert!(set.contains("google ads"));
    }

    #[test]
    fn test_intersects_exact_tokens_only() {
        let java = normalize(Some("java"));
        let javascript = normalize(Some("javascript"));
        let both = normalize(Some("javascript, java"));

        assert!(!java.intersects(&javascript));
        assert!(java.intersects(&both));
        assert!(!java.intersects(&SkillSet::new()));
        assert!(!SkillSet::new().intersects(&SkillSet::new()));
    }
}
