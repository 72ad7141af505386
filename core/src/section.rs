use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Identifier of a scroll-anchored page region. Matches the DOM id of the anchor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub order: i32,
    pub label: String,
}

impl Section {
    pub fn new(id: &str, order: i32, label: &str) -> Self {
        Self {
            id: SectionId::new(id),
            order,
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SectionError {
    #[error("section list is empty")]
    Empty,
    #[error("duplicate section id: {0}")]
    DuplicateId(SectionId),
    #[error("focus section {0} is not one of the configured sections")]
    UnknownFocus(SectionId),
}

/// Validated, scan-ordered list of sections. Never empty, ids unique.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionList {
    sections: Vec<Section>,
}

impl SectionList {
    pub fn new(mut sections: Vec<Section>) -> Result<Self, SectionError> {
        if sections.is_empty() {
            return Err(SectionError::Empty);
        }

        let mut seen = HashSet::new();
        for section in &sections {
            if !seen.insert(section.id.clone()) {
                return Err(SectionError::DuplicateId(section.id.clone()));
            }
        }

        // stable: equal orders keep their declaration order
        sections.sort_by_key(|s| s.order);
        Ok(Self { sections })
    }

    /// The fallback section used when no anchor has crossed the threshold.
    pub fn first(&self) -> &Section {
        &self.sections[0]
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn position(&self, id: &SectionId) -> Option<usize> {
        self.sections.iter().position(|s| &s.id == id)
    }

    pub fn contains(&self, id: &SectionId) -> bool {
        self.position(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_list() {
        assert_eq!(SectionList::new(vec![]), Err(SectionError::Empty));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = SectionList::new(vec![
            Section::new("top", 0, "Home"),
            Section::new("services", 1, "Services"),
            Section::new("top", 2, "Again"),
        ]);
        assert_eq!(result, Err(SectionError::DuplicateId(SectionId::new("top"))));
    }

    #[test]
    fn sorts_by_order_keeping_ties_stable() {
        let list = SectionList::new(vec![
            Section::new("faq", 5, "FAQ"),
            Section::new("top", 0, "Home"),
            Section::new("about", 2, "About"),
            Section::new("founder", 2, "Founder"),
        ])
        .unwrap();

        let ids: Vec<&str> = list.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["top", "about", "founder", "faq"]);
        assert_eq!(list.first().id, "top");
        assert_eq!(list.position(&SectionId::new("founder")), Some(2));
        assert!(!list.contains(&SectionId::new("missing")));
    }
}
