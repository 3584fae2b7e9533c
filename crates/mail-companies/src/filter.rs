//! Exclusion rules for extracted fragments.
//!
//! Matching is plain substring containment, so a legitimate company name
//! with a hyphen in it is dropped by the default rules. Edit the list in the
//! configuration to change that.

use serde::{Deserialize, Serialize};

/// A predicate that removes a fragment from the tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Exclusion {
    /// The fragment is the empty string.
    Empty,
    /// The fragment contains `text`. An empty `text` matches everything.
    Contains { text: String },
}

impl Exclusion {
    pub fn contains(text: impl Into<String>) -> Self {
        Self::Contains { text: text.into() }
    }

    /// Whether this rule excludes `fragment`.
    pub fn matches(&self, fragment: &str) -> bool {
        match self {
            Exclusion::Empty => fragment.is_empty(),
            Exclusion::Contains { text } => fragment.contains(text.as_str()),
        }
    }
}

/// Rules for job-alert emails: hyphenated headings, review and
/// recommendation boilerplate, and the "City, ST" location lines.
pub fn job_alert_exclusions() -> Vec<Exclusion> {
    vec![
        Exclusion::Empty,
        Exclusion::contains("-"),
        Exclusion::contains("reviews"),
        Exclusion::contains("opportunities for you"),
        Exclusion::contains(", VA"),
        Exclusion::contains(", DC"),
        Exclusion::contains(", MD"),
    ]
}

/// An ordered set of exclusion rules.
#[derive(Debug, Clone, Default)]
pub struct Denylist {
    exclusions: Vec<Exclusion>,
}

impl Denylist {
    pub fn new(exclusions: Vec<Exclusion>) -> Self {
        Self { exclusions }
    }

    /// The first rule that excludes `fragment`, if any.
    pub fn matching(&self, fragment: &str) -> Option<&Exclusion> {
        self.exclusions.iter().find(|e| e.matches(fragment))
    }

    pub fn is_excluded(&self, fragment: &str) -> bool {
        self.matching(fragment).is_some()
    }

    pub fn len(&self) -> usize {
        self.exclusions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exclusions.is_empty()
    }
}
