//! Literal text repairs applied before HTML parsing.
//!
//! All patterns are matched in a single pass with one alternation built from
//! the escaped literals, longest first. The regex engine picks the leftmost
//! alternative that matches, so at any position a longer pattern shadows a
//! shorter one that overlaps it.

use crate::config::Repair;
use crate::error::{Result, TallyError};
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::HashMap;

pub struct Repairer {
    pattern: Option<Regex>,
    replacements: HashMap<String, String>,
}

impl Repairer {
    /// Compile a set of repairs.
    ///
    /// Fails on an empty pattern. If a pattern appears twice, the later
    /// replacement wins.
    pub fn new(repairs: &[Repair]) -> Result<Self> {
        let mut replacements = HashMap::with_capacity(repairs.len());
        for repair in repairs {
            if repair.pattern.is_empty() {
                return Err(TallyError::EmptyPattern);
            }
            replacements.insert(repair.pattern.clone(), repair.replacement.clone());
        }

        if replacements.is_empty() {
            return Ok(Self {
                pattern: None,
                replacements,
            });
        }

        let mut literals: Vec<&str> = replacements.keys().map(String::as_str).collect();
        literals.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let alternation = literals
            .iter()
            .map(|literal| regex::escape(literal))
            .collect::<Vec<_>>()
            .join("|");

        Ok(Self {
            pattern: Some(Regex::new(&alternation)?),
            replacements,
        })
    }

    /// Apply every repair to `text`. Borrows when nothing matched.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match &self.pattern {
            Some(pattern) => pattern.replace_all(text, |caps: &Captures| {
                self.replacements
                    .get(&caps[0])
                    .map(String::as_str)
                    .unwrap_or_default()
            }),
            None => Cow::Borrowed(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_repairs;

    #[test]
    fn test_soft_line_breaks_removed() {
        let repairer = Repairer::new(&default_repairs()).unwrap();
        assert_eq!(
            repairer.apply("<span>Acme Co=\nrp</span>"),
            "<span>Acme Corp</span>"
        );
    }

    #[test]
    fn test_longest_pattern_wins() {
        let repairer = Repairer::new(&default_repairs()).unwrap();
        // With "=\n" first this would leave "<" + "/span>" behind.
        assert_eq!(repairer.apply("<span>Acme<=\n/span>"), "<span>Acme");
        assert_eq!(repairer.apply("<=\nspan>Acme"), "<Acme");
    }

    #[test]
    fn test_order_of_declaration_does_not_matter() {
        let repairs = vec![Repair::new("ab", "1"), Repair::new("abc", "2")];
        let repairer = Repairer::new(&repairs).unwrap();
        assert_eq!(repairer.apply("abcab"), "21");
    }

    #[test]
    fn test_patterns_are_literal() {
        let repairer = Repairer::new(&[Repair::new(".*", "X")]).unwrap();
        assert_eq!(repairer.apply("a.*b"), "aXb");
        assert_eq!(repairer.apply("ab"), "ab");
    }

    #[test]
    fn test_duplicate_pattern_keeps_last() {
        let repairs = vec![Repair::new("x", "1"), Repair::new("x", "2")];
        let repairer = Repairer::new(&repairs).unwrap();
        assert_eq!(repairer.apply("x"), "2");
    }

    #[test]
    fn test_untouched_text_is_borrowed() {
        let repairer = Repairer::new(&default_repairs()).unwrap();
        assert!(matches!(repairer.apply("plain"), Cow::Borrowed("plain")));

        let none = Repairer::new(&[]).unwrap();
        assert!(matches!(none.apply("a=\nb"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_empty_pattern_rejected() {
        assert!(matches!(
            Repairer::new(&[Repair::strip("")]),
            Err(TallyError::EmptyPattern)
        ));
    }
}
