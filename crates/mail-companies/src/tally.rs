//! Occurrence counts in first-seen order, and their CSV form.

use crate::error::{Result, TallyError};
use indexmap::IndexMap;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Counts of distinct fragments. Iteration follows first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tally {
    counts: IndexMap<String, u64>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `fragment`.
    pub fn add(&mut self, fragment: &str) {
        match self.counts.get_mut(fragment) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(fragment.to_string(), 1);
            }
        }
    }

    pub fn get(&self, fragment: &str) -> Option<u64> {
        self.counts.get(fragment).copied()
    }

    /// Number of distinct fragments.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Write one `fragment,count` record per entry, without a header.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for (fragment, count) in self.iter() {
            wtr.write_record([fragment, count.to_string().as_str()])?;
        }
        wtr.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    /// Create (or truncate) `path` and write the CSV into it.
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| TallyError::io(path, e))?;
        self.write_csv(file)
    }
}

impl<S: AsRef<str>> Extend<S> for Tally {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for fragment in iter {
            self.add(fragment.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Tally {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tally = Tally::new();
        tally.extend(iter);
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv_of(tally: &Tally) -> String {
        let mut buf = Vec::new();
        tally.write_csv(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_counts_and_first_seen_order() {
        let tally: Tally = ["Beta", "Acme", "Beta", "Zed", "Acme", "Beta"]
            .into_iter()
            .collect();

        assert_eq!(tally.get("Beta"), Some(3));
        assert_eq!(tally.get("Acme"), Some(2));
        assert_eq!(tally.get("Missing"), None);
        assert_eq!(tally.len(), 3);
        assert_eq!(tally.total(), 6);

        let order: Vec<_> = tally.iter().map(|(k, _)| k).collect();
        assert_eq!(order, vec!["Beta", "Acme", "Zed"]);
    }

    #[test]
    fn test_exact_equality() {
        let tally: Tally = ["Acme", "acme", "Acme "].into_iter().collect();
        assert_eq!(tally.len(), 3);
    }

    #[test]
    fn test_csv_rows_without_header() {
        let tally: Tally = ["Acme Corp", "Globex", "Acme Corp"].into_iter().collect();
        assert_eq!(csv_of(&tally), "Acme Corp,2\r\nGlobex,1\r\n");
    }

    #[test]
    fn test_csv_quotes_only_when_needed() {
        let tally: Tally = ["Acme, Inc.", "The \"Best\" Co", "Plain"].into_iter().collect();
        assert_eq!(
            csv_of(&tally),
            "\"Acme, Inc.\",1\r\n\"The \"\"Best\"\" Co\",1\r\nPlain,1\r\n"
        );
    }

    #[test]
    fn test_empty_tally_writes_nothing() {
        assert_eq!(csv_of(&Tally::new()), "");
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let tally: Tally = ["Zed", "Acme", "Zed"].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&tally).unwrap(),
            r#"{"Zed":2,"Acme":1}"#
        );
    }
}
