//! The extraction run: discover, repair, parse, filter, tally, write.

use crate::config::ExtractorConfig;
use crate::discover::discover_files;
use crate::error::{Result, TallyError};
use crate::extract::{extract_fragments, parse_selector};
use crate::filter::Denylist;
use crate::repair::Repairer;
use crate::tally::Tally;
use scraper::Selector;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

/// Turns raw messages into tallied fragments.
pub struct Extractor {
    repairer: Repairer,
    selector: Selector,
    denylist: Denylist,
}

/// Tally over a set of messages, with the counts behind it.
#[derive(Debug, Clone, Default)]
pub struct TallyReport {
    pub tally: Tally,
    /// Messages read.
    pub files: usize,
    /// Fragments extracted before filtering.
    pub fragments: usize,
    /// Fragments that survived the denylist.
    pub kept: usize,
}

/// Outcome of a full run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub root: PathBuf,
    pub output: PathBuf,
    pub files: usize,
    pub fragments: usize,
    pub kept: usize,
    pub distinct: usize,
    pub counts: Tally,
}

impl Extractor {
    pub fn from_config(config: &ExtractorConfig) -> Result<Self> {
        Ok(Self {
            repairer: Repairer::new(&config.repairs)?,
            selector: parse_selector(&config.selector)?,
            denylist: Denylist::new(config.exclusions.clone()),
        })
    }

    /// Trimmed fragments of one raw message, before filtering.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn fragments(&self, raw: &[u8]) -> Vec<String> {
        let text = String::from_utf8_lossy(raw);
        let repaired = self.repairer.apply(&text);
        extract_fragments(&repaired, &self.selector)
            .into_iter()
            .map(|fragment| fragment.trim().to_string())
            .collect()
    }

    /// Fragments of one message that pass the denylist.
    pub fn kept_fragments(&self, raw: &[u8]) -> Vec<String> {
        self.fragments(raw)
            .into_iter()
            .filter(|fragment| !self.denylist.is_excluded(fragment))
            .collect()
    }

    /// Read each file in order and tally its surviving fragments.
    ///
    /// The first unreadable file aborts the whole tally.
    pub fn tally_files<P: AsRef<Path>>(&self, paths: &[P]) -> Result<TallyReport> {
        let mut report = TallyReport::default();

        for path in paths {
            let path = path.as_ref();
            let raw = std::fs::read(path).map_err(|e| TallyError::io(path, e))?;

            let fragments = self.fragments(&raw);
            let mut kept = 0;
            for fragment in &fragments {
                if let Some(rule) = self.denylist.matching(fragment) {
                    trace!(fragment = %fragment, rule = ?rule, "excluded");
                    continue;
                }
                report.tally.add(fragment);
                kept += 1;
            }

            debug!(
                path = %path.display(),
                fragments = fragments.len(),
                kept,
                "tallied message"
            );
            report.files += 1;
            report.fragments += fragments.len();
            report.kept += kept;
        }

        Ok(report)
    }
}

/// Tally every matching message under `root` and write the CSV to `output`.
///
/// The output file is only created once every message has been processed.
pub fn run(root: &Path, output: &Path, config: &ExtractorConfig) -> Result<RunSummary> {
    let extractor = Extractor::from_config(config)?;

    let files = discover_files(root, &config.extension)?;
    info!(
        root = %root.display(),
        extension = %config.extension,
        files = files.len(),
        "discovered messages"
    );

    let report = extractor.tally_files(&files)?;
    report.tally.write_to_path(output)?;

    info!(
        output = %output.display(),
        fragments = report.fragments,
        kept = report.kept,
        distinct = report.tally.len(),
        "wrote tally"
    );

    Ok(RunSummary {
        root: root.to_path_buf(),
        output: output.to_path_buf(),
        files: report.files,
        fragments: report.fragments,
        kept: report.kept,
        distinct: report.tally.len(),
        counts: report.tally,
    })
}
