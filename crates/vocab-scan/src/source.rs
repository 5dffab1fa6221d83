use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use vocab_types::WordEntry;

use crate::extract::Extractor;

/// What to do with a file that exists but cannot be read as UTF-8 text.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum UnreadablePolicy {
    /// Fail the whole scan.
    #[default]
    Abort,
    /// Log a warning and treat the file as contributing nothing.
    Skip,
}

/// Read a file's text, or `None` when it does not exist.
pub fn load_optional(path: impl AsRef<Path>) -> Result<Option<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))
        .map(Some)
}

impl Extractor {
    /// Extract entries from one file; `None` when the file is missing.
    pub fn scan_file(&self, path: impl AsRef<Path>) -> Result<Option<Vec<WordEntry>>> {
        Ok(load_optional(path)?.map(|text| self.entries(&text)))
    }
}

/// Scan `names` under `dir` in the given order and concatenate their entries.
///
/// Missing files contribute nothing. Unreadable files either abort the scan
/// or are skipped, depending on `policy`.
pub fn scan_files<N: AsRef<Path>>(
    extractor: &Extractor,
    dir: impl AsRef<Path>,
    names: &[N],
    policy: UnreadablePolicy,
) -> Result<Vec<WordEntry>> {
    let dir = dir.as_ref();
    let mut all = Vec::new();

    for name in names {
        let path = dir.join(name);
        match extractor.scan_file(&path) {
            Ok(Some(entries)) => {
                info!("scanned {} ({} words)", path.display(), entries.len());
                all.extend(entries);
            }
            Ok(None) => debug!("skipping missing {}", path.display()),
            Err(err) if policy == UnreadablePolicy::Skip => {
                warn!("skipping unreadable {}: {err:#}", path.display());
            }
            Err(err) => return Err(err),
        }
    }

    Ok(all)
}
