// SMART report directory scanner

mod extract;

pub use extract::{NO_TABLE_DATA, SmartExtractError, extract};

use crate::models::SmartSet;
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Scans a directory of raw SMART report files, one blob per disk.
pub struct SmartRepo {
    dir: PathBuf,
}

impl SmartRepo {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Reads and extracts every report file. Blocking I/O runs off the
    /// async runtime.
    pub async fn scan(&self) -> SmartSet {
        let dir = self.dir.clone();
        tokio::task::spawn_blocking(move || scan_sync(&dir))
            .await
            .unwrap_or_else(|e| SmartSet::Failed {
                exception: format!("smart scanner task join: {e}"),
            })
    }
}

/// Whole-batch scan: a directory error, unreadable file or blob without a
/// disk marker collapses the entire set to its error message.
pub fn scan_sync(dir: &Path) -> SmartSet {
    match scan_batch(dir) {
        Ok(set) => SmartSet::Loaded(set),
        Err(e) => {
            tracing::warn!(error = %e, dir = %dir.display(), "SMART batch scan failed");
            SmartSet::Failed {
                exception: e.to_string(),
            }
        }
    }
}

fn scan_batch(dir: &Path) -> anyhow::Result<BTreeMap<String, String>> {
    let mut set = BTreeMap::new();
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("listing {}", dir.display()))?;
        let path = entry.path();
        // Only regular files; subdirectories are skipped.
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let record = extract(&text).with_context(|| format!("extracting {}", path.display()))?;
        set.insert(record.disk, record.table);
    }
    Ok(set)
}
