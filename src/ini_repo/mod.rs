// INI status-file set loader

mod parse;

pub use parse::{IniParseError, parse};

use crate::models::FileSet;
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Loads the configured set of INI-style status files from one directory.
pub struct IniRepo {
    dir: PathBuf,
    files: Vec<String>,
}

impl IniRepo {
    pub fn new(dir: impl Into<PathBuf>, files: Vec<String>) -> Self {
        Self {
            dir: dir.into(),
            files,
        }
    }

    /// Reads and parses every configured file. Blocking I/O runs off the
    /// async runtime.
    pub async fn load_all(&self) -> FileSet {
        let dir = self.dir.clone();
        let files = self.files.clone();
        tokio::task::spawn_blocking(move || load_all_sync(&dir, &files))
            .await
            .unwrap_or_else(|e| FileSet::Failed {
                exception: format!("ini loader task join: {e}"),
            })
    }
}

/// Whole-batch load: one unreadable or malformed file collapses the entire
/// set to its error message, matching the all-or-nothing contract.
pub fn load_all_sync(dir: &Path, files: &[String]) -> FileSet {
    match load_batch(dir, files) {
        Ok(set) => FileSet::Loaded(set),
        Err(e) => {
            tracing::warn!(error = %e, dir = %dir.display(), "INI batch load failed");
            FileSet::Failed {
                exception: e.to_string(),
            }
        }
    }
}

fn load_batch(
    dir: &Path,
    files: &[String],
) -> anyhow::Result<BTreeMap<String, Option<crate::models::IniDocument>>> {
    let mut set = BTreeMap::new();
    for name in files {
        let path = dir.join(name);
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let doc = parse(&text).with_context(|| format!("parsing {name}"))?;
        set.insert(name.clone(), doc);
    }
    Ok(set)
}
