// Permissive line-oriented parser for the INI-like status files.

use crate::models::{IniDocument, IniEntry};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IniParseError {
    /// A key-value line must contain exactly one `=`.
    #[error("malformed line (expected exactly one '='): {0:?}")]
    MalformedLine(String),
}

/// Parses one INI-like text blob into a document. Whitespace-only input is
/// "no document" (`Ok(None)`), not an empty document.
///
/// Grammar: blank lines are skipped; a line starting with `[` names a
/// section (all `[`, `]` and `"` characters are dropped, the empty name is
/// legal, an existing section is reused); any other line is `key=value`
/// with `"` stripped from both sides. Keys seen before the first section
/// header land at the top level. Single pass, deterministic.
pub fn parse(text: &str) -> Result<Option<IniDocument>, IniParseError> {
    if text.trim().is_empty() {
        return Ok(None);
    }

    let mut doc = IniDocument::default();
    let mut current: Option<String> = None;

    for line in text.split('\n') {
        if line.trim().is_empty() {
            continue;
        }
        if line.starts_with('[') {
            let name: String = line
                .chars()
                .filter(|c| !matches!(c, '[' | ']' | '"'))
                .collect();
            // Re-encountering a section keeps the existing one.
            doc.0
                .entry(name.clone())
                .and_modify(|e| {
                    if !matches!(e, IniEntry::Section(_)) {
                        *e = IniEntry::Section(BTreeMap::new());
                    }
                })
                .or_insert_with(|| IniEntry::Section(BTreeMap::new()));
            current = Some(name);
            continue;
        }
        if line.matches('=').count() != 1 {
            return Err(IniParseError::MalformedLine(line.to_string()));
        }
        let (key, value) = line.split_once('=').unwrap_or((line, ""));
        let key = key.replace('"', "");
        let value = value.replace('"', "");
        match &current {
            Some(section) => {
                if let Some(IniEntry::Section(map)) = doc.0.get_mut(section) {
                    map.insert(key, value);
                }
            }
            None => {
                doc.0.insert(key, IniEntry::Value(value));
            }
        }
    }
    Ok(Some(doc))
}
