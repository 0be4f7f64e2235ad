// Splits a raw SMART diagnostic blob into disk identifier and table text.

use crate::models::SmartRecord;
use thiserror::Error;

/// Sentinel stored when a report carries no attribute table.
pub const NO_TABLE_DATA: &str = "No Table Data";

#[derive(Debug, Error)]
pub enum SmartExtractError {
    /// The mandatory `!!<disk>!!` marker is missing. This is the only hard
    /// failure; a missing table degrades to the sentinel instead.
    #[error("no !!disk!! marker found in SMART report")]
    MissingDiskMarker,
}

/// Extracts `(disk, table)` from one SMART report blob.
///
/// The disk identifier is the first `!!...!!` marker whose inner text is
/// non-empty and stays on one line. The table is everything from the first
/// `ID#` token to end-of-input; without one, [`NO_TABLE_DATA`] is used. A
/// record never carries an absent disk identifier.
pub fn extract(text: &str) -> Result<SmartRecord, SmartExtractError> {
    let disk = find_disk_marker(text).ok_or(SmartExtractError::MissingDiskMarker)?;
    let table = match text.find("ID#") {
        Some(idx) => text[idx..].to_string(),
        None => NO_TABLE_DATA.to_string(),
    };
    Ok(SmartRecord {
        disk: disk.to_string(),
        table,
    })
}

fn find_disk_marker(text: &str) -> Option<&str> {
    let mut from = 0;
    while let Some(open) = text[from..].find("!!") {
        let start = from + open + 2;
        let close = text[start..].find("!!")?;
        let inner = &text[start..start + close];
        if !inner.is_empty() && !inner.contains('\n') {
            return Some(inner);
        }
        // Empty or multi-line candidate; resume after the opening pair.
        from = start;
    }
    None
}
