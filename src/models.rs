// Domain models for the snapshot and its ingestion sources

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry of a parsed INI-like status file: either a top-level
/// `key=value` pair or a `[section]` of pairs. Top-level keys and sections
/// share one namespace, which is exactly the shape served as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IniEntry {
    Value(String),
    Section(BTreeMap<String, String>),
}

/// Parsed INI-like document. Within a section every key is unique (last
/// write wins); re-encountering a section header reuses the section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IniDocument(pub BTreeMap<String, IniEntry>);

impl IniDocument {
    /// Look up a `[section]` by name.
    pub fn section(&self, name: &str) -> Option<&BTreeMap<String, String>> {
        match self.0.get(name) {
            Some(IniEntry::Section(map)) => Some(map),
            _ => None,
        }
    }

    /// Look up a top-level key (one that appeared before any section header).
    pub fn value(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(IniEntry::Value(v)) => Some(v.as_str()),
            _ => None,
        }
    }
}

/// Result of loading the configured INI file set. The whole set either
/// loads or collapses to a single error value; empty files parse to `None`
/// and serialize as null.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FileSet {
    Loaded(BTreeMap<String, Option<IniDocument>>),
    Failed { exception: String },
}

/// Result of scanning the SMART report directory: disk identifier to raw
/// table text. Same all-or-nothing shape as [`FileSet`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SmartSet {
    Loaded(BTreeMap<String, String>),
    Failed { exception: String },
}

/// One extracted SMART report: disk identifier plus the attribute table
/// text (or the `"No Table Data"` sentinel).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartRecord {
    pub disk: String,
    pub table: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuStats {
    /// Capture time, unix millis.
    pub epoch: u64,
    /// Per-core utilization in percent.
    pub core_util: Vec<f64>,
    pub physical_cores: u32,
    pub logical_cores: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMemory {
    pub total: u64,
    pub available: u64,
    pub used: u64,
    pub free: u64,
    pub usage_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapMemory {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub usage_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryStats {
    pub epoch: u64,
    #[serde(rename = "virtual")]
    pub virtual_: VirtualMemory,
    pub swap: SwapMemory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorStat {
    pub label: String,
    pub temperature: f64,
    pub max: f64,
    pub critical: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureStats {
    pub epoch: u64,
    pub sensors: Vec<SensorStat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceStat {
    pub name: String,
    pub mac_address: String,
    pub ipv4: Vec<String>,
    pub ipv6: Vec<String>,
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub packets_sent: u64,
    pub packets_recv: u64,
    pub errors_in: u64,
    pub errors_out: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStats {
    pub epoch: u64,
    pub interfaces: Vec<InterfaceStat>,
}

/// One fully-populated telemetry snapshot. Built from all sources at call
/// time and treated as immutable afterwards; refresh replaces the whole
/// value, never mutates it.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Capture time, RFC 3339 local time.
    pub timestamp: String,
    pub cpu: CpuStats,
    pub memory: MemoryStats,
    pub temp: TemperatureStats,
    pub network: NetworkStats,
    /// Docker inventory JSON; null when the file is missing or unparsable.
    pub docker: Option<serde_json::Value>,
    pub ini: FileSet,
    pub smart: SmartSet,
}
