use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::license::spdx::LicenseId;

/// One license file discovered under a vendor root, enriched with manifest metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyRecord {
    /// Logical module path: everything after the last `vendor` segment.
    pub path: String,
    pub version: Option<String>,
    pub revision: Option<String>,
    pub license_file: PathBuf,
    pub license_contents: String,
    pub license_summary: LicenseId,
}

impl DependencyRecord {
    /// A record carrying only its logical path, used when no manifest entry matches.
    pub fn bare(path: &str, license_file: PathBuf) -> Self {
        Self {
            path: path.to_string(),
            version: None,
            revision: None,
            license_file,
            license_contents: String::new(),
            license_summary: LicenseId::Unknown,
        }
    }
}

/// A package entry from a vendor manifest (`vendor.json`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ManifestEntry {
    pub path: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub revision: Option<String>,
}

/// Aggregated scan result: logical path -> every record found for it, in discovery order.
///
/// Vendoring the same module twice (or shipping several license files) yields
/// more than one record per path; none of them are merged or dropped.
#[derive(Debug, Default, Clone)]
pub struct Dependencies {
    by_path: BTreeMap<String, Vec<DependencyRecord>>,
}

impl Dependencies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: DependencyRecord) {
        self.by_path
            .entry(record.path.clone())
            .or_default()
            .push(record);
    }

    #[cfg(test)]
    pub fn get(&self, path: &str) -> Option<&[DependencyRecord]> {
        self.by_path.get(path).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }

    /// Total number of records across all paths.
    pub fn len(&self) -> usize {
        self.by_path.values().map(Vec::len).sum()
    }

    /// All records in aggregation order within each path.
    pub fn records(&self) -> impl Iterator<Item = &DependencyRecord> {
        self.by_path.values().flatten()
    }

    /// Paths sorted case-insensitively, each with its records in aggregation order.
    pub fn sorted(&self) -> Vec<(&str, &[DependencyRecord])> {
        let mut entries: Vec<(&str, &[DependencyRecord])> = self
            .by_path
            .iter()
            .map(|(path, records)| (path.as_str(), records.as_slice()))
            .collect();
        entries.sort_by_key(|(path, _)| path.to_lowercase());
        entries
    }
}

/// A record rejected by the compliance gate.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub path: String,
    pub license: LicenseId,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.path, self.license)
    }
}
