use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{NoticeError, NoticeResult};
use crate::models::ManifestEntry;

/// File name of the dependency manifest expected in every vendor root.
pub const MANIFEST_FILE: &str = "vendor.json";

/// govendor `vendor.json` layout; keys other than `package` are ignored.
#[derive(Debug, Deserialize)]
struct VendorManifest {
    #[serde(default)]
    package: Vec<ManifestEntry>,
}

/// Logical path -> revision that replaces whatever the vendor manifest says.
pub type Overrides = HashMap<String, String>;

fn parse_manifest(path: &Path, content: &str) -> NoticeResult<Vec<ManifestEntry>> {
    let manifest: VendorManifest =
        serde_json::from_str(content).map_err(|source| NoticeError::InvalidManifest {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(manifest.package)
}

/// Read the package list of a vendor root. A missing manifest is fatal.
pub fn read_manifest(vendor_root: &Path) -> NoticeResult<Vec<ManifestEntry>> {
    let path = vendor_root.join(MANIFEST_FILE);
    let content = std::fs::read_to_string(&path)
        .map_err(|source| NoticeError::MissingManifest {
            path: path.clone(),
            source,
        })?;
    parse_manifest(&path, &content)
}

/// Read the optional origin manifest and keep the revision of each package.
pub fn read_overrides(path: &Path) -> NoticeResult<Overrides> {
    let content = std::fs::read_to_string(path).map_err(|source| NoticeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let overrides = parse_manifest(path, &content)?
        .into_iter()
        .filter_map(|entry| entry.revision.map(|revision| (entry.path, revision)))
        .filter(|(_, revision)| !revision.is_empty())
        .collect();
    Ok(overrides)
}

/// First manifest entry, in manifest order, whose path is a prefix of `lib_path`.
pub fn find_entry<'a>(entries: &'a [ManifestEntry], lib_path: &str) -> Option<&'a ManifestEntry> {
    entries.iter().find(|entry| lib_path.starts_with(entry.path.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const VENDOR_JSON: &str = r#"{
  "comment": "",
  "ignore": "test",
  "package": [
    {
      "checksumSHA1": "abc=",
      "path": "github.com/elastic/go-ucfg",
      "revision": "ec8488a52f3c",
      "revisionTime": "2017-01-20T12:00:00Z",
      "version": "v0.4.5"
    },
    {
      "path": "golang.org/x/net/context",
      "revision": "f2499483f923"
    }
  ],
  "rootPath": "github.com/elastic/beats"
}"#;

    fn entry(path: &str, revision: Option<&str>) -> ManifestEntry {
        ManifestEntry {
            path: path.to_string(),
            version: None,
            revision: revision.map(str::to_string),
        }
    }

    #[test]
    fn test_read_manifest() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(MANIFEST_FILE), VENDOR_JSON).unwrap();

        let entries = read_manifest(tmp.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].path, "github.com/elastic/go-ucfg");
        assert_eq!(entries[0].version.as_deref(), Some("v0.4.5"));
        assert_eq!(entries[1].version, None);
        assert_eq!(entries[1].revision.as_deref(), Some("f2499483f923"));
    }

    #[test]
    fn test_missing_manifest_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let err = read_manifest(tmp.path()).unwrap_err();
        assert!(matches!(err, NoticeError::MissingManifest { .. }));
    }

    #[test]
    fn test_invalid_manifest() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(MANIFEST_FILE), "{ not json").unwrap();
        let err = read_manifest(tmp.path()).unwrap_err();
        assert!(matches!(err, NoticeError::InvalidManifest { .. }));
    }

    #[test]
    fn test_read_overrides_keeps_revisions() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("beats-vendor.json");
        fs::write(
            &path,
            r#"{"package": [{"path": "a/b", "revision": "r1"}, {"path": "c/d"}, {"path": "e/f", "revision": ""}]}"#,
        )
        .unwrap();

        let overrides = read_overrides(&path).unwrap();
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides.get("a/b").map(String::as_str), Some("r1"));
        assert!(!overrides.contains_key("e/f"));
    }

    #[test]
    fn test_find_entry_first_prefix_wins() {
        let entries = vec![
            entry("github.com/a", Some("broad")),
            entry("github.com/a/b", Some("narrow")),
        ];
        let found = find_entry(&entries, "github.com/a/b").unwrap();
        assert_eq!(found.revision.as_deref(), Some("broad"));
        assert!(find_entry(&entries, "golang.org/x/net").is_none());
    }
}
