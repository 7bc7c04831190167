use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::detector::VENDOR_DIR;
use crate::error::{NoticeError, NoticeResult};
use crate::license::classifier::classify_text;
use crate::license::spdx::LicenseId;
use crate::locator::locate_licenses;
use crate::manifest::{find_entry, read_manifest, Overrides};
use crate::models::{Dependencies, DependencyRecord};

/// Logical module path of a directory: the segments after its last `vendor`
/// component joined with `/`. Paths without a `vendor` component are returned whole.
pub fn library_path(dir: &Path) -> String {
    let segments: Vec<String> = dir
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    match segments.iter().rposition(|s| s == VENDOR_DIR) {
        Some(idx) => segments[idx + 1..].join("/"),
        None => segments.join("/"),
    }
}

/// Read a text file for the report.
///
/// A missing file is not an error: it is logged and read as empty. Bytes that
/// are not valid UTF-8 are decoded as ISO-8859-1 instead.
pub fn read_text(path: &Path) -> NoticeResult<String> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::warn!("File not found {}", path.display());
            return Ok(String::new());
        }
        Err(source) => {
            return Err(NoticeError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            tracing::debug!("{} is not UTF-8, decoding as latin-1", path.display());
            Ok(err.into_bytes().iter().map(|&b| char::from(b)).collect())
        }
    }
}

/// Build the dependency set for all vendor roots.
///
/// Every license file becomes one record, appended under its logical path in
/// discovery order. Manifest metadata is attached by prefix match and
/// `overrides` then replace the revision.
pub fn gather_dependencies(
    vendor_roots: &[PathBuf],
    overrides: &Overrides,
) -> NoticeResult<Dependencies> {
    let mut dependencies = Dependencies::new();

    for vendor_root in vendor_roots {
        let entries = read_manifest(vendor_root)?;

        for found in locate_licenses(vendor_root) {
            if found.files.is_empty() {
                continue;
            }

            let lib_path = library_path(&found.dir);
            if lib_path.is_empty() {
                tracing::warn!(
                    "Ignoring license files directly in vendor root {}",
                    found.dir.display()
                );
                continue;
            }

            for filename in &found.files {
                let license_file = found.dir.join(filename);
                let mut record = DependencyRecord::bare(&lib_path, license_file);

                match find_entry(&entries, &lib_path) {
                    Some(entry) => {
                        record.version = entry.version.clone();
                        record.revision = entry.revision.clone();
                    }
                    None => {
                        tracing::warn!("No version information found for: {}", lib_path);
                    }
                }

                record.license_contents = read_text(&record.license_file)?;
                record.license_summary = classify_text(&record.license_contents);
                if record.license_summary == LicenseId::Unknown {
                    tracing::warn!("Unknown license for: {}", lib_path);
                }

                if let Some(revision) = overrides.get(&lib_path) {
                    record.revision = Some(revision.clone());
                }

                tracing::debug!(
                    "{} -> {} ({})",
                    record.license_file.display(),
                    lib_path,
                    record.license_summary
                );
                dependencies.push(record);
            }
        }
    }

    Ok(dependencies)
}
