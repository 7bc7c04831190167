use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::detector::is_vendor_dir;
use crate::error::{NoticeError, NoticeResult};

/// Depth below a vendor root at which every directory must carry a license
/// (`vendor/<host>/<org>`, e.g. `vendor/github.com/elastic`).
const DOCUMENTED_DEPTH: usize = 2;

/// Alternate license file name used by some projects (gorhill/cronexpr).
const ALT_LICENSE_PREFIX: &str = "APLv2";

/// A directory under a vendor root together with the license files it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct LicenseDir {
    pub dir: PathBuf,
    pub files: Vec<String>,
}

pub fn is_license_file_name(name: &str) -> bool {
    (name.starts_with("LICENSE") && !name.contains("docs")) || name.starts_with(ALT_LICENSE_PREFIX)
}

/// Regular file check that follows symlinks (`LICENSE -> ../LICENSE`).
pub fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// License file names directly inside `dir`, sorted. Unreadable directories yield none.
pub fn license_files(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter(|e| is_regular_file(&e.path()))
        .filter_map(|e| e.file_name().into_string().ok())
        .filter(|name| is_license_file_name(name))
        .collect();
    names.sort();
    names
}

/// Every directory of `vendor_root` (itself included) with its license files,
/// in walk order. Nested `vendor` directories are not entered.
pub fn locate_licenses(vendor_root: &Path) -> Vec<LicenseDir> {
    WalkDir::new(vendor_root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_vendor_dir(e))
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!("Skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|e| e.file_type().is_dir())
        .map(|e| {
            let files = license_files(e.path());
            LicenseDir {
                dir: e.into_path(),
                files,
            }
        })
        .collect()
}

/// Check that `dir` is documented.
///
/// Accepted cases:
/// - the directory holds a license file itself
/// - it holds only subdirectories and each of them holds a license file
///
/// On failure, returns the offending path: `dir`, or the first undocumented
/// subdirectory.
pub fn has_license(dir: &Path) -> Result<(), PathBuf> {
    if !license_files(dir).is_empty() {
        return Ok(());
    }

    let mut entries: Vec<_> = fs::read_dir(dir)
        .map_err(|_| dir.to_path_buf())?
        .filter_map(|e| e.ok())
        .collect();
    entries.sort_by_key(|e| e.file_name());

    if entries.is_empty() {
        return Err(dir.to_path_buf());
    }

    for entry in entries {
        let path = entry.path();
        if !path.is_dir() {
            return Err(dir.to_path_buf());
        }
        if license_files(&path).is_empty() {
            return Err(path);
        }
    }

    Ok(())
}

/// Verify every `<host>/<org>` level directory of every vendor root.
///
/// All violations are collected across roots before failing, so a single run
/// reports the complete list.
pub fn check_all_documented(vendor_roots: &[PathBuf]) -> NoticeResult<()> {
    let mut issues = Vec::new();

    for vendor_root in vendor_roots {
        let dirs = WalkDir::new(vendor_root)
            .sort_by_file_name()
            .max_depth(DOCUMENTED_DEPTH)
            .into_iter()
            .filter_entry(|e| !is_vendor_dir(e))
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::warn!("Skipping unreadable entry: {}", err);
                    None
                }
            })
            .filter(|e| e.depth() == DOCUMENTED_DEPTH && e.file_type().is_dir());

        for entry in dirs {
            if let Err(issue) = has_license(entry.path()) {
                tracing::warn!("No license in: {}", issue.display());
                issues.push(issue);
            }
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(NoticeError::Undocumented(issues))
    }
}
