use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// Directory name that marks a vendor root.
pub const VENDOR_DIR: &str = "vendor";

pub(crate) fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

pub(crate) fn is_vendor_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == VENDOR_DIR
}

/// Find every `vendor` directory reachable from `root`, in file-name order.
///
/// Hidden entries and directories named in `excludes` are pruned at any depth.
/// A vendor root is recorded but never entered, so vendor trees nested inside
/// it are left to the license locator (which skips them as well).
pub fn detect_vendor_roots(root: &Path, excludes: &[String]) -> Vec<PathBuf> {
    let mut vendor_roots = Vec::new();

    let mut walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            !is_hidden(e)
                && !(e.depth() > 0
                    && e.file_type().is_dir()
                    && excludes.iter().any(|x| e.file_name() == x.as_str()))
        });

    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("Skipping unreadable entry: {}", err);
                continue;
            }
        };

        if is_vendor_dir(&entry) {
            vendor_roots.push(entry.into_path());
            walker.skip_current_dir();
        }
    }

    vendor_roots
}
