use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::aggregate::read_text;
use crate::license::spdx::LicenseId;
use crate::locator::is_regular_file;
use crate::models::{Dependencies, DependencyRecord};

const BANNER: &str = "==========================================================================";
const SEPARATOR: &str = "--------------------------------------------------------------------";

/// Product identity printed at the top of the attribution document.
#[derive(Debug, Clone)]
pub struct NoticeHeader<'a> {
    pub product: &'a str,
    pub copyright: &'a str,
    pub year: i32,
}

/// `NOTICE*` files next to `license_file`, sorted by name.
fn notice_files(license_file: &Path) -> Vec<PathBuf> {
    let Some(dir) = license_file.parent() else {
        return Vec::new();
    };
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .filter(|e| is_regular_file(&e.path()))
        .filter(|e| e.file_name().to_string_lossy().starts_with("NOTICE"))
        .map(|e| e.path())
        .collect();
    files.sort();
    files
}

fn skips_notice(record: &DependencyRecord, skip_notice: &[String]) -> bool {
    let dir = record.license_file.parent();
    skip_notice
        .iter()
        .any(|skip| skip == &record.path || dir.is_some_and(|d| Path::new(skip) == d))
}

fn write_record<W: Write>(
    out: &mut W,
    key: &str,
    record: &DependencyRecord,
    skip_notice: &[String],
) -> Result<()> {
    write!(out, "\n{SEPARATOR}\n")?;
    writeln!(out, "Dependency: {key}")?;
    if let Some(version) = &record.version {
        writeln!(out, "Version: {version}")?;
    }
    if let Some(revision) = &record.revision {
        writeln!(out, "Revision: {revision}")?;
    }
    writeln!(out, "License type (autodetected): {}", record.license_summary)?;
    writeln!(out, "{}:", record.license_file.display())?;
    writeln!(out, "{SEPARATOR}")?;

    if record.license_summary != LicenseId::Apache2 {
        out.write_all(record.license_contents.as_bytes())?;
        return Ok(());
    }

    // Apache-2.0 bodies are replaced by the boilerplate plus any NOTICE files.
    write!(out, "Apache License 2.0\n\n")?;
    if skips_notice(record, skip_notice) {
        return Ok(());
    }
    for notice in notice_files(&record.license_file) {
        let name = notice
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        writeln!(out, "-------{name}-----")?;
        out.write_all(read_text(&notice)?.as_bytes())?;
    }
    Ok(())
}

/// Write the attribution document for `dependencies` to `out`.
pub fn write_notice<W: Write>(
    out: &mut W,
    header: &NoticeHeader<'_>,
    dependencies: &Dependencies,
    skip_notice: &[String],
) -> Result<()> {
    writeln!(out, "{}", header.product)?;
    writeln!(out, "Copyright 2014-{} {}", header.year, header.copyright)?;
    writeln!(out)?;
    writeln!(out, "This product includes software developed by The Apache Software ")?;
    write!(out, "Foundation (http://www.apache.org/).\n\n")?;

    writeln!(out, "{BANNER}")?;
    writeln!(out, "Third party libraries used by the {} project:", header.product)?;
    write!(out, "{BANNER}\n\n")?;

    for (key, records) in dependencies.sorted() {
        for record in records {
            write_record(out, key, record, skip_notice)?;
        }
    }
    Ok(())
}

/// Render the attribution document to `path`.
pub fn render(
    path: &Path,
    header: &NoticeHeader<'_>,
    dependencies: &Dependencies,
    skip_notice: &[String],
) -> Result<()> {
    let mut buf = Vec::new();
    write_notice(&mut buf, header, dependencies, skip_notice)?;
    fs::write(path, buf).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
