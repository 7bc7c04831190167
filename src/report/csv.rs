use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::Dependencies;

const HEADER: [&str; 5] = ["name", "url", "version", "revision", "license"];
const DELIMITER: &str = ", ";

/// Project URL for a logical path: `github.com/<org>/<repo>/...` becomes
/// `https://github.com/<org>/<repo>`, anything else is returned unchanged.
pub fn project_url(path: &str) -> String {
    let words: Vec<&str> = path.split('/').collect();
    match words.as_slice() {
        ["github.com", org, repo, ..] => format!("https://github.com/{org}/{repo}"),
        _ => path.to_string(),
    }
}

fn escape(field: &str) -> String {
    if field.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_row<W: Write>(out: &mut W, fields: &[&str]) -> Result<()> {
    let row: Vec<String> = fields.iter().map(|f| escape(f)).collect();
    writeln!(out, "{}", row.join(DELIMITER))?;
    Ok(())
}

/// Write one row per dependency record, sorted like the attribution document.
pub fn write_csv<W: Write>(out: &mut W, dependencies: &Dependencies) -> Result<()> {
    write_row(out, &HEADER)?;
    for (key, records) in dependencies.sorted() {
        let url = project_url(key);
        for record in records {
            let license = record.license_summary.to_string();
            write_row(
                out,
                &[
                    key,
                    url.as_str(),
                    record.version.as_deref().unwrap_or(""),
                    record.revision.as_deref().unwrap_or(""),
                    license.as_str(),
                ],
            )?;
        }
    }
    Ok(())
}

/// Render the tabular export to `path`.
pub fn render(path: &Path, dependencies: &Dependencies) -> Result<()> {
    let mut buf = Vec::new();
    write_csv(&mut buf, dependencies)?;
    std::fs::write(path, buf).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
