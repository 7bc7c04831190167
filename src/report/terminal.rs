use std::collections::BTreeMap;
use std::path::PathBuf;

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::license::spdx::LicenseId;
use crate::models::{Dependencies, Violation};

/// Record count per detected license, ordered by identifier.
pub fn license_counts(dependencies: &Dependencies) -> BTreeMap<LicenseId, usize> {
    let mut counts = BTreeMap::new();
    for record in dependencies.records() {
        *counts.entry(record.license_summary).or_insert(0) += 1;
    }
    counts
}

/// Print the scan summary: totals, a per-license table, and gate violations.
pub fn render(
    dependencies: &Dependencies,
    vendor_roots: &[PathBuf],
    allowed: &[LicenseId],
    violations: &[Violation],
    quiet: bool,
) {
    let total = dependencies.len();
    let bad = violations.len();

    if quiet {
        println!(
            "Vendor roots: {}  Licenses: {}  Allowed: {}  Disallowed: {}",
            vendor_roots.len(),
            total,
            (total - bad).to_string().green(),
            bad.to_string().red(),
        );
        return;
    }

    println!(
        "\n {} v{}",
        "notice-checkr".bold(),
        env!("CARGO_PKG_VERSION")
    );
    for root in vendor_roots {
        println!(" Vendor root: {}", root.display());
    }
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Files").add_attribute(Attribute::Bold),
            Cell::new("Verdict").add_attribute(Attribute::Bold),
        ]);

    for (license, count) in license_counts(dependencies) {
        let (verdict, color) = if allowed.contains(&license) {
            ("✓ allowed", Color::Green)
        } else {
            ("✗ disallowed", Color::Red)
        };
        table.add_row(vec![
            Cell::new(license.to_string()),
            Cell::new(count).set_alignment(CellAlignment::Right),
            Cell::new(verdict)
                .fg(color)
                .set_alignment(CellAlignment::Center),
        ]);
    }
    println!("{table}");

    if !violations.is_empty() {
        println!(
            "\n {} Dependencies with disallowed licenses:\n",
            "[ERROR]".red().bold()
        );
        for violation in violations {
            println!("   {} {}", "✗".red(), violation);
        }
    }
    println!();
}
