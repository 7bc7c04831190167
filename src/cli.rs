use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "notice-checkr",
    about = "Generate the NOTICE file from all vendor directories found in a given directory",
    version
)]
pub struct Cli {
    /// Directory in which to search for vendor directories
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Product name printed in the NOTICE header
    #[arg(short, long, default_value = "Elastic Beats")]
    pub beat: String,

    /// Copyright holder
    #[arg(short, long, default_value = "Elasticsearch BV")]
    pub copyright: String,

    /// Write a CSV export to FILE instead of the NOTICE document
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// NOTICE document path
    #[arg(short, long, value_name = "FILE", default_value = "NOTICE.txt")]
    pub output: PathBuf,

    /// Directory name to exclude from the search (repeatable) [default: dev-tools, build]
    #[arg(short, long = "excludes", value_name = "DIR")]
    pub excludes: Vec<String>,

    /// Origin vendor.json whose revisions override the vendored ones
    #[arg(long, value_name = "FILE")]
    pub beats_origin: Option<PathBuf>,

    /// License directory or dependency path whose NOTICE files are skipped (repeatable)
    #[arg(short, long, value_name = "DIR")]
    pub skip_notice: Vec<String>,

    /// Policy config file [default: ./.notice-checkr/config.toml, fallback ~/.config/notice-checkr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log per-file detail
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print warnings and a one-line summary
    #[arg(short, long)]
    pub quiet: bool,
}
