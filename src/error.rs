use std::path::PathBuf;

use thiserror::Error;

use crate::models::Violation;

/// Fatal conditions that abort a scan.
#[derive(Error, Debug)]
pub enum NoticeError {
    #[error("vendor manifest not found: {path}")]
    MissingManifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest {path}: {source}")]
    InvalidManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("found licensing issues in the following folders: {}", join_paths(.0))]
    Undocumented(Vec<PathBuf>),

    #[error("dependencies with disallowed licenses: {}", join_violations(.0))]
    DisallowedLicense(Vec<Violation>),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type NoticeResult<T> = Result<T, NoticeError>;

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
