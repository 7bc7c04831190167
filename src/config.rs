use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::license::spdx::LicenseId;

/// Root configuration structure, deserialized from `.notice-checkr/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Compliance policy.
    #[serde(default)]
    pub policy: PolicyConfig,
    /// Walk and report defaults, overridable from the command line.
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Which detected licenses a compliant tree may contain.
#[derive(Debug, Deserialize)]
pub struct PolicyConfig {
    /// License identifiers accepted by the gate. Common aliases such as
    /// `"Apache 2.0"` are accepted and normalized.
    #[serde(default = "default_allowed")]
    pub allowed: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScanConfig {
    /// Directory names never walked while looking for vendor roots.
    #[serde(default = "default_excludes")]
    pub excludes: Vec<String>,
    /// License directories (or dependency paths) whose NOTICE files are left out.
    #[serde(default)]
    pub skip_notice: Vec<String>,
}

fn default_allowed() -> Vec<String> {
    [
        LicenseId::Apache2,
        LicenseId::Mit,
        LicenseId::Bsd4Clause,
        LicenseId::Bsd3Clause,
        LicenseId::Bsd2Clause,
        LicenseId::Mpl2,
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

fn default_excludes() -> Vec<String> {
    vec!["dev-tools".to_string(), "build".to_string()]
}

impl Default for PolicyConfig {
    fn default() -> Self {
        PolicyConfig {
            allowed: default_allowed(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            excludes: default_excludes(),
            skip_notice: Vec::new(),
        }
    }
}

impl PolicyConfig {
    /// Parse the allow-list into identifiers, rejecting anything unknown.
    pub fn allowed_licenses(&self) -> Result<Vec<LicenseId>> {
        self.allowed
            .iter()
            .map(|raw| {
                raw.parse::<LicenseId>()
                    .map_err(|e| anyhow::anyhow!("invalid [policy] allowed entry: {e}"))
            })
            .collect()
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<scan_root>/.notice-checkr/config.toml`
/// 3. `~/.config/notice-checkr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(scan_root: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = scan_root.join(".notice-checkr").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("notice-checkr")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}
