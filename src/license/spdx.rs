use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// The license identifiers the text classifier can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LicenseId {
    Apache2,
    Mit,
    Bsd2Clause,
    Bsd3Clause,
    Bsd4Clause,
    Mpl2,
    CcBySa4,
    Lgpl3,
    Unknown,
}

impl LicenseId {
    /// SPDX short identifier, or `UNKNOWN` when nothing matched.
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseId::Apache2 => "Apache-2.0",
            LicenseId::Mit => "MIT",
            LicenseId::Bsd2Clause => "BSD-2-Clause",
            LicenseId::Bsd3Clause => "BSD-3-Clause",
            LicenseId::Bsd4Clause => "BSD-4-Clause",
            LicenseId::Mpl2 => "MPL-2.0",
            LicenseId::CcBySa4 => "CC-BY-SA-4.0",
            LicenseId::Lgpl3 => "LGPL-3.0",
            LicenseId::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for LicenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LicenseId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl FromStr for LicenseId {
    type Err = String;

    /// Accepts canonical SPDX identifiers and the common aliases handled by [`normalize`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "Apache-2.0" => Ok(LicenseId::Apache2),
            "MIT" => Ok(LicenseId::Mit),
            "BSD-2-Clause" => Ok(LicenseId::Bsd2Clause),
            "BSD-3-Clause" => Ok(LicenseId::Bsd3Clause),
            "BSD-4-Clause" => Ok(LicenseId::Bsd4Clause),
            "MPL-2.0" => Ok(LicenseId::Mpl2),
            "CC-BY-SA-4.0" => Ok(LicenseId::CcBySa4),
            "LGPL-3.0" => Ok(LicenseId::Lgpl3),
            "UNKNOWN" => Ok(LicenseId::Unknown),
            other => Err(format!("unsupported license identifier: {other}")),
        }
    }
}

/// Normalize common non-SPDX strings to their SPDX equivalents.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed {
        "Apache 2.0" | "Apache License 2.0" | "Apache License, Version 2.0" | "Apache-2" => {
            "Apache-2.0".to_string()
        }
        "MIT License" | "The MIT License" => "MIT".to_string(),
        "BSD 2-Clause" | "Simplified BSD" | "FreeBSD" => "BSD-2-Clause".to_string(),
        "BSD 3-Clause" | "New BSD" | "Modified BSD" => "BSD-3-Clause".to_string(),
        "BSD 4-Clause" | "Original BSD" => "BSD-4-Clause".to_string(),
        "Mozilla Public License 2.0" | "MPL 2.0" | "MPLv2" => "MPL-2.0".to_string(),
        "CC BY-SA 4.0" => "CC-BY-SA-4.0".to_string(),
        "GNU LGPL v3" | "LGPL v3" | "LGPLv3" | "LGPL-3.0-only" => "LGPL-3.0".to_string(),
        "unknown" | "Unknown" => "UNKNOWN".to_string(),
        other => other.to_string(),
    }
}
