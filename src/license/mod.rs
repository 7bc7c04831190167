//! License text normalization and classification.
//!
//! - [`text`] — whitespace and quote normalization applied before matching.
//! - [`classifier`] — maps a license file body to a [`spdx::LicenseId`] using
//!   fixed phrase tables and per-family prefix windows.
//! - [`spdx`] — the identifier vocabulary and alias normalization used when
//!   reading allow-lists from config.

pub mod classifier;
pub mod spdx;
pub mod text;
