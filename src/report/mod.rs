//! Report renderers for the aggregated dependency set.
//!
//! - [`notice`] — the attribution document (NOTICE file) with license bodies
//!   and, for Apache-2.0, the collected NOTICE files.
//! - [`csv`] — one row per license file: name, url, version, revision, license.
//! - [`terminal`] — colored per-license summary table for the operator.

pub mod csv;
pub mod notice;
pub mod terminal;
