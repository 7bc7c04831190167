use crate::error::{NoticeError, NoticeResult};
use crate::license::spdx::LicenseId;
use crate::models::{Dependencies, Violation};

/// Every record whose detected license is not in `allowed`, in report order.
pub fn violations(dependencies: &Dependencies, allowed: &[LicenseId]) -> Vec<Violation> {
    dependencies
        .sorted()
        .into_iter()
        .flat_map(|(_, records)| records.iter())
        .filter(|record| !allowed.contains(&record.license_summary))
        .map(|record| Violation {
            path: record.path.clone(),
            license: record.license_summary,
        })
        .collect()
}

/// Fail with [`NoticeError::DisallowedLicense`] if any record is outside `allowed`.
pub fn check_compliance(dependencies: &Dependencies, allowed: &[LicenseId]) -> NoticeResult<()> {
    let found = violations(dependencies, allowed);
    if found.is_empty() {
        Ok(())
    } else {
        Err(NoticeError::DisallowedLicense(found))
    }
}
