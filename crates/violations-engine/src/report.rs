//! Report assembly and severity ordering helpers.

use shared_types::{Severity, SeveritySummary, Violation, ViolationsReport};

/// Assemble the report wrapper for one assessment's reduced violations.
pub fn build_report(assessment_id: &str, violations: Vec<Violation>) -> ViolationsReport {
    ViolationsReport {
        assessment_id: assessment_id.to_string(),
        summary: summarize(&violations),
        violations,
        generated_at: chrono::Utc::now().timestamp() as u64,
    }
}

/// Count violations per severity rank.
pub fn summarize(violations: &[Violation]) -> SeveritySummary {
    let mut summary = SeveritySummary::default();
    for violation in violations {
        match violation.severity {
            Severity::Major => summary.major += 1,
            Severity::Moderate => summary.moderate += 1,
            Severity::Minor => summary.minor += 1,
            Severity::NeedsMoreInfo => summary.needs_more_info += 1,
        }
    }
    summary
}

/// Order violations by descending severity. Stable: check order is
/// preserved within a rank. Callers opt in; the reduction itself never
/// re-sorts.
pub fn sort_by_severity(violations: &mut [Violation]) {
    violations.sort_by(|a, b| b.severity.cmp(&a.severity));
}

/// Violations at exactly the given severity rank, in their original order.
pub fn filter_by_severity(violations: &[Violation], severity: Severity) -> Vec<Violation> {
    violations
        .iter()
        .filter(|v| v.severity == severity)
        .cloned()
        .collect()
}
