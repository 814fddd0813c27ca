//! Violations aggregation engine for accessibility plan review.
//!
//! Reduces raw check/analysis rows — from either the pre-filtering stored
//! procedure or the live REST join — into one de-duplicated,
//! severity-ranked violation list for the sidebar, the PDF marker
//! overlay, and the PDF export.
//!
//! The reduction is pure and synchronous: no I/O, no shared state, fresh
//! output per call. Malformed input degrades to defaults instead of
//! erroring.

pub mod adapters;
pub mod builder;
pub mod report;
pub mod screenshots;
pub mod status;

pub use adapters::{
    violations_from_checks, violations_from_rpc_rows, CheckWithAnalysis, LatestAnalysisRun,
    RpcViolationRow,
};
pub use builder::{build_violation, AiViolation, CheckRecord};
pub use report::{build_report, filter_by_severity, sort_by_severity, summarize};
pub use screenshots::{select_screenshots, ScreenshotSelection, NO_SCREENSHOT_ID};
pub use status::Disposition;

use shared_types::{Violation, ViolationsReport};

/// ViolationsEngine entry point
pub struct ViolationsEngine;

impl ViolationsEngine {
    pub fn new() -> Self {
        Self
    }

    /// Reduce live check entities; manual triage state takes precedence.
    pub fn reduce_checks(&self, checks: &[CheckWithAnalysis]) -> Vec<Violation> {
        adapters::violations_from_checks(checks)
    }

    /// Reduce rows already filtered by the stored procedure.
    pub fn reduce_rpc_rows(&self, rows: &[RpcViolationRow]) -> Vec<Violation> {
        adapters::violations_from_rpc_rows(rows)
    }

    /// Reduce live check entities and wrap the result in a report.
    pub fn report_for_checks(
        &self,
        assessment_id: &str,
        checks: &[CheckWithAnalysis],
    ) -> ViolationsReport {
        report::build_report(assessment_id, self.reduce_checks(checks))
    }
}

impl Default for ViolationsEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::Severity;

    fn non_compliant_check(id: &str, severity: &str, description: &str) -> CheckWithAnalysis {
        CheckWithAnalysis {
            id: Some(id.to_string()),
            code_section_number: Some("11B-404.2.3".to_string()),
            latest_analysis_runs: Some(LatestAnalysisRun {
                compliance_status: Some("non_compliant".to_string()),
                violations: vec![AiViolation {
                    description: Some(description.to_string()),
                    severity: Some(severity.to_string()),
                }],
                ..LatestAnalysisRun::default()
            }),
            ..CheckWithAnalysis::default()
        }
    }

    #[test]
    fn test_engine_reduces_mixed_checks_in_order() {
        let overruled = CheckWithAnalysis {
            id: Some("check-3".to_string()),
            manual_status: Some("compliant".to_string()),
            latest_status: Some("non_compliant".to_string()),
            ..CheckWithAnalysis::default()
        };
        let needs_info = CheckWithAnalysis {
            id: Some("check-4".to_string()),
            code_section_number: Some("11B-216".to_string()),
            latest_status: Some("needs_more_info".to_string()),
            ..CheckWithAnalysis::default()
        };

        let checks = vec![
            non_compliant_check("check-1", "major", "Door clear width is 30 inches"),
            non_compliant_check("check-2", "major", "Threshold height exceeds 1/2 inch"),
            overruled,
            needs_info,
        ];

        let engine = ViolationsEngine::new();
        let violations = engine.reduce_checks(&checks);

        let ids: Vec<&str> = violations.iter().map(|v| v.check_id.as_str()).collect();
        assert_eq!(ids, vec!["check-1", "check-2", "check-4"]);

        assert_eq!(violations[0].severity, Severity::Major);
        assert_eq!(violations[0].description, "Door clear width is 30 inches");
        assert_eq!(violations[2].severity, Severity::NeedsMoreInfo);
        assert_eq!(
            violations[2].description,
            "Additional information needed for 11B-216"
        );
        assert_eq!(violations[2].page_number, 1);
        assert_eq!(violations[2].screenshot_id, NO_SCREENSHOT_ID);
    }

    #[test]
    fn test_engine_is_idempotent_over_immutable_input() {
        let checks = vec![
            non_compliant_check("check-1", "minor", "Sign mounted too high"),
            non_compliant_check("check-2", "moderate", "Counter exceeds 36 inches"),
        ];
        let engine = ViolationsEngine::new();

        let first = engine.reduce_checks(&checks);
        let second = engine.reduce_checks(&checks);
        assert_eq!(first, second);
    }

    #[test]
    fn test_both_ingestion_paths_agree_on_equivalent_input() {
        let checks = vec![non_compliant_check(
            "check-1",
            "major",
            "Door clear width is 30 inches",
        )];
        let rows = vec![RpcViolationRow {
            check_id: Some("check-1".to_string()),
            code_section_number: Some("11B-404.2.3".to_string()),
            effective_status: Some("non_compliant".to_string()),
            violations: vec![AiViolation {
                description: Some("Door clear width is 30 inches".to_string()),
                severity: Some("major".to_string()),
            }],
            ..RpcViolationRow::default()
        }];

        let engine = ViolationsEngine::new();
        assert_eq!(engine.reduce_checks(&checks), engine.reduce_rpc_rows(&rows));
    }

    #[test]
    fn test_report_for_checks_summarizes_reduction() {
        let checks = vec![
            non_compliant_check("check-1", "major", "Door clear width is 30 inches"),
            non_compliant_check("check-2", "minor", "Sign mounted too high"),
        ];
        let engine = ViolationsEngine::new();
        let report = engine.report_for_checks("assessment-7", &checks);

        assert_eq!(report.assessment_id, "assessment-7");
        assert_eq!(report.summary.major, 1);
        assert_eq!(report.summary.minor, 1);
        assert_eq!(report.summary.total(), report.violations.len());
    }
}
