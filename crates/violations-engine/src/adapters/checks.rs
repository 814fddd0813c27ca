//! Adapter for live check entities carrying manual triage state.

use serde::{Deserialize, Serialize};
use shared_types::{CheckType, ComplianceStatus, ManualStatus, Screenshot, Violation};

use crate::builder::{build_violation, AiViolation, CheckRecord};
use crate::status;

/// Most recent AI analysis run attached to a check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatestAnalysisRun {
    #[serde(default)]
    pub compliance_status: Option<String>,
    #[serde(default)]
    pub ai_reasoning: Option<String>,
    #[serde(default)]
    pub confidence: Option<String>,
    #[serde(default)]
    pub violations: Vec<AiViolation>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Check entity as served by the REST join: manual override and exclusion
/// flags on the check itself, analysis detail nested one level deeper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckWithAnalysis {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub check_name: Option<String>,
    #[serde(default)]
    pub code_section_key: Option<String>,
    #[serde(default)]
    pub code_section_number: Option<String>,
    #[serde(default)]
    pub code_section_title: Option<String>,
    #[serde(default)]
    pub manual_status: Option<String>,
    #[serde(default)]
    pub manual_status_note: Option<String>,
    #[serde(default)]
    pub is_excluded: bool,
    #[serde(default)]
    pub check_type: Option<String>,
    #[serde(default)]
    pub element_group_id: Option<String>,
    #[serde(default)]
    pub element_group_name: Option<String>,
    #[serde(default)]
    pub instance_label: Option<String>,
    #[serde(default)]
    pub human_readable_title: Option<String>,
    #[serde(default)]
    pub latest_status: Option<String>,
    #[serde(default)]
    pub latest_analysis_runs: Option<LatestAnalysisRun>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub parent_source_url: Option<String>,
    #[serde(default)]
    pub screenshots: Vec<Screenshot>,
}

fn to_record(check: &CheckWithAnalysis) -> CheckRecord {
    let run = check.latest_analysis_runs.as_ref();
    let manual = check.manual_status.as_deref().and_then(ManualStatus::parse);
    // The nested run is the richer AI status source; the check-level
    // latest_status covers checks whose run rows were not joined.
    let ai = run
        .and_then(|r| r.compliance_status.as_deref())
        .and_then(ComplianceStatus::parse)
        .or_else(|| {
            check
                .latest_status
                .as_deref()
                .and_then(ComplianceStatus::parse)
        });

    CheckRecord {
        check_id: check.id.clone().unwrap_or_default(),
        check_name: check.check_name.clone(),
        code_section_number: check.code_section_number.clone(),
        disposition: status::resolve_with_override(manual, ai),
        ai_violations: run.map(|r| r.violations.clone()).unwrap_or_default(),
        recommendations: run.map(|r| r.recommendations.clone()).unwrap_or_default(),
        reasoning: run.and_then(|r| r.ai_reasoning.clone()),
        confidence: run.and_then(|r| r.confidence.clone()),
        screenshots: check.screenshots.clone(),
        check_type: check.check_type.as_deref().and_then(CheckType::parse),
        element_group_name: check.element_group_name.clone(),
        instance_label: check.instance_label.clone(),
        human_readable_title: check.human_readable_title.clone(),
        source_url: check.source_url.clone(),
        parent_source_url: check.parent_source_url.clone(),
    }
}

/// Reduce live check entities to the ordered violation list. Excluded
/// checks never produce a violation, whatever their manual or AI status.
pub fn violations_from_checks(checks: &[CheckWithAnalysis]) -> Vec<Violation> {
    checks
        .iter()
        .filter(|check| !check.is_excluded)
        .map(to_record)
        .filter_map(|record| build_violation(&record))
        .collect()
}
