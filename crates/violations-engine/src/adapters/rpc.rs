//! Adapter for rows returned by the pre-filtering stored procedure.

use serde::{Deserialize, Serialize};
use shared_types::{CheckType, ComplianceStatus, Screenshot, Violation};

use crate::builder::{build_violation, AiViolation, CheckRecord};
use crate::status;

/// One stored-procedure row: effective status already computed
/// server-side, analysis detail embedded flat on the row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RpcViolationRow {
    #[serde(default)]
    pub check_id: Option<String>,
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
    pub effective_status: Option<String>,
    #[serde(default)]
    pub ai_reasoning: Option<String>,
    #[serde(default)]
    pub confidence: Option<String>,
    #[serde(default)]
    pub violations: Vec<AiViolation>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub screenshots: Vec<Screenshot>,
    #[serde(default)]
    pub check_type: Option<String>,
    #[serde(default)]
    pub element_group_name: Option<String>,
    #[serde(default)]
    pub instance_label: Option<String>,
    #[serde(default)]
    pub human_readable_title: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub parent_source_url: Option<String>,
    #[serde(default)]
    pub section_number: Option<String>,
}

fn to_record(row: &RpcViolationRow) -> CheckRecord {
    let reported = row
        .effective_status
        .as_deref()
        .and_then(ComplianceStatus::parse);

    CheckRecord {
        // The two ingestion paths use different key names for the same
        // concept; prefer the RPC one.
        check_id: row
            .check_id
            .clone()
            .or_else(|| row.id.clone())
            .unwrap_or_default(),
        check_name: row.check_name.clone(),
        code_section_number: row
            .code_section_number
            .clone()
            .or_else(|| row.section_number.clone()),
        disposition: status::resolve_reported(reported),
        ai_violations: row.violations.clone(),
        recommendations: row.recommendations.clone(),
        reasoning: row.ai_reasoning.clone(),
        confidence: row.confidence.clone(),
        screenshots: row.screenshots.clone(),
        check_type: row.check_type.as_deref().and_then(CheckType::parse),
        element_group_name: row.element_group_name.clone(),
        instance_label: row.instance_label.clone(),
        human_readable_title: row.human_readable_title.clone(),
        source_url: row.source_url.clone(),
        parent_source_url: row.parent_source_url.clone(),
    }
}

/// Reduce stored-procedure rows to the ordered violation list. Output
/// keeps the input row order; rows without a recognizable effective
/// status contribute nothing.
pub fn violations_from_rpc_rows(rows: &[RpcViolationRow]) -> Vec<Violation> {
    rows.iter()
        .map(to_record)
        .filter_map(|record| build_violation(&record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn non_compliant_row(check_id: &str) -> RpcViolationRow {
        RpcViolationRow {
            check_id: Some(check_id.to_string()),
            effective_status: Some("non_compliant".to_string()),
            code_section_number: Some("11B-404".to_string()),
            ..RpcViolationRow::default()
        }
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(violations_from_rpc_rows(&[]), vec![]);
    }

    #[test]
    fn test_check_id_prefers_rpc_key_then_falls_back() {
        let rows = vec![
            RpcViolationRow {
                check_id: Some("rpc-1".to_string()),
                id: None,
                effective_status: Some("non_compliant".to_string()),
                ..RpcViolationRow::default()
            },
            RpcViolationRow {
                check_id: None,
                id: Some("api-1".to_string()),
                effective_status: Some("non_compliant".to_string()),
                ..RpcViolationRow::default()
            },
        ];
        let violations = violations_from_rpc_rows(&rows);
        assert_eq!(violations[0].check_id, "rpc-1");
        assert_eq!(violations[1].check_id, "api-1");
    }

    #[test]
    fn test_missing_effective_status_produces_no_violation() {
        let mut row = non_compliant_row("check-1");
        row.effective_status = None;
        assert!(violations_from_rpc_rows(&[row]).is_empty());

        let mut row = non_compliant_row("check-1");
        row.effective_status = Some("garbled".to_string());
        assert!(violations_from_rpc_rows(&[row]).is_empty());
    }

    #[test]
    fn test_compliant_rows_are_filtered() {
        let mut row = non_compliant_row("check-1");
        row.effective_status = Some("compliant".to_string());
        assert!(violations_from_rpc_rows(&[row]).is_empty());
    }

    #[test]
    fn test_flat_detail_fields_flow_through() {
        let mut row = non_compliant_row("check-1");
        row.ai_reasoning = Some("Clear width measured below 32 inches".to_string());
        row.confidence = Some("high".to_string());
        row.violations = vec![AiViolation {
            description: Some("Clear width is 30 inches".to_string()),
            severity: Some("major".to_string()),
        }];
        row.recommendations = vec!["Widen the door".to_string(), "Widen the door".to_string()];

        let violations = violations_from_rpc_rows(&[row]);
        assert_eq!(violations.len(), 1);
        let violation = &violations[0];
        assert_eq!(violation.description, "Clear width is 30 inches");
        assert_eq!(
            violation.reasoning.as_deref(),
            Some("Clear width measured below 32 inches")
        );
        assert_eq!(violation.confidence.as_deref(), Some("high"));
        assert_eq!(violation.recommendations, vec!["Widen the door"]);
    }

    #[test]
    fn test_section_number_fallback_feeds_source_label() {
        let mut row = non_compliant_row("check-1");
        row.code_section_number = None;
        row.section_number = Some("11B-604".to_string());

        let violations = violations_from_rpc_rows(&[row]);
        assert_eq!(violations[0].source_label.as_deref(), Some("CBC 11B-604"));
    }

    #[test]
    fn test_rows_deserialize_from_sparse_json() {
        let rows: Vec<RpcViolationRow> = serde_json::from_str(
            r#"[{"check_id":"rpc-9","effective_status":"needs_more_info","section_number":"11B-216"}]"#,
        )
        .unwrap();
        let violations = violations_from_rpc_rows(&rows);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            "Additional information needed for 11B-216"
        );
    }
}
