//! Canonical check records and per-check violation construction.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use shared_types::{CheckType, Screenshot, Severity, Violation};

use crate::screenshots::select_screenshots;
use crate::status::Disposition;

/// Structured violation detail produced by an analysis run. Both fields
/// may be absent; defaults are synthesized at build time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiViolation {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
}

/// Canonical intermediate form both ingestion shapes converge on before
/// the shared reducer runs.
#[derive(Debug, Clone, Default)]
pub struct CheckRecord {
    /// Resolved check identifier; empty when the source row carried none.
    pub check_id: String,
    pub check_name: Option<String>,
    pub code_section_number: Option<String>,
    pub disposition: Disposition,
    pub ai_violations: Vec<AiViolation>,
    pub recommendations: Vec<String>,
    pub reasoning: Option<String>,
    pub confidence: Option<String>,
    pub screenshots: Vec<Screenshot>,
    pub check_type: Option<CheckType>,
    pub element_group_name: Option<String>,
    pub instance_label: Option<String>,
    pub human_readable_title: Option<String>,
    pub source_url: Option<String>,
    pub parent_source_url: Option<String>,
}

impl CheckRecord {
    /// Subject interpolated into synthesized descriptions: the section
    /// number when known, else the check's name.
    fn description_subject(&self) -> &str {
        self.code_section_number
            .as_deref()
            .or(self.check_name.as_deref())
            .unwrap_or("this requirement")
    }

    fn first_ai_description(&self) -> Option<String> {
        self.ai_violations
            .first()
            .and_then(|v| v.description.clone())
    }
}

/// Build the violation for one canonical record, or `None` when its
/// disposition calls for nothing.
pub fn build_violation(record: &CheckRecord) -> Option<Violation> {
    let (severity, description) = match record.disposition {
        Disposition::Skip => return None,
        Disposition::NeedsMoreInfo => {
            let description = record.first_ai_description().unwrap_or_else(|| {
                format!(
                    "Additional information needed for {}",
                    record.description_subject()
                )
            });
            (Severity::NeedsMoreInfo, description)
        }
        Disposition::NonCompliant => {
            let first = record.ai_violations.first();
            let severity = first
                .and_then(|v| v.severity.as_deref())
                .and_then(Severity::parse)
                .unwrap_or(Severity::Moderate);
            let description = record
                .first_ai_description()
                .unwrap_or_else(|| format!("Non-compliant with {}", record.description_subject()));
            (severity, description)
        }
    };

    let selection = select_screenshots(&record.check_id, &record.screenshots);

    Some(Violation {
        check_id: record.check_id.clone(),
        severity,
        description,
        page_number: selection.page_number,
        screenshot_id: selection.screenshot_id,
        screenshot_url: selection.screenshot_url,
        all_screenshots: selection.all_screenshots,
        bounds: selection.bounds,
        check_type: record.check_type,
        element_group_name: record.element_group_name.clone(),
        instance_label: record.instance_label.clone(),
        human_readable_title: record.human_readable_title.clone(),
        source_url: record
            .source_url
            .clone()
            .or_else(|| record.parent_source_url.clone()),
        source_label: record
            .code_section_number
            .as_deref()
            .map(|number| format!("CBC {}", number)),
        reasoning: record.reasoning.clone(),
        confidence: record.confidence.clone(),
        recommendations: dedup_preserving_order(&record.recommendations),
    })
}

/// De-duplicate keeping the first occurrence of each entry in place.
fn dedup_preserving_order(recommendations: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    recommendations
        .iter()
        .filter(|r| seen.insert(r.as_str()))
        .cloned()
        .collect()
}
