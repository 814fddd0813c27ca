use serde::{Deserialize, Serialize};

/// Compliance verdict recorded by a human reviewer on a check.
/// Always supersedes the AI-derived status when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManualStatus {
    Compliant,
    NonCompliant,
    NotApplicable,
    InsufficientInformation,
}

impl ManualStatus {
    /// Parse a raw status string; unknown values are treated as no override.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "compliant" => Some(ManualStatus::Compliant),
            "non_compliant" => Some(ManualStatus::NonCompliant),
            "not_applicable" => Some(ManualStatus::NotApplicable),
            "insufficient_information" => Some(ManualStatus::InsufficientInformation),
            _ => None,
        }
    }
}

impl std::fmt::Display for ManualStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManualStatus::Compliant => write!(f, "compliant"),
            ManualStatus::NonCompliant => write!(f, "non_compliant"),
            ManualStatus::NotApplicable => write!(f, "not_applicable"),
            ManualStatus::InsufficientInformation => write!(f, "insufficient_information"),
        }
    }
}

/// AI-derived (or server-computed effective) compliance state of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    NonCompliant,
    NeedsMoreInfo,
    InsufficientInformation,
    NotApplicable,
}

impl ComplianceStatus {
    /// Parse a raw status string; unknown values are treated as absent,
    /// never as non-compliant.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "compliant" => Some(ComplianceStatus::Compliant),
            "non_compliant" => Some(ComplianceStatus::NonCompliant),
            "needs_more_info" => Some(ComplianceStatus::NeedsMoreInfo),
            "insufficient_information" => Some(ComplianceStatus::InsufficientInformation),
            "not_applicable" => Some(ComplianceStatus::NotApplicable),
            _ => None,
        }
    }
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplianceStatus::Compliant => write!(f, "compliant"),
            ComplianceStatus::NonCompliant => write!(f, "non_compliant"),
            ComplianceStatus::NeedsMoreInfo => write!(f, "needs_more_info"),
            ComplianceStatus::InsufficientInformation => write!(f, "insufficient_information"),
            ComplianceStatus::NotApplicable => write!(f, "not_applicable"),
        }
    }
}

/// Severity rank of an emitted violation. Variants are declared in
/// ascending urgency so the derived ordering sorts major above moderate
/// above minor, with the needs-more-info sentinel last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    NeedsMoreInfo,
    Minor,
    Moderate,
    Major,
}

impl Severity {
    /// Parse an AI-supplied severity label. Only the three graded ranks
    /// are valid labels; the needs-more-info sentinel is assigned by
    /// status resolution, never parsed.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "minor" => Some(Severity::Minor),
            "moderate" => Some(Severity::Moderate),
            "major" => Some(Severity::Major),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::NeedsMoreInfo => write!(f, "needs_more_info"),
            Severity::Minor => write!(f, "minor"),
            Severity::Moderate => write!(f, "moderate"),
            Severity::Major => write!(f, "major"),
        }
    }
}

/// Whether a check assesses a code section or a concrete element instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckType {
    Section,
    Element,
}

impl CheckType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "section" => Some(CheckType::Section),
            "element" => Some(CheckType::Element),
            _ => None,
        }
    }
}

/// Crop box captured with a screenshot. The zoom level is optional on the
/// wire; display collaborators always receive a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropCoordinates {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default, alias = "zoomLevel")]
    pub zoom_level: Option<f64>,
}

impl CropCoordinates {
    /// Resolve to a display-ready bounding box, defaulting the zoom level to 1.
    pub fn resolved(&self) -> BoundingBox {
        BoundingBox {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            zoom_level: self.zoom_level.unwrap_or(1.0),
        }
    }
}

/// Bounding box attached to an emitted violation, zoom level always resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub zoom_level: f64,
}

/// Screenshot row as captured upstream. A screenshot without crop
/// coordinates cannot be placed as a violation marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screenshot {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub screenshot_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub page_number: Option<u32>,
    #[serde(default)]
    pub crop_coordinates: Option<CropCoordinates>,
}

/// Screenshot descriptor carried on an emitted violation. Identifiers are
/// always present (synthesized when the source row had none) and bounds
/// always carry a resolved zoom level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolationScreenshot {
    pub id: String,
    pub screenshot_url: String,
    pub thumbnail_url: Option<String>,
    pub page_number: u32,
    pub bounds: BoundingBox,
}

/// One emitted non-compliance record, ready for the sidebar list, PDF
/// marker overlay, and PDF export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub check_id: String,
    pub severity: Severity,
    pub description: String,
    pub page_number: u32,
    pub screenshot_id: String,
    pub screenshot_url: String,
    pub all_screenshots: Vec<ViolationScreenshot>,
    pub bounds: Option<BoundingBox>,
    pub check_type: Option<CheckType>,
    pub element_group_name: Option<String>,
    pub instance_label: Option<String>,
    pub human_readable_title: Option<String>,
    pub source_url: Option<String>,
    pub source_label: Option<String>,
    pub reasoning: Option<String>,
    pub confidence: Option<String>,
    pub recommendations: Vec<String>,
}

/// Violation count per severity rank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeveritySummary {
    pub major: usize,
    pub moderate: usize,
    pub minor: usize,
    pub needs_more_info: usize,
}

impl SeveritySummary {
    pub fn total(&self) -> usize {
        self.major + self.moderate + self.minor + self.needs_more_info
    }
}

/// Aggregated violations for one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolationsReport {
    pub assessment_id: String,
    pub violations: Vec<Violation>,
    pub summary: SeveritySummary,
    pub generated_at: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_severity_orders_by_urgency() {
        assert!(Severity::Major > Severity::Moderate);
        assert!(Severity::Moderate > Severity::Minor);
        assert!(Severity::Minor > Severity::NeedsMoreInfo);
    }

    #[test]
    fn test_severity_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Severity::NeedsMoreInfo).unwrap(),
            "\"needs_more_info\""
        );
        assert_eq!(serde_json::to_string(&Severity::Major).unwrap(), "\"major\"");
    }

    #[test]
    fn test_severity_parse_rejects_unknown_labels() {
        assert_eq!(Severity::parse("major"), Some(Severity::Major));
        assert_eq!(Severity::parse("critical"), None);
        assert_eq!(Severity::parse("needs_more_info"), None);
    }

    #[test]
    fn test_manual_status_parse_round_trips_display() {
        for status in [
            ManualStatus::Compliant,
            ManualStatus::NonCompliant,
            ManualStatus::NotApplicable,
            ManualStatus::InsufficientInformation,
        ] {
            assert_eq!(ManualStatus::parse(&status.to_string()), Some(status));
        }
        assert_eq!(ManualStatus::parse("maybe_compliant"), None);
    }

    #[test]
    fn test_crop_coordinates_resolve_default_zoom() {
        let crop = CropCoordinates {
            x: 10.0,
            y: 20.0,
            width: 100.0,
            height: 50.0,
            zoom_level: None,
        };
        assert_eq!(crop.resolved().zoom_level, 1.0);

        let zoomed = CropCoordinates {
            zoom_level: Some(2.5),
            ..crop
        };
        assert_eq!(zoomed.resolved().zoom_level, 2.5);
    }

    #[test]
    fn test_crop_coordinates_accept_camel_case_zoom_alias() {
        let crop: CropCoordinates =
            serde_json::from_str(r#"{"x":1,"y":2,"width":3,"height":4,"zoomLevel":2}"#).unwrap();
        assert_eq!(crop.zoom_level, Some(2.0));
    }

    #[test]
    fn test_violation_serializes_camel_case_fields() {
        let violation = Violation {
            check_id: "check-1".to_string(),
            severity: Severity::Moderate,
            description: "Door clearance below minimum".to_string(),
            page_number: 2,
            screenshot_id: "shot-1".to_string(),
            screenshot_url: "https://example.com/shot-1.png".to_string(),
            all_screenshots: vec![],
            bounds: None,
            check_type: Some(CheckType::Element),
            element_group_name: Some("Doors".to_string()),
            instance_label: None,
            human_readable_title: None,
            source_url: None,
            source_label: Some("CBC 11B-404".to_string()),
            reasoning: None,
            confidence: None,
            recommendations: vec!["Widen the clear opening".to_string()],
        };

        let json = serde_json::to_value(&violation).unwrap();
        assert_eq!(json["checkId"], "check-1");
        assert_eq!(json["pageNumber"], 2);
        assert_eq!(json["allScreenshots"], serde_json::json!([]));
        assert_eq!(json["sourceLabel"], "CBC 11B-404");
        assert_eq!(json["checkType"], "element");
    }

    #[test]
    fn test_summary_total_sums_all_ranks() {
        let summary = SeveritySummary {
            major: 2,
            moderate: 3,
            minor: 1,
            needs_more_info: 4,
        };
        assert_eq!(summary.total(), 10);
    }
}
