//! Status precedence and violation disposition.

use shared_types::{ComplianceStatus, ManualStatus};

/// Outcome of status resolution for one check: either nothing to report,
/// or the kind of violation to emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Disposition {
    /// Compliant, not applicable, manually closed, or no status at all.
    #[default]
    Skip,
    /// A verdict cannot be reached without more information.
    NeedsMoreInfo,
    /// The check failed its code requirement.
    NonCompliant,
}

/// Resolve a live check where a manual override, when present, wins over
/// the AI-derived status entirely.
pub fn resolve_with_override(
    manual: Option<ManualStatus>,
    ai: Option<ComplianceStatus>,
) -> Disposition {
    match manual {
        Some(ManualStatus::Compliant)
        | Some(ManualStatus::NotApplicable)
        | Some(ManualStatus::InsufficientInformation) => Disposition::Skip,
        Some(ManualStatus::NonCompliant) => Disposition::NonCompliant,
        None => resolve_reported(ai),
    }
}

/// Resolve an already-effective status (the stored-procedure path applies
/// override precedence server-side). An absent or unrecognized status is
/// never reportable; it is not folded into needs-more-info.
pub fn resolve_reported(status: Option<ComplianceStatus>) -> Disposition {
    match status {
        None => Disposition::Skip,
        Some(ComplianceStatus::Compliant) => Disposition::Skip,
        Some(ComplianceStatus::NotApplicable) => Disposition::Skip,
        // Synonyms at the violation layer.
        Some(ComplianceStatus::NeedsMoreInfo) | Some(ComplianceStatus::InsufficientInformation) => {
            Disposition::NeedsMoreInfo
        }
        Some(ComplianceStatus::NonCompliant) => Disposition::NonCompliant,
    }
}
