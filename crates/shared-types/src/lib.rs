pub mod types;

pub use types::{
    BoundingBox, CheckType, ComplianceStatus, CropCoordinates, ManualStatus, Screenshot, Severity,
    SeveritySummary, Violation, ViolationScreenshot, ViolationsReport,
};
