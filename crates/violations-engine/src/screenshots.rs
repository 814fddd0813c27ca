//! Screenshot normalization and primary selection.
//!
//! A check's captures arrive in arbitrary order and may be incomplete.
//! This module drops captures that cannot be placed as markers, orders
//! the rest by page, and picks the representative screenshot the viewer
//! lands on first.

use shared_types::{BoundingBox, Screenshot, ViolationScreenshot};

/// Sentinel id used when a violation has no usable screenshot.
pub const NO_SCREENSHOT_ID: &str = "no-screenshot";

/// Page shown when a violation has no usable screenshot.
pub const DEFAULT_PAGE_NUMBER: u32 = 1;

/// Primary selection plus the full ordered screenshot list for one check.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenshotSelection {
    pub screenshot_id: String,
    pub screenshot_url: String,
    pub page_number: u32,
    pub bounds: Option<BoundingBox>,
    pub all_screenshots: Vec<ViolationScreenshot>,
}

impl ScreenshotSelection {
    /// Sentinel selection for a check with no usable capture.
    fn none() -> Self {
        Self {
            screenshot_id: NO_SCREENSHOT_ID.to_string(),
            screenshot_url: String::new(),
            page_number: DEFAULT_PAGE_NUMBER,
            bounds: None,
            all_screenshots: Vec::new(),
        }
    }
}

/// Filter unusable captures, order by ascending page number (stable, so
/// capture order is kept within a page), and pick the first as primary.
///
/// Screenshots without crop coordinates are dropped. Missing ids are
/// replaced with `"{check_id}-primary"` for the representative entry and
/// `"{check_id}-{index}"` for the rest, so the emitted list never carries
/// an undefined identifier.
pub fn select_screenshots(check_id: &str, screenshots: &[Screenshot]) -> ScreenshotSelection {
    let mut usable: Vec<(&Screenshot, BoundingBox)> = screenshots
        .iter()
        .filter_map(|shot| shot.crop_coordinates.map(|crop| (shot, crop.resolved())))
        .collect();
    usable.sort_by_key(|(shot, _)| shot.page_number.unwrap_or(DEFAULT_PAGE_NUMBER));

    let all_screenshots: Vec<ViolationScreenshot> = usable
        .iter()
        .enumerate()
        .map(|(index, (shot, bounds))| ViolationScreenshot {
            id: shot
                .id
                .clone()
                .unwrap_or_else(|| fallback_id(check_id, index)),
            screenshot_url: shot.screenshot_url.clone().unwrap_or_default(),
            thumbnail_url: shot.thumbnail_url.clone(),
            page_number: shot.page_number.unwrap_or(DEFAULT_PAGE_NUMBER),
            bounds: *bounds,
        })
        .collect();

    if all_screenshots.is_empty() {
        return ScreenshotSelection::none();
    }

    let primary = &all_screenshots[0];
    ScreenshotSelection {
        screenshot_id: primary.id.clone(),
        screenshot_url: primary.screenshot_url.clone(),
        page_number: primary.page_number,
        bounds: Some(primary.bounds),
        all_screenshots,
    }
}

fn fallback_id(check_id: &str, index: usize) -> String {
    if index == 0 {
        format!("{}-primary", check_id)
    } else {
        format!("{}-{}", check_id, index)
    }
}
