//! Cover block measurement for the first page

use serde::Serialize;

use crate::layout::constants::{
    px_to_pt, COVER_BUFFER_PX, COVER_CLIENT_INFO_PX, COVER_HEADER_IMAGE_PX, COVER_PHOTO_STRIP_PX,
    COVER_SAFETY_BANNER_PX, COVER_TITLE_BLOCK_PX,
};
use crate::report::ReportConfig;

/// Heights of the cover's sub-blocks, in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverMetrics {
    pub header_image: f32,
    pub title_block: f32,
    /// Zero when no strip photos are selected
    pub photo_strip: f32,
    pub client_info: f32,
    pub safety_banner: f32,
    pub buffer: f32,
}

impl CoverMetrics {
    /// Total height consumed on page 1
    pub fn total(&self) -> f32 {
        self.header_image
            + self.title_block
            + self.photo_strip
            + self.client_info
            + self.safety_banner
            + self.buffer
    }
}

/// Measure the cover block for a configuration
///
/// Only the text blocks follow the spacing preset; images, banner and the
/// buffer are fixed.
pub fn measure_cover(config: &ReportConfig) -> CoverMetrics {
    let multiplier = config.spacing.multiplier();
    let photo_strip = if config.appearance.has_photo_strip() {
        px_to_pt(COVER_PHOTO_STRIP_PX)
    } else {
        0.0
    };

    CoverMetrics {
        header_image: px_to_pt(COVER_HEADER_IMAGE_PX),
        title_block: px_to_pt(COVER_TITLE_BLOCK_PX * multiplier),
        photo_strip,
        client_info: px_to_pt(COVER_CLIENT_INFO_PX * multiplier),
        safety_banner: px_to_pt(COVER_SAFETY_BANNER_PX),
        buffer: px_to_pt(COVER_BUFFER_PX),
    }
}
