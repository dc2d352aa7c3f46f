//! Section height estimation
//!
//! Heights are estimated from record counts and text lengths, never from
//! rendered output. Every function here is pure: equal inputs give equal
//! heights, which is what makes [`crate::PageMapCache`] sound.

use crate::layout::constants::{
    base_height_px, px_to_pt, row_height_px, text_height_px, EMPTY_STATE_ROWS,
    FALLBACK_PERSONNEL_ROWS, PHOTOS_PER_PAGE, SAFETY_NARRATIVE_BASE_PX,
    SAFETY_OBSERVATION_HEADER_PX, SECTION_HEADER_PX,
};
use crate::report::{ReportShape, Section, SectionKind, Spacing};

/// Estimated height of a whole section, in points
///
/// `(content + section header) * multiplier + gap`, converted to points.
pub fn measure_section(section: &Section, spacing: &Spacing, shape: &ReportShape) -> f32 {
    let content = content_height_px(section.kind(), shape);
    px_to_pt((content + SECTION_HEADER_PX) * spacing.multiplier() + spacing.section_gap)
}

/// Scale a display-pixel height by the preset and convert to points
pub fn scaled_pt(px: f32, spacing: &Spacing) -> f32 {
    px_to_pt(px * spacing.multiplier())
}

/// The inter-section gap in points
pub fn gap_pt(spacing: &Spacing) -> f32 {
    px_to_pt(spacing.section_gap)
}

/// Number of records backing a section's table or grid
pub fn record_count(kind: SectionKind, shape: &ReportShape) -> usize {
    match kind {
        SectionKind::Weather => shape.weather_days,
        SectionKind::Manpower => shape.manpower_count,
        SectionKind::Equipment => shape.equipment_count,
        SectionKind::Materials => shape.materials_count,
        SectionKind::Procurement => shape.procurement_count,
        SectionKind::Invoices => shape.invoice_count,
        SectionKind::Personnel => personnel_rows(shape),
        SectionKind::Photos => shape.photo_count,
        SectionKind::Progress => shape.bid_item_count,
        SectionKind::Safety => shape.observation_count,
        SectionKind::ExecutiveSummary | SectionKind::Other => 0,
    }
}

/// Height of the safety narrative block, unscaled pixels
pub fn safety_footer_px(shape: &ReportShape) -> f32 {
    SAFETY_NARRATIVE_BASE_PX + text_height_px(shape.safety_narrative_len)
}

/// Personnel groups are laid out side by side, so the longest one wins
fn personnel_rows(shape: &ReportShape) -> usize {
    shape
        .personnel_groups
        .map(|groups| groups.into_iter().max().unwrap_or(0))
        .unwrap_or(FALLBACK_PERSONNEL_ROWS)
}

fn table_rows(count: usize) -> usize {
    count.max(EMPTY_STATE_ROWS)
}

/// Type-specific content height before chrome and spacing, in pixels
fn content_height_px(kind: SectionKind, shape: &ReportShape) -> f32 {
    let base = base_height_px(kind);
    let row = row_height_px(kind);

    match kind {
        SectionKind::ExecutiveSummary => base + text_height_px(shape.summary_len),
        SectionKind::Photos => shape.photo_count.div_ceil(PHOTOS_PER_PAGE) as f32 * base,
        SectionKind::Progress => base + shape.bid_item_count as f32 * row,
        SectionKind::Safety => {
            let observations = if shape.observation_count > 0 {
                SAFETY_OBSERVATION_HEADER_PX + shape.observation_count as f32 * row
            } else {
                0.0
            };
            base + observations + safety_footer_px(shape)
        }
        SectionKind::Weather
        | SectionKind::Manpower
        | SectionKind::Equipment
        | SectionKind::Materials
        | SectionKind::Procurement
        | SectionKind::Invoices
        | SectionKind::Personnel => {
            base + table_rows(record_count(kind, shape)) as f32 * row
        }
        SectionKind::Other => base,
    }
}
