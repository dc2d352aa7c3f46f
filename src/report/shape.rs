//! Data shape: the counts and lengths that pagination actually reads

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::report::{PersonnelRoster, Record, ReportConfig, ReportData};

/// Structural summary of a report's content
///
/// Two reports with equal shapes paginate identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportShape {
    pub photo_count: usize,
    pub weather_days: usize,
    /// Executive summary length in grapheme clusters
    pub summary_len: usize,
    /// Safety narrative length in grapheme clusters
    pub safety_narrative_len: usize,
    pub observation_count: usize,
    pub manpower_count: usize,
    pub equipment_count: usize,
    pub materials_count: usize,
    pub procurement_count: usize,
    pub invoice_count: usize,
    pub bid_item_count: usize,
    /// Roster group sizes; `None` when no roster was supplied
    pub personnel_groups: Option<[usize; 3]>,
}

impl ReportShape {
    /// Reduce report content to its shape
    pub fn from_sources(
        data: &ReportData,
        roster: Option<&PersonnelRoster>,
        bid_items: Option<&[Record]>,
    ) -> Self {
        Self {
            photo_count: data.photos.len(),
            weather_days: data.weather.len(),
            summary_len: text_len(&data.executive_summary),
            safety_narrative_len: text_len(&data.safety_narrative),
            observation_count: data.safety_observations.len(),
            manpower_count: data.manpower.len(),
            equipment_count: data.equipment.len(),
            materials_count: data.materials.len(),
            procurement_count: data.procurement.len(),
            invoice_count: data.invoices.len(),
            bid_item_count: bid_items.map_or(0, <[Record]>::len),
            personnel_groups: roster.map(PersonnelRoster::group_sizes),
        }
    }

    /// Shape of report data with no auxiliary records
    pub fn from_data(data: &ReportData) -> Self {
        Self::from_sources(data, None, None)
    }
}

/// Length of a narrative as the reader sees it
fn text_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Memoization key for one pagination call
///
/// Covers only what changes the page map: section labels and the identity
/// of cover photos are left out, their presence is not.
pub fn fingerprint(config: &ReportConfig, shape: &ReportShape) -> u64 {
    let mut hasher = FxHasher::default();

    config.sections.len().hash(&mut hasher);
    for section in &config.sections {
        section.id.hash(&mut hasher);
        section.included.hash(&mut hasher);
        section.order.hash(&mut hasher);
    }

    config.spacing.preset.hash(&mut hasher);
    config.spacing.section_gap.to_bits().hash(&mut hasher);
    config.appearance.has_photo_strip().hash(&mut hasher);

    let g = &config.geometry;
    for value in [
        g.page_width,
        g.page_height,
        g.margin_top,
        g.margin_bottom,
        g.margin_left,
        g.margin_right,
        g.footer_height,
    ] {
        value.to_bits().hash(&mut hasher);
    }

    shape.hash(&mut hasher);
    hasher.finish()
}
