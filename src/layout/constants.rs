//! Layout constants and unit conversion
//!
//! Page geometry is expressed in print points (1/72 in). Everything the
//! editor draws (cover blocks, section chrome, table rows) is expressed in
//! display pixels (1/96 in) and converted with [`px_to_pt`] at measurement
//! time.

use serde::{Deserialize, Serialize};

use crate::report::SectionKind;

/// Display resolution
pub const PX_PER_INCH: f32 = 96.0;

/// Print resolution
pub const PT_PER_INCH: f32 = 72.0;

/// Convert display pixels to print points
pub fn px_to_pt(px: f32) -> f32 {
    px * PT_PER_INCH / PX_PER_INCH
}

/// Convert print points to display pixels
pub fn pt_to_px(pt: f32) -> f32 {
    pt * PX_PER_INCH / PT_PER_INCH
}

/// Physical page description, in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    /// Reserved at the bottom of every page for the running footer
    pub footer_height: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            page_width: 612.0, // US Letter
            page_height: 792.0,
            margin_top: 36.0, // 0.5 inch
            margin_bottom: 36.0,
            margin_left: 36.0,
            margin_right: 36.0,
            footer_height: 24.0,
        }
    }
}

impl PageGeometry {
    /// Get usable content width
    pub fn usable_width(&self) -> f32 {
        self.page_width - self.margin_left - self.margin_right
    }

    /// Get usable content height per page
    pub fn usable_height(&self) -> f32 {
        self.page_height - self.margin_top - self.margin_bottom
    }

    /// Height available to sections on a page without the cover
    pub fn content_budget(&self) -> f32 {
        self.usable_height() - self.footer_height
    }

    /// Whether the geometry leaves any room for content
    pub fn is_valid(&self) -> bool {
        self.usable_width() > 0.0 && self.content_budget() > 0.0
    }
}

// Cover blocks (first page only), display pixels

pub const COVER_HEADER_IMAGE_PX: f32 = 96.0;
pub const COVER_TITLE_BLOCK_PX: f32 = 80.0;
pub const COVER_PHOTO_STRIP_PX: f32 = 160.0;
pub const COVER_CLIENT_INFO_PX: f32 = 120.0;
pub const COVER_SAFETY_BANNER_PX: f32 = 40.0;
pub const COVER_BUFFER_PX: f32 = 16.0;

/// Unscaled cover height with every optional block present
pub const COVER_TOTAL_PX: f32 = COVER_HEADER_IMAGE_PX
    + COVER_TITLE_BLOCK_PX
    + COVER_PHOTO_STRIP_PX
    + COVER_CLIENT_INFO_PX
    + COVER_SAFETY_BANNER_PX
    + COVER_BUFFER_PX;

// Section chrome

/// Title bar drawn above every section; follows the spacing preset only
/// through the section's overall spacing multiplier
pub const SECTION_HEADER_PX: f32 = 40.0;

/// Default gap after each placed section
pub const DEFAULT_SECTION_GAP_PX: f32 = 16.0;

/// Base height for identifiers missing from the table
pub const DEFAULT_BASE_HEIGHT_PX: f32 = 200.0;

// Narrative blocks

/// Characters per estimation step for free text
pub const TEXT_CHARS_PER_STEP: usize = 100;

/// Height added per step of free text
pub const TEXT_STEP_PX: f32 = 18.0;

// Tables

pub const WEATHER_ROW_PX: f32 = 32.0;
pub const TABLE_ROW_PX: f32 = 28.0;
pub const INVOICE_ROW_PX: f32 = 30.0;
pub const PERSONNEL_ROW_PX: f32 = 24.0;
pub const BID_ITEM_ROW_PX: f32 = 28.0;

/// Column header repeated on continuation pages
pub const TABLE_HEADER_PX: f32 = 36.0;

/// Space kept free under the last row of a split table
pub const TABLE_FOOTER_BUFFER_PX: f32 = 24.0;

/// Rows a page must be able to show before a split table starts on it
pub const MIN_TABLE_ROWS_PER_PAGE: usize = 2;

/// Rows rendered for a table with no records ("No entries")
pub const EMPTY_STATE_ROWS: usize = 1;

/// Roster rows assumed when no roster was supplied
pub const FALLBACK_PERSONNEL_ROWS: usize = 3;

// Photo gallery

pub const PHOTOS_PER_PAGE: usize = 6;

/// One 3x2 grid of photos with captions
pub const PHOTO_GRID_PAGE_PX: f32 = 720.0;

// Safety section

/// Topic line plus the incident statistics table
pub const SAFETY_HEADER_PX: f32 = 220.0;
pub const SAFETY_OBSERVATION_HEADER_PX: f32 = 36.0;
pub const SAFETY_OBSERVATION_ROW_PX: f32 = 32.0;
pub const SAFETY_NARRATIVE_BASE_PX: f32 = 80.0;

/// Headroom below which the quick fit check always fails, in points
pub const MIN_FIT_HEADROOM_PT: f32 = 100.0;

/// Approximate base height of a section, in display pixels
pub fn base_height_px(kind: SectionKind) -> f32 {
    match kind {
        SectionKind::ExecutiveSummary => 120.0,
        SectionKind::Weather => 100.0,
        SectionKind::Manpower
        | SectionKind::Equipment
        | SectionKind::Materials
        | SectionKind::Procurement => 80.0,
        SectionKind::Invoices => 100.0,
        SectionKind::Personnel => 90.0,
        SectionKind::Photos => PHOTO_GRID_PAGE_PX,
        // KPI summary above the bid-items table
        SectionKind::Progress => 180.0,
        SectionKind::Safety => SAFETY_HEADER_PX,
        SectionKind::Other => DEFAULT_BASE_HEIGHT_PX,
    }
}

/// Row height of a record-backed table, in display pixels
pub fn row_height_px(kind: SectionKind) -> f32 {
    match kind {
        SectionKind::Weather => WEATHER_ROW_PX,
        SectionKind::Invoices => INVOICE_ROW_PX,
        SectionKind::Personnel => PERSONNEL_ROW_PX,
        SectionKind::Progress => BID_ITEM_ROW_PX,
        SectionKind::Safety => SAFETY_OBSERVATION_ROW_PX,
        _ => TABLE_ROW_PX,
    }
}

/// Height contributed by a block of free text, in display pixels
pub fn text_height_px(len: usize) -> f32 {
    len.div_ceil(TEXT_CHARS_PER_STEP) as f32 * TEXT_STEP_PX
}
