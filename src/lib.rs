//! Report pagination: a page-map engine for multi-page printable reports
//!
//! This crate decides which report section content lands on which page:
//! - Height estimation from record counts and text lengths
//! - Whole-section placement with overflow to the next page
//! - Splitting of photo galleries, row tables and the safety section
//! - Memoization keyed on a configuration/data-shape fingerprint
//!
//! The same [`PageMap`] feeds the live preview and the document export.

pub mod error;
pub mod layout;
pub mod report;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::WasmPageMapper;

// Re-export primary types
pub use error::{PaginationError, Result};
pub use layout::{
    calculate_page_map, fits_on_page, measure_cover, measure_section, paginate, CoverMetrics,
    px_to_pt, DataRange, PageContent, PageGeometry, PageMap, PagePlacement, RenderConfig,
};
pub use report::{
    fingerprint, PaginationRequest, PersonnelRoster, ReportConfig, ReportData, ReportShape,
    Section, SectionKind, Spacing, SpacingPreset,
};

use tracing::debug;

/// Decode a request and check that its page geometry is usable
pub fn parse_request(json: &str) -> Result<PaginationRequest> {
    let request: PaginationRequest = serde_json::from_str(json)?;
    validate_config(&request.config)?;
    Ok(request)
}

/// Check that the page leaves room for content and that the cover fits on page 1
pub fn validate_config(config: &ReportConfig) -> Result<()> {
    let geometry = &config.geometry;
    if !geometry.is_valid() {
        return Err(PaginationError::InvalidGeometry {
            width: geometry.usable_width(),
            height: geometry.content_budget(),
        });
    }

    let cover = measure_cover(config).total();
    if cover > geometry.content_budget() {
        return Err(PaginationError::InvalidGeometry {
            width: geometry.usable_width(),
            height: geometry.content_budget() - cover,
        });
    }
    Ok(())
}

/// Memoizes the last page map, keyed on [`fingerprint`]
#[derive(Debug, Default)]
pub struct PageMapCache {
    cached: Option<(u64, PageMap)>,
}

impl PageMapCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the page map for these inputs, recomputing only when the
    /// fingerprint differs from the cached one
    pub fn page_map(&mut self, config: &ReportConfig, shape: &ReportShape) -> &PageMap {
        let key = fingerprint(config, shape);

        let stale = self.cached.as_ref().map_or(true, |(cached, _)| *cached != key);
        if stale {
            debug!(fingerprint = key, "page map cache miss");
            self.cached = None;
        } else {
            debug!(fingerprint = key, "page map cache hit");
        }

        let (_, map) = self
            .cached
            .get_or_insert_with(|| (key, calculate_page_map(config, shape)));
        map
    }

    /// Page map for a decoded request
    pub fn paginate(&mut self, request: &PaginationRequest) -> &PageMap {
        let shape = request.shape();
        self.page_map(&request.config, &shape)
    }

    /// Fingerprint of the cached map, if any
    pub fn last_fingerprint(&self) -> Option<u64> {
        self.cached.as_ref().map(|(key, _)| *key)
    }

    /// Drop the cached map
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}
