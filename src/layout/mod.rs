//! Pagination engine: measurement, splitting and page-map calculation

pub mod constants;
mod cover;
mod measure;
mod page_map;
mod pagination;
pub mod split;
mod state;

pub use constants::{px_to_pt, pt_to_px, PageGeometry};
pub use cover::{measure_cover, CoverMetrics};
pub use measure::{measure_section, record_count};
pub use page_map::{
    continuation_id, fits_on_page, fits_on_page_with_headroom, footer_id, DataRange, PageContent,
    PageMap, PagePlacement, RenderConfig,
};
pub use pagination::{calculate_page_map, paginate};
pub use state::PageState;
