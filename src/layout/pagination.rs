//! Page-map calculation for multi-page reports

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::layout::cover::measure_cover;
use crate::layout::measure::{measure_section, record_count};
use crate::layout::page_map::{PageMap, PagePlacement};
use crate::layout::split::{split_gallery, split_safety, split_table, TableProfile};
use crate::layout::state::PageState;
use crate::report::{PaginationRequest, ReportConfig, ReportShape, Section, SectionKind, Spacing};

/// How a section is put on pages
#[derive(Debug, Clone, Copy, PartialEq)]
enum Placer {
    /// Placed whole, on the current page or the next one
    Ordinary,
    Gallery,
    Table(TableProfile),
    Safety,
}

impl Placer {
    fn for_section(section: &Section, shape: &ReportShape) -> Self {
        match section.kind() {
            SectionKind::Photos => Placer::Gallery,
            SectionKind::Safety => Placer::Safety,
            SectionKind::Progress => {
                Placer::Table(TableProfile::for_kind(SectionKind::Progress, shape))
            }
            // Empty resource tables keep their "no entries" row, placed whole
            kind if kind.is_record_table() && record_count(kind, shape) > 0 => {
                Placer::Table(TableProfile::for_kind(kind, shape))
            }
            _ => Placer::Ordinary,
        }
    }
}

/// Compute the page map for a configuration and content shape
pub fn calculate_page_map(config: &ReportConfig, shape: &ReportShape) -> PageMap {
    let visible = config.visible_sections();
    let cover = measure_cover(config);
    let initial = PageState::start(cover.total(), config.geometry.content_budget());

    let (state, section_starts) = visible.iter().fold(
        (initial, FxHashMap::default()),
        |(state, mut starts), section| {
            let (state, placements) = place_section(section, state, &config.spacing, shape);
            if let Some(first) = placements.into_iter().next() {
                starts.entry(section.id.clone()).or_insert(first);
            }
            (state, starts)
        },
    );

    let pages = state.finish();
    debug!(
        pages = pages.len(),
        sections = visible.len(),
        cover = cover.total(),
        "page map computed"
    );

    PageMap {
        total_pages: pages.len(),
        pages,
        section_starts,
    }
}

/// Compute the page map for a full request
pub fn paginate(request: &PaginationRequest) -> PageMap {
    calculate_page_map(&request.config, &request.shape())
}

/// One step of the main loop
fn place_section(
    section: &Section,
    state: PageState,
    spacing: &Spacing,
    shape: &ReportShape,
) -> (PageState, Vec<PagePlacement>) {
    match Placer::for_section(section, shape) {
        Placer::Gallery => split_gallery(section, state, spacing, shape),
        Placer::Safety => split_safety(section, state, spacing, shape),
        Placer::Table(profile) => split_table(section, state, spacing, &profile),
        Placer::Ordinary => {
            let height = measure_section(section, spacing, shape);
            let state = if state.fits(height) {
                state
            } else {
                state.break_page()
            };
            let (state, placed) = state.place(PagePlacement::whole(&section.id, height));
            (state, vec![placed])
        }
    }
}
