//! Photo gallery splitting
//!
//! A gallery is a run of fixed-size grid pages holding up to
//! [`PHOTOS_PER_PAGE`] photos each. Grids are atomic: one never straddles a
//! page break.

use tracing::trace;

use crate::layout::constants::{PHOTOS_PER_PAGE, PHOTO_GRID_PAGE_PX, SECTION_HEADER_PX};
use crate::layout::measure::{gap_pt, scaled_pt};
use crate::layout::page_map::PagePlacement;
use crate::layout::state::PageState;
use crate::report::{ReportShape, Section, Spacing};

/// Place every photo grid of a gallery, breaking pages between grids
///
/// A gallery without photos produces no placement.
pub fn split_gallery(
    section: &Section,
    mut state: PageState,
    spacing: &Spacing,
    shape: &ReportShape,
) -> (PageState, Vec<PagePlacement>) {
    let photos = shape.photo_count;
    let grids = photos.div_ceil(PHOTOS_PER_PAGE);
    let mut placements = Vec::with_capacity(grids);

    let grid_height = scaled_pt(PHOTO_GRID_PAGE_PX, spacing);
    let header = scaled_pt(SECTION_HEADER_PX, spacing);

    for index in 0..grids {
        let mut height = grid_height;
        if index == 0 {
            height += header;
        }
        if index + 1 == grids {
            height += gap_pt(spacing);
        }

        if !state.fits(height) {
            state = state.break_page();
        }

        let start = index * PHOTOS_PER_PAGE;
        let end = (start + PHOTOS_PER_PAGE).min(photos);
        let fragment = PagePlacement::fragment(&section.id, index, height).with_range(start, end);

        let (next, placed) = state.place(fragment);
        trace!(section = %placed.section_id, page = placed.page_number, start, end, "photo grid placed");
        state = next;
        placements.push(placed);
    }

    (state, placements)
}
