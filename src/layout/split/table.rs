//! Row-table splitting (bid items and record-backed resource tables)

use tracing::trace;

use crate::layout::constants::{
    base_height_px, px_to_pt, row_height_px, MIN_TABLE_ROWS_PER_PAGE, SECTION_HEADER_PX,
    TABLE_FOOTER_BUFFER_PX, TABLE_HEADER_PX,
};
use crate::layout::measure::{gap_pt, record_count, scaled_pt};
use crate::layout::page_map::PagePlacement;
use crate::layout::split::rows_that_fit;
use crate::layout::state::PageState;
use crate::report::{ReportShape, Section, SectionKind, Spacing};

/// Geometry of a splittable table, in display pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableProfile {
    /// Chrome above the rows on the first fragment (section header, KPIs)
    pub first_overhead_px: f32,
    /// Column header repeated on continuation fragments
    pub continuation_overhead_px: f32,
    pub row_px: f32,
    pub row_count: usize,
}

impl TableProfile {
    /// Profile of a table section for the given content
    pub fn for_kind(kind: SectionKind, shape: &ReportShape) -> Self {
        Self {
            first_overhead_px: SECTION_HEADER_PX + base_height_px(kind),
            continuation_overhead_px: TABLE_HEADER_PX,
            row_px: row_height_px(kind),
            row_count: record_count(kind, shape),
        }
    }
}

/// Spread a table's rows over as many pages as needed
///
/// Before rows go on a page, the page must hold the header plus
/// [`MIN_TABLE_ROWS_PER_PAGE`] rows and the footer buffer; otherwise the table
/// starts on a fresh page. An empty table produces no placement.
pub fn split_table(
    section: &Section,
    mut state: PageState,
    spacing: &Spacing,
    profile: &TableProfile,
) -> (PageState, Vec<PagePlacement>) {
    let total = profile.row_count;
    let mut placements = Vec::new();
    if total == 0 {
        return (state, placements);
    }

    let first_overhead = scaled_pt(profile.first_overhead_px, spacing);
    let continuation_overhead = scaled_pt(profile.continuation_overhead_px, spacing);
    let row = scaled_pt(profile.row_px, spacing);
    let footer_buffer = px_to_pt(TABLE_FOOTER_BUFFER_PX);

    let mut cursor = 0;
    let mut index = 0;

    loop {
        let overhead = if index == 0 {
            first_overhead
        } else {
            continuation_overhead
        };

        let threshold = overhead + MIN_TABLE_ROWS_PER_PAGE as f32 * row + footer_buffer;
        if state.available() < threshold && !state.is_blank() {
            state = state.break_page();
        }

        // A fresh page takes at least one row, whatever its size
        let capacity = rows_that_fit(state.available() - overhead - footer_buffer, row).max(1);
        let remaining = total - cursor;

        if remaining <= capacity {
            let height = overhead + remaining as f32 * row + gap_pt(spacing);
            let fragment = PagePlacement::fragment(&section.id, index, height)
                .with_range(cursor, total)
                .with_render_config(index == 0, true);
            let (next, placed) = state.place(fragment);
            trace!(section = %placed.section_id, page = placed.page_number, start = cursor, end = total, "table rows placed");
            placements.push(placed);
            return (next, placements);
        }

        let end = cursor + capacity;
        let height = overhead + capacity as f32 * row;
        let fragment = PagePlacement::fragment(&section.id, index, height)
            .with_range(cursor, end)
            .with_render_config(index == 0, false);
        let (next, placed) = state.place(fragment);
        trace!(section = %placed.section_id, page = placed.page_number, start = cursor, end, "table rows placed");
        placements.push(placed);

        cursor = end;
        index += 1;
        state = next.break_page();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::SpacingPreset;

    fn progress(rows: usize) -> TableProfile {
        TableProfile::for_kind(
            SectionKind::Progress,
            &ReportShape {
                bid_item_count: rows,
                ..ReportShape::default()
            },
        )
    }

    fn spacing() -> Spacing {
        Spacing::new(SpacingPreset::Standard, 0.0)
    }

    #[test]
    fn test_empty_table_places_nothing() {
        let state = PageState::start(264.0, 696.0);
        let (state, placements) =
            split_table(&Section::new("progress", 0), state, &spacing(), &progress(0));
        assert!(placements.is_empty());
        assert_eq!(state.page_number(), 1);
    }

    #[test]
    fn test_table_fits_on_one_page() {
        let state = PageState::start(264.0, 696.0);
        let (_, placements) =
            split_table(&Section::new("progress", 0), state, &spacing(), &progress(5));
        assert_eq!(placements.len(), 1);
        let only = &placements[0];
        assert_eq!(only.section_id, "progress");
        assert_eq!(only.data_range.map(|r| (r.start, r.end)), Some((0, 5)));
        let config = only.render_config.unwrap();
        assert!(config.show_header && config.show_footer);
    }

    #[test]
    fn test_rows_split_without_gaps() {
        let state = PageState::start(264.0, 696.0);
        let (_, placements) =
            split_table(&Section::new("progress", 0), state, &spacing(), &progress(80));

        assert!(placements.len() >= 2);
        let mut expected_start = 0;
        for (i, p) in placements.iter().enumerate() {
            let range = p.data_range.unwrap();
            assert_eq!(range.start, expected_start);
            assert!(!range.is_empty());
            assert_eq!(p.page_number, placements[0].page_number + i);
            expected_start = range.end;
        }
        assert_eq!(expected_start, 80);

        // KPI header only on the first fragment, footer only on the last
        let configs: Vec<_> = placements.iter().map(|p| p.render_config.unwrap()).collect();
        assert!(configs[0].show_header);
        assert!(configs[1..].iter().all(|c| !c.show_header));
        assert!(configs.last().unwrap().show_footer);
        assert!(configs[..configs.len() - 1].iter().all(|c| !c.show_footer));
    }

    #[test]
    fn test_short_page_is_skipped() {
        // 60pt left: below header + two rows + buffer
        let state = PageState::start(636.0, 696.0);
        let (_, placements) =
            split_table(&Section::new("progress", 0), state, &spacing(), &progress(3));
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].page_number, 2);
        assert!(!placements[0].continues_from_previous);
    }

    #[test]
    fn test_row_capacity_per_page() {
        // Fresh page: 696pt; continuation header 27pt, rows 21pt, buffer 18pt
        let state = PageState::start(696.0, 696.0).break_page();
        let profile = TableProfile {
            first_overhead_px: TABLE_HEADER_PX,
            continuation_overhead_px: TABLE_HEADER_PX,
            row_px: 28.0,
            row_count: 100,
        };
        let (_, placements) = split_table(&Section::new("manpower", 0), state, &spacing(), &profile);
        // floor((696 - 27 - 18) / 21) = 31
        assert_eq!(placements[0].data_range.unwrap().len(), 31);
        assert_eq!(placements[1].data_range.unwrap().len(), 31);
    }
}
