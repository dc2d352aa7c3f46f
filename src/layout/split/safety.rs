//! Safety section splitting
//!
//! Layout of the section, top to bottom: topic and statistics header, an
//! optional observations table, and the narrative footer. The table is the
//! only part that splits; the footer moves to its own page when it cannot
//! follow the last rows.

use tracing::trace;

use crate::layout::constants::{
    SAFETY_HEADER_PX, SAFETY_OBSERVATION_HEADER_PX, SAFETY_OBSERVATION_ROW_PX, SECTION_HEADER_PX,
};
use crate::layout::measure::{gap_pt, safety_footer_px, scaled_pt};
use crate::layout::page_map::{footer_id, PagePlacement};
use crate::layout::split::rows_that_fit;
use crate::layout::state::PageState;
use crate::report::{ReportShape, Section, Spacing};

/// Heights used by the safety splitter, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafetyMetrics {
    /// Section header, topic and statistics, observations column header
    pub first_overhead: f32,
    /// Observations column header alone
    pub continuation_overhead: f32,
    pub row: f32,
    pub footer: f32,
    pub gap: f32,
}

impl SafetyMetrics {
    pub fn new(spacing: &Spacing, shape: &ReportShape) -> Self {
        Self {
            first_overhead: scaled_pt(
                SECTION_HEADER_PX + SAFETY_HEADER_PX + SAFETY_OBSERVATION_HEADER_PX,
                spacing,
            ),
            continuation_overhead: scaled_pt(SAFETY_OBSERVATION_HEADER_PX, spacing),
            row: scaled_pt(SAFETY_OBSERVATION_ROW_PX, spacing),
            footer: scaled_pt(safety_footer_px(shape), spacing),
            gap: gap_pt(spacing),
        }
    }

    /// Header and footer with no observations table
    pub fn without_observations(&self) -> f32 {
        self.first_overhead - self.continuation_overhead + self.footer
    }
}

/// Place the safety section, splitting its observations across pages
pub fn split_safety(
    section: &Section,
    state: PageState,
    spacing: &Spacing,
    shape: &ReportShape,
) -> (PageState, Vec<PagePlacement>) {
    let metrics = SafetyMetrics::new(spacing, shape);

    if shape.observation_count == 0 {
        let height = metrics.without_observations() + metrics.gap;
        let state = if state.fits(height) {
            state
        } else {
            state.break_page()
        };
        let fragment = PagePlacement::fragment(&section.id, 0, height).with_render_config(true, true);
        let (state, placed) = state.place(fragment);
        return (state, vec![placed]);
    }

    split_observations(section, state, &metrics, shape.observation_count)
}

fn split_observations(
    section: &Section,
    mut state: PageState,
    metrics: &SafetyMetrics,
    total: usize,
) -> (PageState, Vec<PagePlacement>) {
    let mut placements = Vec::new();
    let mut cursor = 0;
    let mut index = 0;

    loop {
        let first = index == 0;
        let overhead = if first {
            metrics.first_overhead
        } else {
            metrics.continuation_overhead
        };

        if state.available() < overhead + metrics.row && !state.is_blank() {
            state = state.break_page();
        }

        // A fresh page takes at least one row, whatever its size
        let capacity = rows_that_fit(state.available() - overhead, metrics.row).max(1);
        let remaining = total - cursor;

        if remaining <= capacity {
            let body = overhead + remaining as f32 * metrics.row;

            if body + metrics.footer <= state.available() {
                let fragment =
                    PagePlacement::fragment(&section.id, index, body + metrics.footer + metrics.gap)
                        .with_range(cursor, total)
                        .with_render_config(first, true);
                let (next, placed) = state.place(fragment);
                trace!(section = %placed.section_id, page = placed.page_number, start = cursor, end = total, "observations placed with footer");
                placements.push(placed);
                return (next, placements);
            }

            let rows = PagePlacement::fragment(&section.id, index, body)
                .with_range(cursor, total)
                .with_render_config(first, false);
            let (next, placed) = state.place(rows);
            placements.push(placed);

            let footer = PagePlacement {
                section_id: footer_id(&section.id),
                continues_from_previous: true,
                ..PagePlacement::whole(&section.id, metrics.footer + metrics.gap)
            }
            .with_range(total, total)
            .with_render_config(false, true);
            let (next, placed) = next.break_page().place(footer);
            trace!(section = %placed.section_id, page = placed.page_number, "narrative footer moved to its own page");
            placements.push(placed);
            return (next, placements);
        }

        let end = cursor + capacity;
        let fragment =
            PagePlacement::fragment(&section.id, index, overhead + capacity as f32 * metrics.row)
                .with_range(cursor, end)
                .with_render_config(first, false);
        let (next, placed) = state.place(fragment);
        trace!(section = %placed.section_id, page = placed.page_number, start = cursor, end, "observations placed");
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

    fn spacing() -> Spacing {
        Spacing::new(SpacingPreset::Standard, 0.0)
    }

    fn observations(count: usize) -> ReportShape {
        ReportShape {
            observation_count: count,
            ..ReportShape::default()
        }
    }

    #[test]
    fn test_no_observations_single_placement() {
        let state = PageState::start(264.0, 696.0);
        let (_, placements) =
            split_safety(&Section::new("safety", 0), state, &spacing(), &observations(0));

        assert_eq!(placements.len(), 1);
        let config = placements[0].render_config.unwrap();
        assert!(config.show_header && config.show_footer);
        assert!(placements[0].data_range.is_none());
        assert_eq!(placements[0].page_number, 1);
    }

    #[test]
    fn test_no_observations_moves_when_short() {
        let state = PageState::start(650.0, 696.0);
        let (_, placements) =
            split_safety(&Section::new("safety", 0), state, &spacing(), &observations(0));
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].page_number, 2);
    }

    #[test]
    fn test_observations_with_footer_on_same_page() {
        let state = PageState::start(0.0, 696.0);
        let (_, placements) =
            split_safety(&Section::new("safety", 0), state, &spacing(), &observations(3));
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].data_range.unwrap().len(), 3);
        let config = placements[0].render_config.unwrap();
        assert!(config.show_header && config.show_footer);
    }

    #[test]
    fn test_footer_moves_to_next_page() {
        let metrics = SafetyMetrics::new(&spacing(), &observations(1));
        // Exactly room for header and four rows, not for the footer
        let budget = 696.0;
        let room = metrics.first_overhead + 4.0 * metrics.row;
        let state = PageState::start(budget - room, budget);

        let (_, placements) =
            split_safety(&Section::new("safety", 0), state, &spacing(), &observations(4));
        assert_eq!(placements.len(), 2);

        let rows = &placements[0];
        assert_eq!(rows.page_number, 1);
        assert_eq!(rows.data_range.unwrap().len(), 4);
        assert!(!rows.render_config.unwrap().show_footer);

        let footer = &placements[1];
        assert_eq!(footer.section_id, "safety_footer");
        assert_eq!(footer.page_number, 2);
        assert!(footer.data_range.unwrap().is_empty());
        assert_eq!(footer.data_range.unwrap().start, 4);
        let config = footer.render_config.unwrap();
        assert!(!config.show_header && config.show_footer);
    }

    #[test]
    fn test_observations_continue_with_table_header_only() {
        let state = PageState::start(264.0, 696.0);
        let (_, placements) =
            split_safety(&Section::new("safety", 0), state, &spacing(), &observations(60));

        assert!(placements.len() >= 3);
        assert_eq!(placements[0].section_id, "safety");
        assert_eq!(placements[1].section_id, "safety_cont_1");
        assert!(placements[0].render_config.unwrap().show_header);
        assert!(placements[1..].iter().all(|p| !p.render_config.unwrap().show_header));

        let mut cursor = 0;
        for p in &placements {
            let range = p.data_range.unwrap();
            assert_eq!(range.start, cursor);
            cursor = range.end;
        }
        assert_eq!(cursor, 60);
    }

    #[test]
    fn test_near_full_first_page_starts_fresh() {
        // 5pt left on page 1: not even the header fits
        let state = PageState::start(691.0, 696.0);
        let (_, placements) =
            split_safety(&Section::new("safety", 0), state, &spacing(), &observations(2));

        assert_eq!(placements[0].page_number, 2);
        assert_eq!(placements[0].section_id, "safety");
        assert!(!placements[0].continues_from_previous);
        assert_eq!(placements[0].data_range.unwrap().start, 0);
        assert!(placements[0].render_config.unwrap().show_header);
    }
}
