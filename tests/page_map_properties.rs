//! Property tests for page-map invariants
//!
//! Run with: `cargo test --test page_map_properties`

use proptest::prelude::*;
use report_pagination::layout::record_count;
use report_pagination::{
    calculate_page_map, measure_cover, validate_config, PageGeometry, PageMap, ReportConfig,
    ReportShape, Section, SectionKind, Spacing, SpacingPreset,
};

/// Identifiers outside the known kinds, measured with the default base height
const CUSTOM_SECTION_IDS: &[&str] = &["siteSketch", "siteDiary"];

fn section_ids() -> Vec<&'static str> {
    SectionKind::KNOWN
        .iter()
        .filter_map(SectionKind::id)
        .chain(CUSTOM_SECTION_IDS.iter().copied())
        .collect()
}

// ═════════════════════════════════════════════════════════════════════════
// Strategies
// ═════════════════════════════════════════════════════════════════════════

fn preset_strategy() -> impl Strategy<Value = SpacingPreset> {
    prop_oneof![
        Just(SpacingPreset::Compact),
        Just(SpacingPreset::Standard),
        Just(SpacingPreset::Relaxed),
    ]
}

fn sections_strategy() -> impl Strategy<Value = Vec<Section>> {
    let ids = section_ids();
    let len = ids.len();
    (
        proptest::sample::subsequence(ids, 0..=len).prop_shuffle(),
        proptest::collection::vec(any::<bool>(), len),
    )
        .prop_map(|(ids, included)| {
            ids.into_iter()
                .enumerate()
                .map(|(order, id)| {
                    // Mostly included; exclusions exercise the filter
                    Section::new(id, order as i32).with_included(included[order] || order % 3 != 0)
                })
                .collect()
        })
}

/// Page sizes from index cards to tabloid, with assorted margins and footers
fn geometry_strategy() -> impl Strategy<Value = PageGeometry> {
    prop_oneof![
        Just(PageGeometry::default()),
        (
            200.0f32..1200.0,
            0.0f32..72.0,
            0.0f32..72.0,
            0.0f32..48.0,
        )
            .prop_map(|(page_height, margin_top, margin_bottom, footer_height)| {
                PageGeometry {
                    page_height,
                    margin_top,
                    margin_bottom,
                    footer_height,
                    ..PageGeometry::default()
                }
            }),
    ]
}

fn config_strategy() -> impl Strategy<Value = ReportConfig> {
    (
        sections_strategy(),
        preset_strategy(),
        0.0f32..40.0,
        any::<bool>(),
        geometry_strategy(),
    )
        .prop_map(|(sections, preset, gap, strip, geometry)| {
            let mut config = ReportConfig::with_sections(sections);
            config.spacing = Spacing::new(preset, gap);
            config.geometry = geometry;
            if strip {
                config.appearance.cover_photo_ids = vec!["cover-1".to_string()];
            }
            config
        })
        // Only configurations the request boundary accepts
        .prop_filter("cover must fit on page 1", |config| {
            validate_config(config).is_ok()
        })
}

fn shape_strategy() -> impl Strategy<Value = ReportShape> {
    (
        (0usize..60, 0usize..10, 0usize..3000, 0usize..2000, 0usize..90),
        (0usize..120, 0usize..40, 0usize..40, 0usize..40, 0usize..40),
        (0usize..150, proptest::option::of([0usize..30, 0usize..30, 0usize..30])),
    )
        .prop_map(
            |(
                (photos, weather, summary, narrative, observations),
                (manpower, equipment, materials, procurement, invoices),
                (bid_items, personnel),
            )| ReportShape {
                photo_count: photos,
                weather_days: weather,
                summary_len: summary,
                safety_narrative_len: narrative,
                observation_count: observations,
                manpower_count: manpower,
                equipment_count: equipment,
                materials_count: materials,
                procurement_count: procurement,
                invoice_count: invoices,
                bid_item_count: bid_items,
                personnel_groups: personnel,
            },
        )
}

fn map_for(config: &ReportConfig, shape: &ReportShape) -> PageMap {
    calculate_page_map(config, shape)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Page numbering
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pages_are_numbered_contiguously(config in config_strategy(), shape in shape_strategy()) {
        let map = map_for(&config, &shape);
        prop_assert_eq!(map.total_pages, map.pages.len());
        prop_assert!(map.total_pages >= 1);

        for (i, page) in map.pages.iter().enumerate() {
            prop_assert_eq!(page.page_number, i + 1);
            prop_assert_eq!(page.is_first_page, i == 0);
            if i > 0 {
                prop_assert!(!page.placements.is_empty(), "page {} is empty", page.page_number);
            }
            for placement in &page.placements {
                prop_assert_eq!(placement.page_number, page.page_number);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Height budgets
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn budgets_are_conserved_and_non_negative(config in config_strategy(), shape in shape_strategy()) {
        let map = map_for(&config, &shape);
        let budget = config.geometry.content_budget();

        for page in &map.pages {
            prop_assert!(page.available_height >= 0.0);
            let total = page.used_height + page.available_height;
            prop_assert!((total - budget).abs() < 0.05, "page {}: {} != {}", page.page_number, total, budget);
        }
    }

    #[test]
    fn first_page_stays_within_budget(config in config_strategy(), shape in shape_strategy()) {
        let map = map_for(&config, &shape);
        let budget = config.geometry.content_budget();
        prop_assert!(map.pages[0].used_height <= budget + 0.05);
    }

    #[test]
    fn first_page_carries_the_cover(config in config_strategy(), shape in shape_strategy()) {
        let map = map_for(&config, &shape);
        let cover = measure_cover(&config).total();
        prop_assert!(map.pages[0].used_height >= cover - 1e-3);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Split ranges
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn split_ranges_are_gap_free(config in config_strategy(), shape in shape_strategy()) {
        let map = map_for(&config, &shape);

        for section in config.visible_sections() {
            let ranges: Vec<_> = map
                .placements_for(&section.id)
                .filter_map(|p| p.data_range)
                .collect();
            if ranges.is_empty() {
                continue;
            }

            let mut cursor = 0;
            for range in &ranges {
                prop_assert_eq!(range.start, cursor, "{} has a gap or overlap", section.id);
                prop_assert!(range.end >= range.start);
                cursor = range.end;
            }
            prop_assert_eq!(cursor, record_count(section.kind(), &shape), "{} range does not cover all records", section.id);
        }
    }

    #[test]
    fn every_included_section_is_placed(config in config_strategy(), shape in shape_strategy()) {
        let map = map_for(&config, &shape);

        for section in config.visible_sections() {
            let omitted = match section.kind() {
                SectionKind::Photos => shape.photo_count == 0,
                SectionKind::Progress => shape.bid_item_count == 0,
                _ => false,
            };
            prop_assert_eq!(map.first_page_of(&section.id).is_some(), !omitted, "{}", section.id);
        }

        let excluded = config.sections.iter().filter(|s| !s.included);
        for section in excluded {
            prop_assert!(map.placements_for(&section.id).next().is_none());
        }
    }

    #[test]
    fn lookup_points_at_first_fragment(config in config_strategy(), shape in shape_strategy()) {
        let map = map_for(&config, &shape);
        for (id, start) in &map.section_starts {
            let first = map.placements_for(id).next();
            prop_assert_eq!(first, Some(start));
            prop_assert!(!start.continues_from_previous);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn calculation_is_idempotent(config in config_strategy(), shape in shape_strategy()) {
        let first = serde_json::to_string(&map_for(&config, &shape)).unwrap();
        let second = serde_json::to_string(&map_for(&config, &shape)).unwrap();
        prop_assert_eq!(first, second, "Two calls produced different page maps");
    }
}
