//! Page map: the per-page placement plan shared by preview and export

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::layout::constants::MIN_FIT_HEADROOM_PT;

/// Half-open `[start, end)` index interval into a section's records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataRange {
    pub start: usize,
    pub end: usize,
}

impl DataRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Which chrome a consumer should draw for a fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    pub show_header: bool,
    pub show_footer: bool,
}

impl RenderConfig {
    pub fn new(show_header: bool, show_footer: bool) -> Self {
        Self {
            show_header,
            show_footer,
        }
    }
}

/// One section (or fragment of a section) on one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagePlacement {
    /// Section identifier, suffixed for continuation fragments
    pub section_id: String,
    /// Identifier of the section this fragment belongs to
    pub source_id: String,
    pub page_number: usize,
    /// Estimated height in points
    pub height: f32,
    pub continues_from_previous: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_range: Option<DataRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_config: Option<RenderConfig>,
}

impl PagePlacement {
    /// A whole, unsplit section
    pub fn whole(section_id: &str, height: f32) -> Self {
        Self {
            section_id: section_id.to_string(),
            source_id: section_id.to_string(),
            page_number: 0,
            height,
            continues_from_previous: false,
            data_range: None,
            render_config: None,
        }
    }

    /// Fragment `index` of a split section; fragment 0 keeps the plain id
    pub fn fragment(source_id: &str, index: usize, height: f32) -> Self {
        let section_id = if index == 0 {
            source_id.to_string()
        } else {
            continuation_id(source_id, index)
        };
        Self {
            section_id,
            source_id: source_id.to_string(),
            page_number: 0,
            height,
            continues_from_previous: index > 0,
            data_range: None,
            render_config: None,
        }
    }

    pub fn with_range(mut self, start: usize, end: usize) -> Self {
        self.data_range = Some(DataRange::new(start, end));
        self
    }

    pub fn with_render_config(mut self, show_header: bool, show_footer: bool) -> Self {
        self.render_config = Some(RenderConfig::new(show_header, show_footer));
        self
    }

    pub fn is_continuation(&self) -> bool {
        self.continues_from_previous
    }
}

/// Identifier of the `index`-th continuation fragment
pub fn continuation_id(source_id: &str, index: usize) -> String {
    format!("{}_cont_{}", source_id, index)
}

/// Identifier of a footer-only fragment
pub fn footer_id(source_id: &str) -> String {
    format!("{}_footer", source_id)
}

/// One output page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    /// 1-based
    pub page_number: usize,
    pub is_first_page: bool,
    pub placements: SmallVec<[PagePlacement; 4]>,
    pub used_height: f32,
    pub available_height: f32,
}

impl PageContent {
    /// Page 1, with the cover already consuming `cover_height`
    pub fn cover(cover_height: f32, content_budget: f32) -> Self {
        Self {
            page_number: 1,
            is_first_page: true,
            placements: SmallVec::new(),
            used_height: cover_height,
            available_height: (content_budget - cover_height).max(0.0),
        }
    }

    /// An empty page without cover
    pub fn blank(page_number: usize, content_budget: f32) -> Self {
        Self {
            page_number,
            is_first_page: page_number == 1,
            placements: SmallVec::new(),
            used_height: 0.0,
            available_height: content_budget,
        }
    }

    /// No cover and nothing placed yet
    pub fn is_blank(&self) -> bool {
        !self.is_first_page && self.placements.is_empty()
    }

    /// Whether the page must appear in the output
    pub fn has_content(&self) -> bool {
        self.is_first_page || !self.placements.is_empty()
    }
}

/// Full pagination result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMap {
    pub total_pages: usize,
    pub pages: Vec<PageContent>,
    /// First placement of every placed section, keyed by section id
    pub section_starts: FxHashMap<String, PagePlacement>,
}

impl PageMap {
    /// Page a section starts on
    pub fn first_page_of(&self, section_id: &str) -> Option<usize> {
        self.section_starts.get(section_id).map(|p| p.page_number)
    }

    /// Every fragment of a section, in page order
    pub fn placements_for<'a>(
        &'a self,
        source_id: &'a str,
    ) -> impl Iterator<Item = &'a PagePlacement> + 'a {
        self.pages
            .iter()
            .flat_map(|page| page.placements.iter())
            .filter(move |p| p.source_id == source_id)
    }

    /// All placements in page order
    pub fn placements(&self) -> impl Iterator<Item = &PagePlacement> {
        self.pages.iter().flat_map(|page| page.placements.iter())
    }
}

/// Quick fit check with the default headroom
pub fn fits_on_page(height: f32, available: f32) -> bool {
    fits_on_page_with_headroom(height, available, MIN_FIT_HEADROOM_PT)
}

/// Quick fit check: a page below `min_headroom` accepts nothing
pub fn fits_on_page_with_headroom(height: f32, available: f32, min_headroom: f32) -> bool {
    if available < min_headroom {
        return false;
    }
    height <= available
}
