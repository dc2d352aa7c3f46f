//! Report configuration: section list, spacing and cover appearance

use serde::{Deserialize, Serialize};

use crate::layout::PageGeometry;
use crate::report::Section;

/// Named density setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingPreset {
    Compact,
    #[default]
    Standard,
    Relaxed,
}

impl SpacingPreset {
    /// Scale applied to every estimated height
    pub fn multiplier(&self) -> f32 {
        match self {
            SpacingPreset::Compact => 0.85,
            SpacingPreset::Standard => 1.0,
            SpacingPreset::Relaxed => 1.15,
        }
    }
}

/// Spacing preset plus the gap added after each placed section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spacing {
    #[serde(default)]
    pub preset: SpacingPreset,
    /// Inter-section gap in display pixels
    #[serde(default = "default_section_gap")]
    pub section_gap: f32,
}

fn default_section_gap() -> f32 {
    crate::layout::constants::DEFAULT_SECTION_GAP_PX
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            preset: SpacingPreset::default(),
            section_gap: default_section_gap(),
        }
    }
}

impl Spacing {
    pub fn new(preset: SpacingPreset, section_gap: f32) -> Self {
        Self {
            preset,
            section_gap,
        }
    }

    pub fn multiplier(&self) -> f32 {
        self.preset.multiplier()
    }
}

/// Cover appearance options that change the first page's fixed block
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appearance {
    /// Photos selected for the cover strip
    #[serde(default)]
    pub cover_photo_ids: Vec<String>,
}

impl Appearance {
    pub fn has_photo_strip(&self) -> bool {
        !self.cover_photo_ids.is_empty()
    }
}

/// Everything about the report that is not content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportConfig {
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub spacing: Spacing,
    #[serde(default)]
    pub appearance: Appearance,
    #[serde(default)]
    pub geometry: PageGeometry,
}

impl ReportConfig {
    /// Create a config with the given sections and default everything else
    pub fn with_sections(sections: Vec<Section>) -> Self {
        Self {
            sections,
            ..Self::default()
        }
    }

    /// Included sections in ascending display order
    ///
    /// The sort is stable, so sections sharing an order value keep their
    /// list position.
    pub fn visible_sections(&self) -> Vec<&Section> {
        let mut visible: Vec<&Section> = self.sections.iter().filter(|s| s.included).collect();
        visible.sort_by_key(|s| s.order);
        visible
    }
}
