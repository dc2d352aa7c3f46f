//! Report sections and their kinds

use serde::{Deserialize, Serialize};

/// A report content block as configured by the editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Stable identifier (e.g. `"manpower"`)
    pub id: String,
    /// Display label
    #[serde(default)]
    pub label: String,
    /// Whether the section is part of the report
    #[serde(default = "default_included")]
    pub included: bool,
    /// Display order, unique among visible sections
    #[serde(default)]
    pub order: i32,
}

fn default_included() -> bool {
    true
}

impl Section {
    /// Create an included section
    pub fn new(id: impl Into<String>, order: i32) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            included: true,
            order,
        }
    }

    /// Builder-style label override
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Builder-style inclusion flag
    pub fn with_included(mut self, included: bool) -> Self {
        self.included = included;
        self
    }

    /// Resolve the section's kind from its identifier
    pub fn kind(&self) -> SectionKind {
        SectionKind::from_id(&self.id)
    }
}

/// Known section types, keyed by identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    ExecutiveSummary,
    Weather,
    Manpower,
    Equipment,
    Materials,
    Procurement,
    Invoices,
    Personnel,
    Photos,
    Progress,
    Safety,
    /// Anything not in the table above
    Other,
}

impl SectionKind {
    /// Every kind with a canonical identifier
    pub const KNOWN: [SectionKind; 11] = [
        SectionKind::ExecutiveSummary,
        SectionKind::Weather,
        SectionKind::Manpower,
        SectionKind::Equipment,
        SectionKind::Materials,
        SectionKind::Procurement,
        SectionKind::Invoices,
        SectionKind::Personnel,
        SectionKind::Photos,
        SectionKind::Progress,
        SectionKind::Safety,
    ];

    /// Map a section identifier to its kind
    pub fn from_id(id: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|kind| kind.id() == Some(id))
            .unwrap_or(SectionKind::Other)
    }

    /// Canonical identifier, if the kind is a known one
    pub fn id(&self) -> Option<&'static str> {
        match self {
            SectionKind::ExecutiveSummary => Some("executiveSummary"),
            SectionKind::Weather => Some("weather"),
            SectionKind::Manpower => Some("manpower"),
            SectionKind::Equipment => Some("equipment"),
            SectionKind::Materials => Some("materials"),
            SectionKind::Procurement => Some("procurement"),
            SectionKind::Invoices => Some("invoices"),
            SectionKind::Personnel => Some("personnel"),
            SectionKind::Photos => Some("photos"),
            SectionKind::Progress => Some("progress"),
            SectionKind::Safety => Some("safety"),
            SectionKind::Other => None,
        }
    }

    /// Sections rendered as one row per record
    pub fn is_record_table(&self) -> bool {
        matches!(
            self,
            SectionKind::Manpower
                | SectionKind::Equipment
                | SectionKind::Materials
                | SectionKind::Procurement
                | SectionKind::Invoices
        )
    }
}
