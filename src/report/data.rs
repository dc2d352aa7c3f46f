//! Report content as supplied by the host application
//!
//! Record contents are opaque to pagination: only collection sizes and text
//! lengths influence page breaks, so records are kept as raw JSON values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::report::ReportConfig;

/// One opaque record (a photo, a manpower line, an invoice...)
pub type Record = Value;

/// The content record driving height estimates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportData {
    pub photos: Vec<Record>,
    pub weather: Vec<Record>,
    pub executive_summary: String,
    pub safety_narrative: String,
    pub safety_observations: Vec<Record>,
    pub manpower: Vec<Record>,
    pub equipment: Vec<Record>,
    pub materials: Vec<Record>,
    pub procurement: Vec<Record>,
    pub invoices: Vec<Record>,
}

/// Externally supplied personnel roster, split in three independent groups
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonnelRoster {
    pub contractor: Vec<Record>,
    pub subcontractor: Vec<Record>,
    pub inspection: Vec<Record>,
}

impl PersonnelRoster {
    /// Group sizes in a fixed order
    pub fn group_sizes(&self) -> [usize; 3] {
        [
            self.contractor.len(),
            self.subcontractor.len(),
            self.inspection.len(),
        ]
    }
}

/// Everything one pagination call needs, as received over a JSON boundary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationRequest {
    #[serde(default)]
    pub config: ReportConfig,
    #[serde(default)]
    pub data: ReportData,
    #[serde(default)]
    pub roster: Option<PersonnelRoster>,
    /// Itemized bid-items baseline
    #[serde(default)]
    pub bid_items: Option<Vec<Record>>,
}
