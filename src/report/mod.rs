//! Report inputs: configuration, content and its structural shape

mod config;
mod data;
mod section;
mod shape;

pub use config::{Appearance, ReportConfig, Spacing, SpacingPreset};
pub use data::{PaginationRequest, PersonnelRoster, Record, ReportData};
pub use section::{Section, SectionKind};
pub use shape::{fingerprint, ReportShape};

impl PaginationRequest {
    /// Shape of this request's content, auxiliary records included
    pub fn shape(&self) -> ReportShape {
        ReportShape::from_sources(&self.data, self.roster.as_ref(), self.bid_items.as_deref())
    }
}
