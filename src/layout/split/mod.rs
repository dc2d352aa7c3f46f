//! Splitters for sections whose content can span several pages
//!
//! Each splitter is a pure function of `(section, page state, content)` that
//! returns the successor page state and the fragments it placed, in data
//! order.

mod gallery;
mod safety;
mod table;

pub use gallery::split_gallery;
pub use safety::{split_safety, SafetyMetrics};
pub use table::{split_table, TableProfile};

/// Whole rows of height `row` fitting in `space`, clamped at zero
pub(crate) fn rows_that_fit(space: f32, row: f32) -> usize {
    if space <= 0.0 || row <= 0.0 {
        return 0;
    }
    (space / row).floor() as usize
}
