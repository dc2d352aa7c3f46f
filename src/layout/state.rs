//! Page accumulator threaded through the calculator
//!
//! Every step takes the state by value and hands back the successor, so the
//! main loop stays a fold over sections and splitters cannot hold on to a
//! stale page.

use tracing::trace;

use crate::layout::page_map::{PageContent, PagePlacement};

/// The page being filled plus every page closed so far
#[derive(Debug, Clone)]
pub struct PageState {
    current: PageContent,
    finished: Vec<PageContent>,
    content_budget: f32,
}

impl PageState {
    /// Start on page 1 with the cover already in place
    pub fn start(cover_height: f32, content_budget: f32) -> Self {
        Self {
            current: PageContent::cover(cover_height, content_budget),
            finished: Vec::new(),
            content_budget,
        }
    }

    /// Height left on the current page
    pub fn available(&self) -> f32 {
        self.current.available_height
    }

    pub fn page_number(&self) -> usize {
        self.current.page_number
    }

    /// Current page has neither cover nor placements
    pub fn is_blank(&self) -> bool {
        self.current.is_blank()
    }

    pub fn fits(&self, height: f32) -> bool {
        height <= self.current.available_height
    }

    /// Put a placement on the current page
    ///
    /// A placement taller than what is left is still recorded whole; the
    /// page's budget saturates instead of going negative.
    pub fn place(mut self, mut placement: PagePlacement) -> (Self, PagePlacement) {
        placement.page_number = self.current.page_number;

        let consumed = placement.height.min(self.current.available_height).max(0.0);
        self.current.used_height += consumed;
        self.current.available_height -= consumed;
        self.current.placements.push(placement.clone());

        (self, placement)
    }

    /// Close the current page and open a fresh one
    ///
    /// Breaking a blank page is a no-op, so page numbers never skip.
    pub fn break_page(mut self) -> Self {
        if self.current.is_blank() {
            return self;
        }

        let next = PageContent::blank(self.current.page_number + 1, self.content_budget);
        let closed = std::mem::replace(&mut self.current, next);
        trace!(
            page = closed.page_number,
            placements = closed.placements.len(),
            used = closed.used_height,
            "page closed"
        );
        self.finished.push(closed);
        self
    }

    /// Close out and return every page with content
    pub fn finish(mut self) -> Vec<PageContent> {
        if self.current.has_content() {
            self.finished.push(self.current);
        }
        self.finished
    }
}
