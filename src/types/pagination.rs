//! Pagination state handed to the navigation renderer.

use serde::{Deserialize, Serialize};

/// Current page and page count of an already paginated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    /// Current page (1-indexed)
    pub number: u32,
    pub num_pages: u32,
}

impl PageState {
    pub fn new(number: u32, num_pages: u32) -> Self {
        Self { number, num_pages }
    }

    /// Derive the page count from item totals.
    ///
    /// A zero `per_page` yields zero pages.
    pub fn from_totals(number: u32, per_page: u64, total: u64) -> Self {
        let num_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Self {
            number,
            num_pages: u32::try_from(num_pages).unwrap_or(u32::MAX),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }
}
