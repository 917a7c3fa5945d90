//! Page range selection for Digg-style navigation.
//!
//! Splits `1..=count` into the page groups worth showing: an optional leading
//! cap, a window around the current page, and an optional trailing cap. A
//! renderer places an ellipsis between consecutive groups.

use std::ops::RangeInclusive;

/// A contiguous, inclusive run of page numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageGroup {
    pub start: u32,
    pub end: u32,
}

impl PageGroup {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "empty page group {start}..={end}");
        Self { start, end }
    }

    /// Page numbers in this group, in order.
    pub fn pages(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }

    pub fn contains(&self, number: u32) -> bool {
        self.pages().contains(&number)
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

/// Every bound passed here lies within `1..=count`, so it fits a page number.
fn group(start: u64, end: u64) -> PageGroup {
    let narrow = |n: u64| u32::try_from(n).unwrap_or(u32::MAX);
    PageGroup::new(narrow(start), narrow(end))
}

/// Select the page groups to display.
///
/// Callers must uphold `1 <= current <= count`. When the current page sits
/// close to either edge the window is widened on the far side, so the number
/// of visible pages stays roughly constant.
///
/// ```
/// use paginav::domain::{select_ranges, PageGroup};
///
/// let groups = select_ranges(7, 20, 3, 1);
/// assert_eq!(
///     groups,
///     vec![PageGroup::new(1, 1), PageGroup::new(4, 10), PageGroup::new(20, 20)]
/// );
/// ```
pub fn select_ranges(current: u32, count: u32, adjacent: u32, caps: u32) -> Vec<PageGroup> {
    // Widening can double `adjacent`, so sums are taken in u64.
    let (current, count, caps) = (u64::from(current), u64::from(count), u64::from(caps));
    let mut adjacent = u64::from(adjacent);
    // Near-start wins when both edges are close.
    if current < adjacent + 1 {
        adjacent += adjacent - current + 1;
    } else if count - current < adjacent {
        adjacent += adjacent - (count - current);
    }

    let mut groups = Vec::with_capacity(3);

    let start = if current > 1 + adjacent + caps {
        if caps > 0 {
            groups.push(group(1, caps));
        }
        current - adjacent
    } else {
        1
    };

    let end = if current + adjacent < count.saturating_sub(caps) {
        current + adjacent
    } else {
        count
    };

    groups.push(group(start, end));

    if end != count && caps > 0 {
        groups.push(group(count - caps + 1, count));
    }

    tracing::debug!(
        current,
        count,
        adjacent,
        caps,
        groups = groups.len(),
        "selected page ranges"
    );

    groups
}
