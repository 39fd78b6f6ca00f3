//! Pagination
//!
//! [`paginate`] is the stateless slice; [`Pager`] adds the current page and
//! snaps back to the first page whenever the list it pages over changes.

use std::{
    hash::{Hash, Hasher},
    ops::RangeInclusive,
};

use rustc_hash::FxHasher;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// The `page`-th slice of `page_size` items (1-based), clipped to bounds.
///
/// Page 0 is treated as page 1. A page size of 0 yields nothing.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    if page_size == 0 {
        return &[];
    }

    let len = items.len();
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);

    items.get(start..end).unwrap_or_default()
}

/// Length and content hash of the list last observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fingerprint {
    len: usize,
    hash: u64,
}

impl Fingerprint {
    fn of<T: Hash>(items: &[T]) -> Self {
        let mut hasher = FxHasher::default();
        items.hash(&mut hasher);

        Self {
            len: items.len(),
            hash: hasher.finish(),
        }
    }
}

/// Current page over a list that may change underneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    current_page: usize,
    total_items: usize,
    fingerprint: Option<Fingerprint>,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    /// Start on page 1 with nothing observed.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            current_page: 1,
            total_items: 0,
            fingerprint: None,
        }
    }

    /// Record the list being paged. Returns `true` if the list changed since
    /// the previous call, in which case the pager is back on page 1.
    pub fn observe<T: Hash>(&mut self, items: &[T]) -> bool {
        let fingerprint = Fingerprint::of(items);
        let changed = self.fingerprint != Some(fingerprint);

        self.total_items = items.len();

        if changed {
            self.fingerprint = Some(fingerprint);
            self.current_page = 1;
        }

        changed
    }

    /// The current 1-based page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Items per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Length of the observed list.
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Number of pages needed for the observed list.
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            0
        } else {
            self.total_items.div_ceil(self.page_size)
        }
    }

    /// Jump to `page`. Pages outside `1..=total_pages` are ignored.
    pub fn go_to(&mut self, page: usize) -> bool {
        if (1..=self.total_pages()).contains(&page) {
            self.current_page = page;
            true
        } else {
            false
        }
    }

    /// Advance one page if possible.
    pub fn next_page(&mut self) -> bool {
        self.go_to(self.current_page.saturating_add(1))
    }

    /// Go back one page if possible.
    pub fn prev_page(&mut self) -> bool {
        self.go_to(self.current_page.saturating_sub(1))
    }

    /// Check whether a later page exists.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Check whether an earlier page exists.
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// 1-based positions shown on the current page, for "showing x-y of n".
    pub fn visible_range(&self) -> Option<RangeInclusive<usize>> {
        let first = self.current_page.saturating_sub(1).saturating_mul(self.page_size);
        let last = first.saturating_add(self.page_size).min(self.total_items);

        (first < last).then(|| first.saturating_add(1)..=last)
    }

    /// The current page of `items`.
    pub fn page_of<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        paginate(items, self.page_size, self.current_page)
    }
}
