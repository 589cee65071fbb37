//! Page slicing over an ordered record list.
//!
//! Pages are 1-based. The window helper mirrors the page-number strip of the
//! listing views: up to seven numbers, collapsing the rest into gaps.

use crate::{DEFAULT_PER_PAGE, MAX_VISIBLE_PAGES};

use serde::Serialize;

/// One page of results plus the numbers needed to render navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Entry in a page-number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PageSlot {
    Number(usize),
    Gap,
}

/// Slice `items` down to the requested page.
///
/// `page` 0 is treated as 1 and `per_page` 0 as [`DEFAULT_PER_PAGE`]. A page
/// past the end is empty but still reports the real totals.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Page<T> {
    let page = page.max(1);
    let per_page = if per_page == 0 {
        DEFAULT_PER_PAGE
    } else {
        per_page
    };
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);

    let start = (page - 1).saturating_mul(per_page);
    let items = items.into_iter().skip(start).take(per_page).collect();

    Page {
        items,
        page,
        per_page,
        total_items,
        total_pages,
    }
}

/// Page numbers to show around `current`.
///
/// Empty when there is at most one page.
pub fn page_window(current: usize, total_pages: usize) -> Vec<PageSlot> {
    if total_pages <= 1 {
        return Vec::new();
    }

    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(PageSlot::Number).collect();
    }

    let mut slots = Vec::with_capacity(MAX_VISIBLE_PAGES);
    if current <= 3 {
        slots.extend((1..=5).map(PageSlot::Number));
        slots.push(PageSlot::Gap);
        slots.push(PageSlot::Number(total_pages));
    } else if current >= total_pages - 2 {
        slots.push(PageSlot::Number(1));
        slots.push(PageSlot::Gap);
        slots.extend((total_pages - 4..=total_pages).map(PageSlot::Number));
    } else {
        slots.push(PageSlot::Number(1));
        slots.push(PageSlot::Gap);
        slots.extend((current - 1..=current + 1).map(PageSlot::Number));
        slots.push(PageSlot::Gap);
        slots.push(PageSlot::Number(total_pages));
    }
    slots
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Transform the items while keeping the page numbers
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}
