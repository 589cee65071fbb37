pub mod codec;
pub mod error;
pub mod models;
pub mod pagination;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::search_field::SearchField;
pub use models::user_record::{UserRecord, new_record_id};
pub use pagination::{Page, PageSlot, page_window, paginate};

/// Records shown per page when the caller does not choose a page size
pub const DEFAULT_PER_PAGE: usize = 12;

/// Page-number buttons shown before the window collapses into gaps
const MAX_VISIBLE_PAGES: usize = 7;
