use pc_core::{Page, PageSlot, UserRecord, page_window};

use serde::Serialize;

/// List of users response
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<UserRecord>,
    /// Matching records before pagination
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationDto>,
}

/// Page numbers for a paginated listing
#[derive(Debug, Serialize)]
pub struct PaginationDto {
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
    /// Page-number strip; gaps serialize as `null`
    pub pages: Vec<PageSlot>,
}

impl UserListResponse {
    pub fn all(users: Vec<UserRecord>) -> Self {
        Self {
            total: users.len(),
            users,
            pagination: None,
        }
    }
}

impl From<Page<UserRecord>> for UserListResponse {
    fn from(page: Page<UserRecord>) -> Self {
        let pagination = PaginationDto {
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
            has_previous: page.has_previous(),
            has_next: page.has_next(),
            pages: page_window(page.page, page.total_pages),
        };

        Self {
            users: page.items,
            total: page.total_items,
            pagination: Some(pagination),
        }
    }
}
