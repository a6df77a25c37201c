//! Pagination response models.

use serde::Serialize;
use utoipa::ToSchema;

use crate::pagination::PagedList;

/// Paginated list response
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedResponse<T: Serialize + ToSchema> {
    /// Whether the request was successful
    pub success: bool,
    /// List of items
    pub data: Vec<T>,
    /// Total number of items
    pub total: u64,
    /// Current page number
    pub page: u64,
    /// Items per page
    pub per_page: u64,
    /// Total number of pages
    pub total_pages: u64,
}

impl<T: Serialize + ToSchema> From<PagedList<T>> for PaginatedResponse<T> {
    fn from(list: PagedList<T>) -> Self {
        Self {
            success: true,
            data: list.items,
            total: list.total,
            page: list.page,
            per_page: list.per_page,
            total_pages: list.total_pages,
        }
    }
}
