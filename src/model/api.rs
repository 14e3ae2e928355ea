use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::model::page::Paginated;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Standard list query parameters. Both are optional; defaults are page 1
/// with 10 entries.
#[derive(Deserialize)]
pub struct PaginationQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    10
}

/// One page of DTOs plus pagination metadata.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct PaginatedDto<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T> PaginatedDto<T> {
    /// Converts a domain page by mapping each record into its DTO.
    pub fn from_page<M>(page: Paginated<M>) -> Self
    where
        T: From<M>,
    {
        PaginatedDto {
            items: page.items.into_iter().map(T::from).collect(),
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
        }
    }
}
