use serde::Deserialize;

use crate::server::model::pagination::clamp_per_page;

/// `page` and `entries` query parameters shared by the paginated admin listings.
///
/// Pages are zero-based. `entries` defaults to 20 and is clamped to 1..=100.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub entries: Option<u64>,
}

impl PaginationParams {
    pub fn per_page(&self) -> u64 {
        clamp_per_page(self.entries)
    }
}
