pub const SITE_NAME: &str = "Lumière Gems";

/// Largest quantity of one product per order.
pub const MAX_LINE_QUANTITY: u32 = 10;

/// Entries per page on admin lists.
pub const ADMIN_PAGE_SIZE: u64 = 20;
