pub mod header;
pub mod layout;
pub mod page;
pub mod pagination;
pub mod product_card;

pub use header::Header;
pub use layout::Layout;
pub use page::Page;
pub use pagination::{Pagination, PaginationData};
pub use product_card::ProductCard;
