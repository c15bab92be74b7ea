pub mod page_view_retention;
