pub mod app;
pub mod component;
pub mod constant;
pub mod model;
pub mod route;
pub mod router;

#[cfg(feature = "web")]
pub mod api;

pub use app::App;
