//! Small pure helpers shared by the model and service layers.

pub mod endpoint;
pub mod slug;
pub mod validate;
