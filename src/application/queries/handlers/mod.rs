//! Query Handlers 实现

mod series_handlers;

pub use series_handlers::*;
