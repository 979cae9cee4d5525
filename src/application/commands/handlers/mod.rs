//! Command Handlers 实现

mod site_handlers;

pub use site_handlers::*;
