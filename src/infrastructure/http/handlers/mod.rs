//! HTTP Handlers

mod ping;
mod series;
mod site;

pub use ping::*;
pub use series::*;
pub use site::*;
