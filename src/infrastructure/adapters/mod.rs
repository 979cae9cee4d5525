//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod content;
pub mod link;
pub mod locale;
pub mod theme;

pub use content::*;
pub use link::*;
pub use locale::*;
pub use theme::*;
