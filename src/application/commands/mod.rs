//! 应用层 - 命令（写操作）

mod site_commands;

pub mod handlers;

pub use site_commands::*;
