//! Theme Adapter - 主题数据文件

mod file_theme_source;

pub use file_theme_source::{FileThemeSource, ThemeFormat};
