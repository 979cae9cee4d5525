//! Content Adapter - 文档目录扫描

mod fs_content_source;

pub use fs_content_source::{page_from_markdown, FsContentSource};
