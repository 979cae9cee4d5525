//! Filesystem Content Source
//!
//! 遍历文档根目录，收集所有 Markdown 页面：
//! - 路由路径按链接规范化规则计算（`README.md` -> 目录）
//! - 标题依次取 frontmatter `title`、第一个 `# ` 标题、文件名
//! - 隐藏目录与 `node_modules` 被跳过

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::application::ports::{ContentError, ContentSourcePort};
use crate::domain::series::{PageFrontmatter, PageRecord};
use crate::infrastructure::adapters::link::normalize_route;

const SKIPPED_DIRS: &[&str] = &["node_modules"];

/// 拆分 frontmatter 与正文
///
/// 仅识别文件开头 `---` 包围的块
fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }
    (None, content)
}

fn parse_frontmatter(raw: Option<&str>, relative_path: &str) -> PageFrontmatter {
    match raw {
        Some(raw) if !raw.trim().is_empty() => serde_yaml::from_str(raw).unwrap_or_else(|e| {
            tracing::warn!(page = %relative_path, error = %e, "Invalid frontmatter, ignoring it");
            PageFrontmatter::default()
        }),
        _ => PageFrontmatter::default(),
    }
}

fn first_heading(body: &str) -> Option<&str> {
    body.lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// 由文件内容构建页面记录
pub fn page_from_markdown(relative_path: &str, content: &str) -> PageRecord {
    let (raw_frontmatter, body) = split_frontmatter(content);
    let frontmatter = parse_frontmatter(raw_frontmatter, relative_path);

    let stem = Path::new(relative_path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(relative_path);

    let title = frontmatter
        .title
        .clone()
        .or_else(|| first_heading(body).map(str::to_string))
        .unwrap_or_else(|| stem.to_string());

    PageRecord {
        route_path: normalize_route(&format!("/{}", relative_path)),
        relative_path: relative_path.to_string(),
        title,
        frontmatter,
    }
}

fn is_skipped(entry: &DirEntry) -> bool {
    // 根目录本身不参与过滤
    if entry.depth() == 0 {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || (entry.file_type().is_dir() && SKIPPED_DIRS.contains(&&*name))
}

fn scan_dir(root: &Path) -> Result<Vec<PageRecord>, ContentError> {
    if !root.is_dir() {
        return Err(ContentError::RootNotFound(root.display().to_string()));
    }

    let mut pages = Vec::new();
    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_skipped(e))
    {
        let entry = entry.map_err(|e| ContentError::Io(e.to_string()))?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }

        let relative = path
            .strip_prefix(root)
            .map_err(|e| ContentError::Io(e.to_string()))?
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        let content = std::fs::read_to_string(path).map_err(|e| ContentError::Io(e.to_string()))?;
        pages.push(page_from_markdown(&relative, &content));
    }

    pages.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    Ok(pages)
}

/// Filesystem Content Source
#[derive(Debug, Clone)]
pub struct FsContentSource {
    root: PathBuf,
}

impl FsContentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ContentSourcePort for FsContentSource {
    async fn scan(&self) -> Result<Vec<PageRecord>, ContentError> {
        let root = self.root.clone();
        let pages = tokio::task::spawn_blocking(move || scan_dir(&root))
            .await
            .map_err(|e| ContentError::Io(format!("Scan task failed: {}", e)))??;

        tracing::info!(root = %self.root.display(), pages = pages.len(), "Docs directory scanned");
        Ok(pages)
    }
}
