//! File Theme Source - 从 TOML / JSON 文件读取主题数据
//!
//! series 的 key 是路由前缀（如 `/guide/`、`/v1.0/`），不能交给 `config` crate
//! 按路径表达式解析，因此主题文件单独读取。

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::application::ports::{ThemeSourceError, ThemeSourcePort};
use crate::domain::series::ThemeData;

/// 主题文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeFormat {
    Toml,
    Json,
}

impl ThemeFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn parse(self, content: &str) -> Result<ThemeData, ThemeSourceError> {
        match self {
            Self::Toml => toml::from_str(content).map_err(|e| ThemeSourceError::Parse(e.to_string())),
            Self::Json => {
                serde_json::from_str(content).map_err(|e| ThemeSourceError::Parse(e.to_string()))
            }
        }
    }
}

/// File Theme Source
#[derive(Debug, Clone)]
pub struct FileThemeSource {
    path: PathBuf,
}

impl FileThemeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ThemeSourcePort for FileThemeSource {
    async fn load(&self) -> Result<ThemeData, ThemeSourceError> {
        let format = ThemeFormat::from_path(&self.path).ok_or_else(|| {
            ThemeSourceError::UnsupportedFormat(self.path.display().to_string())
        })?;

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    ThemeSourceError::NotFound(self.path.display().to_string())
                }
                _ => ThemeSourceError::Io(e.to_string()),
            })?;

        let theme = format.parse(&content)?;

        tracing::info!(
            path = %self.path.display(),
            auto_set_series = theme.auto_set_series,
            has_series = theme.series.is_some(),
            "Theme data loaded"
        );

        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::SeriesConfig;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_toml_theme() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.toml");
        std::fs::write(
            &path,
            r#"
autoSetSeries = true

[series]
"/guide/" = ["intro", { text = "More", children = ["a"] }]
"#,
        )
        .unwrap();

        let theme = FileThemeSource::new(&path).load().await.unwrap();
        assert!(theme.auto_set_series);
        match theme.series {
            Some(SeriesConfig::Object(object)) => assert_eq!(object["/guide/"].len(), 2),
            other => panic!("expected object series, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_json_theme_with_array_series() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, r#"{ "series": ["/guide/intro"] }"#).unwrap();

        let theme = FileThemeSource::new(&path).load().await.unwrap();
        assert!(matches!(theme.series, Some(SeriesConfig::Array(_))));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = FileThemeSource::new(dir.path().join("nope.toml"))
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, ThemeSourceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_unsupported_extension() {
        let err = FileThemeSource::new("theme.yaml").load().await.unwrap_err();
        assert!(matches!(err, ThemeSourceError::UnsupportedFormat(_)));
    }

    #[tokio::test]
    async fn test_group_without_children_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, r#"{ "series": { "/guide/": [{ "text": "Broken" }] } }"#).unwrap();

        let err = FileThemeSource::new(&path).load().await.unwrap_err();
        assert!(matches!(err, ThemeSourceError::Parse(_)));
    }
}
