//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 主题数据配置
    #[serde(default)]
    pub theme: ThemeConfig,

    /// 文档内容配置
    #[serde(default)]
    pub content: ContentConfig,

    /// 解析缓存配置
    #[serde(default)]
    pub cache: CacheConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5070
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 主题数据配置
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    /// 主题数据文件（.toml / .json）
    #[serde(default = "default_theme_path")]
    pub path: PathBuf,
}

fn default_theme_path() -> PathBuf {
    PathBuf::from("docs/.vuepress/theme.toml")
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            path: default_theme_path(),
        }
    }
}

/// 文档内容配置
#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    /// 文档根目录
    #[serde(default = "default_docs_dir")]
    pub docs_dir: PathBuf,
}

fn default_docs_dir() -> PathBuf {
    PathBuf::from("docs")
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            docs_dir: default_docs_dir(),
        }
    }
}

/// 解析缓存配置
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// 是否缓存解析结果
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,

    /// 最大条目数
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

fn default_cache_enabled() -> bool {
    true
}

fn default_max_entries() -> usize {
    4096
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            max_entries: default_max_entries(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
