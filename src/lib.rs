//! Reco Series - 文档站点侧边栏 series 解析服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Series Context: series 配置、解析结果、页面与主题数据
//!
//! 应用层 (application/):
//! - Ports: 端口定义（LinkBuilder, LocalePathResolver, ThemeSource, ContentSource, SiteStore, SeriesCache）
//! - Series: SeriesResolver, 自动 series 生成, RenderContext
//! - Commands: CQRS 命令处理器（站点重载）
//! - Queries: CQRS 查询处理器（series 解析）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: SiteStore, SeriesCache 内存实现
//! - Adapters: 主题文件、文档目录扫描、链接构建、locale 路径解析

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
