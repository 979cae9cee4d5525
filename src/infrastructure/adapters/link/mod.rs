//! Link Adapter - 基于页面表的链接构建

mod route_table;

pub use route_table::{
    is_external, normalize_route, RouteTableLinkBuilder, RouteTableLinkBuilderFactory,
};
