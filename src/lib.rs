//! # Microcommerce
//!
//! 商品目录 REST 服务：
//! - 商品的增删改查，按名称排序、按售价过滤
//! - 商品利润（售价减进价）报表
//! - 业务规则：售价必须高于进价
//! - SQLite 或内存存储，通过 `ProductRepository` 注入

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;
pub mod server;

pub use app::product::{model::Product, repository::ProductRepository};
pub use config::Config;
