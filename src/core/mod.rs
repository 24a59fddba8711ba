//! 核心模块：错误映射与中间件

pub mod error;
pub mod middleware;
