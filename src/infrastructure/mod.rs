//! 基础设施：数据库、仓储实现、日志

pub mod database;
pub mod logger;
pub mod memory_repository;
pub mod sqlite_repository;
