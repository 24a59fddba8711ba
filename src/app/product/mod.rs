//! 商品目录

pub mod handler;
pub mod margin;
pub mod model;
pub mod repository;
pub mod rules;
pub mod service;
