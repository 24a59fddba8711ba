//! 商品处理器

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, HeaderMap, StatusCode},
    response::Json,
};
use std::collections::BTreeMap;

use super::{model::Product, service::ProductService};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
    /// 请求未携带 Host 时用于 Location
    pub public_host: String,
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state.product_service.list_products().await?;
    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Product>, CoreError> {
    let Path(id) = id?;
    let product = state.product_service.get_product(id).await?;
    Ok(Json(product))
}

pub async fn list_sorted(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state.product_service.list_sorted().await?;
    Ok(Json(products))
}

pub async fn margin_report(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, i64>>, CoreError> {
    let report = state.product_service.margin_report().await?;
    Ok(Json(report))
}

pub async fn margin_entries(
    State(state): State<AppState>,
) -> Result<Json<Vec<BTreeMap<String, i64>>>, CoreError> {
    let entries = state.product_service.margin_entries().await?;
    Ok(Json(entries))
}

pub async fn list_above(
    State(state): State<AppState>,
    price: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let Path(price) = price?;
    let products = state.product_service.list_above(price).await?;
    Ok(Json(products))
}

/// 创建商品，规则违反返回 400
pub async fn create_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<Product>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<Product>), CoreError> {
    let Json(product) = payload?;
    let created = state
        .product_service
        .create_product(product)
        .await
        .map_err(CoreError::into_bad_request)?;

    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or(state.public_host.as_str());
    let location = format!("http://{}/products/{}", host, created.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

/// 更新商品，规则违反返回 409
pub async fn update_product(
    State(state): State<AppState>,
    payload: Result<Json<Product>, JsonRejection>,
) -> Result<Json<Product>, CoreError> {
    let Json(product) = payload?;
    let updated = state.product_service.update_product(product).await?;
    Ok(Json(updated))
}

pub async fn delete_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, CoreError> {
    let Path(id) = id?;
    state.product_service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// 健康检查
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, CoreError> {
    let products = state.product_service.count().await?;
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "storage": state.product_service.backend(),
        "products": products,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })))
}
