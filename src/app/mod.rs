//! 业务模块与路由

pub mod product;

use axum::{routing::get, Router};

use product::handler::{self, AppState};

/// 商品目录路由
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/products",
            get(handler::list_products)
                .put(handler::create_product)
                .post(handler::update_product),
        )
        .route("/products/sorted", get(handler::list_sorted))
        .route("/products/margin", get(handler::margin_report))
        .route("/products/margins", get(handler::margin_entries))
        .route("/products/above/:price", get(handler::list_above))
        .route(
            "/products/:id",
            get(handler::get_product).delete(handler::delete_product),
        )
        .route("/health", get(handler::health_check))
        .with_state(state)
}
