//! 商品业务规则：不允许免费或亏本商品

use thiserror::Error;

use super::model::Product;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("商品 '{name}' 的售价 {price} 必须高于进价 {purchase_price}")]
pub struct FreeProductViolation {
    pub name: String,
    pub price: i64,
    pub purchase_price: i64,
}

/// 售价必须严格高于进价
pub fn validate(product: &Product) -> Result<(), FreeProductViolation> {
    if product.price > product.purchase_price {
        return Ok(());
    }

    Err(FreeProductViolation {
        name: product.name.clone(),
        price: product.price,
        purchase_price: product.purchase_price,
    })
}
