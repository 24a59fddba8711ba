//! 利润计算

use std::collections::BTreeMap;

use super::model::Product;

/// 售价减进价，可以为负
pub fn margin(product: &Product) -> i64 {
    product.price - product.purchase_price
}

/// 以商品展示字符串为键的利润表
pub fn margin_report(products: &[Product]) -> BTreeMap<String, i64> {
    products
        .iter()
        .map(|product| (product.to_string(), margin(product)))
        .collect()
}

/// 按列表顺序，每个商品一个单键对象
pub fn margin_entries(products: &[Product]) -> Vec<BTreeMap<String, i64>> {
    products
        .iter()
        .map(|product| BTreeMap::from([(product.to_string(), margin(product))]))
        .collect()
}
