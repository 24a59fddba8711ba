//! 商品数据模型

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// 商品目录中的一行
///
/// `id` 为 0 表示尚未持久化，由存储在插入时分配。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub id: i64,

    #[validate(length(min = 1, message = "商品名称不能为空"))]
    pub name: String,

    /// 售价
    #[validate(range(min = 0, message = "售价不能为负数"))]
    pub price: i64,

    /// 进价
    #[validate(range(min = 0, message = "进价不能为负数"))]
    pub purchase_price: i64,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, price: i64, purchase_price: i64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            purchase_price,
        }
    }

    /// 是否已由存储分配了 id
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }
}

/// 利润展示所用的键，客户端依赖该格式
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product{{id={}, name='{}', price={}}}",
            self.id, self.name, self.price
        )
    }
}
