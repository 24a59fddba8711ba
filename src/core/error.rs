//! 核心错误处理模块

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, warn};

use crate::app::product::repository::RepositoryError;
use crate::app::product::rules::FreeProductViolation;

/// 核心错误类型
#[derive(Debug)]
pub enum CoreError {
    BadRequest(String),
    NotFound(String),
    /// 售价不高于进价
    FreeProduct(String),
    InternalServerError(String),
}

impl CoreError {
    /// 创建路径上的规则违反按 400 返回
    pub fn into_bad_request(self) -> Self {
        match self {
            CoreError::FreeProduct(msg) => CoreError::BadRequest(msg),
            other => other,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::FreeProduct(_) => StatusCode::CONFLICT,
            CoreError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error_message, user_message) = match self {
            CoreError::BadRequest(msg) => ("BAD_REQUEST", msg),
            CoreError::NotFound(msg) => ("NOT_FOUND", msg),
            CoreError::FreeProduct(msg) => ("FREE_PRODUCT", msg),
            CoreError::InternalServerError(msg) => {
                error!("内部错误: {}", msg);
                (
                    "INTERNAL_SERVER_ERROR",
                    "服务器内部错误".to_string(),
                )
            }
        };

        let error_response = ErrorResponse {
            error: error_message.to_string(),
            message: user_message,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, axum::Json(error_response)).into_response()
    }
}

impl From<RepositoryError> for CoreError {
    fn from(err: RepositoryError) -> Self {
        CoreError::InternalServerError(err.to_string())
    }
}

impl From<FreeProductViolation> for CoreError {
    fn from(err: FreeProductViolation) -> Self {
        warn!("{}", err);
        CoreError::FreeProduct(err.to_string())
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .into_iter()
            .flat_map(|(_, errors)| {
                errors.iter().map(|error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| "参数校验失败".to_string())
                })
            })
            .collect();

        CoreError::BadRequest(messages.join(", "))
    }
}

impl From<JsonRejection> for CoreError {
    fn from(rejection: JsonRejection) -> Self {
        CoreError::BadRequest(format!("请求体无法解析为商品: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for CoreError {
    fn from(rejection: PathRejection) -> Self {
        CoreError::BadRequest(format!("无效的路径参数: {}", rejection.body_text()))
    }
}
