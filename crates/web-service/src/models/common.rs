use crate::models::err::AppError;
use axum::extract::FromRequest;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 错误返回对象
///
/// 所有4xx/5xx接口都返回这个格式
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct ErrorReply {
    #[schema(example = "User not found")]
    /// 错误描述
    pub error: String,
}

/// 操作结果提示
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct MessageReply {
    #[schema(example = "User deleted successfully")]
    pub message: String,
}

/// 带自定义错误的json提取器
///
/// 和 [`axum::Json`] 一样反序列化body，区别是失败时返回 [`AppError`]，
/// 保证错误信息也是 [`ErrorReply`] 格式。
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
