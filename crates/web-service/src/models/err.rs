use crate::models::common::ErrorReply;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use database::DatabaseError;
use thiserror::Error;
use tracing::error;

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
#[derive(Error, Debug)]
pub enum AppError {
    /// 请求体不是合法的json，或者字段类型不对
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),

    /// 仓库层错误
    ///
    /// 不存在/校验失败会原样返回给用户，其他错误统一转换为500
    #[error(transparent)]
    RepositoryError(#[from] DatabaseError),

    /// 修改类操作失败，`message` 是返回给用户的提示，`source` 只记录日志
    #[error("{message}: {source}")]
    OperationFailed {
        message: String,
        #[source]
        source: DatabaseError,
    },
}

impl AppError {
    /// 修改类接口的兜底错误转换
    ///
    /// 用户输入导致的错误（404/400）直接透传，其余的意外错误转换为
    /// `Failed to {action} user` 的500错误。
    ///
    /// ```rust,ignore
    /// service.create_user(payload).await.map_err(AppError::failed_to("create"))?;
    /// ```
    pub fn failed_to(action: &'static str) -> impl FnOnce(DatabaseError) -> AppError {
        move |err| {
            if err.is_client_error() {
                AppError::RepositoryError(err)
            } else {
                AppError::OperationFailed {
                    message: format!("Failed to {action} user"),
                    source: err,
                }
            }
        }
    }
}

/// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidBody(err) => (StatusCode::BAD_REQUEST, format!("Invalid request body: {}", err.body_text())),
            AppError::RepositoryError(err) => match err {
                DatabaseError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
                DatabaseError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
                err => {
                    error!("❌ 读取用户数据失败: {err}");
                    (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load users".to_string())
                }
            },
            AppError::OperationFailed { message, source } => {
                error!("❌ {message}: {source}");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(ErrorReply { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_to_keeps_client_errors() {
        let err = AppError::failed_to("update")(DatabaseError::not_found("User not found"));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

        let err = AppError::failed_to("update")(DatabaseError::validation("Email already exists"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn failed_to_hides_storage_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "users.json");
        let err = AppError::failed_to("delete")(DatabaseError::Io(io));

        match &err {
            AppError::OperationFailed { message, .. } => assert_eq!(message, "Failed to delete user"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
