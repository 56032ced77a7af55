//! 用户相关接口
//!
//! handler只负责http层面的转换，业务逻辑在 [`UserService`](crate::services::UserService) 中。
//!
//! 修改类接口（新建/更新/删除）使用 [`AppError::failed_to`] 兜底，
//! 任何意外错误都会转换为对应的500提示，不会把内部错误暴露给用户。

use crate::models::common::{AppJson, ErrorReply, MessageReply};
use crate::models::err::AppError;
use crate::models::users::{UserInfo, UserPayload};
use crate::services::user::{USER_IS_NOT_FOUND, USER_NOT_FOUND};
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use database::DatabaseError;
use tracing::debug;

/// 解析路径中的用户ID
///
/// 不是数字的ID不可能匹配任何用户，直接按不存在处理。
fn parse_user_id(raw: &str, not_found: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::RepositoryError(DatabaseError::not_found(not_found)))
}

/// 查询全部用户
#[utoipa::path(get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = Vec<UserInfo>),
        (status = 500, description = "Failed to load users", body = ErrorReply)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserInfo>>, AppError> {
    debug!("Listing users");

    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// 查询指定用户信息
#[utoipa::path(get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "用户ID")),
    responses(
        (status = 200, description = "User info", body = UserInfo),
        (status = 404, description = "User is not found", body = ErrorReply)
    )
)]
pub async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<UserInfo>, AppError> {
    debug!("Getting user id {}", id);

    let id = parse_user_id(&id, USER_IS_NOT_FOUND)?;
    let user = state.user_service.get_user_by_id(id).await?;

    Ok(Json(user.into()))
}

/// 创建用户
///
/// `name` 和 `email` 都是必填项，`email` 不能和已有用户重复。
#[utoipa::path(post,
    path = "/users",
    tag = "users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "Created user", body = UserInfo),
        (status = 400, description = "Missing fields or duplicate email", body = ErrorReply),
        (status = 500, description = "Failed to create user", body = ErrorReply)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<UserPayload>,
) -> Result<(StatusCode, Json<UserInfo>), AppError> {
    debug!("Creating user {:#?}", payload);

    let user = state
        .user_service
        .create_user(payload)
        .await
        .map_err(AppError::failed_to("create"))?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// 更新用户信息
///
/// 根据用户指定的 `id` 替换 `name` 和 `email`。
///
/// 请求体先不拆开：即使body不合法，也要先确认用户存在，不存在的用户一律返回404。
#[utoipa::path(put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "用户ID")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "Updated user", body = UserInfo),
        (status = 400, description = "Missing fields or duplicate email", body = ErrorReply),
        (status = 404, description = "User not found", body = ErrorReply),
        (status = 500, description = "Failed to update user", body = ErrorReply)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<AppJson<UserPayload>, AppError>,
) -> Result<Json<UserInfo>, AppError> {
    debug!("Updating user {}", id);

    let id = parse_user_id(&id, USER_NOT_FOUND)?;
    let payload = match payload {
        Ok(AppJson(payload)) => payload,
        Err(rejection) => {
            state
                .user_service
                .ensure_user_exists(id)
                .await
                .map_err(AppError::failed_to("update"))?;
            return Err(rejection);
        }
    };

    let user = state
        .user_service
        .update_user(id, payload)
        .await
        .map_err(AppError::failed_to("update"))?;

    Ok(Json(user.into()))
}

/// 删除指定的用户
#[utoipa::path(delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "用户ID")),
    responses(
        (status = 200, description = "User deleted", body = MessageReply),
        (status = 404, description = "User not found", body = ErrorReply),
        (status = 500, description = "Failed to delete user", body = ErrorReply)
    )
)]
pub async fn delete_user(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<MessageReply>, AppError> {
    debug!("Deleting user {}", id);

    let id = parse_user_id(&id, USER_NOT_FOUND)?;
    state
        .user_service
        .delete_user(id)
        .await
        .map_err(AppError::failed_to("delete"))?;

    Ok(Json(MessageReply {
        message: "User deleted successfully".to_string(),
    }))
}
