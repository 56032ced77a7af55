use database::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 新建/更新用户的请求参数
///
/// 两个字段都是必填的。缺失、`null`、空字符串都视为没有填写，
/// 所以这里用 [`Option`] 接收，交给 [`Validate`] 统一校验。
#[derive(Deserialize, Debug, Default, ToSchema, Validate)]
pub struct UserPayload {
    #[schema(example = "Alice")]
    #[validate(required, length(min = 1))]
    /// 用户名称
    pub name: Option<String>,

    #[schema(example = "alice@example.com")]
    #[validate(required, length(min = 1))]
    /// 用户邮箱，不能和其他用户重复
    pub email: Option<String>,
}

impl UserPayload {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}

#[derive(Deserialize, Debug, ToSchema, Serialize, PartialEq, Eq)]
pub struct UserInfo {
    #[schema(example = 1)]
    /// 用户ID
    pub id: i64,

    #[schema(example = "Alice")]
    /// 用户名称
    pub name: String,

    #[schema(example = "alice@example.com")]
    /// 用户邮箱
    pub email: String,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}
