//! 用户服务
//!
//! 提供用户相关的业务逻辑操作。
//!
//! 每个操作都重新读取完整的用户列表，修改类操作在内存中改完之后整体写回。
//! 修改类操作通过 `write_lock` 串行执行，避免并发的"读-改-写"互相覆盖。

use crate::models::users::UserPayload;
use database::{DatabaseError, DatabaseResult, User, UserRepositoryTrait};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};
use validator::Validate;

/// 查询单个用户时的不存在提示
pub const USER_IS_NOT_FOUND: &str = "user is not found";

/// 更新/删除用户时的不存在提示
pub const USER_NOT_FOUND: &str = "User not found";

pub const FIELDS_REQUIRED: &str = "Name and email are required";

pub const EMAIL_EXISTS: &str = "Email already exists";

pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
    write_lock: Mutex<()>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self {
            repository,
            write_lock: Mutex::new(()),
        }
    }

    /// 查询全部用户
    pub async fn list_users(&self) -> DatabaseResult<Vec<User>> {
        self.repository.read_users().await
    }

    /// 根据 ID 获取用户信息
    pub async fn get_user_by_id(&self, id: i64) -> DatabaseResult<User> {
        self.repository
            .read_users()
            .await?
            .into_iter()
            .find(|u| u.id == id)
            .ok_or_else(|| DatabaseError::not_found(USER_IS_NOT_FOUND))
    }

    /// 确认用户存在
    ///
    /// 更新接口的请求体不合法时，仍然要先按ID查找，不存在的用户优先返回404。
    pub async fn ensure_user_exists(&self, id: i64) -> DatabaseResult<()> {
        let users = self.repository.read_users().await?;
        position_of(&users, id).map(|_| ())
    }

    /// 创建新用户
    ///
    /// 新用户的ID是当前最大ID加1，没有任何用户时从1开始。
    /// 参数校验在读取数据之前完成，校验失败不会触碰存储。
    #[instrument(skip(self))]
    pub async fn create_user(&self, payload: UserPayload) -> DatabaseResult<User> {
        let (name, email) = required_fields(payload)?;

        let _guard = self.write_lock.lock().await;
        let mut users = self.repository.read_users().await?;

        ensure_email_available(&users, &email, None)?;

        let user = User::new(next_id(&users)?, name, email);
        users.push(user.clone());
        self.repository.write_users(&users).await?;

        info!("✅ 用户创建成功: {}", user.id);
        Ok(user)
    }

    /// 更新用户信息
    ///
    /// 先确认用户存在，再校验参数，最后检查邮箱是否被其他用户占用。
    /// 只替换 `name` 和 `email`，ID保持不变。
    #[instrument(skip(self))]
    pub async fn update_user(&self, id: i64, payload: UserPayload) -> DatabaseResult<User> {
        let _guard = self.write_lock.lock().await;
        let mut users = self.repository.read_users().await?;

        let index = position_of(&users, id)?;
        let (name, email) = required_fields(payload)?;
        ensure_email_available(&users, &email, Some(id))?;

        let user = &mut users[index];
        user.name = name;
        user.email = email;
        let updated = user.clone();

        self.repository.write_users(&users).await?;

        info!("✅ 用户更新成功: {}", id);
        Ok(updated)
    }

    /// 删除用户，返回被删除的用户信息
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: i64) -> DatabaseResult<User> {
        let _guard = self.write_lock.lock().await;
        let mut users = self.repository.read_users().await?;

        let index = position_of(&users, id)?;
        let removed = users.remove(index);
        self.repository.write_users(&users).await?;

        info!("🗑️ 用户删除成功: {}", id);
        Ok(removed)
    }
}

fn required_fields(payload: UserPayload) -> DatabaseResult<(String, String)> {
    if let Err(err) = payload.validate() {
        debug!("参数校验失败: {err}");
        return Err(DatabaseError::validation(FIELDS_REQUIRED));
    }

    match (payload.name, payload.email) {
        (Some(name), Some(email)) => Ok((name, email)),
        _ => Err(DatabaseError::validation(FIELDS_REQUIRED)),
    }
}

fn position_of(users: &[User], id: i64) -> DatabaseResult<usize> {
    users
        .iter()
        .position(|u| u.id == id)
        .ok_or_else(|| DatabaseError::not_found(USER_NOT_FOUND))
}

/// `exclude` 是正在更新的用户ID，它自己的邮箱不算重复
fn ensure_email_available(users: &[User], email: &str, exclude: Option<i64>) -> DatabaseResult<()> {
    let taken = users.iter().any(|u| u.email == email && Some(u.id) != exclude);
    if taken {
        return Err(DatabaseError::validation(EMAIL_EXISTS));
    }
    Ok(())
}

fn next_id(users: &[User]) -> DatabaseResult<i64> {
    match users.iter().map(|u| u.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(DatabaseError::IdExhausted(max)),
    }
}
