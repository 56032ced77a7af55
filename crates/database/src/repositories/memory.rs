//! 内存用户仓库
//!
//! 数据只保存在进程内存中，主要用于测试时替换 [`JsonFileRepository`](super::JsonFileRepository)

use crate::models::user::User;
use crate::repositories::traits::UserRepositoryTrait;
use crate::DatabaseResult;
use tokio::sync::RwLock;

/// 内存用户仓库
#[derive(Debug, Default)]
pub struct MemoryRepository {
    users: RwLock<Vec<User>>,
}

impl MemoryRepository {
    /// 创建空的内存仓库
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用已有的用户列表创建内存仓库
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait::async_trait]
impl UserRepositoryTrait for MemoryRepository {
    async fn read_users(&self) -> DatabaseResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn write_users(&self, users: &[User]) -> DatabaseResult<()> {
        *self.users.write().await = users.to_vec();
        Ok(())
    }
}
