//! JSON文件用户仓库
//!
//! 负责用户数据文件的读写

use crate::models::user::User;
use crate::repositories::traits::UserRepositoryTrait;
use crate::DatabaseResult;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// JSON文件用户仓库
///
/// 文件内容是一个格式化（2空格缩进）的用户数组。
/// 读写都是整个文件进行，没有原子替换，也没有文件锁。
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// 创建新的文件仓库实例
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 数据文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 数据文件不存在时，创建一个空的用户列表文件
    ///
    /// 只在启动时调用一次，[`read_users`](UserRepositoryTrait::read_users) 本身遇到文件不存在仍然会报错。
    pub async fn ensure_exists(&self) -> DatabaseResult<()> {
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        self.write_users(&[]).await?;
        info!("🗄️ 已创建空的用户数据文件: {}", self.path.display());
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserRepositoryTrait for JsonFileRepository {
    async fn read_users(&self) -> DatabaseResult<Vec<User>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let users: Vec<User> = serde_json::from_str(&content)?;

        debug!("📖 读取 {} 个用户: {}", users.len(), self.path.display());
        Ok(users)
    }

    async fn write_users(&self, users: &[User]) -> DatabaseResult<()> {
        // serde_json的pretty格式默认就是2空格缩进
        let content = serde_json::to_string_pretty(users)?;
        tokio::fs::write(&self.path, content).await?;

        debug!("💾 写入 {} 个用户: {}", users.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatabaseError;
    use pretty_assertions::assert_eq;

    fn sample_users() -> Vec<User> {
        vec![
            User::new(3, "Carol", "carol@example.com"),
            User::new(1, "Alice", "alice@example.com"),
        ]
    }

    #[tokio::test]
    async fn write_then_read_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("users.json"));

        repo.write_users(&sample_users()).await.unwrap();
        let users = repo.read_users().await.unwrap();

        assert_eq!(users, sample_users());
    }

    #[tokio::test]
    async fn writes_pretty_json_with_two_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        let repo = JsonFileRepository::new(&path);

        repo.write_users(&sample_users()[..1]).await.unwrap();
        let content = std::fs::read_to_string(&path).unwrap();

        let expected = "[\n  {\n    \"id\": 3,\n    \"name\": \"Carol\",\n    \"email\": \"carol@example.com\"\n  }\n]";
        assert_eq!(content, expected);
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("missing.json"));

        let err = repo.read_users().await.unwrap_err();
        assert!(matches!(err, DatabaseError::Io(_)));
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(&path, "{ not json").unwrap();
        let repo = JsonFileRepository::new(&path);

        let err = repo.read_users().await.unwrap_err();
        assert!(matches!(err, DatabaseError::Serialization(_)));
    }

    #[tokio::test]
    async fn ensure_exists_creates_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("users.json");
        let repo = JsonFileRepository::new(&path);

        repo.ensure_exists().await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
        assert!(repo.read_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ensure_exists_keeps_existing_data() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("users.json"));
        repo.write_users(&sample_users()).await.unwrap();

        repo.ensure_exists().await.unwrap();

        assert_eq!(repo.read_users().await.unwrap(), sample_users());
    }
}
