//! 用户仓库 trait 定义

use crate::models::user::User;
use crate::DatabaseResult;

/// 用户仓库trait定义
///
/// 用户数据被当作一个整体集合来存取：
/// - 读取：一次加载全部用户
/// - 写入：一次覆盖全部用户
#[async_trait::async_trait]
pub trait UserRepositoryTrait: Send + Sync + 'static {
    /// 读取全部用户
    ///
    /// # 错误
    /// 数据不存在或者格式不正确时返回错误，不会静默返回空列表
    async fn read_users(&self) -> DatabaseResult<Vec<User>>;

    /// 写回全部用户，无条件覆盖之前的数据
    ///
    /// # 参数
    /// - `users`: 完整的用户列表，顺序会被保留
    async fn write_users(&self, users: &[User]) -> DatabaseResult<()>;
}
