//! 数据仓库 trait 定义
//!
//! 这里定义了数据仓库的抽象接口
//!
//! ## Repository Trait 设计模式 🎯
//!
//! 存储层只负责"整体读取"和"整体写回"两件事，业务规则（查找、校验、分配ID）全部放在服务层。
//! 所有 Repository trait 都遵循统一的约束：
//!
//! ```rust,ignore
//! pub trait XxxRepositoryTrait: Send + Sync + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! - `Send` + `Sync`：仓库实例以 `Arc<dyn UserRepositoryTrait>` 的形式在多个请求间共享
//! - `'static`：作为应用服务长期存活，不依赖短期引用
//!
//! 服务层只依赖 trait，因此测试时可以把 [`JsonFileRepository`](crate::JsonFileRepository)
//! 替换为 [`MemoryRepository`](crate::MemoryRepository)：
//!
//! ```rust,ignore
//! let repository: Arc<dyn UserRepositoryTrait> = Arc::new(MemoryRepository::new());
//! let service = UserService::new(repository);
//! ```

pub mod user;

// 重新导出
pub use user::UserRepositoryTrait;
