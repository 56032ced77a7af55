//! 数据存储模块
//!
//! 用户数据整体保存在一个JSON文件中，每次访问都完整读取、每次修改都完整写回。
//! 这个模块提供存储抽象 [`UserRepositoryTrait`] 以及它的两个实现：
//! - [`JsonFileRepository`]：基于JSON文件的实现，线上使用
//! - [`MemoryRepository`]：基于内存的实现，测试使用

pub mod error;
pub mod models;
pub mod repositories;

pub use error::DatabaseError;
pub use models::user::User;
pub use repositories::{JsonFileRepository, MemoryRepository, UserRepositoryTrait};

/// 数据库操作结果类型
pub type DatabaseResult<T> = Result<T, DatabaseError>;
