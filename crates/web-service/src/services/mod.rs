//! 服务层模块
//!
//! 包含业务逻辑的服务层实现，存储层通过 [`database::UserRepositoryTrait`] 注入

pub mod user;

pub use user::UserService;
