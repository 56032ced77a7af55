//! 数据模型模块
//!
//! 这里定义与数据文件中的记录对应的结构体

pub mod user;

// 重新导出具体的模型
pub use user::User;
