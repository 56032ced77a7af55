//! 数据仓库模块
//!
//! 这里定义用户数据的存储层

pub mod json_file;
pub mod memory;
pub mod traits;

// 重新导出具体的类型
pub use json_file::JsonFileRepository;
pub use memory::MemoryRepository;
pub use traits::UserRepositoryTrait;
