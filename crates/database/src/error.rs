use thiserror::Error;

/// 数据库操作错误类型
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// 文件读写错误，数据文件不存在也属于这一类
    #[error("数据文件读写错误: {0}")]
    Io(#[from] std::io::Error),

    /// 数据文件内容不是合法的用户列表
    #[error("数据序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 记录不存在
    #[error("{0}")]
    NotFound(String),

    /// 用户输入不合法
    #[error("{0}")]
    ValidationError(String),

    /// 已有的最大ID无法再加1，分配不出新ID
    #[error("用户ID已达到上限: {0}")]
    IdExhausted(i64),
}

impl DatabaseError {
    /// 创建记录不存在错误
    pub fn not_found<T: ToString>(msg: T) -> Self {
        Self::NotFound(msg.to_string())
    }

    /// 创建输入校验错误
    pub fn validation<T: ToString>(msg: T) -> Self {
        Self::ValidationError(msg.to_string())
    }

    /// 是否是调用方的输入导致的错误（不存在/校验失败）
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::ValidationError(_))
    }
}
