//! 用户数据模型

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 用户记录
///
/// 字段顺序即写入文件时的顺序：`id`、`name`、`email`。
/// 数据文件里的其他字段保存在 `extra` 中，整体写回时原样保留。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            extra: Map::new(),
        }
    }
}
