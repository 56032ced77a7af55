use color_eyre::eyre::Context;
use color_eyre::{Help, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// 用户数据文件的默认位置
pub const DEFAULT_USERS_FILE: &str = "data/users.json";

/// Web服务默认监听地址
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// 默认日志级别
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// 程序配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 用户数据文件路径
    ///
    /// 可通过环境变量 `USERS_FILE` 来调整
    pub users_file: PathBuf,

    /// Web服务监听地址
    ///
    /// 可通过环境变量 `BIND_ADDR` 来调整
    pub bind_addr: SocketAddr,

    /// 日志级别，设置了 `RUST_LOG` 时以 `RUST_LOG` 为准
    ///
    /// 可通过环境变量 `LOG_LEVEL` 来调整
    pub log_level: String,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，没有.env文件也没关系
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        Ok(Arc::new(config))
    }

    /// 根据传入的查询函数构建配置
    ///
    /// 不直接读取进程环境变量，方便测试。未设置或为空的变量使用默认值。
    pub fn from_lookup<F>(lookup: F) -> Result<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind_addr = read("BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid BIND_ADDR: {bind_addr}"))
            .suggestion("BIND_ADDR 需要是 host:port 格式，例如 0.0.0.0:8080")?;

        Ok(AppConfig {
            users_file: PathBuf::from(read("USERS_FILE", DEFAULT_USERS_FILE)),
            bind_addr,
            log_level: read("LOG_LEVEL", DEFAULT_LOG_LEVEL),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.users_file, PathBuf::from(DEFAULT_USERS_FILE));
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("USERS_FILE", "/var/lib/users.json"),
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.users_file, PathBuf::from("/var/lib/users.json"));
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[("USERS_FILE", "  "), ("LOG_LEVEL", "")])).unwrap();

        assert_eq!(config.users_file, PathBuf::from(DEFAULT_USERS_FILE));
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn rejects_malformed_bind_addr() {
        let result = AppConfig::from_lookup(lookup_from(&[("BIND_ADDR", "not-an-address")]));

        assert!(result.is_err());
    }
}
