use color_eyre::eyre::Context;
use color_eyre::Result;
use shared_lib::AppConfig;
use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = AppConfig::load()?;

    // 设置了RUST_LOG时优先使用，否则使用配置中的日志级别
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Invalid LOG_LEVEL")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("🚀 启动 user-backend...");

    // 关闭信号，收到Ctrl-C后通知web服务优雅退出
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("❌ 监听关闭信号失败: {}", e);
            // 保持发送端存活，否则web服务会把发送端被丢弃当作关闭信号
            std::future::pending::<()>().await;
        }
        info!("📴 收到关闭信号");
        let _ = shutdown_tx.send(true);
    });

    web_service::start_web_service(config, shutdown_rx).await
}
