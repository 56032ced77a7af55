//! Web服务模块
//!
//! 提供用户增删改查的 HTTP API 接口和文档服务

use color_eyre::Result;
use database::{JsonFileRepository, UserRepositoryTrait};
use shared_lib::AppConfig;
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::info;

pub mod models;
pub mod routes;
pub mod services;

use services::UserService;

/// 应用共享状态
///
/// 存储实现通过 [`UserRepositoryTrait`] 注入，线上使用JSON文件，测试可以换成内存实现。
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
}

impl AppState {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self {
            user_service: Arc::new(UserService::new(repository)),
        }
    }
}

/// 启动 Web 服务
///
/// 收到 `shutdown_rx` 的关闭信号后优雅退出
pub async fn start_web_service(config: Arc<AppConfig>, shutdown_rx: Receiver<bool>) -> Result<()> {
    let repository = JsonFileRepository::new(&config.users_file);
    repository.ensure_exists().await?;
    info!("🗄️ 用户数据文件: {}", repository.path().display());

    let router = routes::create_app_router(AppState::new(Arc::new(repository)));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("🚀 启动 Web Service 在 {}", config.bind_addr);

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(wait_for_shutdown(shutdown_rx))
        .await?;

    info!("✅ Web Service 已停止");
    Ok(())
}

/// 等待关闭信号
async fn wait_for_shutdown(mut shutdown_rx: Receiver<bool>) {
    // 如果已经是 true，直接返回
    if !*shutdown_rx.borrow() {
        // 发送端被丢弃也视为关闭
        let _ = shutdown_rx.changed().await;
    }
    info!("🛑 Web Service 正在关闭...");
}
