//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 用户可以在导出路由时传入共享数据 shared_state，这样所有路由函数都可以访问。

use crate::routes::health::__path_health_check;
use crate::routes::health::health_check;
use crate::routes::users::__path_create_user;
use crate::routes::users::__path_delete_user;
use crate::routes::users::__path_get_user;
use crate::routes::users::__path_list_users;
use crate::routes::users::__path_update_user;
use crate::routes::users::{create_user, delete_user, get_user, list_users, update_user};
use crate::AppState;
use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

pub mod health;
pub mod users;

/// 导出当前App的业务路由
///
/// ## 参数定义
/// - state: 共享数据，参考 [`AppState`] 定义。
///
/// ## **❗️注意事项：**
///
/// 由于 [`routes!`] 宏限制，同一个宏里面的handler必须对应同一个path，
/// `/users` 和 `/users/{id}` 需要拆开定义。
fn routers(state: AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(list_users, create_user))
        .routes(routes!(get_user, update_user, delete_user))
        .with_state(state)
}

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 生成OpenAPI文档
/// - 生成App路由，业务接口统一挂在 `/api/v1` 下
/// - 使用Scalar作为最终在线文档格式，访问地址 `/docs`
pub fn create_app_router(shared_state: AppState) -> Router {
    // 当前项目的OpenAPI声明
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "users", description = "用户增删改查，数据保存在JSON文件中"),
            (name = "health", description = "健康检查")
        ),
    )]
    struct ApiDoc;

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health_check))
        .nest("/api/v1", routers(shared_state))
        .split_for_parts();

    router.merge(Scalar::with_url("/docs", api))
}
