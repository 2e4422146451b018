//! 交换机维护管理 HTTP API 与请求追踪 ID。

mod handlers;
mod routes;
mod utils;

use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware::{self, Next},
    response::Response,
};
use smt_config::AppConfig;
use smt_storage::{
    MaintenanceStore, PgMaintenanceStore, PgSwitchStore, PgUserStore, SwitchStore, UserStore,
    connect_pool,
};
use smt_telemetry::{init_tracing, new_request_ids};
use std::sync::Arc;
use tracing::Instrument;

/// 应用共享状态：各资源的存储实例。
#[derive(Clone)]
pub struct AppState {
    pub user_store: Arc<dyn UserStore>,
    pub switch_store: Arc<dyn SwitchStore>,
    pub maintenance_store: Arc<dyn MaintenanceStore>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing();

    // Postgres 存储（三类资源共用一个连接池）
    let pool = connect_pool(&config.database_url).await?;
    let state = AppState {
        user_store: Arc::new(PgUserStore::new(pool.clone())),
        switch_store: Arc::new(PgSwitchStore::new(pool.clone())),
        maintenance_store: Arc::new(PgMaintenanceStore::new(pool)),
    };

    let app = routes::create_api_router()
        .with_state(state)
        // 注入 request_id/trace_id
        .layer(middleware::from_fn(request_context));

    tracing::info!(addr = %config.http_addr, "smt-api listening");
    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn request_context(mut req: Request<Body>, next: Next) -> Response {
    // 生成 request_id 与 trace_id，并注入请求扩展与日志
    let ids = new_request_ids();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    req.extensions_mut().insert(ids.clone());

    let span = tracing::info_span!(
        "request",
        request_id = %ids.request_id,
        trace_id = %ids.trace_id,
        method = %method,
        path = %path
    );

    let mut response = next.run(req).instrument(span).await;
    response.headers_mut().insert(
        "x-request-id",
        HeaderValue::from_str(&ids.request_id).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    response.headers_mut().insert(
        "x-trace-id",
        HeaderValue::from_str(&ids.trace_id).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    response
}
