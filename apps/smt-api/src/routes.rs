//! 路由定义
//!
//! 集中管理所有 API 路由，将路径映射到对应的 handlers。
//! 路由包括：
//! - 健康检查：/health
//! - 用户管理：/users/*
//! - 交换机管理：/switches/*
//! - 维护记录管理：/maintenance-records/*
//! - 统计面板：/stats/*

use super::AppState;
use super::handlers::*;
use axum::{Router, routing::get};

/// 创建 API 路由
///
/// 返回包含所有 API 端点的 Router。
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:user_id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/switches", get(list_switches).post(create_switch))
        .route(
            "/switches/:switch_id",
            get(get_switch).put(update_switch).delete(delete_switch),
        )
        .route(
            "/maintenance-records",
            get(list_maintenance_records).post(create_maintenance_record),
        )
        .route(
            "/maintenance-records/:record_id",
            get(get_maintenance_record)
                .put(update_maintenance_record)
                .delete(delete_maintenance_record),
        )
        .route("/stats/maintenance", get(maintenance_stats))
        .route("/stats/switches", get(switch_stats))
}
