//! HTTP handlers
//!
//! 各资源的 CRUD 与统计接口实现：
//! - users：用户管理
//! - switches：交换机管理
//! - maintenance：维护记录管理
//! - stats：统计面板

pub mod maintenance;
pub mod stats;
pub mod switches;
pub mod users;

pub use maintenance::*;
pub use stats::*;
pub use switches::*;
pub use users::*;

use axum::{Json, response::IntoResponse};

/// 健康检查
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true }))
}
