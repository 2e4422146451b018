//! 统计面板 handlers
//!
//! - GET /stats/maintenance - 维护记录统计（总数、各状态、本月）
//! - GET /stats/switches - 交换机统计（总数、待处理、从未维护、位置数）

use crate::AppState;
use crate::utils::response::{maintenance_stats_to_dto, storage_error, switch_stats_to_dto};
use api_contract::ApiResponse;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// 维护记录统计
pub async fn maintenance_stats(State(state): State<AppState>) -> Response {
    match state.maintenance_store.maintenance_stats().await {
        Ok(stats) => (
            StatusCode::OK,
            Json(ApiResponse::success(maintenance_stats_to_dto(stats))),
        )
            .into_response(),
        Err(err) => storage_error(err),
    }
}

/// 交换机统计
pub async fn switch_stats(State(state): State<AppState>) -> Response {
    match state.switch_store.switch_stats().await {
        Ok(stats) => (
            StatusCode::OK,
            Json(ApiResponse::success(switch_stats_to_dto(stats))),
        )
            .into_response(),
        Err(err) => storage_error(err),
    }
}
