//! 交换机 CRUD handlers
//!
//! 提供交换机资源的增删改查接口：
//! - GET /switches - 列出交换机
//! - POST /switches - 创建交换机（序列号唯一）
//! - GET /switches/{id} - 获取交换机详情
//! - PUT /switches/{id} - 更新交换机
//! - DELETE /switches/{id} - 删除交换机（仍被维护记录引用时拒绝）
//!
//! 返回结构携带由坐标派生的 Google Maps 链接与 ISO 格式日期。

use crate::AppState;
use crate::utils::response::{
    bad_request_error, conflict_error, not_found_error, storage_error, switch_to_dto,
    validation_error,
};
use crate::utils::validation::{validate_create_switch, validate_update_switch};
use api_contract::{ApiResponse, CreateSwitchRequest, SwitchDeviceDto, UpdateSwitchRequest};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(serde::Deserialize)]
pub struct SwitchPath {
    switch_id: i64,
}

/// 列出交换机
pub async fn list_switches(State(state): State<AppState>) -> Response {
    match state.switch_store.list_switches().await {
        Ok(items) => {
            let data: Vec<SwitchDeviceDto> = items.into_iter().map(switch_to_dto).collect();
            (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
        }
        Err(err) => storage_error(err),
    }
}

/// 创建交换机
///
/// 字段校验（名称/位置/型号/序列号/IP 长度，经纬度范围与小数位数）
/// 全部通过后预检序列号唯一性，再落存储。
pub async fn create_switch(
    State(state): State<AppState>,
    Json(req): Json<CreateSwitchRequest>,
) -> Response {
    let new = match validate_create_switch(req) {
        Ok(new) => new,
        Err(err) => return validation_error(err),
    };
    match state.switch_store.find_by_serial(&new.serial_number).await {
        Ok(Some(_)) => return bad_request_error("serial number already exists"),
        Ok(None) => {}
        Err(err) => return storage_error(err),
    }
    match state.switch_store.create_switch(new).await {
        Ok(item) => (
            StatusCode::OK,
            Json(ApiResponse::success(switch_to_dto(item))),
        )
            .into_response(),
        Err(err) => storage_error(err),
    }
}

/// 获取交换机详情
pub async fn get_switch(State(state): State<AppState>, Path(path): Path<SwitchPath>) -> Response {
    match state.switch_store.find_switch(path.switch_id).await {
        Ok(Some(item)) => (
            StatusCode::OK,
            Json(ApiResponse::success(switch_to_dto(item))),
        )
            .into_response(),
        Ok(None) => not_found_error(),
        Err(err) => storage_error(err),
    }
}

/// 更新交换机
///
/// 只覆盖请求里出现的字段；改序列号时预检唯一性。
pub async fn update_switch(
    State(state): State<AppState>,
    Path(path): Path<SwitchPath>,
    Json(req): Json<UpdateSwitchRequest>,
) -> Response {
    let update = match validate_update_switch(req) {
        Ok(update) => update,
        Err(err) => return validation_error(err),
    };
    if let Some(serial_number) = update.serial_number.as_deref() {
        match state.switch_store.find_by_serial(serial_number).await {
            Ok(Some(existing)) if existing.id != path.switch_id => {
                return bad_request_error("serial number already exists");
            }
            Ok(_) => {}
            Err(err) => return storage_error(err),
        }
    }
    match state
        .switch_store
        .update_switch(path.switch_id, update)
        .await
    {
        Ok(Some(item)) => (
            StatusCode::OK,
            Json(ApiResponse::success(switch_to_dto(item))),
        )
            .into_response(),
        Ok(None) => not_found_error(),
        Err(err) => storage_error(err),
    }
}

/// 删除交换机
///
/// 删除策略为 RESTRICT：仍被维护记录引用时返回 409。
pub async fn delete_switch(
    State(state): State<AppState>,
    Path(path): Path<SwitchPath>,
) -> Response {
    match state
        .maintenance_store
        .count_for_switch(path.switch_id)
        .await
    {
        Ok(0) => {}
        Ok(_) => return conflict_error("maintenance records still reference this switch"),
        Err(err) => return storage_error(err),
    }
    match state.switch_store.delete_switch(path.switch_id).await {
        Ok(true) => (StatusCode::OK, Json(ApiResponse::success(()))).into_response(),
        Ok(false) => not_found_error(),
        Err(err) => storage_error(err),
    }
}
