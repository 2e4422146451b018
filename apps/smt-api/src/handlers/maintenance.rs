//! 维护记录 CRUD handlers
//!
//! 提供维护记录资源的增删改查接口：
//! - GET /maintenance-records - 列出维护记录
//! - POST /maintenance-records - 创建维护记录（需验证交换机与技术员存在）
//! - GET /maintenance-records/{id} - 获取详情（内嵌交换机与技术员投影）
//! - PUT /maintenance-records/{id} - 更新维护记录
//! - DELETE /maintenance-records/{id} - 删除维护记录

use crate::AppState;
use crate::utils::response::{
    bad_request_error, maintenance_to_dto, not_found_error, storage_error, switch_to_dto,
    user_to_dto, validation_error,
};
use crate::utils::validation::{validate_create_maintenance, validate_update_maintenance};
use api_contract::{
    ApiResponse, CreateMaintenanceRequest, MaintenanceRecordDto, UpdateMaintenanceRequest,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use smt_storage::NewMaintenanceRecord;

#[derive(serde::Deserialize)]
pub struct RecordPath {
    record_id: i64,
}

/// 列出维护记录
pub async fn list_maintenance_records(State(state): State<AppState>) -> Response {
    match state.maintenance_store.list_records().await {
        Ok(items) => {
            let data: Vec<MaintenanceRecordDto> =
                items.into_iter().map(maintenance_to_dto).collect();
            (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
        }
        Err(err) => storage_error(err),
    }
}

/// 创建维护记录
///
/// # 流程
///
/// 1. 字段校验（日期、描述/备注长度、状态枚举、类型长度），失败即返回 400
/// 2. 验证被引用的交换机存在
/// 3. 验证被引用的用户（技术员）存在
/// 4. `technicianName` 缺省时取该用户的姓名（反规范化副本）
/// 5. 调用 `maintenance_store.create_record` 保存并返回投影
///
/// # 错误处理
///
/// - `400 BAD REQUEST`: 字段校验失败或外键指向不存在的行
/// - `500 INTERNAL SERVER ERROR`: 存储层错误
pub async fn create_maintenance_record(
    State(state): State<AppState>,
    Json(req): Json<CreateMaintenanceRequest>,
) -> Response {
    let input = match validate_create_maintenance(req) {
        Ok(input) => input,
        Err(err) => return validation_error(err),
    };
    match state.switch_store.find_switch(input.switch_device_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return bad_request_error("switch device not found"),
        Err(err) => return storage_error(err),
    }
    let technician = match state.user_store.find_user(input.technician_id).await {
        Ok(Some(user)) => user,
        Ok(None) => return bad_request_error("technician not found"),
        Err(err) => return storage_error(err),
    };
    let record = NewMaintenanceRecord {
        switch_device_id: input.switch_device_id,
        technician_id: input.technician_id,
        maintenance_date: input.maintenance_date,
        technician_name: input
            .technician_name
            .unwrap_or_else(|| technician.full_name.clone()),
        work_description: input.work_description,
        status: input.status,
        maintenance_type: input.maintenance_type,
        additional_notes: input.additional_notes,
    };
    match state.maintenance_store.create_record(record).await {
        Ok(item) => (
            StatusCode::OK,
            Json(ApiResponse::success(maintenance_to_dto(item))),
        )
            .into_response(),
        Err(err) => storage_error(err),
    }
}

/// 获取维护记录详情
///
/// 详情接口内嵌被引用交换机与技术员的投影。
pub async fn get_maintenance_record(
    State(state): State<AppState>,
    Path(path): Path<RecordPath>,
) -> Response {
    let record = match state.maintenance_store.find_record(path.record_id).await {
        Ok(Some(record)) => record,
        Ok(None) => return not_found_error(),
        Err(err) => return storage_error(err),
    };
    let switch = match state.switch_store.find_switch(record.switch_device_id).await {
        Ok(switch) => switch,
        Err(err) => return storage_error(err),
    };
    let technician = match state.user_store.find_user(record.technician_id).await {
        Ok(user) => user,
        Err(err) => return storage_error(err),
    };
    let mut dto = maintenance_to_dto(record);
    dto.switch_device = switch.map(switch_to_dto);
    dto.technician = technician.map(user_to_dto);
    (StatusCode::OK, Json(ApiResponse::success(dto))).into_response()
}

/// 更新维护记录
///
/// 只覆盖请求里出现的字段，外键不可更改。
pub async fn update_maintenance_record(
    State(state): State<AppState>,
    Path(path): Path<RecordPath>,
    Json(req): Json<UpdateMaintenanceRequest>,
) -> Response {
    let update = match validate_update_maintenance(req) {
        Ok(update) => update,
        Err(err) => return validation_error(err),
    };
    match state
        .maintenance_store
        .update_record(path.record_id, update)
        .await
    {
        Ok(Some(item)) => (
            StatusCode::OK,
            Json(ApiResponse::success(maintenance_to_dto(item))),
        )
            .into_response(),
        Ok(None) => not_found_error(),
        Err(err) => storage_error(err),
    }
}

/// 删除维护记录
pub async fn delete_maintenance_record(
    State(state): State<AppState>,
    Path(path): Path<RecordPath>,
) -> Response {
    match state.maintenance_store.delete_record(path.record_id).await {
        Ok(true) => (StatusCode::OK, Json(ApiResponse::success(()))).into_response(),
        Ok(false) => not_found_error(),
        Err(err) => storage_error(err),
    }
}
