//! HTTP 响应辅助函数和 DTO 投影
//!
//! 提供统一的错误响应构造函数和 Record → DTO 投影函数：
//! - 错误响应：validation_error, bad_request_error, not_found_error,
//!   conflict_error, storage_error
//! - DTO 投影：user_to_dto, switch_to_dto, maintenance_to_dto,
//!   maintenance_stats_to_dto, switch_stats_to_dto
//!
//! 设计原则：
//! - 所有错误返回统一的 ApiResponse 格式
//! - HTTP 状态码与错误码对应
//! - 投影时把日期/时间字段转为 ISO 8601 文本，并由坐标派生地图链接

use api_contract::{
    ApiResponse, MaintenanceRecordDto, MaintenanceStatsDto, SwitchDeviceDto, SwitchStatsDto,
    UserDto,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::ValidationError;
use rust_decimal::Decimal;
use smt_storage::{
    MaintenanceRecord, MaintenanceStatsRecord, StorageError, SwitchDeviceRecord,
    SwitchStatsRecord, UserRecord,
};

/// 校验错误响应（400）
///
/// 非法枚举取值与其他字段约束使用不同的错误码，消息携带字段名与原因。
pub fn validation_error(err: ValidationError) -> Response {
    let code = match err {
        ValidationError::InvalidEnumValue { .. } => "INVALID.ENUM_VALUE",
        _ => "INVALID.REQUEST",
    };
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error(code, err.to_string())),
    )
        .into_response()
}

/// 错误请求响应（400）
pub fn bad_request_error(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error("INVALID.REQUEST", message.into())),
    )
        .into_response()
}

/// 资源未找到错误响应（404）
pub fn not_found_error() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error("RESOURCE.NOT_FOUND", "not found")),
    )
        .into_response()
}

/// 资源仍被引用错误响应（409，删除受限）
pub fn conflict_error(message: impl Into<String>) -> Response {
    (
        StatusCode::CONFLICT,
        Json(ApiResponse::<()>::error("RESOURCE.IN_USE", message.into())),
    )
        .into_response()
}

/// 存储错误响应（500）
pub fn storage_error(err: StorageError) -> Response {
    let message = err.to_string();
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error("INTERNAL.ERROR", message)),
    )
        .into_response()
}

/// 由坐标派生 Google Maps 链接，经纬度按存储精度原样输出
fn google_maps_url(latitude: Decimal, longitude: Decimal) -> String {
    format!("https://www.google.com/maps?q={latitude},{longitude}")
}

/// UserRecord 转 UserDto
pub fn user_to_dto(record: UserRecord) -> UserDto {
    UserDto {
        id: record.id,
        username: record.username,
        email: record.email,
        full_name: record.full_name,
        role: record.role,
        is_active: record.is_active,
        created_at: record.created_at.to_rfc3339(),
        updated_at: record.updated_at.to_rfc3339(),
    }
}

/// SwitchDeviceRecord 转 SwitchDeviceDto（含派生的地图链接）
pub fn switch_to_dto(record: SwitchDeviceRecord) -> SwitchDeviceDto {
    let google_maps_url = google_maps_url(record.latitude, record.longitude);
    SwitchDeviceDto {
        id: record.id,
        device_name: record.device_name,
        location_description: record.location_description,
        model: record.model,
        serial_number: record.serial_number,
        implementation_date: record.implementation_date.to_string(),
        ip_address: record.ip_address,
        latitude: record.latitude,
        longitude: record.longitude,
        google_maps_url,
        created_at: record.created_at.to_rfc3339(),
        updated_at: record.updated_at.to_rfc3339(),
    }
}

/// MaintenanceRecord 转 MaintenanceRecordDto
///
/// 关联投影（switch_device、technician）由详情 handler 另行填充。
pub fn maintenance_to_dto(record: MaintenanceRecord) -> MaintenanceRecordDto {
    MaintenanceRecordDto {
        id: record.id,
        switch_device_id: record.switch_device_id,
        technician_id: record.technician_id,
        maintenance_date: record.maintenance_date.to_string(),
        technician_name: record.technician_name,
        work_description: record.work_description,
        status: record.status,
        maintenance_type: record.maintenance_type,
        additional_notes: record.additional_notes,
        created_at: record.created_at.to_rfc3339(),
        updated_at: record.updated_at.to_rfc3339(),
        switch_device: None,
        technician: None,
    }
}

/// MaintenanceStatsRecord 转 MaintenanceStatsDto
pub fn maintenance_stats_to_dto(record: MaintenanceStatsRecord) -> MaintenanceStatsDto {
    MaintenanceStatsDto {
        total_maintenance: record.total_maintenance,
        selesai: record.selesai,
        tertunda: record.tertunda,
        dalam_proses: record.dalam_proses,
        maintenance_this_month: record.maintenance_this_month,
    }
}

/// SwitchStatsRecord 转 SwitchStatsDto
pub fn switch_stats_to_dto(record: SwitchStatsRecord) -> SwitchStatsDto {
    SwitchStatsDto {
        total_switches: record.total_switches,
        switches_with_pending_maintenance: record.switches_with_pending_maintenance,
        switches_without_maintenance: record.switches_without_maintenance,
        total_unique_locations: record.total_unique_locations,
    }
}
