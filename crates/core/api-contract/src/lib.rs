//! 稳定的 DTO 与 API 响应契约。
//!
//! 请求体负责承接外部输入（角色/状态以字符串接收，由 handler 严格解析），
//! 返回结构携带投影后的派生字段（ISO 8601 时间文本、地图链接）。

use chrono::NaiveDate;
use domain::{MaintenanceStatus, UserRole};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 标准 API 响应封装。
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

/// 失败响应的错误体。
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}

/// 用户创建请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub full_name: String,
    /// 缺省为 "User"。
    pub role: Option<String>,
}

/// 用户更新请求体（缺省字段保持不变）。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}

/// 用户返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub is_active: bool,
    /// ISO 8601 时间文本。
    pub created_at: String,
    pub updated_at: String,
}

/// 交换机创建请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSwitchRequest {
    pub device_name: String,
    pub location_description: String,
    pub model: String,
    pub serial_number: String,
    pub implementation_date: NaiveDate,
    pub ip_address: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
}

/// 交换机更新请求体（缺省字段保持不变）。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSwitchRequest {
    pub device_name: Option<String>,
    pub location_description: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub implementation_date: Option<NaiveDate>,
    pub ip_address: Option<String>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
}

/// 交换机返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchDeviceDto {
    pub id: i64,
    pub device_name: String,
    pub location_description: String,
    pub model: String,
    pub serial_number: String,
    /// ISO 8601 日期文本（YYYY-MM-DD）。
    pub implementation_date: String,
    pub ip_address: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
    /// 由坐标派生的地图链接。
    pub google_maps_url: String,
    pub created_at: String,
    pub updated_at: String,
}

/// 维护记录创建请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaintenanceRequest {
    pub switch_device_id: i64,
    pub technician_id: i64,
    pub maintenance_date: NaiveDate,
    /// 缺省时取被引用用户的姓名。
    pub technician_name: Option<String>,
    pub work_description: String,
    /// 缺省为 "Tertunda"。
    pub status: Option<String>,
    /// 缺省为 "PM"（预防性维护），对应 "CM"（纠正性维护）。
    pub maintenance_type: Option<String>,
    pub additional_notes: Option<String>,
}

/// 维护记录更新请求体（缺省字段保持不变，外键不可更改）。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaintenanceRequest {
    pub maintenance_date: Option<NaiveDate>,
    pub technician_name: Option<String>,
    pub work_description: Option<String>,
    pub status: Option<String>,
    pub maintenance_type: Option<String>,
    pub additional_notes: Option<String>,
}

/// 维护记录返回结构。
///
/// `switch_device` 与 `technician` 仅在详情接口上填充。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecordDto {
    pub id: i64,
    pub switch_device_id: i64,
    pub technician_id: i64,
    pub maintenance_date: String,
    pub technician_name: String,
    pub work_description: String,
    pub status: MaintenanceStatus,
    pub maintenance_type: String,
    pub additional_notes: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_device: Option<SwitchDeviceDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technician: Option<UserDto>,
}

/// 维护统计返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceStatsDto {
    pub total_maintenance: i64,
    pub selesai: i64,
    pub tertunda: i64,
    pub dalam_proses: i64,
    pub maintenance_this_month: i64,
}

/// 交换机统计返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchStatsDto {
    pub total_switches: i64,
    pub switches_with_pending_maintenance: i64,
    pub switches_without_maintenance: i64,
    pub total_unique_locations: i64,
}
