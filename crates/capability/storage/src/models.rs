//! 数据模型
//!
//! 定义所有存储相关的数据模型和输入结构：
//! - 用户模型：UserRecord, NewUser, UserUpdate
//! - 交换机模型：SwitchDeviceRecord, NewSwitchDevice, SwitchDeviceUpdate
//! - 维护记录模型：MaintenanceRecord, NewMaintenanceRecord, MaintenanceUpdate
//! - 统计模型：MaintenanceStatsRecord, SwitchStatsRecord
//!
//! 主键由存储层分配（Postgres bigserial / 内存计数器），
//! 因此创建走 New* 输入结构，更新走字段全可选的 *Update 结构。

use chrono::{DateTime, NaiveDate, Utc};
use domain::{MaintenanceStatus, UserRole};
use rust_decimal::Decimal;

/// 用户记录。
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 用户创建输入。
///
/// `is_active` 固定以 true 起始，时间戳由存储层填充。
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
}

/// 用户更新输入。
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
}

/// 交换机记录。
///
/// 经纬度使用定点十进制，最多 8 位小数。
#[derive(Debug, Clone)]
pub struct SwitchDeviceRecord {
    pub id: i64,
    pub device_name: String,
    pub location_description: String,
    pub model: String,
    pub serial_number: String,
    pub implementation_date: NaiveDate,
    pub ip_address: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 交换机创建输入。
#[derive(Debug, Clone)]
pub struct NewSwitchDevice {
    pub device_name: String,
    pub location_description: String,
    pub model: String,
    pub serial_number: String,
    pub implementation_date: NaiveDate,
    pub ip_address: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
}

/// 交换机更新输入。
#[derive(Debug, Clone, Default)]
pub struct SwitchDeviceUpdate {
    pub device_name: Option<String>,
    pub location_description: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub implementation_date: Option<NaiveDate>,
    pub ip_address: Option<String>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
}

/// 维护记录。
///
/// `technician_name` 是被引用用户姓名的反规范化副本，
/// 用户改名时由用户存储在同一事务内同步（见 UserStore::update_user）。
#[derive(Debug, Clone)]
pub struct MaintenanceRecord {
    pub id: i64,
    pub switch_device_id: i64,
    pub technician_id: i64,
    pub maintenance_date: NaiveDate,
    pub technician_name: String,
    pub work_description: String,
    pub status: MaintenanceStatus,
    pub maintenance_type: String,
    pub additional_notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 维护记录创建输入。
///
/// 外键的存在性校验由调用方（handler）在创建前完成。
#[derive(Debug, Clone)]
pub struct NewMaintenanceRecord {
    pub switch_device_id: i64,
    pub technician_id: i64,
    pub maintenance_date: NaiveDate,
    pub technician_name: String,
    pub work_description: String,
    pub status: MaintenanceStatus,
    pub maintenance_type: String,
    pub additional_notes: String,
}

/// 维护记录更新输入（外键不可更改）。
#[derive(Debug, Clone, Default)]
pub struct MaintenanceUpdate {
    pub maintenance_date: Option<NaiveDate>,
    pub technician_name: Option<String>,
    pub work_description: Option<String>,
    pub status: Option<MaintenanceStatus>,
    pub maintenance_type: Option<String>,
    pub additional_notes: Option<String>,
}

/// 维护统计计数。
#[derive(Debug, Clone, Copy, Default)]
pub struct MaintenanceStatsRecord {
    pub total_maintenance: i64,
    pub selesai: i64,
    pub tertunda: i64,
    pub dalam_proses: i64,
    pub maintenance_this_month: i64,
}

/// 交换机统计计数。
#[derive(Debug, Clone, Copy, Default)]
pub struct SwitchStatsRecord {
    pub total_switches: i64,
    pub switches_with_pending_maintenance: i64,
    pub switches_without_maintenance: i64,
    pub total_unique_locations: i64,
}
