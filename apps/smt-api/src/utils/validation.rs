//! 输入验证辅助函数
//!
//! 将请求体转换为经过字段校验的存储输入：
//! - validate_create_user / validate_update_user
//! - validate_create_switch / validate_update_switch
//! - validate_create_maintenance / validate_update_maintenance
//!
//! 验证规则：
//! - 必填文本去除首尾空格且非空，全部字段受长度上限约束
//! - 邮箱匹配标准地址模式，经纬度受范围与小数位数约束
//! - 角色/状态按封闭枚举严格解析
//! - 校验全部通过后才会触达存储层，单个输入的失败不影响其他请求

use api_contract::{
    CreateMaintenanceRequest, CreateSwitchRequest, CreateUserRequest, UpdateMaintenanceRequest,
    UpdateSwitchRequest, UpdateUserRequest,
};
use chrono::NaiveDate;
use domain::validation::{
    self, ADDITIONAL_NOTES_MAX, DEVICE_NAME_MAX, FULL_NAME_MAX, IP_ADDRESS_MAX, LOCATION_MAX,
    MAINTENANCE_TYPE_MAX, MODEL_MAX, SERIAL_NUMBER_MAX, TECHNICIAN_NAME_MAX, USERNAME_MAX,
    WORK_DESCRIPTION_MAX,
};
use domain::{MaintenanceStatus, UserRole, ValidationError};
use smt_storage::{
    MaintenanceUpdate, NewSwitchDevice, NewUser, SwitchDeviceUpdate, UserUpdate,
};

/// 校验通过的维护记录输入。
///
/// `technician_name` 缺省时由 handler 以被引用用户的姓名补齐。
#[derive(Debug)]
pub struct MaintenanceInput {
    pub switch_device_id: i64,
    pub technician_id: i64,
    pub maintenance_date: NaiveDate,
    pub technician_name: Option<String>,
    pub work_description: String,
    pub status: MaintenanceStatus,
    pub maintenance_type: String,
    pub additional_notes: String,
}

/// 校验用户创建请求
pub fn validate_create_user(req: CreateUserRequest) -> Result<NewUser, ValidationError> {
    let username = validation::normalize_required(req.username, "username", USERNAME_MAX)?;
    let email = validation::validate_email(req.email)?;
    let full_name = validation::normalize_required(req.full_name, "fullName", FULL_NAME_MAX)?;
    let role = match req.role {
        Some(role) => validation::parse_role(&role, "role")?,
        None => UserRole::default(),
    };
    Ok(NewUser {
        username,
        email,
        full_name,
        role,
    })
}

/// 校验用户更新请求（缺省字段保持 None）
pub fn validate_update_user(req: UpdateUserRequest) -> Result<UserUpdate, ValidationError> {
    let username = validation::normalize_optional(req.username, "username", USERNAME_MAX)?;
    let email = match req.email {
        Some(email) => Some(validation::validate_email(email)?),
        None => None,
    };
    let full_name = validation::normalize_optional(req.full_name, "fullName", FULL_NAME_MAX)?;
    let role = match req.role {
        Some(role) => Some(validation::parse_role(&role, "role")?),
        None => None,
    };
    Ok(UserUpdate {
        username,
        email,
        full_name,
        role,
        is_active: req.is_active,
    })
}

/// 校验交换机创建请求
pub fn validate_create_switch(
    req: CreateSwitchRequest,
) -> Result<NewSwitchDevice, ValidationError> {
    let device_name = validation::normalize_required(req.device_name, "deviceName", DEVICE_NAME_MAX)?;
    let location_description = validation::normalize_required(
        req.location_description,
        "locationDescription",
        LOCATION_MAX,
    )?;
    let model = validation::normalize_required(req.model, "model", MODEL_MAX)?;
    let serial_number =
        validation::normalize_required(req.serial_number, "serialNumber", SERIAL_NUMBER_MAX)?;
    let ip_address = validation::normalize_required(req.ip_address, "ipAddress", IP_ADDRESS_MAX)?;
    let latitude = validation::validate_latitude(req.latitude)?;
    let longitude = validation::validate_longitude(req.longitude)?;
    Ok(NewSwitchDevice {
        device_name,
        location_description,
        model,
        serial_number,
        implementation_date: req.implementation_date,
        ip_address,
        latitude,
        longitude,
    })
}

/// 校验交换机更新请求（缺省字段保持 None）
pub fn validate_update_switch(
    req: UpdateSwitchRequest,
) -> Result<SwitchDeviceUpdate, ValidationError> {
    let device_name = validation::normalize_optional(req.device_name, "deviceName", DEVICE_NAME_MAX)?;
    let location_description = validation::normalize_optional(
        req.location_description,
        "locationDescription",
        LOCATION_MAX,
    )?;
    let model = validation::normalize_optional(req.model, "model", MODEL_MAX)?;
    let serial_number =
        validation::normalize_optional(req.serial_number, "serialNumber", SERIAL_NUMBER_MAX)?;
    let ip_address = validation::normalize_optional(req.ip_address, "ipAddress", IP_ADDRESS_MAX)?;
    let latitude = match req.latitude {
        Some(latitude) => Some(validation::validate_latitude(latitude)?),
        None => None,
    };
    let longitude = match req.longitude {
        Some(longitude) => Some(validation::validate_longitude(longitude)?),
        None => None,
    };
    Ok(SwitchDeviceUpdate {
        device_name,
        location_description,
        model,
        serial_number,
        implementation_date: req.implementation_date,
        ip_address,
        latitude,
        longitude,
    })
}

/// 校验维护记录创建请求
///
/// 外键存在性不在此处校验，由 handler 查询存储后决定。
pub fn validate_create_maintenance(
    req: CreateMaintenanceRequest,
) -> Result<MaintenanceInput, ValidationError> {
    let technician_name = validation::normalize_optional(
        req.technician_name,
        "technicianName",
        TECHNICIAN_NAME_MAX,
    )?;
    let work_description = validation::normalize_required(
        req.work_description,
        "workDescription",
        WORK_DESCRIPTION_MAX,
    )?;
    let status = match req.status {
        Some(status) => validation::parse_status(&status, "status")?,
        None => MaintenanceStatus::default(),
    };
    let maintenance_type = match req.maintenance_type {
        Some(value) => {
            validation::normalize_required(value, "maintenanceType", MAINTENANCE_TYPE_MAX)?
        }
        None => "PM".to_string(),
    };
    let additional_notes = match req.additional_notes {
        Some(value) => validation::normalize_notes(value, "additionalNotes", ADDITIONAL_NOTES_MAX)?,
        None => String::new(),
    };
    Ok(MaintenanceInput {
        switch_device_id: req.switch_device_id,
        technician_id: req.technician_id,
        maintenance_date: req.maintenance_date,
        technician_name,
        work_description,
        status,
        maintenance_type,
        additional_notes,
    })
}

/// 校验维护记录更新请求（缺省字段保持 None）
pub fn validate_update_maintenance(
    req: UpdateMaintenanceRequest,
) -> Result<MaintenanceUpdate, ValidationError> {
    let technician_name = validation::normalize_optional(
        req.technician_name,
        "technicianName",
        TECHNICIAN_NAME_MAX,
    )?;
    let work_description = validation::normalize_optional(
        req.work_description,
        "workDescription",
        WORK_DESCRIPTION_MAX,
    )?;
    let status = match req.status {
        Some(status) => Some(validation::parse_status(&status, "status")?),
        None => None,
    };
    let maintenance_type = validation::normalize_optional(
        req.maintenance_type,
        "maintenanceType",
        MAINTENANCE_TYPE_MAX,
    )?;
    let additional_notes = match req.additional_notes {
        Some(value) => {
            Some(validation::normalize_notes(value, "additionalNotes", ADDITIONAL_NOTES_MAX)?)
        }
        None => None,
    };
    Ok(MaintenanceUpdate {
        maintenance_date: req.maintenance_date,
        technician_name,
        work_description,
        status,
        maintenance_type,
        additional_notes,
    })
}
