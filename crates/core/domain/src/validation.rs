//! 字段级校验规则
//!
//! 提供统一的输入校验函数，失败时返回带字段名的 ValidationError：
//! - normalize_required / normalize_optional：必填与可选文本（去空格、非空、长度上限）
//! - normalize_notes：允许为空的文本（仅限长度）
//! - validate_email：邮箱格式（正则只编译一次）
//! - validate_latitude / validate_longitude：坐标范围与小数位数
//! - parse_role / parse_status：封闭枚举的严格解析
//!
//! 校验在任何持久化动作之前完成，一次失败只影响当前输入对象。

use crate::{MaintenanceStatus, UserRole};
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::OnceLock;

/// 各字段的长度上限（字符数）。
pub const USERNAME_MAX: usize = 100;
pub const EMAIL_MAX: usize = 255;
pub const FULL_NAME_MAX: usize = 200;
pub const DEVICE_NAME_MAX: usize = 200;
pub const LOCATION_MAX: usize = 500;
pub const MODEL_MAX: usize = 100;
pub const SERIAL_NUMBER_MAX: usize = 100;
pub const IP_ADDRESS_MAX: usize = 45;
pub const TECHNICIAN_NAME_MAX: usize = 200;
pub const WORK_DESCRIPTION_MAX: usize = 2000;
pub const MAINTENANCE_TYPE_MAX: usize = 50;
pub const ADDITIONAL_NOTES_MAX: usize = 1000;

/// 坐标最多允许的小数位数。
pub const COORDINATE_SCALE_MAX: u32 = 8;

/// 字段校验错误。
///
/// 每个变体携带字段名与被违反的约束，API 层据此返回 400。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field}: required")]
    Required { field: &'static str },
    #[error("{field}: exceeds {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("{field}: invalid format")]
    Pattern { field: &'static str },
    #[error("{field}: out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        min: i32,
        max: i32,
    },
    #[error("{field}: more than {max} decimal places")]
    TooManyDecimals { field: &'static str, max: u32 },
    #[error("{field}: invalid value '{value}'")]
    InvalidEnumValue { field: &'static str, value: String },
}

/// 校验必填文本：去除首尾空格、非空、长度不超过上限。
pub fn normalize_required(
    value: String,
    field: &'static str,
    max: usize,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field });
    }
    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(trimmed.to_string())
}

/// 校验可选文本：如果提供则按必填规则处理。
pub fn normalize_optional(
    value: Option<String>,
    field: &'static str,
    max: usize,
) -> Result<Option<String>, ValidationError> {
    match value {
        Some(value) => normalize_required(value, field, max).map(Some),
        None => Ok(None),
    }
}

/// 校验允许为空的文本（备注类字段）：仅限制长度。
pub fn normalize_notes(
    value: String,
    field: &'static str,
    max: usize,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(trimmed.to_string())
}

// 邮箱模式取自原始数据模型，进程内只编译一次。
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$")
            .expect("email pattern is valid")
    })
}

/// 校验邮箱：非空、长度不超过 255、匹配标准地址模式。
pub fn validate_email(value: String) -> Result<String, ValidationError> {
    let normalized = normalize_required(value, "email", EMAIL_MAX)?;
    if !email_re().is_match(&normalized) {
        return Err(ValidationError::Pattern { field: "email" });
    }
    Ok(normalized)
}

/// 校验纬度：范围 [-90, 90]，最多 8 位小数。
pub fn validate_latitude(value: Decimal) -> Result<Decimal, ValidationError> {
    validate_coordinate(value, "latitude", 90)
}

/// 校验经度：范围 [-180, 180]，最多 8 位小数。
pub fn validate_longitude(value: Decimal) -> Result<Decimal, ValidationError> {
    validate_coordinate(value, "longitude", 180)
}

fn validate_coordinate(
    value: Decimal,
    field: &'static str,
    bound: i32,
) -> Result<Decimal, ValidationError> {
    if value < Decimal::from(-bound) || value > Decimal::from(bound) {
        return Err(ValidationError::OutOfRange {
            field,
            min: -bound,
            max: bound,
        });
    }
    // normalize 去掉尾随零，避免 1.230000000 这类标度误报
    if value.normalize().scale() > COORDINATE_SCALE_MAX {
        return Err(ValidationError::TooManyDecimals {
            field,
            max: COORDINATE_SCALE_MAX,
        });
    }
    Ok(value)
}

/// 严格解析用户角色，未知取值返回 InvalidEnumValue。
pub fn parse_role(value: &str, field: &'static str) -> Result<UserRole, ValidationError> {
    UserRole::parse(value).ok_or_else(|| ValidationError::InvalidEnumValue {
        field,
        value: value.to_string(),
    })
}

/// 严格解析维护状态，未知取值返回 InvalidEnumValue。
pub fn parse_status(value: &str, field: &'static str) -> Result<MaintenanceStatus, ValidationError> {
    MaintenanceStatus::parse(value).ok_or_else(|| ValidationError::InvalidEnumValue {
        field,
        value: value.to_string(),
    })
}
