//! 领域模型：交换机维护管理的共享词汇。
//!
//! 包含所有模块共享的封闭枚举与字段校验规则：
//! - UserRole：用户角色（Administrator / Teknisi / User）
//! - MaintenanceStatus：维护状态（Selesai / Tertunda / Dalam Proses）
//! - validation：字段级校验（长度、格式、坐标范围）
//!
//! 角色与状态建模为封闭枚举而非开放字符串，
//! 非法取值在构造时即被拒绝。

use serde::{Deserialize, Serialize};

pub mod validation;

pub use validation::ValidationError;

/// 用户角色。
///
/// 仅作为标签使用，不承载任何授权逻辑。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Administrator,
    Teknisi,
    User,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::User
    }
}

impl UserRole {
    /// 枚举的线上字符串形式（区分大小写）。
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::Teknisi => "Teknisi",
            Self::User => "User",
        }
    }

    /// 严格解析：只接受三个成员的精确拼写。
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Administrator" => Some(Self::Administrator),
            "Teknisi" => Some(Self::Teknisi),
            "User" => Some(Self::User),
            _ => None,
        }
    }
}

/// 维护记录状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenanceStatus {
    Selesai,
    Tertunda,
    #[serde(rename = "Dalam Proses")]
    DalamProses,
}

impl Default for MaintenanceStatus {
    fn default() -> Self {
        Self::Tertunda
    }
}

impl MaintenanceStatus {
    /// 枚举的线上字符串形式（区分大小写）。
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Selesai => "Selesai",
            Self::Tertunda => "Tertunda",
            Self::DalamProses => "Dalam Proses",
        }
    }

    /// 严格解析：只接受三个成员的精确拼写。
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Selesai" => Some(Self::Selesai),
            "Tertunda" => Some(Self::Tertunda),
            "Dalam Proses" => Some(Self::DalamProses),
            _ => None,
        }
    }
}
