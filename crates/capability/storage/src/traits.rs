//! 存储接口 Trait 定义
//!
//! 定义所有资源存储的异步接口：
//! - UserStore：用户存储
//! - SwitchStore：交换机存储
//! - MaintenanceStore：维护记录存储
//!
//! 设计原则：
//! - 所有接口返回 StorageError
//! - 使用 async_trait 支持动态分发
//! - 引用计数查询（count_for_*）供调用方实施「存在引用则拒绝删除」策略

use crate::error::StorageError;
use crate::models::{
    MaintenanceRecord, MaintenanceStatsRecord, MaintenanceUpdate, NewMaintenanceRecord,
    NewSwitchDevice, NewUser, SwitchDeviceRecord, SwitchDeviceUpdate, SwitchStatsRecord,
    UserRecord, UserUpdate,
};
use async_trait::async_trait;

/// 用户存储接口
///
/// 提供用户 CRUD 操作与唯一键查询（禁止在 handler 中直接连 SQL）。
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 列出所有用户
    async fn list_users(&self) -> Result<Vec<UserRecord>, StorageError>;

    /// 根据主键查找用户
    async fn find_user(&self, user_id: i64) -> Result<Option<UserRecord>, StorageError>;

    /// 根据用户名查找用户（唯一键）
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StorageError>;

    /// 根据邮箱查找用户（唯一键）
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StorageError>;

    /// 创建新用户，主键与时间戳由存储层分配
    async fn create_user(&self, new: NewUser) -> Result<UserRecord, StorageError>;

    /// 更新用户；改名时同步其维护记录的 technician_name（同一事务）
    async fn update_user(
        &self,
        user_id: i64,
        update: UserUpdate,
    ) -> Result<Option<UserRecord>, StorageError>;

    /// 删除用户；仍被维护记录引用时返回错误
    async fn delete_user(&self, user_id: i64) -> Result<bool, StorageError>;
}

/// 交换机存储接口
///
/// 提供交换机 CRUD 操作与统计计数。
#[async_trait]
pub trait SwitchStore: Send + Sync {
    /// 列出所有交换机
    async fn list_switches(&self) -> Result<Vec<SwitchDeviceRecord>, StorageError>;

    /// 根据主键查找交换机
    async fn find_switch(&self, switch_id: i64) -> Result<Option<SwitchDeviceRecord>, StorageError>;

    /// 根据序列号查找交换机（唯一键）
    async fn find_by_serial(
        &self,
        serial_number: &str,
    ) -> Result<Option<SwitchDeviceRecord>, StorageError>;

    /// 创建新交换机
    async fn create_switch(
        &self,
        new: NewSwitchDevice,
    ) -> Result<SwitchDeviceRecord, StorageError>;

    /// 更新交换机
    async fn update_switch(
        &self,
        switch_id: i64,
        update: SwitchDeviceUpdate,
    ) -> Result<Option<SwitchDeviceRecord>, StorageError>;

    /// 删除交换机；仍被维护记录引用时返回错误
    async fn delete_switch(&self, switch_id: i64) -> Result<bool, StorageError>;

    /// 交换机统计：总数、有待处理维护、从未维护、不同位置数
    async fn switch_stats(&self) -> Result<SwitchStatsRecord, StorageError>;
}

/// 维护记录存储接口
#[async_trait]
pub trait MaintenanceStore: Send + Sync {
    /// 列出所有维护记录
    async fn list_records(&self) -> Result<Vec<MaintenanceRecord>, StorageError>;

    /// 根据主键查找维护记录
    async fn find_record(&self, record_id: i64) -> Result<Option<MaintenanceRecord>, StorageError>;

    /// 创建新维护记录（外键存在性由调用方先行校验）
    async fn create_record(
        &self,
        new: NewMaintenanceRecord,
    ) -> Result<MaintenanceRecord, StorageError>;

    /// 更新维护记录
    async fn update_record(
        &self,
        record_id: i64,
        update: MaintenanceUpdate,
    ) -> Result<Option<MaintenanceRecord>, StorageError>;

    /// 删除维护记录
    async fn delete_record(&self, record_id: i64) -> Result<bool, StorageError>;

    /// 统计引用某交换机的维护记录数
    async fn count_for_switch(&self, switch_id: i64) -> Result<i64, StorageError>;

    /// 统计引用某用户（技术员）的维护记录数
    async fn count_for_user(&self, technician_id: i64) -> Result<i64, StorageError>;

    /// 维护统计：总数、各状态计数、本月计数
    async fn maintenance_stats(&self) -> Result<MaintenanceStatsRecord, StorageError>;
}
