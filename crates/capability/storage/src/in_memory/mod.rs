//! 内存存储实现模块
//!
//! 仅用于本地演示和测试。
//!
//! 包含以下实现：
//! - UserStore: InMemoryStore
//! - SwitchStore: InMemoryStore
//! - MaintenanceStore: InMemoryStore
//!
//! 三类资源共用同一个 InMemoryStore 实例，跨资源不变式
//! （外键存在性、technician_name 同步、删除限制）才能在进程内维护。
//! 锁的获取顺序固定为 users → switches → records，避免死锁。

pub mod maintenance;
pub mod switch;
pub mod user;

use crate::models::{MaintenanceRecord, SwitchDeviceRecord, UserRecord};
use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::AtomicI64;

/// 内存存储
///
/// 使用 RwLock + HashMap 提供线程安全的内存存储，
/// 主键由原子计数器从 1 开始分配。
pub struct InMemoryStore {
    pub(crate) users: RwLock<HashMap<i64, UserRecord>>,
    pub(crate) switches: RwLock<HashMap<i64, SwitchDeviceRecord>>,
    pub(crate) records: RwLock<HashMap<i64, MaintenanceRecord>>,
    pub(crate) next_user_id: AtomicI64,
    pub(crate) next_switch_id: AtomicI64,
    pub(crate) next_record_id: AtomicI64,
}

impl InMemoryStore {
    /// 创建空的内存存储
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            switches: RwLock::new(HashMap::new()),
            records: RwLock::new(HashMap::new()),
            next_user_id: AtomicI64::new(1),
            next_switch_id: AtomicI64::new(1),
            next_record_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
