//! 维护记录内存存储实现
//!
//! 仅用于本地演示和测试。
//!
//! 功能：
//! - 维护记录 CRUD 操作
//! - 外键存在性检查（镜像数据库外键约束）
//! - 引用计数与维护统计

use super::InMemoryStore;
use crate::error::StorageError;
use crate::models::{
    MaintenanceRecord, MaintenanceStatsRecord, MaintenanceUpdate, NewMaintenanceRecord,
};
use crate::traits::MaintenanceStore;
use chrono::{Datelike, Utc};
use domain::MaintenanceStatus;
use std::sync::atomic::Ordering;

#[async_trait::async_trait]
impl MaintenanceStore for InMemoryStore {
    /// 列出所有维护记录（按维护日期降序，再按主键）
    async fn list_records(&self) -> Result<Vec<MaintenanceRecord>, StorageError> {
        let mut items: Vec<MaintenanceRecord> = self
            .records
            .read()
            .map(|map| map.values().cloned().collect())
            .unwrap_or_default();
        items.sort_by(|a, b| {
            b.maintenance_date
                .cmp(&a.maintenance_date)
                .then(a.id.cmp(&b.id))
        });
        Ok(items)
    }

    /// 根据主键查找维护记录
    async fn find_record(
        &self,
        record_id: i64,
    ) -> Result<Option<MaintenanceRecord>, StorageError> {
        let item = self
            .records
            .read()
            .ok()
            .and_then(|map| map.get(&record_id).cloned());
        Ok(item)
    }

    /// 创建新维护记录；外键指向不存在的行时拒绝
    async fn create_record(
        &self,
        new: NewMaintenanceRecord,
    ) -> Result<MaintenanceRecord, StorageError> {
        // 锁顺序：users → switches → records
        let user_exists = self
            .users
            .read()
            .map(|map| map.contains_key(&new.technician_id))
            .unwrap_or(false);
        if !user_exists {
            return Err(StorageError::new("user not found"));
        }
        let switch_exists = self
            .switches
            .read()
            .map(|map| map.contains_key(&new.switch_device_id))
            .unwrap_or(false);
        if !switch_exists {
            return Err(StorageError::new("switch not found"));
        }
        let mut map = self
            .records
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        let now = Utc::now();
        let record = MaintenanceRecord {
            id: self.next_record_id.fetch_add(1, Ordering::Relaxed),
            switch_device_id: new.switch_device_id,
            technician_id: new.technician_id,
            maintenance_date: new.maintenance_date,
            technician_name: new.technician_name,
            work_description: new.work_description,
            status: new.status,
            maintenance_type: new.maintenance_type,
            additional_notes: new.additional_notes,
            created_at: now,
            updated_at: now,
        };
        map.insert(record.id, record.clone());
        Ok(record)
    }

    /// 更新维护记录
    async fn update_record(
        &self,
        record_id: i64,
        update: MaintenanceUpdate,
    ) -> Result<Option<MaintenanceRecord>, StorageError> {
        let mut map = self
            .records
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        let record = match map.get_mut(&record_id) {
            Some(record) => record,
            None => return Ok(None),
        };
        if let Some(maintenance_date) = update.maintenance_date {
            record.maintenance_date = maintenance_date;
        }
        if let Some(technician_name) = update.technician_name {
            record.technician_name = technician_name;
        }
        if let Some(work_description) = update.work_description {
            record.work_description = work_description;
        }
        if let Some(status) = update.status {
            record.status = status;
        }
        if let Some(maintenance_type) = update.maintenance_type {
            record.maintenance_type = maintenance_type;
        }
        if let Some(additional_notes) = update.additional_notes {
            record.additional_notes = additional_notes;
        }
        record.updated_at = Utc::now();
        Ok(Some(record.clone()))
    }

    /// 删除维护记录
    async fn delete_record(&self, record_id: i64) -> Result<bool, StorageError> {
        let mut map = self
            .records
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(map.remove(&record_id).is_some())
    }

    /// 统计引用某交换机的维护记录数
    async fn count_for_switch(&self, switch_id: i64) -> Result<i64, StorageError> {
        let count = self
            .records
            .read()
            .map(|map| {
                map.values()
                    .filter(|record| record.switch_device_id == switch_id)
                    .count() as i64
            })
            .unwrap_or(0);
        Ok(count)
    }

    /// 统计引用某用户的维护记录数
    async fn count_for_user(&self, technician_id: i64) -> Result<i64, StorageError> {
        let count = self
            .records
            .read()
            .map(|map| {
                map.values()
                    .filter(|record| record.technician_id == technician_id)
                    .count() as i64
            })
            .unwrap_or(0);
        Ok(count)
    }

    /// 维护统计：总数、各状态计数、本月计数
    async fn maintenance_stats(&self) -> Result<MaintenanceStatsRecord, StorageError> {
        let today = Utc::now().date_naive();
        let stats = self
            .records
            .read()
            .map(|map| {
                let mut stats = MaintenanceStatsRecord::default();
                for record in map.values() {
                    stats.total_maintenance += 1;
                    match record.status {
                        MaintenanceStatus::Selesai => stats.selesai += 1,
                        MaintenanceStatus::Tertunda => stats.tertunda += 1,
                        MaintenanceStatus::DalamProses => stats.dalam_proses += 1,
                    }
                    if record.maintenance_date.year() == today.year()
                        && record.maintenance_date.month() == today.month()
                    {
                        stats.maintenance_this_month += 1;
                    }
                }
                stats
            })
            .unwrap_or_default();
        Ok(stats)
    }
}
