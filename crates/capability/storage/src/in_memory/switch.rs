//! 交换机内存存储实现
//!
//! 仅用于本地演示和测试。
//!
//! 功能：
//! - 交换机 CRUD 操作
//! - 序列号唯一性（镜像数据库唯一索引）
//! - 交换机统计计数

use super::InMemoryStore;
use crate::error::StorageError;
use crate::models::{NewSwitchDevice, SwitchDeviceRecord, SwitchDeviceUpdate, SwitchStatsRecord};
use crate::traits::SwitchStore;
use chrono::Utc;
use domain::MaintenanceStatus;
use std::collections::HashSet;
use std::sync::atomic::Ordering;

#[async_trait::async_trait]
impl SwitchStore for InMemoryStore {
    /// 列出所有交换机（按主键排序）
    async fn list_switches(&self) -> Result<Vec<SwitchDeviceRecord>, StorageError> {
        let mut items: Vec<SwitchDeviceRecord> = self
            .switches
            .read()
            .map(|map| map.values().cloned().collect())
            .unwrap_or_default();
        items.sort_by_key(|item| item.id);
        Ok(items)
    }

    /// 根据主键查找交换机
    async fn find_switch(
        &self,
        switch_id: i64,
    ) -> Result<Option<SwitchDeviceRecord>, StorageError> {
        let item = self
            .switches
            .read()
            .ok()
            .and_then(|map| map.get(&switch_id).cloned());
        Ok(item)
    }

    /// 根据序列号查找交换机
    async fn find_by_serial(
        &self,
        serial_number: &str,
    ) -> Result<Option<SwitchDeviceRecord>, StorageError> {
        let item = self.switches.read().ok().and_then(|map| {
            map.values()
                .find(|item| item.serial_number == serial_number)
                .cloned()
        });
        Ok(item)
    }

    /// 创建新交换机
    async fn create_switch(
        &self,
        new: NewSwitchDevice,
    ) -> Result<SwitchDeviceRecord, StorageError> {
        let mut map = self
            .switches
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        if map
            .values()
            .any(|item| item.serial_number == new.serial_number)
        {
            return Err(StorageError::new("serial number exists"));
        }
        let now = Utc::now();
        let record = SwitchDeviceRecord {
            id: self.next_switch_id.fetch_add(1, Ordering::Relaxed),
            device_name: new.device_name,
            location_description: new.location_description,
            model: new.model,
            serial_number: new.serial_number,
            implementation_date: new.implementation_date,
            ip_address: new.ip_address,
            latitude: new.latitude,
            longitude: new.longitude,
            created_at: now,
            updated_at: now,
        };
        map.insert(record.id, record.clone());
        Ok(record)
    }

    /// 更新交换机
    async fn update_switch(
        &self,
        switch_id: i64,
        update: SwitchDeviceUpdate,
    ) -> Result<Option<SwitchDeviceRecord>, StorageError> {
        let mut map = self
            .switches
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        if let Some(serial_number) = update.serial_number.as_deref() {
            if map
                .values()
                .any(|item| item.id != switch_id && item.serial_number == serial_number)
            {
                return Err(StorageError::new("serial number exists"));
            }
        }
        let switch = match map.get_mut(&switch_id) {
            Some(switch) => switch,
            None => return Ok(None),
        };
        if let Some(device_name) = update.device_name {
            switch.device_name = device_name;
        }
        if let Some(location_description) = update.location_description {
            switch.location_description = location_description;
        }
        if let Some(model) = update.model {
            switch.model = model;
        }
        if let Some(serial_number) = update.serial_number {
            switch.serial_number = serial_number;
        }
        if let Some(implementation_date) = update.implementation_date {
            switch.implementation_date = implementation_date;
        }
        if let Some(ip_address) = update.ip_address {
            switch.ip_address = ip_address;
        }
        if let Some(latitude) = update.latitude {
            switch.latitude = latitude;
        }
        if let Some(longitude) = update.longitude {
            switch.longitude = longitude;
        }
        switch.updated_at = Utc::now();
        Ok(Some(switch.clone()))
    }

    /// 删除交换机；仍被维护记录引用时拒绝
    async fn delete_switch(&self, switch_id: i64) -> Result<bool, StorageError> {
        let mut map = self
            .switches
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        if !map.contains_key(&switch_id) {
            return Ok(false);
        }
        let referenced = self
            .records
            .read()
            .map(|records| {
                records
                    .values()
                    .any(|record| record.switch_device_id == switch_id)
            })
            .unwrap_or(false);
        if referenced {
            return Err(StorageError::new("maintenance records reference switch"));
        }
        map.remove(&switch_id);
        Ok(true)
    }

    /// 交换机统计：总数、有待处理维护、从未维护、不同位置数
    async fn switch_stats(&self) -> Result<SwitchStatsRecord, StorageError> {
        let switches: Vec<SwitchDeviceRecord> = self
            .switches
            .read()
            .map(|map| map.values().cloned().collect())
            .unwrap_or_default();
        let records: Vec<(i64, MaintenanceStatus)> = self
            .records
            .read()
            .map(|map| {
                map.values()
                    .map(|record| (record.switch_device_id, record.status))
                    .collect()
            })
            .unwrap_or_default();

        let maintained: HashSet<i64> = records.iter().map(|(switch_id, _)| *switch_id).collect();
        let with_pending: HashSet<i64> = records
            .iter()
            .filter(|(_, status)| *status == MaintenanceStatus::Tertunda)
            .map(|(switch_id, _)| *switch_id)
            .collect();
        let locations: HashSet<&str> = switches
            .iter()
            .map(|switch| switch.location_description.as_str())
            .collect();

        Ok(SwitchStatsRecord {
            total_switches: switches.len() as i64,
            switches_with_pending_maintenance: with_pending.len() as i64,
            switches_without_maintenance: switches
                .iter()
                .filter(|switch| !maintained.contains(&switch.id))
                .count() as i64,
            total_unique_locations: locations.len() as i64,
        })
    }
}
