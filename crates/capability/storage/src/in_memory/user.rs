//! 用户内存存储实现
//!
//! 仅用于本地演示和测试。
//!
//! 功能：
//! - 用户 CRUD 操作
//! - 用户名/邮箱唯一性（镜像数据库唯一索引）
//! - 改名时同步维护记录的 technician_name

use super::InMemoryStore;
use crate::error::StorageError;
use crate::models::{NewUser, UserRecord, UserUpdate};
use crate::traits::UserStore;
use chrono::Utc;
use std::sync::atomic::Ordering;

#[async_trait::async_trait]
impl UserStore for InMemoryStore {
    /// 列出所有用户（按主键排序）
    async fn list_users(&self) -> Result<Vec<UserRecord>, StorageError> {
        let mut items: Vec<UserRecord> = self
            .users
            .read()
            .map(|map| map.values().cloned().collect())
            .unwrap_or_default();
        items.sort_by_key(|item| item.id);
        Ok(items)
    }

    /// 根据主键查找用户
    async fn find_user(&self, user_id: i64) -> Result<Option<UserRecord>, StorageError> {
        let item = self
            .users
            .read()
            .ok()
            .and_then(|map| map.get(&user_id).cloned());
        Ok(item)
    }

    /// 根据用户名查找用户
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StorageError> {
        let item = self
            .users
            .read()
            .ok()
            .and_then(|map| map.values().find(|item| item.username == username).cloned());
        Ok(item)
    }

    /// 根据邮箱查找用户
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StorageError> {
        let item = self
            .users
            .read()
            .ok()
            .and_then(|map| map.values().find(|item| item.email == email).cloned());
        Ok(item)
    }

    /// 创建新用户
    async fn create_user(&self, new: NewUser) -> Result<UserRecord, StorageError> {
        let mut map = self
            .users
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        if map.values().any(|item| item.username == new.username) {
            return Err(StorageError::new("username exists"));
        }
        if map.values().any(|item| item.email == new.email) {
            return Err(StorageError::new("email exists"));
        }
        let now = Utc::now();
        let record = UserRecord {
            id: self.next_user_id.fetch_add(1, Ordering::Relaxed),
            username: new.username,
            email: new.email,
            full_name: new.full_name,
            role: new.role,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        map.insert(record.id, record.clone());
        Ok(record)
    }

    /// 更新用户；改名时同步其维护记录的 technician_name
    async fn update_user(
        &self,
        user_id: i64,
        update: UserUpdate,
    ) -> Result<Option<UserRecord>, StorageError> {
        let mut map = self
            .users
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        if let Some(username) = update.username.as_deref() {
            if map
                .values()
                .any(|item| item.id != user_id && item.username == username)
            {
                return Err(StorageError::new("username exists"));
            }
        }
        if let Some(email) = update.email.as_deref() {
            if map
                .values()
                .any(|item| item.id != user_id && item.email == email)
            {
                return Err(StorageError::new("email exists"));
            }
        }
        let user = match map.get_mut(&user_id) {
            Some(user) => user,
            None => return Ok(None),
        };
        let now = Utc::now();
        let full_name_changed = update.full_name.is_some();
        if let Some(username) = update.username {
            user.username = username;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(full_name) = update.full_name {
            user.full_name = full_name;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(is_active) = update.is_active {
            user.is_active = is_active;
        }
        user.updated_at = now;
        let user = user.clone();
        // 锁顺序：users → records
        if full_name_changed {
            let mut records = self
                .records
                .write()
                .map_err(|_| StorageError::new("lock failed"))?;
            for record in records
                .values_mut()
                .filter(|record| record.technician_id == user_id)
            {
                record.technician_name = user.full_name.clone();
                record.updated_at = now;
            }
        }
        Ok(Some(user))
    }

    /// 删除用户；仍被维护记录引用时拒绝
    async fn delete_user(&self, user_id: i64) -> Result<bool, StorageError> {
        let mut map = self
            .users
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        if !map.contains_key(&user_id) {
            return Ok(false);
        }
        let referenced = self
            .records
            .read()
            .map(|records| {
                records
                    .values()
                    .any(|record| record.technician_id == user_id)
            })
            .unwrap_or(false);
        if referenced {
            return Err(StorageError::new("maintenance records reference user"));
        }
        map.remove(&user_id);
        Ok(true)
    }
}
