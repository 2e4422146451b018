//! Postgres 交换机存储实现
//!
//! 通过 SQL 查询实现交换机 CRUD 操作与统计计数。
//!
//! 设计要点：
//! - 使用参数化 SQL 防止注入
//! - 经纬度映射 numeric(11,8) / numeric(12,8) 列

use crate::error::StorageError;
use crate::models::{NewSwitchDevice, SwitchDeviceRecord, SwitchDeviceUpdate, SwitchStatsRecord};
use crate::traits::SwitchStore;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

const SWITCH_COLUMNS: &str = "id, device_name, location_description, model, serial_number, \
     implementation_date, ip_address, latitude, longitude, created_at, updated_at";

pub struct PgSwitchStore {
    pub pool: PgPool,
}

impl PgSwitchStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let pool = crate::connection::connect_pool(database_url).await?;
        Ok(Self { pool })
    }
}

fn row_to_switch(row: &PgRow) -> Result<SwitchDeviceRecord, StorageError> {
    Ok(SwitchDeviceRecord {
        id: row.try_get("id")?,
        device_name: row.try_get("device_name")?,
        location_description: row.try_get("location_description")?,
        model: row.try_get("model")?,
        serial_number: row.try_get("serial_number")?,
        implementation_date: row.try_get("implementation_date")?,
        ip_address: row.try_get("ip_address")?,
        latitude: row.try_get("latitude")?,
        longitude: row.try_get("longitude")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait::async_trait]
impl SwitchStore for PgSwitchStore {
    async fn list_switches(&self) -> Result<Vec<SwitchDeviceRecord>, StorageError> {
        let rows = sqlx::query(&format!(
            "select {SWITCH_COLUMNS} from switch_devices order by id"
        ))
        .fetch_all(&self.pool)
        .await?;
        let mut switches = Vec::with_capacity(rows.len());
        for row in rows {
            switches.push(row_to_switch(&row)?);
        }
        Ok(switches)
    }

    async fn find_switch(
        &self,
        switch_id: i64,
    ) -> Result<Option<SwitchDeviceRecord>, StorageError> {
        let row = sqlx::query(&format!(
            "select {SWITCH_COLUMNS} from switch_devices where id = $1"
        ))
        .bind(switch_id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_switch).transpose()
    }

    async fn find_by_serial(
        &self,
        serial_number: &str,
    ) -> Result<Option<SwitchDeviceRecord>, StorageError> {
        let row = sqlx::query(&format!(
            "select {SWITCH_COLUMNS} from switch_devices where serial_number = $1"
        ))
        .bind(serial_number)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_switch).transpose()
    }

    async fn create_switch(
        &self,
        new: NewSwitchDevice,
    ) -> Result<SwitchDeviceRecord, StorageError> {
        let now = Utc::now();
        let row = sqlx::query(&format!(
            "insert into switch_devices (device_name, location_description, model, \
             serial_number, implementation_date, ip_address, latitude, longitude, \
             created_at, updated_at) \
             values ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9) \
             returning {SWITCH_COLUMNS}"
        ))
        .bind(&new.device_name)
        .bind(&new.location_description)
        .bind(&new.model)
        .bind(&new.serial_number)
        .bind(new.implementation_date)
        .bind(&new.ip_address)
        .bind(new.latitude)
        .bind(new.longitude)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        row_to_switch(&row)
    }

    async fn update_switch(
        &self,
        switch_id: i64,
        update: SwitchDeviceUpdate,
    ) -> Result<Option<SwitchDeviceRecord>, StorageError> {
        let now = Utc::now();
        let row = sqlx::query(&format!(
            "update switch_devices set \
             device_name = coalesce($1, device_name), \
             location_description = coalesce($2, location_description), \
             model = coalesce($3, model), \
             serial_number = coalesce($4, serial_number), \
             implementation_date = coalesce($5, implementation_date), \
             ip_address = coalesce($6, ip_address), \
             latitude = coalesce($7, latitude), \
             longitude = coalesce($8, longitude), \
             updated_at = $9 \
             where id = $10 \
             returning {SWITCH_COLUMNS}"
        ))
        .bind(update.device_name)
        .bind(update.location_description)
        .bind(update.model)
        .bind(update.serial_number)
        .bind(update.implementation_date)
        .bind(update.ip_address)
        .bind(update.latitude)
        .bind(update.longitude)
        .bind(now)
        .bind(switch_id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_switch).transpose()
    }

    async fn delete_switch(&self, switch_id: i64) -> Result<bool, StorageError> {
        let result = sqlx::query("delete from switch_devices where id = $1")
            .bind(switch_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn switch_stats(&self) -> Result<SwitchStatsRecord, StorageError> {
        let row = sqlx::query(
            "select \
             (select count(*) from switch_devices) as total_switches, \
             (select count(distinct switch_device_id) from maintenance_records \
              where status = 'Tertunda') as with_pending, \
             (select count(*) from switch_devices s where not exists \
              (select 1 from maintenance_records m where m.switch_device_id = s.id)) \
              as without_maintenance, \
             (select count(distinct location_description) from switch_devices) \
              as unique_locations",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(SwitchStatsRecord {
            total_switches: row.try_get("total_switches")?,
            switches_with_pending_maintenance: row.try_get("with_pending")?,
            switches_without_maintenance: row.try_get("without_maintenance")?,
            total_unique_locations: row.try_get("unique_locations")?,
        })
    }
}
