//! Postgres 维护记录存储实现
//!
//! 通过 SQL 查询实现维护记录 CRUD 操作、引用计数与统计。
//!
//! 设计要点：
//! - 使用参数化 SQL 防止注入
//! - status 列存储枚举的线上字符串形式，读出时严格解析

use crate::error::StorageError;
use crate::models::{
    MaintenanceRecord, MaintenanceStatsRecord, MaintenanceUpdate, NewMaintenanceRecord,
};
use crate::traits::MaintenanceStore;
use chrono::Utc;
use domain::MaintenanceStatus;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

const RECORD_COLUMNS: &str = "id, switch_device_id, technician_id, maintenance_date, \
     technician_name, work_description, status, maintenance_type, additional_notes, \
     created_at, updated_at";

pub struct PgMaintenanceStore {
    pub pool: PgPool,
}

impl PgMaintenanceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let pool = crate::connection::connect_pool(database_url).await?;
        Ok(Self { pool })
    }
}

fn row_to_record(row: &PgRow) -> Result<MaintenanceRecord, StorageError> {
    let status: String = row.try_get("status")?;
    let status = MaintenanceStatus::parse(&status).ok_or_else(|| {
        StorageError::new(format!("unknown status in maintenance_records row: {status}"))
    })?;
    Ok(MaintenanceRecord {
        id: row.try_get("id")?,
        switch_device_id: row.try_get("switch_device_id")?,
        technician_id: row.try_get("technician_id")?,
        maintenance_date: row.try_get("maintenance_date")?,
        technician_name: row.try_get("technician_name")?,
        work_description: row.try_get("work_description")?,
        status,
        maintenance_type: row.try_get("maintenance_type")?,
        additional_notes: row.try_get("additional_notes")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait::async_trait]
impl MaintenanceStore for PgMaintenanceStore {
    async fn list_records(&self) -> Result<Vec<MaintenanceRecord>, StorageError> {
        let rows = sqlx::query(&format!(
            "select {RECORD_COLUMNS} from maintenance_records order by maintenance_date desc, id"
        ))
        .fetch_all(&self.pool)
        .await?;
        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            records.push(row_to_record(&row)?);
        }
        Ok(records)
    }

    async fn find_record(
        &self,
        record_id: i64,
    ) -> Result<Option<MaintenanceRecord>, StorageError> {
        let row = sqlx::query(&format!(
            "select {RECORD_COLUMNS} from maintenance_records where id = $1"
        ))
        .bind(record_id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_record).transpose()
    }

    async fn create_record(
        &self,
        new: NewMaintenanceRecord,
    ) -> Result<MaintenanceRecord, StorageError> {
        let now = Utc::now();
        let row = sqlx::query(&format!(
            "insert into maintenance_records (switch_device_id, technician_id, \
             maintenance_date, technician_name, work_description, status, \
             maintenance_type, additional_notes, created_at, updated_at) \
             values ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9) \
             returning {RECORD_COLUMNS}"
        ))
        .bind(new.switch_device_id)
        .bind(new.technician_id)
        .bind(new.maintenance_date)
        .bind(&new.technician_name)
        .bind(&new.work_description)
        .bind(new.status.as_str())
        .bind(&new.maintenance_type)
        .bind(&new.additional_notes)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        row_to_record(&row)
    }

    async fn update_record(
        &self,
        record_id: i64,
        update: MaintenanceUpdate,
    ) -> Result<Option<MaintenanceRecord>, StorageError> {
        let now = Utc::now();
        let row = sqlx::query(&format!(
            "update maintenance_records set \
             maintenance_date = coalesce($1, maintenance_date), \
             technician_name = coalesce($2, technician_name), \
             work_description = coalesce($3, work_description), \
             status = coalesce($4, status), \
             maintenance_type = coalesce($5, maintenance_type), \
             additional_notes = coalesce($6, additional_notes), \
             updated_at = $7 \
             where id = $8 \
             returning {RECORD_COLUMNS}"
        ))
        .bind(update.maintenance_date)
        .bind(update.technician_name)
        .bind(update.work_description)
        .bind(update.status.map(|status| status.as_str()))
        .bind(update.maintenance_type)
        .bind(update.additional_notes)
        .bind(now)
        .bind(record_id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_record).transpose()
    }

    async fn delete_record(&self, record_id: i64) -> Result<bool, StorageError> {
        let result = sqlx::query("delete from maintenance_records where id = $1")
            .bind(record_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_for_switch(&self, switch_id: i64) -> Result<i64, StorageError> {
        let row = sqlx::query(
            "select count(*) as total from maintenance_records where switch_device_id = $1",
        )
        .bind(switch_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.try_get("total")?)
    }

    async fn count_for_user(&self, technician_id: i64) -> Result<i64, StorageError> {
        let row = sqlx::query(
            "select count(*) as total from maintenance_records where technician_id = $1",
        )
        .bind(technician_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.try_get("total")?)
    }

    async fn maintenance_stats(&self) -> Result<MaintenanceStatsRecord, StorageError> {
        let row = sqlx::query(
            "select \
             count(*) as total, \
             count(*) filter (where status = 'Selesai') as selesai, \
             count(*) filter (where status = 'Tertunda') as tertunda, \
             count(*) filter (where status = 'Dalam Proses') as dalam_proses, \
             count(*) filter (where maintenance_date >= date_trunc('month', current_date)::date \
              and maintenance_date < (date_trunc('month', current_date) + interval '1 month')::date) \
              as this_month \
             from maintenance_records",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(MaintenanceStatsRecord {
            total_maintenance: row.try_get("total")?,
            selesai: row.try_get("selesai")?,
            tertunda: row.try_get("tertunda")?,
            dalam_proses: row.try_get("dalam_proses")?,
            maintenance_this_month: row.try_get("this_month")?,
        })
    }
}
