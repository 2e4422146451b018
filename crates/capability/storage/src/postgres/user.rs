//! Postgres 用户存储实现
//!
//! 通过 SQL 查询实现用户 CRUD 操作。
//!
//! 设计要点：
//! - 使用参数化 SQL 防止注入
//! - 改名时在同一事务内同步维护记录的 technician_name

use crate::error::StorageError;
use crate::models::{NewUser, UserRecord, UserUpdate};
use crate::traits::UserStore;
use chrono::Utc;
use domain::UserRole;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

const USER_COLUMNS: &str =
    "id, username, email, full_name, role, is_active, created_at, updated_at";

pub struct PgUserStore {
    pub pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let pool = crate::connection::connect_pool(database_url).await?;
        Ok(Self { pool })
    }
}

fn row_to_user(row: &PgRow) -> Result<UserRecord, StorageError> {
    let role: String = row.try_get("role")?;
    let role = UserRole::parse(&role)
        .ok_or_else(|| StorageError::new(format!("unknown role in users row: {role}")))?;
    Ok(UserRecord {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        email: row.try_get("email")?,
        full_name: row.try_get("full_name")?,
        role,
        is_active: row.try_get("is_active")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait::async_trait]
impl UserStore for PgUserStore {
    async fn list_users(&self) -> Result<Vec<UserRecord>, StorageError> {
        let rows = sqlx::query(&format!(
            "select {USER_COLUMNS} from users order by id"
        ))
        .fetch_all(&self.pool)
        .await?;
        let mut users = Vec::with_capacity(rows.len());
        for row in rows {
            users.push(row_to_user(&row)?);
        }
        Ok(users)
    }

    async fn find_user(&self, user_id: i64) -> Result<Option<UserRecord>, StorageError> {
        let row = sqlx::query(&format!(
            "select {USER_COLUMNS} from users where id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_user).transpose()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StorageError> {
        let row = sqlx::query(&format!(
            "select {USER_COLUMNS} from users where username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StorageError> {
        let row = sqlx::query(&format!(
            "select {USER_COLUMNS} from users where email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_user).transpose()
    }

    async fn create_user(&self, new: NewUser) -> Result<UserRecord, StorageError> {
        let now = Utc::now();
        let row = sqlx::query(&format!(
            "insert into users (username, email, full_name, role, is_active, created_at, updated_at) \
             values ($1, $2, $3, $4, true, $5, $5) \
             returning {USER_COLUMNS}"
        ))
        .bind(&new.username)
        .bind(&new.email)
        .bind(&new.full_name)
        .bind(new.role.as_str())
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        row_to_user(&row)
    }

    async fn update_user(
        &self,
        user_id: i64,
        update: UserUpdate,
    ) -> Result<Option<UserRecord>, StorageError> {
        let now = Utc::now();
        let full_name_changed = update.full_name.is_some();
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query(&format!(
            "update users set \
             username = coalesce($1, username), \
             email = coalesce($2, email), \
             full_name = coalesce($3, full_name), \
             role = coalesce($4, role), \
             is_active = coalesce($5, is_active), \
             updated_at = $6 \
             where id = $7 \
             returning {USER_COLUMNS}"
        ))
        .bind(update.username)
        .bind(update.email)
        .bind(update.full_name)
        .bind(update.role.map(|role| role.as_str()))
        .bind(update.is_active)
        .bind(now)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        let user = row_to_user(&row)?;
        // 反规范化副本与用户姓名在同一事务内保持一致
        if full_name_changed {
            sqlx::query(
                "update maintenance_records set technician_name = $1, updated_at = $2 \
                 where technician_id = $3",
            )
            .bind(&user.full_name)
            .bind(now)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(Some(user))
    }

    async fn delete_user(&self, user_id: i64) -> Result<bool, StorageError> {
        let result = sqlx::query("delete from users where id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
