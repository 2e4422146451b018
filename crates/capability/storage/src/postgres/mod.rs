//! # PostgreSQL 存储实现模块
//!
//! 本模块提供所有存储接口的 PostgreSQL 实现，用于生产环境。
//!
//! ## 设计原则
//!
//! 1. **参数化查询**：所有 SQL 查询使用参数绑定，防止 SQL 注入攻击
//! 2. **部分更新**：更新语句使用 `coalesce($n, col)`，缺省字段保持原值
//! 3. **时间戳一致**：`updated_at` 在每次写操作时刷新
//! 4. **事务同步**：用户改名与维护记录 `technician_name` 的同步在同一事务内完成
//! 5. **连接池管理**：使用连接池复用数据库连接
//!
//! ## 包含的实现
//!
//! - **UserStore** (`user.rs`)：用户存储
//! - **SwitchStore** (`switch.rs`)：交换机存储（含统计）
//! - **MaintenanceStore** (`maintenance.rs`)：维护记录存储（含统计）
//!
//! ## 数据库模式要求
//!
//! 本模块依赖以下数据库表（外键均为默认的 RESTRICT 语义，
//! 被引用的行在引用存在期间不可删除）：
//!
//! - `users`：用户表
//!   - `id bigserial primary key`
//!   - `username varchar(100) not null unique`（索引）
//!   - `email varchar(255) not null unique`
//!   - `full_name varchar(200) not null`
//!   - `role varchar(20) not null default 'User'`
//!   - `is_active boolean not null default true`
//!   - `created_at timestamptz not null` / `updated_at timestamptz not null`
//!
//! - `switch_devices`：交换机表
//!   - `id bigserial primary key`
//!   - `device_name varchar(200) not null`（索引）
//!   - `location_description varchar(500) not null`
//!   - `model varchar(100) not null`
//!   - `serial_number varchar(100) not null unique`（索引）
//!   - `implementation_date date not null`
//!   - `ip_address varchar(45) not null`
//!   - `latitude numeric(11,8) not null` / `longitude numeric(12,8) not null`
//!   - `created_at timestamptz not null` / `updated_at timestamptz not null`
//!
//! - `maintenance_records`：维护记录表
//!   - `id bigserial primary key`
//!   - `switch_device_id bigint not null references switch_devices(id)`（索引）
//!   - `technician_id bigint not null references users(id)`（索引）
//!   - `maintenance_date date not null`（索引）
//!   - `technician_name varchar(200) not null`
//!   - `work_description varchar(2000) not null`
//!   - `status varchar(20) not null default 'Tertunda'`（索引）
//!   - `maintenance_type varchar(50) not null default 'PM'`
//!   - `additional_notes varchar(1000) not null default ''`
//!   - `created_at timestamptz not null` / `updated_at timestamptz not null`

pub mod maintenance;
pub mod switch;
pub mod user;

pub use maintenance::*;
pub use switch::*;
pub use user::*;
