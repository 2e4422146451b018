//! # SMT Storage 模块
//!
//! 本模块提供统一的数据存储抽象层，支持多种存储后端实现。
//!
//! ## 架构设计
//!
//! 该模块采用分层架构，遵循以下原则：
//!
//! 1. **接口抽象层** (`traits.rs`)：定义所有资源存储的异步 Trait 接口
//! 2. **数据模型层** (`models.rs`)：定义存储相关的数据结构
//! 3. **错误处理层** (`error.rs`)：统一的存储错误类型
//! 4. **连接管理层** (`connection.rs`)：数据库连接池管理
//! 5. **实现层**：
//!    - `in_memory/`：内存存储实现（用于测试和演示）
//!    - `postgres/`：PostgreSQL 存储实现（生产环境使用）
//!
//! ## 核心特性
//!
//! - **类型安全**：枚举列（role、status）读写时严格解析，非法取值不会进入内存模型
//! - **部分更新**：所有 `*Update` 结构字段全可选，缺省字段保持原值
//! - **跨资源不变式**：
//!   - 维护记录的外键在创建时校验存在性
//!   - 用户改名与 `technician_name` 副本在同一事务内同步
//!   - 被引用的用户/交换机不可删除（RESTRICT 语义）
//! - **异步支持**：基于 Tokio 的异步 I/O
//! - **可扩展性**：通过 Trait 接口支持多种存储后端
//!
//! ## 数据模型
//!
//! - **UserRecord**：用户记录（username、email、full_name、role、is_active、时间戳）
//! - **SwitchDeviceRecord**：交换机记录（名称、位置、型号、序列号、上线日期、IP、经纬度、时间戳）
//! - **MaintenanceRecord**：维护记录（交换机外键、技术员外键、日期、状态、类型、描述、备注、时间戳）
//! - **MaintenanceStatsRecord / SwitchStatsRecord**：统计计数
//!
//! ## 设计约束
//!
//! - **禁止直接 SQL**：Handler 层禁止直接写 SQL，统一通过 storage 层
//! - **校验前置**：字段级校验在 API 层完成后才调用存储；存储只负责
//!   数据库层面的约束（唯一键、外键、引用计数）

// 模块导出：将子模块的内容导出到 crate 根目录
pub mod connection;
pub mod error;
pub mod in_memory;
pub mod models;
pub mod postgres;
pub mod traits;

// 导出常用类型到 crate 根目录，方便外部引用
pub use connection::*;
pub use error::*;
pub use models::*;
pub use traits::*;

// 导出内存存储实现类型
pub use in_memory::InMemoryStore;

// 导出 PostgreSQL 存储实现类型
pub use postgres::{PgMaintenanceStore, PgSwitchStore, PgUserStore};
