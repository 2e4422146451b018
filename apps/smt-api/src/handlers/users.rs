//! 用户 CRUD handlers
//!
//! 提供用户资源的增删改查接口：
//! - GET /users - 列出用户
//! - POST /users - 创建用户（用户名/邮箱唯一）
//! - GET /users/{id} - 获取用户详情
//! - PUT /users/{id} - 更新用户（改名联动维护记录）
//! - DELETE /users/{id} - 删除用户（仍被维护记录引用时拒绝）

use crate::AppState;
use crate::utils::response::{
    bad_request_error, conflict_error, not_found_error, storage_error, user_to_dto,
    validation_error,
};
use crate::utils::validation::{validate_create_user, validate_update_user};
use api_contract::{ApiResponse, CreateUserRequest, UpdateUserRequest, UserDto};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(serde::Deserialize)]
pub struct UserPath {
    user_id: i64,
}

/// 列出用户
pub async fn list_users(State(state): State<AppState>) -> Response {
    match state.user_store.list_users().await {
        Ok(items) => {
            let data: Vec<UserDto> = items.into_iter().map(user_to_dto).collect();
            (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
        }
        Err(err) => storage_error(err),
    }
}

/// 创建用户
///
/// # 流程
///
/// 1. 字段校验（用户名/姓名长度、邮箱格式、角色枚举），失败即返回 400
/// 2. 预检用户名与邮箱唯一性（数据库唯一索引兜底）
/// 3. 调用 `user_store.create_user` 保存，主键与时间戳由存储分配
/// 4. 将 `UserRecord` 投影为 `UserDto` 并返回
///
/// # 错误处理
///
/// - `400 BAD REQUEST`: 字段校验失败或用户名/邮箱已存在
/// - `500 INTERNAL SERVER ERROR`: 存储层错误
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Response {
    let new = match validate_create_user(req) {
        Ok(new) => new,
        Err(err) => return validation_error(err),
    };
    match state.user_store.find_by_username(&new.username).await {
        Ok(Some(_)) => return bad_request_error("username already exists"),
        Ok(None) => {}
        Err(err) => return storage_error(err),
    }
    match state.user_store.find_by_email(&new.email).await {
        Ok(Some(_)) => return bad_request_error("email already exists"),
        Ok(None) => {}
        Err(err) => return storage_error(err),
    }
    match state.user_store.create_user(new).await {
        Ok(item) => (
            StatusCode::OK,
            Json(ApiResponse::success(user_to_dto(item))),
        )
            .into_response(),
        Err(err) => storage_error(err),
    }
}

/// 获取用户详情
pub async fn get_user(State(state): State<AppState>, Path(path): Path<UserPath>) -> Response {
    match state.user_store.find_user(path.user_id).await {
        Ok(Some(item)) => (
            StatusCode::OK,
            Json(ApiResponse::success(user_to_dto(item))),
        )
            .into_response(),
        Ok(None) => not_found_error(),
        Err(err) => storage_error(err),
    }
}

/// 更新用户
///
/// 只覆盖请求里出现的字段；改 `fullName` 时存储层会在同一事务里
/// 同步该用户所有维护记录的 `technicianName` 副本。
pub async fn update_user(
    State(state): State<AppState>,
    Path(path): Path<UserPath>,
    Json(req): Json<UpdateUserRequest>,
) -> Response {
    let update = match validate_update_user(req) {
        Ok(update) => update,
        Err(err) => return validation_error(err),
    };
    if let Some(username) = update.username.as_deref() {
        match state.user_store.find_by_username(username).await {
            Ok(Some(existing)) if existing.id != path.user_id => {
                return bad_request_error("username already exists");
            }
            Ok(_) => {}
            Err(err) => return storage_error(err),
        }
    }
    if let Some(email) = update.email.as_deref() {
        match state.user_store.find_by_email(email).await {
            Ok(Some(existing)) if existing.id != path.user_id => {
                return bad_request_error("email already exists");
            }
            Ok(_) => {}
            Err(err) => return storage_error(err),
        }
    }
    match state.user_store.update_user(path.user_id, update).await {
        Ok(Some(item)) => (
            StatusCode::OK,
            Json(ApiResponse::success(user_to_dto(item))),
        )
            .into_response(),
        Ok(None) => not_found_error(),
        Err(err) => storage_error(err),
    }
}

/// 删除用户
///
/// 删除策略为 RESTRICT：仍被维护记录引用时返回 409。
pub async fn delete_user(State(state): State<AppState>, Path(path): Path<UserPath>) -> Response {
    match state.maintenance_store.count_for_user(path.user_id).await {
        Ok(0) => {}
        Ok(_) => return conflict_error("maintenance records still reference this user"),
        Err(err) => return storage_error(err),
    }
    match state.user_store.delete_user(path.user_id).await {
        Ok(true) => (StatusCode::OK, Json(ApiResponse::success(()))).into_response(),
        Ok(false) => not_found_error(),
        Err(err) => storage_error(err),
    }
}
