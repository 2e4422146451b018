//! Handler 辅助模块
//!
//! - response：错误响应构造与 Record → DTO 投影
//! - validation：请求体到存储输入的字段校验

pub mod response;
pub mod validation;
