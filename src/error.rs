//! 统一错误归一化
//!
//! 按照错误分类（传输失败 / 服务端业务错误 / 客户端守卫失败）把所有
//! 失败归一化为 `{ kind, message }`，各个钩子与视图以完全相同的方式消费。
//! 该层的任何错误都不会使进程崩溃，只作为瞬态通知展示。

use std::fmt;

use crate::web::HttpError;

// =========================================================
// 错误分类
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// 网络/传输层失败（请求未到达服务端或响应无法读取）
    Network,
    /// 服务端返回的非 2xx 状态（携带业务/校验错误消息）
    Http(u16),
    /// 响应体无法解析为期望的形状
    Parse,
}

/// 归一化后的错误：`{ kind, message }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: message.into(),
        }
    }

    /// 从非 2xx 响应构造
    ///
    /// 优先使用响应体中结构化的 `{"message": ...}`；
    /// 解析不出时退回通用的状态行描述。
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = extract_server_message(body)
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        Self {
            kind: ApiErrorKind::Http(status),
            message,
        }
    }

    /// 传输错误是否可重试（只对读操作生效，由客户端决定）
    pub fn is_transient(&self) -> bool {
        matches!(self.kind, ApiErrorKind::Network)
    }
}

/// 从服务端错误负载中提取 `message` 字段
fn extract_server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = value.get("message")?.as_str()?;
    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ApiErrorKind::Network => write!(f, "[NETWORK] {}", self.message),
            ApiErrorKind::Http(status) => write!(f, "[HTTP {}] {}", status, self.message),
            ApiErrorKind::Parse => write!(f, "[PARSE] {}", self.message),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<HttpError> for ApiError {
    fn from(e: HttpError) -> Self {
        match e {
            HttpError::ResponseParseFailed(msg) => ApiError::parse(msg),
            other => ApiError::network(other.to_string()),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_structured_server_message() {
        let err = ApiError::from_status(422, r#"{"message":"Code already in use"}"#);
        assert_eq!(err.kind, ApiErrorKind::Http(422));
        assert_eq!(err.message, "Code already in use");
    }

    #[test]
    fn falls_back_to_generic_message() {
        for body in ["", "<html>oops</html>", r#"{"error":"nope"}"#, r#"{"message":""}"#] {
            let err = ApiError::from_status(500, body);
            assert_eq!(err.message, "Request failed with status 500");
        }
    }

    #[test]
    fn only_network_errors_are_transient() {
        assert!(ApiError::network("timeout").is_transient());
        assert!(!ApiError::from_status(404, "").is_transient());
        assert!(!ApiError::parse("bad json").is_transient());
    }
}
