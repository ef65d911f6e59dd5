//! 前端错误类型
//!
//! 所有网络与本地校验错误统一为 `ApiError`，由组件渲染为行内提示，
//! 不会越过组件边界。

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 没有收到响应（断网、CORS、DNS 等）
    #[error("Network error: {0}")]
    Network(String),
    /// 非 2xx 响应，`message` 为服务端提供的信息
    #[error("{message}")]
    Http { status: u16, message: String },
    /// 本地必填项校验失败，未发出任何请求
    #[error("{0}")]
    Validation(String),
    /// 需要登录的请求但本地没有令牌
    #[error("Please sign in to continue")]
    Unauthenticated,
    /// 2xx 响应但内容无法解析
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 后端拒绝了令牌，或本地根本没有令牌
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthenticated) || self.status() == Some(401)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid API base URL {0:?}: expected http(s)://… or a path starting with '/'")]
    InvalidBaseUrl(String),
    #[error("invalid value for {name}: {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_displays_server_message() {
        let err = ApiError::Http {
            status: 400,
            message: "Slug already exists".into(),
        };
        assert_eq!(err.to_string(), "Slug already exists");
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_unauthorized_detection() {
        assert!(ApiError::Unauthenticated.is_unauthorized());
        let rejected = ApiError::Http {
            status: 401,
            message: "Token expired".into(),
        };
        assert!(rejected.is_unauthorized());
        assert!(!ApiError::Network("offline".into()).is_unauthorized());
    }
}
