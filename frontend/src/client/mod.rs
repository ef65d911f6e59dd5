//! 远程数据客户端
//!
//! `ApiClient` 是对 `Transport` 的一层薄封装：
//! - 会话中存在令牌时附加 `Authorization: Bearer <token>`
//! - 根据请求体推导 Content-Type（multipart 不设置，由浏览器生成 boundary）
//! - 非 2xx 响应转为 `ApiError::Http`，尽量携带服务端提供的 message
//!
//! 不做重试、缓存或限流，错误恢复由调用方决定。

use async_trait::async_trait;
use sarhad_shared::protocol::{ApiRequest, HttpMethod};
use sarhad_shared::{ErrorBody, HEADER_AUTHORIZATION};
use serde::de::DeserializeOwned;
use std::fmt;

use crate::error::ApiError;
use crate::session::Session;

#[cfg(test)]
pub(crate) mod mock;
#[cfg(test)]
mod tests;

// =========================================================
// 核心抽象层 (HTTP Interface Abstraction)
// =========================================================

/// 待上传的本地文件（选择文件时读入内存）
#[derive(Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl StagedFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for StagedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StagedFile")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// multipart/form-data 请求体
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    parts: Vec<(String, StagedFile)>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, field: &str, file: StagedFile) -> Self {
        self.parts.push((field.to_string(), file));
        self
    }

    pub fn parts(&self) -> &[(String, StagedFile)] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    Empty,
    Json(String),
    Multipart(MultipartForm),
}

impl RequestBody {
    /// 需要显式设置的 Content-Type；multipart 必须留给传输层生成
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            RequestBody::Json(_) => Some("application/json"),
            RequestBody::Empty | RequestBody::Multipart(_) => None,
        }
    }
}

/// 通用 HTTP 请求结构
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// 通用 HTTP 响应结构
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 解析 JSON；空响应体（如 204）按 `null` 处理
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        let body = if self.body.trim().is_empty() {
            "null"
        } else {
            self.body.as_str()
        };
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// 传输层特性 (Trait)
///
/// 只有在完全没有响应时才返回 `Err(ApiError::Network)`；
/// 任意状态码的响应都以 `Ok` 返回，由 `ApiClient` 解释。
/// (?Send) 是因为浏览器 fetch 的 future 不是 Send 的。
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// 请求是否必须携带令牌
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// 有令牌就带上，没有也照常发送
    Optional,
    /// 没有令牌时直接失败，不发请求
    Required,
}

// =========================================================
// ApiClient
// =========================================================

#[derive(Clone)]
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
    session: Session,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base_url: &str, session: Session) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// 拼接 URL，每个路径段单独编码
    pub fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }

    pub async fn request(
        &self,
        method: HttpMethod,
        segments: &[&str],
        body: RequestBody,
        auth: Auth,
    ) -> Result<HttpResponse, ApiError> {
        let token = self.session.token();
        if auth == Auth::Required && token.is_none() {
            return Err(ApiError::Unauthenticated);
        }

        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if let Some(content_type) = body.content_type() {
            headers.push(("Content-Type".to_string(), content_type.to_string()));
        }
        if let Some(token) = &token {
            headers.push((HEADER_AUTHORIZATION.to_string(), format!("Bearer {}", token)));
        }

        let req = HttpRequest {
            method,
            url: self.url(segments),
            headers,
            body,
        };
        tracing::debug!(method = method.as_str(), url = %req.url, "sending request");

        let res = self.transport.send(req).await.inspect_err(|e| {
            tracing::warn!(method = method.as_str(), error = %e, "request failed without response");
        })?;

        if res.ok() {
            return Ok(res);
        }

        tracing::debug!(method = method.as_str(), status = res.status, "request rejected");
        // 令牌被拒绝：清除本地凭据，强制重新登录
        if res.status == 401 && token.is_some() {
            tracing::info!("session token rejected by backend, signing out");
            self.session.sign_out();
        }
        Err(http_error(&res))
    }

    /// 调用一个 JSON 端点
    pub async fn call<R: ApiRequest>(&self, req: &R) -> Result<R::Response, ApiError> {
        let body = match req.body() {
            Some(payload) => RequestBody::Json(
                serde_json::to_string(payload).map_err(|e| ApiError::Decode(e.to_string()))?,
            ),
            None => RequestBody::Empty,
        };
        let auth = if R::AUTH {
            Auth::Required
        } else {
            Auth::Optional
        };

        self.request(R::METHOD, &req.segments(), body, auth)
            .await?
            .json()
    }

    /// 上传文件（始终需要认证）
    pub async fn upload<R: DeserializeOwned>(
        &self,
        segments: &[&str],
        form: MultipartForm,
    ) -> Result<R, ApiError> {
        self.request(
            HttpMethod::Post,
            segments,
            RequestBody::Multipart(form),
            Auth::Required,
        )
        .await?
        .json()
    }
}

/// 从错误响应中提取可展示的信息
fn http_error(res: &HttpResponse) -> ApiError {
    let from_json = serde_json::from_str::<ErrorBody>(&res.body)
        .ok()
        .and_then(ErrorBody::into_message);

    let message = from_json.unwrap_or_else(|| {
        let text = res.body.trim();
        // HTML 错误页等不适合直接展示
        if text.is_empty() || text.starts_with('<') || text.starts_with('{') || text.len() > 200 {
            format!("Request failed with status {}", res.status)
        } else {
            text.to_string()
        }
    });

    ApiError::Http {
        status: res.status,
        message,
    }
}
