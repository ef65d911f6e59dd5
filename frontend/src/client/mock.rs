//! 测试工具: MockTransport

use super::{HttpRequest, HttpResponse, Transport};
use crate::error::ApiError;
use async_trait::async_trait;
use sarhad_shared::protocol::HttpMethod;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

pub const BASE: &str = "https://api.test";

type Scripted = Result<(u16, String), String>;

/// 按 (方法, URL) 预置响应，并记录所有发出的请求
///
/// 同一个键可以排队多个响应，最后一个会一直重复返回，
/// 便于测试"写入后重新加载"这类连续请求。
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<HashMap<(HttpMethod, String), VecDeque<Scripted>>>,
    pub requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, method: HttpMethod, path: &str, scripted: Scripted) {
        self.responses
            .borrow_mut()
            .entry((method, format!("{}{}", BASE, path)))
            .or_default()
            .push_back(scripted);
    }

    pub fn mock_response(&self, method: HttpMethod, path: &str, status: u16, body: serde_json::Value) {
        let body = if body.is_null() {
            String::new()
        } else {
            body.to_string()
        };
        self.push(method, path, Ok((status, body)));
    }

    pub fn mock_text(&self, method: HttpMethod, path: &str, status: u16, body: &str) {
        self.push(method, path, Ok((status, body.to_string())));
    }

    pub fn mock_network_error(&self, method: HttpMethod, path: &str) {
        self.push(method, path, Err("connection refused".to_string()));
    }

    pub fn count(&self, method: HttpMethod, path: &str) -> usize {
        let url = format!("{}{}", BASE, path);
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .count()
    }

    pub fn total(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(req.clone());

        let mut responses = self.responses.borrow_mut();
        let scripted = match responses.get_mut(&(req.method, req.url.clone())) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };

        match scripted {
            Some(Ok((status, body))) => Ok(HttpResponse { status, body }),
            Some(Err(e)) => Err(ApiError::Network(e)),
            None => Ok(HttpResponse {
                status: 404,
                body: "Not Found".to_string(),
            }),
        }
    }
}
