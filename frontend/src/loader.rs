//! 资源加载器
//!
//! 产品列表、产品详情和首页轮播共用的"挂载即加载"模式：
//! `Idle -> Loading -> { Success | Error }`，每次触发（挂载、slug 变化、
//! 写入后刷新）都重新进入 `Loading`。
//!
//! 旧请求不会被取消，而是通过序号丢弃：只有最近一次 `begin` 的结果会被应用。

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// 失败时的处理策略
#[derive(Debug)]
pub enum FailurePolicy<T> {
    /// 进入错误状态并展示给用户
    Surface(&'static str),
    /// 使用静态默认数据，视为成功（首页轮播必须始终有内容）
    Fallback(fn() -> T),
}

impl<T> Clone for FailurePolicy<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FailurePolicy<T> {}

/// 请求序号，由 `begin` 发放
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
pub struct Loader<T> {
    state: LoadState<T>,
    seq: u64,
    policy: FailurePolicy<T>,
}

impl<T> Loader<T> {
    pub fn new(policy: FailurePolicy<T>) -> Self {
        Self {
            state: LoadState::Idle,
            seq: 0,
            policy,
        }
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    /// 开始一次加载，之前发出的请求全部作废
    pub fn begin(&mut self) -> Ticket {
        self.seq += 1;
        self.state = LoadState::Loading;
        Ticket(self.seq)
    }

    /// 应用请求结果；过期的票据被忽略并返回 `false`
    pub fn complete(&mut self, ticket: Ticket, result: Result<T, ApiError>) -> bool {
        if ticket.0 != self.seq {
            tracing::debug!(ticket = ticket.0, latest = self.seq, "dropping stale response");
            return false;
        }

        self.state = match (result, self.policy) {
            (Ok(data), _) => LoadState::Success(data),
            (Err(e), FailurePolicy::Fallback(fallback)) => {
                tracing::info!(error = %e, "load failed, using fallback data");
                LoadState::Success(fallback())
            }
            (Err(e), FailurePolicy::Surface(message)) => {
                tracing::warn!(error = %e, "load failed");
                LoadState::Error(message.to_string())
            }
        };
        true
    }
}

// =========================================================
// Leptos 绑定
// =========================================================

/// `Loader` 的响应式句柄，`Copy` 便于在闭包间传递
pub struct LoaderSignal<T: Send + Sync + 'static> {
    inner: RwSignal<Loader<T>>,
}

impl<T: Send + Sync + 'static> Clone for LoaderSignal<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for LoaderSignal<T> {}

impl<T: Clone + Send + Sync + 'static> LoaderSignal<T> {
    pub fn new(policy: FailurePolicy<T>) -> Self {
        Self {
            inner: RwSignal::new(Loader::new(policy)),
        }
    }

    /// 发起一次加载；组件已销毁时静默放弃
    pub fn load<F>(&self, fut: F)
    where
        F: Future<Output = Result<T, ApiError>> + 'static,
    {
        let Some(ticket) = self.inner.try_update(|loader| loader.begin()) else {
            return;
        };
        let inner = self.inner;
        spawn_local(async move {
            let result = fut.await;
            inner.try_update(|loader| loader.complete(ticket, result));
        });
    }

    /// 当前状态（会被追踪）
    pub fn state(&self) -> LoadState<T> {
        self.inner.with(|loader| loader.state().clone())
    }

    pub fn with_data<R>(&self, f: impl FnOnce(Option<&T>) -> R) -> R {
        self.inner.with(|loader| f(loader.state().data()))
    }

    pub fn is_loading(&self) -> bool {
        self.inner.with(|loader| loader.state().is_loading())
    }

    pub fn error(&self) -> Option<String> {
        self.inner
            .with(|loader| loader.state().error().map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> Loader<Vec<u32>> {
        Loader::new(FailurePolicy::Surface("Failed to load products"))
    }

    fn network() -> ApiError {
        ApiError::Network("offline".into())
    }

    #[test]
    fn test_initial_state_is_idle() {
        assert_eq!(*surface().state(), LoadState::Idle);
    }

    #[test]
    fn test_success_stores_payload_verbatim() {
        let mut loader = surface();
        let ticket = loader.begin();
        assert!(loader.state().is_loading());

        assert!(loader.complete(ticket, Ok(vec![3, 1, 2])));
        assert_eq!(loader.state().data(), Some(&vec![3, 1, 2]));
    }

    #[test]
    fn test_failure_surfaces_error_without_data() {
        let mut loader = surface();
        let ticket = loader.begin();
        loader.complete(ticket, Err(network()));

        assert_eq!(loader.state().error(), Some("Failed to load products"));
        assert_eq!(loader.state().data(), None);
    }

    fn three_defaults() -> Vec<&'static str> {
        vec!["a", "b", "c"]
    }

    #[test]
    fn test_fallback_policy_turns_failure_into_success() {
        let mut loader = Loader::new(FailurePolicy::Fallback(three_defaults));
        let ticket = loader.begin();
        loader.complete(ticket, Err(network()));

        assert_eq!(loader.state().data().map(Vec::len), Some(3));
        assert_eq!(loader.state().error(), None);
    }

    #[test]
    fn test_stale_response_never_overwrites_newer_state() {
        let mut loader = surface();
        let first = loader.begin();
        let second = loader.begin();

        assert!(loader.complete(second, Ok(vec![2])));
        assert!(!loader.complete(first, Ok(vec![1])));
        assert_eq!(loader.state().data(), Some(&vec![2]));
    }

    #[test]
    fn test_stale_response_cannot_complete_pending_load() {
        let mut loader = surface();
        let first = loader.begin();
        let _second = loader.begin();

        assert!(!loader.complete(first, Err(network())));
        assert!(loader.state().is_loading());
    }

    #[test]
    fn test_refetch_reenters_loading() {
        let mut loader = surface();
        let ticket = loader.begin();
        loader.complete(ticket, Ok(vec![1]));

        loader.begin();
        assert!(loader.state().is_loading());
    }
}
