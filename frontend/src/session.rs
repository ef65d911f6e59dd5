//! 会话凭据
//!
//! 管理员令牌只通过 `Session` 读写，不直接访问全局存储。
//! 生产环境下的存储为浏览器 LocalStorage（见 `web::storage`），测试中使用内存存储。

use std::fmt;
use std::sync::{Arc, Mutex};

/// 令牌存储后端
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> bool;
    fn clear(&self) -> bool;
}

/// 内存存储，用于测试和无 LocalStorage 的环境
#[derive(Default)]
pub struct MemoryStore {
    token: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.token.lock().ok()?.clone()
    }

    fn save(&self, token: &str) -> bool {
        match self.token.lock() {
            Ok(mut slot) => {
                *slot = Some(token.to_string());
                true
            }
            Err(_) => false,
        }
    }

    fn clear(&self) -> bool {
        match self.token.lock() {
            Ok(mut slot) => {
                *slot = None;
                true
            }
            Err(_) => false,
        }
    }
}

/// 会话上下文
///
/// 克隆开销很小，多个组件和 `ApiClient` 共享同一个存储。
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStore::default())
    }

    /// 当前令牌；空字符串视为不存在
    pub fn token(&self) -> Option<String> {
        self.store.load().filter(|t| !t.trim().is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn sign_in(&self, token: &str) {
        if !self.store.save(token) {
            tracing::warn!("failed to persist session token");
        }
    }

    /// 注销或令牌被后端拒绝时调用
    pub fn sign_out(&self) {
        if !self.store.clear() {
            tracing::warn!("failed to clear session token");
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_and_out() {
        let session = Session::in_memory();
        assert!(!session.is_authenticated());

        session.sign_in("abc");
        assert_eq!(session.token().as_deref(), Some("abc"));

        session.sign_out();
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_blank_token_is_not_a_session() {
        let session = Session::new(MemoryStore::with_token("  "));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_clones_share_store() {
        let session = Session::in_memory();
        let other = session.clone();
        session.sign_in("t");
        assert!(other.is_authenticated());
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let session = Session::new(MemoryStore::with_token("secret-token"));
        assert!(!format!("{:?}", session).contains("secret-token"));
    }
}
