//! LocalStorage 令牌存储
//!
//! 令牌以原始字符串保存（不经过 JSON 编码），与已有部署保持兼容。

use gloo_storage::{LocalStorage as Backend, Storage};
use sarhad_shared::STORAGE_TOKEN_KEY;

use crate::session::SessionStore;

/// 浏览器 LocalStorage 后端
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl SessionStore for LocalStorage {
    fn load(&self) -> Option<String> {
        Backend::raw().get_item(STORAGE_TOKEN_KEY).ok()?
    }

    fn save(&self, token: &str) -> bool {
        Backend::raw().set_item(STORAGE_TOKEN_KEY, token).is_ok()
    }

    fn clear(&self) -> bool {
        Backend::delete(STORAGE_TOKEN_KEY);
        true
    }
}
