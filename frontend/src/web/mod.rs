//! 浏览器 API 适配层
//!
//! 核心模块（`client`、`session`、`carousel`）只依赖抽象接口，
//! 这里提供它们在浏览器中的实现，以及路由和日志输出。

mod console;
pub mod files;
mod http;
mod prompt;
pub mod route;
pub mod router;
mod storage;
mod timer;

pub use console::init_tracing;
pub use http::FetchTransport;
pub use prompt::confirm;
pub use storage::LocalStorage;
pub use timer::{IntervalScheduler, after};
