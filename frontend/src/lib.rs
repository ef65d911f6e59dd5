//! Sarhad Corporation 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `client` / `loader` / `carousel` / `hero` / `admin` / `session`: 不依赖浏览器的核心逻辑，可在原生环境测试
//! - `web`: 浏览器适配层（fetch、localStorage、定时器、路由）
//! - `auth`: 认证状态管理
//! - `components`: UI 组件层

pub mod admin;
pub mod auth;
pub mod carousel;
pub mod client;
pub mod config;
pub mod error;
pub mod hero;
pub mod loader;
pub mod session;
pub mod web;

mod components {
    pub mod admin_dashboard;
    pub mod admin_login;
    mod form_dialog;
    mod hero;
    mod hero_dialog;
    pub mod home;
    mod icons;
    pub mod layout;
    pub mod not_found;
    pub mod product_detail;
    mod product_dialog;
    mod products;
    mod sections;
}

use crate::auth::AuthContext;
use crate::client::ApiClient;
use crate::components::admin_dashboard::AdminDashboardPage;
use crate::components::admin_login::AdminLoginPage;
use crate::components::home::HomePage;
use crate::components::layout::{Footer, Navbar, WhatsAppButton};
use crate::components::not_found::NotFoundPage;
use crate::components::product_detail::ProductDetail;
use crate::config::AppConfig;
use crate::session::Session;
use crate::web::{FetchTransport, LocalStorage};

use leptos::prelude::*;

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Product(slug) => view! { <ProductDetail slug=slug /> }.into_any(),
        AppRoute::AdminLogin => view! { <AdminLoginPage /> }.into_any(),
        AppRoute::Admin => view! { <AdminDashboardPage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // 1. 会话与 API 客户端（令牌保存在 localStorage）
    let session = Session::new(LocalStorage);
    let client = ApiClient::new(FetchTransport, &config.api_base_url, session.clone());
    provide_context(client);
    provide_context(config);

    // 2. 认证上下文与客户端共享同一个会话
    let auth_ctx = AuthContext::new(session);
    provide_context(auth_ctx);

    // 3. 获取认证状态信号，用于注入路由服务
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <Navbar />
            <RouterOutlet matcher=route_matcher />
            <Footer />
            <WhatsAppButton />
        </Router>
    }
}
