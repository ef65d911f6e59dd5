//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 实现了"监听 -> 验证 -> 处理 -> 加载"的导航流程。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 写入 History 状态；`push` 为 false 时替换当前记录（用于重定向）
fn write_history(path: &str, push: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let _ = if push {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    };
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// 守卫：返回实际应进入的路由；发生重定向时第二个值为 true
fn guard(target: AppRoute, is_auth: bool) -> (AppRoute, bool) {
    if target.requires_auth() && !is_auth {
        (AppRoute::auth_failure_redirect(), true)
    } else if target.should_redirect_when_authenticated() && is_auth {
        (AppRoute::auth_success_redirect(), true)
    } else {
        (target, false)
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入认证检查信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 认证状态检查（注入的信号，实现解耦）
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        // 首次进入也要经过守卫，未登录时直接打开 /admin 不会渲染后台内容
        let requested = AppRoute::from_path(&current_path());
        let (initial_route, redirected) = guard(requested, is_authenticated.get_untracked());
        if redirected {
            tracing::info!(to = %initial_route, "initial route redirected");
            write_history(&initial_route.to_path(), false);
        }
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    pub fn navigate_to_route(&self, target_route: AppRoute) {
        let (route, redirected) = guard(target_route, self.is_authenticated.get_untracked());
        if redirected {
            tracing::info!(to = %route, "navigation redirected by auth guard");
        }
        write_history(&route.to_path(), true);
        self.set_route.set(route);
        scroll_to_top();
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target_route = AppRoute::from_path(&current_path());
            // popstate 时也执行守卫逻辑
            let (route, redirected) = guard(target_route, is_authenticated.get_untracked());
            if redirected {
                write_history(&route.to_path(), false);
            }
            set_route.set(route);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 设置认证状态变化时的自动重定向
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let (route, redirected) = guard(current_route.get_untracked(), is_auth);
            if redirected {
                tracing::info!(logged_in = is_auth, to = %route, "auth state changed, redirecting");
                write_history(&route.to_path(), true);
                set_route.set(route);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 站内链接：拦截点击，走路由服务而不是整页刷新
#[component]
pub fn Link(
    /// 目标路由
    to: AppRoute,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let href = to.to_path();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        // 保留新标签页打开等浏览器行为
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        router.navigate_to_route(to.clone());
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_sends_anonymous_admin_visit_to_login() {
        assert_eq!(guard(AppRoute::Admin, false), (AppRoute::AdminLogin, true));
        assert_eq!(guard(AppRoute::Admin, true), (AppRoute::Admin, false));
    }

    #[test]
    fn test_guard_skips_login_page_when_signed_in() {
        assert_eq!(guard(AppRoute::AdminLogin, true), (AppRoute::Admin, true));
        assert_eq!(guard(AppRoute::AdminLogin, false), (AppRoute::AdminLogin, false));
    }

    #[test]
    fn test_public_routes_pass_through() {
        for route in [
            AppRoute::Home,
            AppRoute::Product("talc".into()),
            AppRoute::NotFound,
        ] {
            assert_eq!(guard(route.clone(), false), (route.clone(), false));
            assert_eq!(guard(route.clone(), true), (route, false));
        }
    }
}
