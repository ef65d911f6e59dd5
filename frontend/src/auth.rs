//! 认证模块
//!
//! 管理员认证状态，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。

use leptos::prelude::*;
use sarhad_shared::LoginRequest;

use crate::client::{ApiClient, Transport};
use crate::error::ApiError;
use crate::session::Session;

/// 认证上下文
///
/// `Session` 是令牌的唯一来源，信号只是它的响应式镜像。
#[derive(Clone, Copy)]
pub struct AuthContext {
    authenticated: RwSignal<bool>,
    session: StoredValue<Session>,
}

impl AuthContext {
    pub fn new(session: Session) -> Self {
        Self {
            authenticated: RwSignal::new(session.is_authenticated()),
            session: StoredValue::new(session),
        }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        self.authenticated.into()
    }

    /// 重新读取会话（例如后端拒绝令牌后客户端已清除它）
    pub fn sync(&self) {
        let now = self.session.with_value(Session::is_authenticated);
        if now != self.authenticated.get_untracked() {
            tracing::info!(authenticated = now, "session changed");
            self.authenticated.set(now);
        }
    }

    /// 请求失败后调用：令牌失效时切换为未登录，路由随之重定向
    pub fn check(&self, error: &ApiError) {
        if error.is_unauthorized() {
            self.sync();
        }
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 校验凭据并保存令牌
///
/// 空字段在本地拒绝；失败时不修改任何状态，错误信息由调用方展示。
pub async fn authenticate<T: Transport>(
    client: &ApiClient<T>,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::validation("Email and password are required"));
    }

    let res = client
        .call(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await?;
    client.session().sign_in(&res.token);
    if !client.session().is_authenticated() {
        return Err(ApiError::validation("Login failed: no session token received"));
    }
    Ok(())
}

/// 登录成功后更新认证状态，路由服务随之跳转到后台
pub async fn login<T: Transport>(
    ctx: &AuthContext,
    client: &ApiClient<T>,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    authenticate(client, email, password).await?;
    tracing::info!("admin signed in");
    ctx.authenticated.set(true);
    Ok(())
}

/// 注销并清除令牌
///
/// 导航由路由服务的认证状态监听自动处理。
pub fn logout(ctx: &AuthContext) {
    ctx.session.with_value(Session::sign_out);
    tracing::info!("admin signed out");
    ctx.authenticated.set(false);
}
