//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页 (默认路由)
    #[default]
    Home,
    /// 产品详情，携带 URL slug（已解码）
    Product(String),
    /// 管理员登录
    AdminLogin,
    /// 管理后台 (需要认证)
    Admin,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Home,
            "/admin/login" => Self::AdminLogin,
            "/admin" => Self::Admin,
            _ => match trimmed.strip_prefix("/product/") {
                Some(slug) if !slug.is_empty() && !slug.contains('/') => urlencoding::decode(slug)
                    .map(|s| Self::Product(s.into_owned()))
                    .unwrap_or(Self::NotFound),
                _ => Self::NotFound,
            },
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Product(slug) => format!("/product/{}", urlencoding::encode(slug)),
            Self::AdminLogin => "/admin/login".to_string(),
            Self::Admin => "/admin".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::AdminLogin)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::AdminLogin
    }

    /// 获取认证成功时的重定向目标（从登录页）
    pub fn auth_success_redirect() -> Self {
        Self::Admin
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path(""), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/admin"), AppRoute::Admin);
        assert_eq!(AppRoute::from_path("/admin/"), AppRoute::Admin);
        assert_eq!(AppRoute::from_path("/admin/login"), AppRoute::AdminLogin);
        assert_eq!(
            AppRoute::from_path("/product/rock-phosphate"),
            AppRoute::Product("rock-phosphate".into())
        );
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        assert_eq!(AppRoute::from_path("/product/"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/product/a/b"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/products"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/admin/settings"), AppRoute::NotFound);
    }

    #[test]
    fn test_product_slug_is_encoded_and_decoded() {
        let route = AppRoute::Product("china clay".into());
        assert_eq!(route.to_path(), "/product/china%20clay");
        assert_eq!(AppRoute::from_path(&route.to_path()), route);
    }

    #[test]
    fn test_only_admin_requires_auth() {
        assert!(AppRoute::Admin.requires_auth());
        assert!(!AppRoute::AdminLogin.requires_auth());
        assert!(!AppRoute::Home.requires_auth());
        assert!(!AppRoute::Product("x".into()).requires_auth());
        assert!(AppRoute::AdminLogin.should_redirect_when_authenticated());
        assert_eq!(AppRoute::auth_failure_redirect(), AppRoute::AdminLogin);
        assert_eq!(AppRoute::auth_success_redirect(), AppRoute::Admin);
    }
}
