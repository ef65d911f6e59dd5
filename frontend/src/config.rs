//! 运行时配置
//!
//! 静态站点没有服务端环境变量，配置在编译期通过 `option_env!` 注入
//! （例如 `SARHAD_API_BASE_URL=https://api.example.com trunk build`），
//! 未设置时使用默认值。

use crate::error::ConfigError;

const DEFAULT_API_BASE_URL: &str = "/api";
const DEFAULT_CAROUSEL_INTERVAL_MS: u32 = 4000;
const DEFAULT_NOTICE_TIMEOUT_MS: u32 = 3000;
const DEFAULT_DIALOG_CLOSE_DELAY_MS: u32 = 1500;
const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_WHATSAPP_NUMBER: &str = "923250328377";
const DEFAULT_CONTACT_EMAIL: &str = "info@sarhadcorporation.com";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// REST 后端根地址（不带尾部斜杠）
    pub api_base_url: String,
    /// 轮播自动切换间隔
    pub carousel_interval_ms: u32,
    /// 后台提示条自动消失时间
    pub notice_timeout_ms: u32,
    /// 保存成功后关闭对话框的延迟
    pub dialog_close_delay_ms: u32,
    /// tracing 过滤指令
    pub log_filter: String,
    pub whatsapp_number: String,
    pub contact_email: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            carousel_interval_ms: DEFAULT_CAROUSEL_INTERVAL_MS,
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT_MS,
            dialog_close_delay_ms: DEFAULT_DIALOG_CLOSE_DELAY_MS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
        }
    }
}

impl AppConfig {
    /// 读取编译期注入的配置
    ///
    /// 返回配置以及被忽略的非法值，由调用方在日志初始化后输出警告。
    pub fn from_build_env() -> (Self, Vec<ConfigError>) {
        Self::from_lookup(|name| match name {
            "SARHAD_API_BASE_URL" => option_env!("SARHAD_API_BASE_URL"),
            "SARHAD_CAROUSEL_INTERVAL_MS" => option_env!("SARHAD_CAROUSEL_INTERVAL_MS"),
            "SARHAD_LOG" => option_env!("SARHAD_LOG"),
            "SARHAD_WHATSAPP_NUMBER" => option_env!("SARHAD_WHATSAPP_NUMBER"),
            "SARHAD_CONTACT_EMAIL" => option_env!("SARHAD_CONTACT_EMAIL"),
            _ => None,
        })
    }

    fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut rejected = Vec::new();

        if let Some(raw) = lookup("SARHAD_API_BASE_URL") {
            match normalize_base_url(raw) {
                Ok(url) => config.api_base_url = url,
                Err(e) => rejected.push(e),
            }
        }

        if let Some(raw) = lookup("SARHAD_CAROUSEL_INTERVAL_MS") {
            match raw.trim().parse::<u32>() {
                Ok(ms) if ms > 0 => config.carousel_interval_ms = ms,
                _ => rejected.push(ConfigError::InvalidNumber {
                    name: "SARHAD_CAROUSEL_INTERVAL_MS",
                    value: raw.to_string(),
                }),
            }
        }

        if let Some(filter) = lookup("SARHAD_LOG").filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter.trim().to_string();
        }
        if let Some(number) = lookup("SARHAD_WHATSAPP_NUMBER").filter(|n| !n.trim().is_empty()) {
            config.whatsapp_number = number.trim().to_string();
        }
        if let Some(email) = lookup("SARHAD_CONTACT_EMAIL").filter(|e| !e.trim().is_empty()) {
            config.contact_email = email.trim().to_string();
        }

        (config, rejected)
    }

    pub fn whatsapp_link(&self) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.whatsapp_number,
            urlencoding::encode("Hello Sarhad Corporation")
        )
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let valid = trimmed.starts_with("http://")
        || trimmed.starts_with("https://")
        || raw.trim().starts_with('/');
    if !valid {
        return Err(ConfigError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<&'static str> {
        let map: HashMap<&'static str, &'static str> = pairs.iter().copied().collect();
        move |name: &str| map.get(name).copied()
    }

    #[test]
    fn test_defaults_without_env() {
        let (config, rejected) = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.carousel_interval_ms, 4000);
        assert!(rejected.is_empty());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let (config, rejected) =
            AppConfig::from_lookup(lookup_from(&[("SARHAD_API_BASE_URL", "https://api.example.com/")]));
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert!(rejected.is_empty());
    }

    #[test]
    fn test_root_path_becomes_empty_base() {
        let (config, _) = AppConfig::from_lookup(lookup_from(&[("SARHAD_API_BASE_URL", "/")]));
        assert_eq!(config.api_base_url, "");
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let (config, rejected) = AppConfig::from_lookup(lookup_from(&[
            ("SARHAD_API_BASE_URL", "api.example.com"),
            ("SARHAD_CAROUSEL_INTERVAL_MS", "0"),
        ]));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.carousel_interval_ms, DEFAULT_CAROUSEL_INTERVAL_MS);
        assert_eq!(rejected.len(), 2);
    }

    #[test]
    fn test_whatsapp_link_encodes_greeting() {
        let config = AppConfig::default();
        assert_eq!(
            config.whatsapp_link(),
            "https://wa.me/923250328377?text=Hello%20Sarhad%20Corporation"
        );
    }
}
