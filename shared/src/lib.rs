use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod protocol;
mod specs;

pub use specs::SpecList;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// LocalStorage 中保存管理员令牌的键名
pub const STORAGE_TOKEN_KEY: &str = "adminToken";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
/// 产品图片上传的 multipart 字段名
pub const FIELD_PRODUCT_IMAGES: &str = "images";
/// 轮播图上传的 multipart 字段名
pub const FIELD_HERO_IMAGE: &str = "image";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 产品（由后端持有，前端只保存临时副本）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub specifications: SpecList,
    #[serde(default)]
    pub applications: Vec<String>,
    #[serde(default, rename = "cloudinaryImages")]
    pub images: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// 卡片封面图（第一张图片）
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// 非空分类；空字符串视为未设置
    pub fn category_label(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.trim().is_empty())
    }
}

/// 创建 / 更新产品时提交的字段（不含 id 和 slug，由后端生成）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub specifications: SpecList,
    pub applications: Vec<String>,
    #[serde(rename = "cloudinaryImages")]
    pub images: Vec<String>,
    pub is_featured: bool,
}

/// 首页轮播图
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroSlide {
    #[serde(rename = "_id")]
    pub id: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub order: i32,
}

impl HeroSlide {
    /// 按 `order` 升序排列（稳定排序，相同 order 保持后端顺序）
    pub fn sort_for_display(slides: &mut [HeroSlide]) {
        slides.sort_by_key(|s| s.order);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroPayload {
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub order: i32,
}

// =========================================================
// 认证与上传 (Auth & Upload)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// `POST /products/upload-images` 的响应
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UploadedImages {
    #[serde(default)]
    pub urls: Vec<String>,
}

/// `POST /hero/upload-image` 的响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub url: String,
}

/// 后端错误响应体，`message` 优先于 `error`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message
            .or(self.error)
            .filter(|m| !m.trim().is_empty())
    }
}
