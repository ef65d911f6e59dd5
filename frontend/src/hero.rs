//! 首页轮播的数据来源
//!
//! 首页必须始终有图可放：请求失败或后端尚未配置任何轮播图时，
//! 都使用三张随站点发布的静态图片。

use sarhad_shared::HeroSlide;
use sarhad_shared::protocol::ListHeroSlides;

use crate::client::{ApiClient, Transport};
use crate::error::ApiError;
use crate::loader::FailurePolicy;

/// 加载失败时退回静态图片，不向用户展示错误
pub const FALLBACK: FailurePolicy<Vec<HeroSlide>> = FailurePolicy::Fallback(default_slides);

/// 后端不可用或尚未配置轮播图时显示的静态图片
pub fn default_slides() -> Vec<HeroSlide> {
    [
        ("/hero.jpg", "Rock Phosphate"),
        ("/hero-2.jpg", "Talc & Soap Stone"),
        ("/hero-3.jpg", "Quartz & Dolomite"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (image, label))| HeroSlide {
        id: format!("default-{}", i + 1),
        image: image.to_string(),
        label: Some(label.to_string()),
        order: i as i32,
    })
    .collect()
}

/// 空列表换成默认图片，否则按 `order` 排好
pub fn display_order(mut slides: Vec<HeroSlide>) -> Vec<HeroSlide> {
    if slides.is_empty() {
        return default_slides();
    }
    HeroSlide::sort_for_display(&mut slides);
    slides
}

pub async fn fetch_slides<T: Transport>(client: &ApiClient<T>) -> Result<Vec<HeroSlide>, ApiError> {
    let slides = client.call(&ListHeroSlides).await?;
    Ok(display_order(slides))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::{BASE, MockTransport};
    use crate::loader::{LoadState, Loader};
    use crate::session::{MemoryStore, Session};
    use sarhad_shared::protocol::HttpMethod;
    use serde_json::json;

    fn public() -> ApiClient<MockTransport> {
        ApiClient::new(MockTransport::new(), BASE, Session::new(MemoryStore::default()))
    }

    async fn load(api: &ApiClient<MockTransport>) -> LoadState<Vec<HeroSlide>> {
        let mut loader = Loader::new(FALLBACK);
        let ticket = loader.begin();
        assert!(loader.complete(ticket, fetch_slides(api).await));
        loader.state().clone()
    }

    fn assert_defaults(state: &LoadState<Vec<HeroSlide>>) {
        assert_eq!(state.error(), None);
        let slides = state.data().unwrap();
        assert_eq!(slides.len(), 3);
        assert!(slides.windows(2).all(|w| w[0].order <= w[1].order));
        assert_eq!(slides[0].image, "/hero.jpg");
    }

    #[tokio::test]
    async fn test_network_error_shows_default_slides() {
        let api = public();
        api.transport().mock_network_error(HttpMethod::Get, "/hero");

        assert_defaults(&load(&api).await);
    }

    #[tokio::test]
    async fn test_server_error_shows_default_slides() {
        let api = public();
        api.transport()
            .mock_response(HttpMethod::Get, "/hero", 500, json!({ "message": "boom" }));

        assert_defaults(&load(&api).await);
    }

    #[tokio::test]
    async fn test_empty_list_shows_default_slides() {
        let api = public();
        api.transport()
            .mock_response(HttpMethod::Get, "/hero", 200, json!([]));

        assert_defaults(&load(&api).await);
        assert_eq!(api.transport().count(HttpMethod::Get, "/hero"), 1);
    }

    #[tokio::test]
    async fn test_configured_slides_sorted_by_order() {
        let api = public();
        api.transport().mock_response(
            HttpMethod::Get,
            "/hero",
            200,
            json!([
                { "_id": "b", "image": "https://cdn.test/b.jpg", "order": 2 },
                { "_id": "a", "image": "https://cdn.test/a.jpg", "order": 0 },
                { "_id": "c", "image": "https://cdn.test/c.jpg", "order": 1 }
            ]),
        );

        let state = load(&api).await;
        let ids: Vec<_> = state.data().unwrap().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "c", "b"]);
    }
}
