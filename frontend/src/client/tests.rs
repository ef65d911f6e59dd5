use super::mock::{BASE, MockTransport};
use super::*;
use crate::session::MemoryStore;
use sarhad_shared::protocol::{
    CreateProduct, DeleteProduct, GetProduct, ListProducts, UPLOAD_PRODUCT_IMAGES,
};
use sarhad_shared::{LoginRequest, Product, ProductPayload, SpecList, UploadedImages};
use serde_json::json;

// =========================================================
// 辅助函数
// =========================================================

fn client(session: Session) -> ApiClient<MockTransport> {
    ApiClient::new(MockTransport::new(), BASE, session)
}

fn product_json(id: &str, slug: &str) -> serde_json::Value {
    json!({ "_id": id, "slug": slug, "name": "Talc", "description": "Cosmetic grade" })
}

fn payload() -> ProductPayload {
    ProductPayload {
        name: "Talc".into(),
        description: "Cosmetic grade".into(),
        category: None,
        specifications: SpecList::new(),
        applications: vec![],
        images: vec![],
        is_featured: false,
    }
}

// =========================================================
// 请求头
// =========================================================

#[tokio::test]
async fn test_bearer_attached_when_token_present() {
    let api = client(Session::new(MemoryStore::with_token("tok-1")));
    api.transport()
        .mock_response(HttpMethod::Get, "/products", 200, json!([]));

    api.call(&ListProducts).await.unwrap();

    let req = api.transport().last().unwrap();
    assert_eq!(req.header("Authorization"), Some("Bearer tok-1"));
}

#[tokio::test]
async fn test_no_bearer_without_token() {
    let api = client(Session::in_memory());
    api.transport()
        .mock_response(HttpMethod::Get, "/products", 200, json!([]));

    api.call(&ListProducts).await.unwrap();

    let req = api.transport().last().unwrap();
    assert_eq!(req.header("Authorization"), None);
    assert_eq!(req.header("Content-Type"), None);
}

#[tokio::test]
async fn test_json_body_sets_content_type() {
    let api = client(Session::new(MemoryStore::with_token("t")));
    api.transport().mock_response(
        HttpMethod::Post,
        "/products",
        201,
        product_json("1", "talc"),
    );

    api.call(&CreateProduct(payload())).await.unwrap();

    let req = api.transport().last().unwrap();
    assert_eq!(req.header("content-type"), Some("application/json"));
    match req.body {
        RequestBody::Json(body) => {
            let value: serde_json::Value = serde_json::from_str(&body).unwrap();
            assert_eq!(value["name"], "Talc");
        }
        other => panic!("expected JSON body, got {:?}", other),
    }
}

#[tokio::test]
async fn test_multipart_omits_content_type() {
    let api = client(Session::new(MemoryStore::with_token("t")));
    api.transport().mock_response(
        HttpMethod::Post,
        "/products/upload-images",
        200,
        json!({ "urls": ["https://cdn.test/a.jpg"] }),
    );

    let form = MultipartForm::new().file(
        "images",
        StagedFile::new("a.jpg", "image/jpeg", vec![1, 2, 3]),
    );
    let uploaded: UploadedImages = api.upload(&UPLOAD_PRODUCT_IMAGES, form).await.unwrap();
    assert_eq!(uploaded.urls, ["https://cdn.test/a.jpg"]);

    let req = api.transport().last().unwrap();
    assert_eq!(req.header("Content-Type"), None);
    assert_eq!(req.header("Authorization"), Some("Bearer t"));
    assert!(matches!(req.body, RequestBody::Multipart(ref f) if f.parts().len() == 1));
}

// =========================================================
// 认证
// =========================================================

#[tokio::test]
async fn test_required_auth_without_token_never_hits_network() {
    let api = client(Session::in_memory());

    let err = api
        .call(&DeleteProduct { id: "1".into() })
        .await
        .unwrap_err();

    assert_eq!(err, ApiError::Unauthenticated);
    assert_eq!(api.transport().total(), 0);
}

#[tokio::test]
async fn test_rejected_token_is_cleared() {
    let session = Session::new(MemoryStore::with_token("expired"));
    let api = client(session.clone());
    api.transport().mock_response(
        HttpMethod::Delete,
        "/products/1",
        401,
        json!({ "message": "Token is not valid" }),
    );

    let err = api
        .call(&DeleteProduct { id: "1".into() })
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Token is not valid");
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_failed_login_keeps_existing_state() {
    let session = Session::in_memory();
    let api = client(session.clone());
    api.transport().mock_response(
        HttpMethod::Post,
        "/auth/login",
        401,
        json!({ "message": "Invalid credentials" }),
    );

    let err = api
        .call(&LoginRequest {
            email: "a@b.c".into(),
            password: "x".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::Http {
            status: 401,
            message: "Invalid credentials".into()
        }
    );
    assert!(!session.is_authenticated());
}

// =========================================================
// 响应解析
// =========================================================

#[tokio::test]
async fn test_slug_is_percent_encoded() {
    let api = client(Session::in_memory());
    api.transport().mock_response(
        HttpMethod::Get,
        "/products/china%20clay",
        200,
        product_json("9", "china clay"),
    );

    let product: Product = api
        .call(&GetProduct {
            slug: "china clay".into(),
        })
        .await
        .unwrap();
    assert_eq!(product.id, "9");
}

#[tokio::test]
async fn test_no_content_decodes_as_unit() {
    let api = client(Session::new(MemoryStore::with_token("t")));
    api.transport()
        .mock_response(HttpMethod::Delete, "/products/1", 204, serde_json::Value::Null);

    api.call(&DeleteProduct { id: "1".into() }).await.unwrap();
}

#[tokio::test]
async fn test_not_found_carries_status_and_fallback_message() {
    let api = client(Session::in_memory());
    api.transport()
        .mock_text(HttpMethod::Get, "/products/missing", 404, "<html>nope</html>");

    let err = api
        .call(&GetProduct {
            slug: "missing".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "Request failed with status 404");
}

#[tokio::test]
async fn test_plain_text_error_is_shown() {
    let api = client(Session::in_memory());
    api.transport()
        .mock_text(HttpMethod::Get, "/products", 503, "Service Unavailable");

    let err = api.call(&ListProducts).await.unwrap_err();
    assert_eq!(err.to_string(), "Service Unavailable");
}

#[tokio::test]
async fn test_network_error_surfaces() {
    let api = client(Session::in_memory());
    api.transport()
        .mock_network_error(HttpMethod::Get, "/products");

    let err = api.call(&ListProducts).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let api = client(Session::in_memory());
    api.transport()
        .mock_response(HttpMethod::Get, "/products", 200, json!({ "items": [] }));

    let err = api.call(&ListProducts).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn test_url_trims_trailing_slash() {
    let api = ApiClient::new(MockTransport::new(), "https://api.test/", Session::in_memory());
    assert_eq!(api.url(&["hero", "abc"]), "https://api.test/hero/abc");
}
