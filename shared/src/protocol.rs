use crate::{HeroPayload, HeroSlide, LoginRequest, LoginResponse, Product, ProductPayload};
use serde::{Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// Paths carry identifiers (slug, id), so unlike a fixed route table the path is
/// computed per request. Identifiers are inserted unencoded; the client encodes
/// each segment.
pub trait ApiRequest {
    /// JSON body type; `()` for requests without a body.
    type Body: Serialize;
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the request must carry the admin bearer token.
    const AUTH: bool;

    /// Path segments below the API base URL.
    fn segments(&self) -> Vec<&str>;

    fn body(&self) -> Option<&Self::Body> {
        None
    }
}

// =========================================================
// Products
// =========================================================

/// List all products
#[derive(Debug, Default)]
pub struct ListProducts;

impl ApiRequest for ListProducts {
    type Body = ();
    type Response = Vec<Product>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTH: bool = false;

    fn segments(&self) -> Vec<&str> {
        vec!["products"]
    }
}

/// Fetch one product by its URL slug
#[derive(Debug)]
pub struct GetProduct {
    pub slug: String,
}

impl ApiRequest for GetProduct {
    type Body = ();
    type Response = Product;
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTH: bool = false;

    fn segments(&self) -> Vec<&str> {
        vec!["products", self.slug.as_str()]
    }
}

#[derive(Debug)]
pub struct CreateProduct(pub ProductPayload);

impl ApiRequest for CreateProduct {
    type Body = ProductPayload;
    type Response = Product;
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTH: bool = true;

    fn segments(&self) -> Vec<&str> {
        vec!["products"]
    }

    fn body(&self) -> Option<&ProductPayload> {
        Some(&self.0)
    }
}

#[derive(Debug)]
pub struct UpdateProduct {
    pub id: String,
    pub payload: ProductPayload,
}

impl ApiRequest for UpdateProduct {
    type Body = ProductPayload;
    type Response = Product;
    const METHOD: HttpMethod = HttpMethod::Put;
    const AUTH: bool = true;

    fn segments(&self) -> Vec<&str> {
        vec!["products", self.id.as_str()]
    }

    fn body(&self) -> Option<&ProductPayload> {
        Some(&self.payload)
    }
}

/// Delete a product. 204 on success, treated as `()`.
#[derive(Debug)]
pub struct DeleteProduct {
    pub id: String,
}

impl ApiRequest for DeleteProduct {
    type Body = ();
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;
    const AUTH: bool = true;

    fn segments(&self) -> Vec<&str> {
        vec!["products", self.id.as_str()]
    }
}

// =========================================================
// Hero slides
// =========================================================

#[derive(Debug, Default)]
pub struct ListHeroSlides;

impl ApiRequest for ListHeroSlides {
    type Body = ();
    type Response = Vec<HeroSlide>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTH: bool = false;

    fn segments(&self) -> Vec<&str> {
        vec!["hero"]
    }
}

#[derive(Debug)]
pub struct CreateHeroSlide(pub HeroPayload);

impl ApiRequest for CreateHeroSlide {
    type Body = HeroPayload;
    type Response = HeroSlide;
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTH: bool = true;

    fn segments(&self) -> Vec<&str> {
        vec!["hero"]
    }

    fn body(&self) -> Option<&HeroPayload> {
        Some(&self.0)
    }
}

#[derive(Debug)]
pub struct UpdateHeroSlide {
    pub id: String,
    pub payload: HeroPayload,
}

impl ApiRequest for UpdateHeroSlide {
    type Body = HeroPayload;
    type Response = HeroSlide;
    const METHOD: HttpMethod = HttpMethod::Put;
    const AUTH: bool = true;

    fn segments(&self) -> Vec<&str> {
        vec!["hero", self.id.as_str()]
    }

    fn body(&self) -> Option<&HeroPayload> {
        Some(&self.payload)
    }
}

#[derive(Debug)]
pub struct DeleteHeroSlide {
    pub id: String,
}

impl ApiRequest for DeleteHeroSlide {
    type Body = ();
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;
    const AUTH: bool = true;

    fn segments(&self) -> Vec<&str> {
        vec!["hero", self.id.as_str()]
    }
}

// =========================================================
// Auth
// =========================================================

impl ApiRequest for LoginRequest {
    type Body = LoginRequest;
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTH: bool = false;

    fn segments(&self) -> Vec<&str> {
        vec!["auth", "login"]
    }

    fn body(&self) -> Option<&LoginRequest> {
        Some(self)
    }
}

/// Multipart upload endpoints (not JSON, so they sit outside `ApiRequest`).
pub const UPLOAD_PRODUCT_IMAGES: [&str; 2] = ["products", "upload-images"];
pub const UPLOAD_HERO_IMAGE: [&str; 2] = ["hero", "upload-image"];
