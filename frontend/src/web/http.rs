//! 浏览器 fetch 传输层
//!
//! 通过 `gloo-net` 发送请求；multipart 请求体转换为原生 `FormData`，
//! 不设置 Content-Type，由浏览器生成 boundary。

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use sarhad_shared::protocol::HttpMethod;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

use crate::client::{HttpRequest, HttpResponse, MultipartForm, RequestBody, Transport};
use crate::error::ApiError;

/// 基于 `window.fetch` 的传输实现
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

fn js_error(e: JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", e))
}

fn start(method: HttpMethod, url: &str) -> RequestBuilder {
    match method {
        HttpMethod::Get => Request::get(url),
        HttpMethod::Post => Request::post(url),
        HttpMethod::Put => Request::put(url),
        HttpMethod::Delete => Request::delete(url),
    }
}

/// 把暂存文件转换为 `FormData`
fn to_form_data(form: &MultipartForm) -> Result<FormData, ApiError> {
    let data = FormData::new().map_err(js_error)?;
    for (field, file) in form.parts() {
        let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
        let options = BlobPropertyBag::new();
        options.set_type(&file.content_type);
        let blob = Blob::new_with_u8_array_sequence_and_options(&js_sys::Array::of1(&bytes), &options)
            .map_err(js_error)?;
        data.append_with_blob_and_filename(field, &blob, &file.name)
            .map_err(js_error)?;
    }
    Ok(data)
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = start(req.method, &req.url);
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(body) => builder.body(body),
            RequestBody::Multipart(form) => builder.body(to_form_data(&form)?),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let res = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
