//! HTTP 请求封装模块
//!
//! 使用 `web_sys::fetch` 实现核心库的 [`HttpClient`]，
//! 请求总是携带 cookie（`credentials: include`）。

use colorgame::error::{ClientError, ClientResult};
use colorgame::request::{HttpClient, HttpRequest, HttpResponse};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCredentials, RequestInit, Response};

/// 基于 `fetch` 的 HTTP 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchHttpClient;

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

impl FetchHttpClient {
    fn build(req: &HttpRequest) -> ClientResult<Request> {
        let headers = Headers::new()
            .map_err(|e| ClientError::network(format!("创建 Headers 失败: {}", js_error(e))))?;

        for (key, value) in &req.headers {
            headers.set(key, value).map_err(|e| {
                ClientError::network(format!("设置 Header 失败: {}", js_error(e)))
                    .in_op_with("fetch.header", key.as_str())
            })?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());
        opts.set_credentials(RequestCredentials::Include);

        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| ClientError::network(js_error(e)).in_op("fetch.build"))
    }

    async fn text(response: &Response) -> ClientResult<String> {
        let promise = response
            .text()
            .map_err(|e| ClientError::network(js_error(e)).in_op("fetch.text"))?;

        let text = JsFuture::from(promise)
            .await
            .map_err(|e| ClientError::network(js_error(e)).in_op("fetch.text"))?;

        Ok(text.as_string().unwrap_or_default())
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> ClientResult<HttpResponse> {
        let request = Self::build(&req)?;

        let window =
            web_sys::window().ok_or_else(|| ClientError::network("无法获取 window 对象"))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ClientError::network(js_error(e)).in_op_with("fetch", req.url.as_str()))?;

        let response: Response = resp_value.dyn_into().map_err(|e| {
            ClientError::network(format!("Response 类型转换失败: {}", js_error(e)))
        })?;

        let body = Self::text(&response).await?;
        Ok(HttpResponse::new(response.status(), body))
    }
}
