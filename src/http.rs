//! Fetch Transport
//!
//! Browser implementation of the client's HTTP seam, on top of gloo-net.

use async_trait::async_trait;
use gloo_net::http::{Method as FetchMethod, RequestBuilder};
use taskboard_client::api::{HttpRequest, HttpResponse, HttpTransport, Method, TransportError};

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

fn fetch_method(method: Method) -> FetchMethod {
    match method {
        Method::Get => FetchMethod::GET,
        Method::Post => FetchMethod::POST,
        Method::Put => FetchMethod::PUT,
        Method::Delete => FetchMethod::DELETE,
    }
}

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = RequestBuilder::new(&request.url).method(fetch_method(request.method));
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError::new(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status();
        // Unreadable body is treated like a non-JSON one by the client
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                log::warn!("Could not read response body: {}", e);
                String::new()
            }
        };
        Ok(HttpResponse { status, body })
    }
}
