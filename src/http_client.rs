use anyhow::{Context, Result};
use crux_http::HttpError;
use crux_http::protocol::{HttpRequest, HttpResponse, HttpResult};
use log::{debug, warn};
use reqwest::{Client, Method};
use std::time::Duration;
use trait_variant::make;

/// Executes the `Http` effects requested by the core
#[make(Send)]
pub trait Transport {
    async fn execute(&self, request: HttpRequest) -> HttpResult;
}

/// `Transport` backed by a `reqwest` client
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport whose connections give up after `connect_timeout`
    ///
    /// Request deadlines are enforced by the core, so no overall timeout is set.
    pub fn new(connect_timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self { client })
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let method = Method::from_bytes(request.method.as_bytes())
            .with_context(|| format!("failed to parse HTTP method {}", request.method))?;
        let target = format!("{method} {}", request.url);
        debug!("{target}");

        let mut builder = self.client.request(method, &request.url);
        for header in &request.headers {
            builder = builder.header(header.name.as_str(), header.value.as_str());
        }
        if !request.body.is_empty() {
            builder = builder.body(request.body);
        }

        let res = builder
            .send()
            .await
            .with_context(|| format!("failed to send {target}"))?;

        let status = res.status().as_u16();
        let headers: Vec<(String, String)> = res
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = res
            .bytes()
            .await
            .with_context(|| format!("failed to read response body of {target}"))?;

        debug!("{target} returned {status}");

        let mut response = HttpResponse::status(status);
        for (name, value) in headers {
            response.header(name, value);
        }
        Ok(response.body(body.to_vec()).build())
    }
}

impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> HttpResult {
        match self.send(request).await {
            Ok(response) => HttpResult::Ok(response),
            Err(e) => {
                warn!("{e:#}");
                HttpResult::Err(HttpError::Io(format!("{e:#}")))
            }
        }
    }
}
