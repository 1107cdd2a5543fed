//! Reverse proxy for the API path prefix.
//!
//! The site has no backend of its own; during development, requests under
//! `[serve] api_prefix` are forwarded to the separately-run API process
//! at `[serve] api_upstream`. Upstream 4xx/5xx statuses pass through
//! unchanged; connection failures surface as 502.

use super::response;
use crate::debug;
use anyhow::Result;
use std::io::Read;
use std::time::Duration;
use tiny_http::{Method, Request};
use ureq::Agent;

/// Upstream request timeout.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Forwards matching requests to the configured upstream.
pub struct ApiProxy {
    agent: Agent,
    prefix: String,
    upstream: String,
}

impl ApiProxy {
    pub fn new(prefix: &str, upstream: &str) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(UPSTREAM_TIMEOUT))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            prefix: prefix.trim_end_matches('/').to_string(),
            upstream: upstream.trim_end_matches('/').to_string(),
        }
    }

    /// Whether a raw request URL falls under the proxied prefix.
    pub fn matches(&self, url: &str) -> bool {
        match url.strip_prefix(self.prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with(['/', '?']),
            None => false,
        }
    }

    /// Forward the request upstream and relay the response.
    pub fn forward(&self, mut request: Request) -> Result<()> {
        let method = request.method().clone();
        let tail = request.url().to_string();
        let content_type = request
            .headers()
            .iter()
            .find(|h| h.field.as_str().as_str().eq_ignore_ascii_case("content-type"))
            .map(|h| h.value.to_string());

        let mut body = Vec::new();
        request.as_reader().read_to_end(&mut body)?;

        match self.fetch(&method, &tail, content_type.as_deref(), &body) {
            Ok(Some(relay)) => {
                response::send_body(request, relay.status, &relay.content_type, relay.body)
            }
            Ok(None) => {
                response::respond_bad_gateway(request, &format!("method {method} not forwarded"))
            }
            Err(e) => response::respond_bad_gateway(request, &e.to_string()),
        }
    }

    /// Perform the upstream request. `Ok(None)` marks a method the proxy
    /// does not forward; upstream 4xx/5xx statuses come back as `Ok`.
    fn fetch(
        &self,
        method: &Method,
        tail: &str,
        content_type: Option<&str>,
        body: &[u8],
    ) -> Result<Option<UpstreamRelay>, ureq::Error> {
        let target = format!("{}{}", self.upstream, tail);
        debug!("proxy"; "{} {} -> {}", method, tail, target);

        let upstream_response = match method {
            Method::Get => self.agent.get(&target).call()?,
            Method::Head => self.agent.head(&target).call()?,
            Method::Delete => self.agent.delete(&target).call()?,
            Method::Post | Method::Put | Method::Patch => {
                let mut builder = match method {
                    Method::Post => self.agent.post(&target),
                    Method::Put => self.agent.put(&target),
                    _ => self.agent.patch(&target),
                };
                if let Some(ct) = content_type {
                    builder = builder.header("Content-Type", ct);
                }
                builder.send(body)?
            }
            _ => return Ok(None),
        };

        let status = upstream_response.status().as_u16();
        let content_type = upstream_response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();
        let body = upstream_response.into_body().read_to_vec()?;

        Ok(Some(UpstreamRelay {
            status,
            content_type,
            body,
        }))
    }
}

/// Upstream response parts relayed back to the browser.
struct UpstreamRelay {
    status: u16,
    content_type: String,
    body: Vec<u8>,
}
