//! JSON DNS-over-HTTPS client.
//!
//! Forwards one question per request as an HTTP GET against a
//! Google-style JSON resolve endpoint:
//!
//! ```text
//! GET <resolve_url>?name=<domain>&type=<numeric type code>
//! ```
//!
//! The JSON body is deserialized into the wire-agnostic `UpstreamReply`
//! and handed to the response assembler. There is no retry and no
//! caching; a transport failure or a body that does not match the
//! contract aborts the current query.

use async_trait::async_trait;
use doh_gateway_application::ports::UpstreamClient;
use doh_gateway_domain::{GatewayError, RawQuestion, RawRecord, RecordKind, UpstreamReply};
use serde::Deserialize;
use std::sync::LazyLock;
use tracing::debug;

/// Shared HTTPS client with connection pooling.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .use_rustls_tls()
        .pool_max_idle_per_host(4)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

/// JSON reply body as served by Google-style resolve endpoints.
#[derive(Debug, Deserialize)]
struct DohReplyBody {
    #[serde(rename = "Status")]
    status: u16,
    #[serde(rename = "TC")]
    truncated: bool,
    #[serde(rename = "RD")]
    recursion_desired: bool,
    #[serde(rename = "RA")]
    recursion_available: bool,
    #[serde(rename = "AD", default)]
    authenticated_data: bool,
    #[serde(rename = "CD", default)]
    checking_disabled: bool,
    #[serde(rename = "Question", default)]
    questions: Vec<DohQuestion>,
    #[serde(rename = "Answer", default)]
    answers: Vec<DohRecord>,
    #[serde(rename = "Authority", default)]
    authorities: Vec<DohRecord>,
    #[serde(rename = "Additional", default)]
    additionals: Vec<DohRecord>,
}

#[derive(Debug, Deserialize)]
struct DohQuestion {
    name: String,
    #[serde(rename = "type")]
    type_code: u16,
}

#[derive(Debug, Deserialize)]
struct DohRecord {
    name: String,
    #[serde(rename = "type")]
    type_code: u16,
    #[serde(rename = "TTL", default)]
    ttl: u32,
    data: String,
}

impl From<DohReplyBody> for UpstreamReply {
    fn from(body: DohReplyBody) -> Self {
        let to_question = |q: DohQuestion| RawQuestion::new(q.name, q.type_code);
        let to_record = |r: DohRecord| RawRecord::new(r.name, r.type_code, r.ttl, r.data);

        UpstreamReply {
            status: body.status,
            truncated: body.truncated,
            recursion_desired: body.recursion_desired,
            recursion_available: body.recursion_available,
            authenticated_data: body.authenticated_data,
            checking_disabled: body.checking_disabled,
            questions: body.questions.into_iter().map(to_question).collect(),
            answers: body.answers.into_iter().map(to_record).collect(),
            authorities: body.authorities.into_iter().map(to_record).collect(),
            additionals: body.additionals.into_iter().map(to_record).collect(),
        }
    }
}

pub struct DohClient {
    resolve_url: String,
}

impl DohClient {
    pub fn new(resolve_url: String) -> Self {
        Self { resolve_url }
    }
}

#[async_trait]
impl UpstreamClient for DohClient {
    async fn forward(&self, name: &str, kind: RecordKind) -> Result<UpstreamReply, GatewayError> {
        let type_code = kind.code();

        debug!(url = %self.resolve_url, name = %name, type_code, "Sending DoH query");

        let response = SHARED_CLIENT
            .get(&self.resolve_url)
            .query(&[("name", name), ("type", &type_code.to_string())])
            .send()
            .await
            .map_err(|e| {
                GatewayError::Upstream(format!("Request to {} failed: {}", self.resolve_url, e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Upstream(format!(
                "{} returned HTTP {}: {}",
                self.resolve_url,
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response.text().await.map_err(|e| {
            GatewayError::Upstream(format!(
                "Failed to read reply from {}: {}",
                self.resolve_url, e
            ))
        })?;

        let reply: DohReplyBody = serde_json::from_str(&body)
            .map_err(|e| GatewayError::Upstream(format!("Undecodable JSON reply: {}", e)))?;

        debug!(
            status = reply.status,
            answers = reply.answers.len(),
            authorities = reply.authorities.len(),
            "DoH reply received"
        );

        Ok(reply.into())
    }
}
