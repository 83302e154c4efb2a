use async_trait::async_trait;
use doh_gateway_domain::{GatewayError, RecordKind, UpstreamReply};

/// Outbound port to the recursive resolver. One call is one question;
/// there is no retry here, a failed forward aborts the current query.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn forward(&self, name: &str, kind: RecordKind) -> Result<UpstreamReply, GatewayError>;
}
