use crate::dns::wire;
use doh_gateway_application::use_cases::ResolveQueryUseCase;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Datagram-level entry point: raw query bytes in, raw answer bytes out.
///
/// Every failure mode maps to `None` so the transport simply sends
/// nothing back and the requester times out. A bad query never takes the
/// serving process down.
pub struct GatewayHandler {
    use_case: Arc<ResolveQueryUseCase>,
}

impl GatewayHandler {
    pub fn new(use_case: Arc<ResolveQueryUseCase>) -> Self {
        Self { use_case }
    }

    pub async fn handle(&self, query_bytes: &[u8]) -> Option<Vec<u8>> {
        let request = match wire::parse_query(query_bytes) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Discarding undecodable query");
                return None;
            }
        };

        debug!(
            id = request.id,
            questions = request.questions.len(),
            "Query received"
        );

        let packet = match self.use_case.execute(&request).await {
            Ok(Some(packet)) => packet,
            Ok(None) => return None,
            Err(e) => {
                warn!(id = request.id, error = %e, "Query aborted");
                return None;
            }
        };

        match wire::encode_answer(&packet) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(id = packet.id, error = %e, "Failed to encode answer");
                None
            }
        }
    }
}
