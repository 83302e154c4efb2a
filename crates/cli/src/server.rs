use doh_gateway_infrastructure::GatewayHandler;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, error, info};

/// UDP serve loop: one spawned task per datagram. A query that produces
/// no answer bytes is dropped without a reply.
pub async fn run_udp_server(addr: &str, handler: Arc<GatewayHandler>) -> anyhow::Result<()> {
    let socket = Arc::new(UdpSocket::bind(addr).await?);
    info!(addr = %addr, "UDP server listening");

    let mut buf = vec![0u8; 4096];
    loop {
        let (len, peer) = match socket.recv_from(&mut buf).await {
            Ok(received) => received,
            Err(e) => {
                error!(error = %e, "Failed to receive datagram");
                continue;
            }
        };

        let query = buf[..len].to_vec();
        let socket = Arc::clone(&socket);
        let handler = Arc::clone(&handler);

        tokio::spawn(async move {
            if let Some(answer) = handler.handle(&query).await {
                if let Err(e) = socket.send_to(&answer, peer).await {
                    error!(peer = %peer, error = %e, "Failed to send answer");
                }
            } else {
                debug!(peer = %peer, "Query dropped without answer");
            }
        });
    }
}
