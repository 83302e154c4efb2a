mod upstream_client;
mod zone_store;

pub use upstream_client::UpstreamClient;
pub use zone_store::{ZoneAnswer, ZoneStore};
