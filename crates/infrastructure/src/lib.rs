pub mod dns;
pub mod doh;
pub mod zone;

pub use dns::GatewayHandler;
pub use doh::DohClient;
pub use zone::InMemoryZoneStore;
