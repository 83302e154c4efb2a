mod handler;
pub mod record_type_map;
pub mod wire;

pub use handler::GatewayHandler;
