mod errors;
mod logging;
mod root;
mod server;
mod upstream;
mod zone;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
pub use zone::{ZoneConfig, ZoneRecordConfig};
