mod mocks;

pub use mocks::{MockUpstreamClient, MockZoneStore};
