mod store;

pub use store::InMemoryZoneStore;
