use super::{RdataPayload, RecordKind};

/// One named, typed, TTL-bearing answer entry. Class is always INTERNET
/// and the cache-flush bit is never set by this gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,

    pub ttl: u32,

    pub cache_flush: bool,

    pub rdata: RdataPayload,
}

impl ResourceRecord {
    pub fn new(name: String, ttl: u32, rdata: RdataPayload) -> Self {
        Self {
            name,
            ttl,
            cache_flush: false,
            rdata,
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.rdata.kind()
    }
}
