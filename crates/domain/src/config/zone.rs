use serde::{Deserialize, Serialize};

/// Authoritative records served before any query is forwarded upstream.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ZoneConfig {
    #[serde(default)]
    pub records: Vec<ZoneRecordConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneRecordConfig {
    pub name: String,

    pub record_type: String,

    #[serde(default)]
    pub ttl: Option<u32>,

    /// Same grammar as the DoH JSON `data` field for this record type.
    pub data: String,
}

impl ZoneRecordConfig {
    pub fn ttl_or_default(&self) -> u32 {
        self.ttl.unwrap_or(300)
    }
}
