use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Full URL of the JSON DoH resolve endpoint. The gateway appends
    /// `?name=<domain>&type=<numeric code>` per query.
    #[serde(default = "default_resolve_url")]
    pub resolve_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            resolve_url: default_resolve_url(),
        }
    }
}

fn default_resolve_url() -> String {
    "https://dns.google/resolve".to_string()
}
