use crate::dns_record::RecordKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Question or answer type outside the handled set. The resolution
    /// policy drops such queries silently; one reaching the codec aborts
    /// the current translation.
    #[error("Unsupported record type code {0}")]
    UnsupportedRecordType(u16),

    #[error("Invalid {kind} rdata: {reason}")]
    InvalidRdata { kind: RecordKind, reason: String },

    #[error("Invalid response status {0}")]
    InvalidResponseCode(u16),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Malformed query packet: {0}")]
    MalformedQuery(String),

    #[error("Failed to encode response: {0}")]
    EncodeFailure(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),
}
