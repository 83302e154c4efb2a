use super::RecordKind;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Typed payload of a resource record. Exactly one variant is active per
/// record, and the active variant always matches the record's declared
/// numeric type code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RdataPayload {
    Address(Ipv4Addr),
    Address6(Ipv6Addr),
    CanonicalName(String),
    MailExchange {
        priority: u16,
        exchange: String,
    },
    StartOfAuthority {
        mname: String,
        rname: String,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    },
}

impl RdataPayload {
    pub fn kind(&self) -> RecordKind {
        match self {
            RdataPayload::Address(_) => RecordKind::A,
            RdataPayload::Address6(_) => RecordKind::AAAA,
            RdataPayload::CanonicalName(_) => RecordKind::CNAME,
            RdataPayload::MailExchange { .. } => RecordKind::MX,
            RdataPayload::StartOfAuthority { .. } => RecordKind::SOA,
        }
    }

    /// Renders the payload back into its JSON data-string form. Inverse of
    /// `codec::parse_rdata`.
    pub fn data_string(&self) -> String {
        match self {
            RdataPayload::Address(addr) => addr.to_string(),
            RdataPayload::Address6(addr) => addr.to_string(),
            RdataPayload::CanonicalName(target) => target.clone(),
            RdataPayload::MailExchange { priority, exchange } => {
                format!("{} {}", priority, exchange)
            }
            RdataPayload::StartOfAuthority {
                mname,
                rname,
                serial,
                refresh,
                retry,
                expire,
                minimum,
            } => format!(
                "{} {} {} {} {} {} {}",
                mname, rname, serial, refresh, retry, expire, minimum
            ),
        }
    }
}
