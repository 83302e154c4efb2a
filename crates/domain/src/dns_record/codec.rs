//! Per-kind rdata parsing from the DoH JSON `data` string.

use super::{RdataPayload, RecordKind, ResourceRecord};
use crate::errors::GatewayError;
use crate::upstream_reply::RawRecord;

/// Decode one raw answer/authority entry into a typed resource record.
///
/// The active rdata variant is chosen by the entry's declared type code,
/// never inferred from the payload shape. Unknown codes and malformed
/// payloads abort the current query's translation.
pub fn decode_record(entry: &RawRecord) -> Result<ResourceRecord, GatewayError> {
    let kind = RecordKind::from_code(entry.type_code)
        .ok_or(GatewayError::UnsupportedRecordType(entry.type_code))?;
    let rdata = parse_rdata(kind, &entry.data)?;
    Ok(ResourceRecord::new(entry.name.clone(), entry.ttl, rdata))
}

/// Parse a data string into the payload variant for `kind`.
pub fn parse_rdata(kind: RecordKind, data: &str) -> Result<RdataPayload, GatewayError> {
    match kind {
        RecordKind::A => data
            .parse()
            .map(RdataPayload::Address)
            .map_err(|_| invalid(kind, data, "not a valid IPv4 address")),
        RecordKind::AAAA => data
            .parse()
            .map(RdataPayload::Address6)
            .map_err(|_| invalid(kind, data, "not a valid IPv6 address")),
        RecordKind::CNAME => Ok(RdataPayload::CanonicalName(data.to_string())),
        RecordKind::MX => {
            // "<priority> <exchange>" — domain names contain no spaces, so
            // splitting on the first space is sufficient.
            let (priority, exchange) = data
                .split_once(' ')
                .ok_or_else(|| invalid(kind, data, "expected '<priority> <exchange>'"))?;
            let priority = priority
                .parse()
                .map_err(|_| invalid(kind, data, "priority is not an integer"))?;
            Ok(RdataPayload::MailExchange {
                priority,
                exchange: exchange.to_string(),
            })
        }
        RecordKind::SOA => {
            let tokens: Vec<&str> = data.split_whitespace().collect();
            if tokens.len() != 7 {
                return Err(invalid(
                    kind,
                    data,
                    "expected 'mname rname serial refresh retry expire minimum'",
                ));
            }
            Ok(RdataPayload::StartOfAuthority {
                mname: tokens[0].to_string(),
                rname: tokens[1].to_string(),
                serial: parse_u32(kind, data, tokens[2])?,
                refresh: parse_u32(kind, data, tokens[3])?,
                retry: parse_u32(kind, data, tokens[4])?,
                expire: parse_u32(kind, data, tokens[5])?,
                minimum: parse_u32(kind, data, tokens[6])?,
            })
        }
    }
}

fn parse_u32(kind: RecordKind, data: &str, token: &str) -> Result<u32, GatewayError> {
    token
        .parse()
        .map_err(|_| invalid(kind, data, "field is not an unsigned 32-bit integer"))
}

fn invalid(kind: RecordKind, data: &str, reason: &str) -> GatewayError {
    GatewayError::InvalidRdata {
        kind,
        reason: format!("{} (data: '{}')", reason, data),
    }
}
