//! In-memory authoritative zone built from `[[zone.records]]` config.
//!
//! The map is immutable after startup; lookups are keyed on the
//! normalized owner name plus the numeric type code. A malformed zone
//! entry is a startup failure, never a per-query one.

use async_trait::async_trait;
use doh_gateway_application::ports::{ZoneAnswer, ZoneStore};
use doh_gateway_domain::config::ZoneConfig;
use doh_gateway_domain::{parse_rdata, GatewayError, RecordKind, ResourceRecord};
use std::collections::HashMap;
use tracing::info;

pub struct InMemoryZoneStore {
    records: HashMap<(String, u16), Vec<ResourceRecord>>,
}

impl InMemoryZoneStore {
    pub fn from_config(zone: &ZoneConfig) -> Result<Self, GatewayError> {
        let mut records: HashMap<(String, u16), Vec<ResourceRecord>> = HashMap::new();

        for entry in &zone.records {
            let kind: RecordKind = entry.record_type.parse().map_err(|e: String| {
                GatewayError::Config(format!("Zone record '{}': {}", entry.name, e))
            })?;

            let rdata = parse_rdata(kind, &entry.data).map_err(|e| {
                GatewayError::Config(format!("Zone record '{}': {}", entry.name, e))
            })?;

            let record = ResourceRecord::new(entry.name.clone(), entry.ttl_or_default(), rdata);

            records
                .entry((normalize(&entry.name), kind.code()))
                .or_default()
                .push(record);
        }

        info!(entries = records.len(), "Local zone loaded");
        Ok(Self { records })
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl ZoneStore for InMemoryZoneStore {
    async fn lookup(&self, name: &str, type_code: u16) -> Result<ZoneAnswer, GatewayError> {
        match self.records.get(&(normalize(name), type_code)) {
            Some(records) => Ok(ZoneAnswer::hit(records.clone())),
            None => Ok(ZoneAnswer::miss()),
        }
    }
}

/// Owner names match trailing-dot-insensitively and case-insensitively.
fn normalize(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use doh_gateway_domain::config::ZoneRecordConfig;
    use doh_gateway_domain::{RdataPayload, ResponseCode};

    fn zone_config(records: Vec<ZoneRecordConfig>) -> ZoneConfig {
        ZoneConfig { records }
    }

    fn a_record(name: &str, data: &str) -> ZoneRecordConfig {
        ZoneRecordConfig {
            name: name.to_string(),
            record_type: "A".to_string(),
            ttl: Some(600),
            data: data.to_string(),
        }
    }

    #[tokio::test]
    async fn test_lookup_hit_returns_noerror_with_records() {
        let store =
            InMemoryZoneStore::from_config(&zone_config(vec![a_record("printer.lan", "192.168.1.10")]))
                .unwrap();

        let answer = store.lookup("printer.lan", 1).await.unwrap();

        assert_eq!(answer.response_code, ResponseCode::NoError);
        assert_eq!(answer.records.len(), 1);
        assert_eq!(answer.records[0].ttl, 600);
        assert_eq!(
            answer.records[0].rdata,
            RdataPayload::Address("192.168.1.10".parse().unwrap())
        );
    }

    #[tokio::test]
    async fn test_lookup_is_case_and_trailing_dot_insensitive() {
        let store =
            InMemoryZoneStore::from_config(&zone_config(vec![a_record("printer.lan", "192.168.1.10")]))
                .unwrap();

        assert_eq!(
            store.lookup("PRINTER.LAN.", 1).await.unwrap().response_code,
            ResponseCode::NoError
        );
    }

    #[tokio::test]
    async fn test_lookup_miss_returns_nxdomain() {
        let store =
            InMemoryZoneStore::from_config(&zone_config(vec![a_record("printer.lan", "192.168.1.10")]))
                .unwrap();

        let answer = store.lookup("scanner.lan", 1).await.unwrap();

        assert_eq!(answer.response_code, ResponseCode::NXDomain);
        assert!(answer.records.is_empty());
    }

    #[tokio::test]
    async fn test_lookup_misses_on_other_type_code() {
        let store =
            InMemoryZoneStore::from_config(&zone_config(vec![a_record("printer.lan", "192.168.1.10")]))
                .unwrap();

        let answer = store.lookup("printer.lan", 28).await.unwrap();

        assert_eq!(answer.response_code, ResponseCode::NXDomain);
    }

    #[tokio::test]
    async fn test_multiple_records_same_key() {
        let store = InMemoryZoneStore::from_config(&zone_config(vec![
            a_record("web.lan", "192.168.1.20"),
            a_record("web.lan", "192.168.1.21"),
        ]))
        .unwrap();

        let answer = store.lookup("web.lan", 1).await.unwrap();

        assert_eq!(answer.records.len(), 2);
    }

    #[test]
    fn test_mx_record_with_default_ttl() {
        let store = InMemoryZoneStore::from_config(&zone_config(vec![ZoneRecordConfig {
            name: "mail.lan".to_string(),
            record_type: "MX".to_string(),
            ttl: None,
            data: "10 smtp.lan.".to_string(),
        }]))
        .unwrap();

        assert!(!store.is_empty());
    }

    #[test]
    fn test_unknown_record_type_is_a_config_error() {
        let result = InMemoryZoneStore::from_config(&zone_config(vec![ZoneRecordConfig {
            name: "host.lan".to_string(),
            record_type: "TXT".to_string(),
            ttl: None,
            data: "hello".to_string(),
        }]));

        assert!(matches!(result, Err(GatewayError::Config(_))));
    }

    #[test]
    fn test_bad_rdata_is_a_config_error() {
        let result =
            InMemoryZoneStore::from_config(&zone_config(vec![a_record("host.lan", "not-an-ip")]));

        assert!(matches!(result, Err(GatewayError::Config(_))));
    }
}
