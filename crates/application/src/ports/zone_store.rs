use async_trait::async_trait;
use doh_gateway_domain::{GatewayError, ResourceRecord, ResponseCode};

/// Outcome of one authoritative lookup: `NoError` with the matching
/// records, or `NXDomain` with none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneAnswer {
    pub response_code: ResponseCode,
    pub records: Vec<ResourceRecord>,
}

impl ZoneAnswer {
    pub fn hit(records: Vec<ResourceRecord>) -> Self {
        Self {
            response_code: ResponseCode::NoError,
            records,
        }
    }

    pub fn miss() -> Self {
        Self {
            response_code: ResponseCode::NXDomain,
            records: Vec::new(),
        }
    }
}

/// Read-only view of the locally configured zone records. Lookups are
/// keyed on the exact owner name and the raw question type code, so
/// unsupported types can still be probed before the policy drops them.
#[async_trait]
pub trait ZoneStore: Send + Sync {
    async fn lookup(&self, name: &str, type_code: u16) -> Result<ZoneAnswer, GatewayError>;
}
