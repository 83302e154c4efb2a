use crate::dns_record::RecordKind;

/// One parsed question. Class is fixed to INTERNET; immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub kind: RecordKind,
}

impl Question {
    pub fn new(name: impl Into<String>, kind: RecordKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// A question as it arrives off the wire or inside the upstream JSON body.
/// The type stays a raw numeric code so unsupported kinds can still be
/// observed (and dropped) by the resolution policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawQuestion {
    pub name: String,
    pub type_code: u16,
}

impl RawQuestion {
    pub fn new(name: impl Into<String>, type_code: u16) -> Self {
        Self {
            name: name.into(),
            type_code,
        }
    }
}

/// An inbound DNS query as delivered by the transport collaborator.
#[derive(Debug, Clone)]
pub struct QueryRequest {
    pub id: u16,
    pub recursion_desired: bool,
    pub questions: Vec<RawQuestion>,
}
