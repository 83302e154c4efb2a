use crate::question::RawQuestion;

/// One raw answer/authority/additional entry from the DoH JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub name: String,
    pub type_code: u16,
    pub ttl: u32,
    pub data: String,
}

impl RawRecord {
    pub fn new(name: impl Into<String>, type_code: u16, ttl: u32, data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_code,
            ttl,
            data: data.into(),
        }
    }
}

/// The untyped shape of a DoH JSON reply. Transient: constructed from the
/// response body and consumed immediately by the response assembler.
#[derive(Debug, Clone, Default)]
pub struct UpstreamReply {
    pub status: u16,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub authenticated_data: bool,
    pub checking_disabled: bool,
    pub questions: Vec<RawQuestion>,
    pub answers: Vec<RawRecord>,
    pub authorities: Vec<RawRecord>,
    pub additionals: Vec<RawRecord>,
}
