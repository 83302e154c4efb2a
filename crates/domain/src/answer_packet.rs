use crate::dns_record::ResourceRecord;
use crate::question::Question;
use crate::response_code::ResponseCode;

/// The final wire-ready artifact for one query. Rebuilt from scratch every
/// time, never cached or reused. The response bit, opcode Query and
/// authoritative=false are fixed at wire-encoding time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerPacket {
    /// Copied from the request.
    pub id: u16,

    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub response_code: ResponseCode,

    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    /// Always empty; the gateway never forwards additional-section records.
    pub additionals: Vec<ResourceRecord>,
}
