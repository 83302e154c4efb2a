//! Builds a complete wire-format answer from a parsed upstream reply.

use crate::answer_packet::AnswerPacket;
use crate::dns_record::{decode_record, RecordKind};
use crate::errors::GatewayError;
use crate::question::Question;
use crate::response_code::ResponseCode;
use crate::upstream_reply::UpstreamReply;

/// Assemble the answer packet for `request_id` from `reply`.
///
/// The status maps through the standard response-code table and TC/RD/RA
/// are copied verbatim. The upstream-reported questions are re-parsed into
/// local values rather than echoing the original request's list, so any
/// upstream rewriting becomes visible. A decode failure on any single
/// entry aborts the whole packet; there is no partial-answer delivery.
pub fn assemble(request_id: u16, reply: &UpstreamReply) -> Result<AnswerPacket, GatewayError> {
    let response_code = ResponseCode::from_status(reply.status)?;

    let questions = reply
        .questions
        .iter()
        .map(|q| {
            RecordKind::from_code(q.type_code)
                .map(|kind| Question::new(q.name.clone(), kind))
                .ok_or(GatewayError::UnsupportedRecordType(q.type_code))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let answers = reply
        .answers
        .iter()
        .map(decode_record)
        .collect::<Result<Vec<_>, _>>()?;

    let authorities = reply
        .authorities
        .iter()
        .map(decode_record)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AnswerPacket {
        id: request_id,
        truncated: reply.truncated,
        recursion_desired: reply.recursion_desired,
        recursion_available: reply.recursion_available,
        response_code,
        questions,
        answers,
        authorities,
        additionals: Vec::new(),
    })
}
