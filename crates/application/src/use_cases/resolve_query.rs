use crate::ports::{UpstreamClient, ZoneStore};
use doh_gateway_domain::{
    assemble, AnswerPacket, GatewayError, QueryRequest, Question, RecordKind, ResourceRecord,
    ResponseCode,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Resolution policy for one inbound query: local zone first, then the
/// upstream DoH resolver on a miss.
pub struct ResolveQueryUseCase {
    zone: Arc<dyn ZoneStore>,
    upstream: Arc<dyn UpstreamClient>,
}

impl ResolveQueryUseCase {
    pub fn new(zone: Arc<dyn ZoneStore>, upstream: Arc<dyn UpstreamClient>) -> Self {
        Self { zone, upstream }
    }

    /// `Ok(None)` means the query is deliberately not answered (wrong
    /// question count, unsupported record type); the transport sends
    /// nothing and the requester times out. An `Err` aborts only this
    /// query and is likewise never sent back.
    pub async fn execute(
        &self,
        request: &QueryRequest,
    ) -> Result<Option<AnswerPacket>, GatewayError> {
        if request.questions.len() != 1 {
            debug!(
                questions = request.questions.len(),
                "Dropping query with unsupported question count"
            );
            return Ok(None);
        }

        let question = &request.questions[0];

        // Local authority is consulted before the type check so that a
        // configured record always wins, whatever the upstream would say.
        let local = self.zone.lookup(&question.name, question.type_code).await?;

        // A local hit wins before the type check; the echoed question
        // still needs a typed kind, so a hit on an unhandled type falls
        // through to the drop below.
        if local.response_code == ResponseCode::NoError {
            if let Some(kind) = RecordKind::from_code(question.type_code) {
                debug!(
                    name = %question.name,
                    record_type = %kind,
                    records = local.records.len(),
                    "Answering from local zone"
                );
                return Ok(Some(local_answer(
                    request,
                    Question::new(question.name.clone(), kind),
                    local.records,
                )));
            }
        }

        let kind = match RecordKind::from_code(question.type_code) {
            Some(kind) => kind,
            None => {
                info!(
                    name = %question.name,
                    type_code = question.type_code,
                    "Unsupported record type, dropping query"
                );
                return Ok(None);
            }
        };

        debug!(name = %question.name, record_type = %kind, "Local miss, forwarding upstream");
        let reply = self.upstream.forward(&question.name, kind).await?;
        let packet = assemble(request.id, &reply)?;
        Ok(Some(packet))
    }
}

fn local_answer(
    request: &QueryRequest,
    question: Question,
    records: Vec<ResourceRecord>,
) -> AnswerPacket {
    AnswerPacket {
        id: request.id,
        truncated: false,
        recursion_desired: request.recursion_desired,
        recursion_available: false,
        response_code: ResponseCode::NoError,
        questions: vec![question],
        answers: records,
        authorities: Vec::new(),
        additionals: Vec::new(),
    }
}
