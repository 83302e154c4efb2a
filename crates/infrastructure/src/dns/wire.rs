//! Wire-format codec built on `hickory-proto`.
//!
//! `parse_query` lifts an inbound datagram into the transport-agnostic
//! `QueryRequest`; `encode_answer` serializes a finished `AnswerPacket`
//! back to bytes. Nothing here decides policy: question filtering and
//! type support live in the resolution layer.

use crate::dns::record_type_map::RecordTypeMapper;
use doh_gateway_domain::{
    AnswerPacket, GatewayError, QueryRequest, RawQuestion, RdataPayload, ResourceRecord,
};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::{MX, SOA};
use hickory_proto::rr::{rdata, DNSClass, Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

pub fn parse_query(bytes: &[u8]) -> Result<QueryRequest, GatewayError> {
    let message =
        Message::from_vec(bytes).map_err(|e| GatewayError::MalformedQuery(e.to_string()))?;

    let questions = message
        .queries()
        .iter()
        .map(|q| RawQuestion::new(q.name().to_utf8(), u16::from(q.query_type())))
        .collect();

    Ok(QueryRequest {
        id: message.id(),
        recursion_desired: message.recursion_desired(),
        questions,
    })
}

pub fn encode_answer(packet: &AnswerPacket) -> Result<Vec<u8>, GatewayError> {
    let mut message = Message::new(packet.id, MessageType::Response, OpCode::Query);
    message.set_authoritative(false);
    message.set_truncated(packet.truncated);
    message.set_recursion_desired(packet.recursion_desired);
    message.set_recursion_available(packet.recursion_available);
    message.set_response_code(RecordTypeMapper::response_code_to_hickory(
        packet.response_code,
    ));

    for question in &packet.questions {
        let mut query = Query::new();
        query.set_name(parse_name(&question.name)?);
        query.set_query_type(RecordTypeMapper::to_hickory(question.kind));
        query.set_query_class(DNSClass::IN);
        message.add_query(query);
    }

    for record in &packet.answers {
        message.add_answer(to_wire_record(record)?);
    }
    for record in &packet.authorities {
        message.add_name_server(to_wire_record(record)?);
    }
    for record in &packet.additionals {
        message.add_additional(to_wire_record(record)?);
    }

    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message
        .emit(&mut encoder)
        .map_err(|e| GatewayError::EncodeFailure(e.to_string()))?;

    Ok(buf)
}

fn to_wire_record(record: &ResourceRecord) -> Result<Record, GatewayError> {
    let name = parse_name(&record.name)?;

    let wire_rdata = match &record.rdata {
        RdataPayload::Address(addr) => RData::A(rdata::A(*addr)),
        RdataPayload::Address6(addr) => RData::AAAA(rdata::AAAA(*addr)),
        RdataPayload::CanonicalName(target) => RData::CNAME(rdata::CNAME(parse_name(target)?)),
        RdataPayload::MailExchange { priority, exchange } => {
            RData::MX(MX::new(*priority, parse_name(exchange)?))
        }
        RdataPayload::StartOfAuthority {
            mname,
            rname,
            serial,
            refresh,
            retry,
            expire,
            minimum,
        } => RData::SOA(SOA::new(
            parse_name(mname)?,
            parse_name(rname)?,
            *serial,
            *refresh as i32,
            *retry as i32,
            *expire as i32,
            *minimum,
        )),
    };

    Ok(Record::from_rdata(name, record.ttl, wire_rdata))
}

fn parse_name(name: &str) -> Result<Name, GatewayError> {
    Name::from_str(name)
        .map_err(|e| GatewayError::InvalidDomainName(format!("'{}': {}", name, e)))
}
