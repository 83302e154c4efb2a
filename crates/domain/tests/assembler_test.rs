use doh_gateway_domain::{
    assemble, GatewayError, RawQuestion, RawRecord, RdataPayload, RecordKind, ResponseCode,
    UpstreamReply,
};

fn noerror_reply() -> UpstreamReply {
    UpstreamReply {
        status: 0,
        truncated: false,
        recursion_desired: true,
        recursion_available: true,
        authenticated_data: false,
        checking_disabled: false,
        questions: vec![RawQuestion::new("example.com.", 1)],
        answers: vec![RawRecord::new("example.com.", 1, 300, "93.184.216.34")],
        authorities: vec![],
        additionals: vec![],
    }
}

#[test]
fn test_assemble_copies_id_and_flags_verbatim() {
    let mut reply = noerror_reply();
    reply.truncated = true;
    reply.recursion_available = false;

    let packet = assemble(0xBEEF, &reply).unwrap();

    assert_eq!(packet.id, 0xBEEF);
    assert!(packet.truncated);
    assert!(packet.recursion_desired);
    assert!(!packet.recursion_available);
    assert_eq!(packet.response_code, ResponseCode::NoError);
}

#[test]
fn test_assemble_decodes_answers() {
    let packet = assemble(1, &noerror_reply()).unwrap();

    assert_eq!(packet.answers.len(), 1);
    let answer = &packet.answers[0];
    assert_eq!(answer.name, "example.com.");
    assert_eq!(answer.ttl, 300);
    assert_eq!(answer.rdata, RdataPayload::Address("93.184.216.34".parse().unwrap()));
    assert!(packet.additionals.is_empty());
}

#[test]
fn test_assemble_echoes_upstream_questions_not_request() {
    // Upstream rewrote the question name; the packet must reflect that.
    let mut reply = noerror_reply();
    reply.questions = vec![RawQuestion::new("rewritten.example.com.", 28)];

    let packet = assemble(1, &reply).unwrap();

    assert_eq!(packet.questions.len(), 1);
    assert_eq!(packet.questions[0].name, "rewritten.example.com.");
    assert_eq!(packet.questions[0].kind, RecordKind::AAAA);
}

#[test]
fn test_assemble_maps_status_3_to_nxdomain() {
    let mut reply = noerror_reply();
    reply.status = 3;
    reply.answers.clear();
    reply.authorities = vec![RawRecord::new(
        "example.com.",
        6,
        900,
        "ns1.example.com. admin.example.com. 100 200 300 400 500",
    )];

    let packet = assemble(1, &reply).unwrap();

    assert_eq!(packet.response_code, ResponseCode::NXDomain);
    assert_eq!(packet.authorities.len(), 1);
    assert_eq!(packet.authorities[0].kind(), RecordKind::SOA);
}

#[test]
fn test_assemble_is_deterministic() {
    // Whole-result comparison, covering both the packet and error sides.
    let first = assemble(1, &noerror_reply());
    let second = assemble(1, &noerror_reply());

    assert_eq!(first, second);
    assert!(first.is_ok());
}

#[test]
fn test_assemble_rejects_out_of_table_status() {
    let mut reply = noerror_reply();
    reply.status = 99;

    assert_eq!(
        assemble(1, &reply),
        Err(GatewayError::InvalidResponseCode(99))
    );
}

#[test]
fn test_assemble_aborts_on_single_bad_answer() {
    let mut reply = noerror_reply();
    reply
        .answers
        .push(RawRecord::new("example.com.", 1, 300, "bogus"));

    assert!(matches!(
        assemble(1, &reply),
        Err(GatewayError::InvalidRdata { .. })
    ));
}

#[test]
fn test_assemble_aborts_on_unsupported_question_type() {
    let mut reply = noerror_reply();
    reply.questions = vec![RawQuestion::new("example.com.", 16)];

    assert_eq!(
        assemble(1, &reply),
        Err(GatewayError::UnsupportedRecordType(16))
    );
}

#[test]
fn test_assemble_aborts_on_unsupported_answer_type() {
    let mut reply = noerror_reply();
    reply
        .answers
        .push(RawRecord::new("example.com.", 16, 300, "\"text\""));

    assert_eq!(
        assemble(1, &reply),
        Err(GatewayError::UnsupportedRecordType(16))
    );
}
