//! DoH Gateway Domain Layer
pub mod answer_packet;
pub mod assembler;
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod question;
pub mod response_code;
pub mod upstream_reply;

pub use answer_packet::AnswerPacket;
pub use assembler::assemble;
pub use config::Config;
pub use dns_record::{decode_record, parse_rdata, RdataPayload, RecordKind, ResourceRecord};
pub use errors::GatewayError;
pub use question::{QueryRequest, Question, RawQuestion};
pub use response_code::ResponseCode;
pub use upstream_reply::{RawRecord, UpstreamReply};
