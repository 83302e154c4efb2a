mod codec;
mod rdata;
mod record;
mod record_kind;

pub use codec::{decode_record, parse_rdata};
pub use rdata::RdataPayload;
pub use record::ResourceRecord;
pub use record_kind::RecordKind;
