//! Centralized conversion between domain enums and `hickory_proto` wire
//! enums, so the mapping lives in one place instead of being duplicated
//! by every wire-touching module.

use doh_gateway_domain::{RecordKind, ResponseCode};
use hickory_proto::op::ResponseCode as HickoryResponseCode;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(kind: RecordKind) -> HickoryRecordType {
        match kind {
            RecordKind::A => HickoryRecordType::A,
            RecordKind::AAAA => HickoryRecordType::AAAA,
            RecordKind::CNAME => HickoryRecordType::CNAME,
            RecordKind::MX => HickoryRecordType::MX,
            RecordKind::SOA => HickoryRecordType::SOA,
        }
    }

    pub fn response_code_to_hickory(code: ResponseCode) -> HickoryResponseCode {
        match code {
            ResponseCode::NoError => HickoryResponseCode::NoError,
            ResponseCode::FormErr => HickoryResponseCode::FormErr,
            ResponseCode::ServFail => HickoryResponseCode::ServFail,
            ResponseCode::NXDomain => HickoryResponseCode::NXDomain,
            ResponseCode::NotImp => HickoryResponseCode::NotImp,
            ResponseCode::Refused => HickoryResponseCode::Refused,
            ResponseCode::YXDomain => HickoryResponseCode::YXDomain,
            ResponseCode::YXRRSet => HickoryResponseCode::YXRRSet,
            ResponseCode::NXRRSet => HickoryResponseCode::NXRRSet,
            ResponseCode::NotAuth => HickoryResponseCode::NotAuth,
            ResponseCode::NotZone => HickoryResponseCode::NotZone,
            ResponseCode::BadVers => HickoryResponseCode::BADVERS,
            ResponseCode::BadKey => HickoryResponseCode::BADKEY,
            ResponseCode::BadTime => HickoryResponseCode::BADTIME,
            ResponseCode::BadMode => HickoryResponseCode::BADMODE,
            ResponseCode::BadName => HickoryResponseCode::BADNAME,
            ResponseCode::BadAlg => HickoryResponseCode::BADALG,
        }
    }
}
