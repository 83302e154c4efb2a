use crate::errors::GatewayError;
use std::fmt;

/// The standard DNS response-code table carried in an answer header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    YXDomain,
    YXRRSet,
    NXRRSet,
    NotAuth,
    NotZone,
    BadVers,
    BadKey,
    BadTime,
    BadMode,
    BadName,
    BadAlg,
}

/// Both mapping directions walk this table, mirroring the record-type
/// table in `dns_record`.
const STATUS_TABLE: [(u16, ResponseCode); 17] = [
    (0, ResponseCode::NoError),
    (1, ResponseCode::FormErr),
    (2, ResponseCode::ServFail),
    (3, ResponseCode::NXDomain),
    (4, ResponseCode::NotImp),
    (5, ResponseCode::Refused),
    (6, ResponseCode::YXDomain),
    (7, ResponseCode::YXRRSet),
    (8, ResponseCode::NXRRSet),
    (9, ResponseCode::NotAuth),
    (10, ResponseCode::NotZone),
    (16, ResponseCode::BadVers),
    (17, ResponseCode::BadKey),
    (18, ResponseCode::BadTime),
    (19, ResponseCode::BadMode),
    (20, ResponseCode::BadName),
    (21, ResponseCode::BadAlg),
];

impl ResponseCode {
    /// Maps an upstream status integer. Anything outside the table is an
    /// unrecoverable translation error; there is no fallback code.
    pub fn from_status(status: u16) -> Result<Self, GatewayError> {
        STATUS_TABLE
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, code)| *code)
            .ok_or(GatewayError::InvalidResponseCode(status))
    }

    pub fn status(&self) -> u16 {
        STATUS_TABLE
            .iter()
            .find(|(_, code)| code == self)
            .map(|(status, _)| *status)
            .expect("every ResponseCode has a table entry")
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::YXDomain => "YXDOMAIN",
            ResponseCode::YXRRSet => "YXRRSET",
            ResponseCode::NXRRSet => "NXRRSET",
            ResponseCode::NotAuth => "NOTAUTH",
            ResponseCode::NotZone => "NOTZONE",
            ResponseCode::BadVers => "BADVERS",
            ResponseCode::BadKey => "BADKEY",
            ResponseCode::BadTime => "BADTIME",
            ResponseCode::BadMode => "BADMODE",
            ResponseCode::BadName => "BADNAME",
            ResponseCode::BadAlg => "BADALG",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
