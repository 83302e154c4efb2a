use std::fmt;
use std::str::FromStr;

/// The record kinds this gateway translates. Every other wire type code is
/// unsupported and must be filtered by the resolution policy before it can
/// reach the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    A,
    AAAA,
    CNAME,
    MX,
    SOA,
}

/// Single source of truth for the numeric-code <-> kind mapping. Both
/// lookup directions walk this table so they cannot drift apart.
const TYPE_CODE_TABLE: [(u16, RecordKind); 5] = [
    (1, RecordKind::A),
    (5, RecordKind::CNAME),
    (6, RecordKind::SOA),
    (15, RecordKind::MX),
    (28, RecordKind::AAAA),
];

impl RecordKind {
    /// Returns `None` for any code outside the handled set.
    pub fn from_code(code: u16) -> Option<Self> {
        TYPE_CODE_TABLE
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, kind)| *kind)
    }

    pub fn code(&self) -> u16 {
        TYPE_CODE_TABLE
            .iter()
            .find(|(_, kind)| kind == self)
            .map(|(code, _)| *code)
            .expect("every RecordKind has a table entry")
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::A => "A",
            RecordKind::AAAA => "AAAA",
            RecordKind::CNAME => "CNAME",
            RecordKind::MX => "MX",
            RecordKind::SOA => "SOA",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordKind::A),
            "AAAA" => Ok(RecordKind::AAAA),
            "CNAME" => Ok(RecordKind::CNAME),
            "MX" => Ok(RecordKind::MX),
            "SOA" => Ok(RecordKind::SOA),
            _ => Err(format!("Unknown record type: {}", s)),
        }
    }
}
