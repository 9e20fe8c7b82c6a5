use serde::Serialize;

use zone_types::types::{Answers, Record, DEFAULT_TTL};

/// SOA timings applied to every created zone.
pub const SOA_TTL: u32 = 3600;
pub const REFRESH: u32 = 43200;
pub const RETRY: u32 = 7200;
pub const EXPIRY: u32 = 1_209_600;
pub const NX_TTL: u32 = 3600;

/// Routing policy applied to every created record.
pub const POLICY: &str = "simple";

/// Weight applied to every created record.
pub const WEIGHT: u32 = 255;

/// Body of the create-zone call.  Field names are the wire names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZonePayload {
    pub name: String,
    pub domain: String,
    pub is_active: bool,
    pub soa_ttl: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expiry: u32,
    pub nx_ttl: u32,
}

impl ZonePayload {
    /// A new active zone with the fixed SOA timings.
    pub fn new(name: &str, domain: &str) -> Self {
        Self {
            name: name.to_string(),
            domain: domain.to_string(),
            is_active: true,
            soa_ttl: SOA_TTL,
            refresh: REFRESH,
            retry: RETRY,
            expiry: EXPIRY,
            nx_ttl: NX_TTL,
        }
    }
}

/// Body of one create-record call.  Field names are the wire names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordPayload {
    pub record_type: String,
    pub entry: String,

    /// The API takes a list of answer sets; the whole parsed value is
    /// sent as one element, so a `Multiple` nests rather than
    /// flattening.
    pub answers_list: Vec<Answers>,

    pub ttl: u32,
    pub policy: String,
    pub weight: u32,
    pub description: String,
}

impl From<&Record> for RecordPayload {
    fn from(record: &Record) -> Self {
        Self {
            record_type: record.record_type.clone(),
            entry: record.entry.clone(),
            answers_list: vec![record.answers_list.clone()],
            ttl: DEFAULT_TTL,
            policy: POLICY.to_string(),
            weight: WEIGHT,
            description: String::new(),
        }
    }
}
