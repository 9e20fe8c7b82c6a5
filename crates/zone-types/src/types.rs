use serde::Serialize;

/// TTL applied to every parsed record, regardless of any TTL column or
/// `$TTL` directive in the source file.
pub const DEFAULT_TTL: u32 = 3600;

/// The right-hand-side data of a record.
///
/// Most record types with a single data token get `Single`, and types
/// with several data tokens get `Multiple` - except `MX` and `SRV`,
/// where the priority / weight / port structure is kept together in one
/// string, and `TXT`, where the whole (possibly space-containing) value
/// is one string.  Downstream consumers must handle both cases.
///
/// Serialises to the bare string or the bare list, with no tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answers {
    Single(String),
    Multiple(Vec<String>),
}

/// A single record parsed out of a zone file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// The type token, verbatim: not uppercased and not validated
    /// against any known-type set.
    pub record_type: String,

    /// The owner name.  Empty when the owner is the current origin,
    /// which downstream consumers read as "applies at the zone apex".
    pub entry: String,

    /// The record data.
    pub answers_list: Answers,

    /// Always `DEFAULT_TTL`.
    pub ttl: u32,
}

/// The outcome of parsing one zone file: the records in input order,
/// plus a diagnostic for every line that looked like a record but could
/// not be made into one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordSet {
    pub records: Vec<Record>,
    pub diagnostics: Vec<Diagnostic>,
}

impl RecordSet {
    /// The distinct record types, in order of first appearance.
    pub fn record_types(&self) -> Vec<String> {
        let mut out = Vec::new();
        for record in &self.records {
            if !out.contains(&record.record_type) {
                out.push(record.record_type.clone());
            }
        }
        out
    }
}

/// A record-like line which was skipped.  Blank lines, comments, and
/// uninterpreted directives are not reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based position of the line in the input.
    pub line_number: usize,

    /// The line as it appeared in the input.
    pub line: String,

    pub problem: Problem,
}

/// Why a line could not be made into a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    TooFewTokens,
    MissingRecordType,
    MissingOriginName,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line_number, self.problem)
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Problem::TooFewTokens => write!(f, "too few tokens to form a record"),
            Problem::MissingRecordType => write!(f, "no token left for the record type"),
            Problem::MissingOriginName => write!(f, "'$ORIGIN' directive without a name"),
        }
    }
}
