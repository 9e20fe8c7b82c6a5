use crate::types::*;

impl RecordSet {
    /// Parse a string of zone data.
    ///
    /// This is a lenient, line-at-a-time parser for hand-authored zone
    /// files, not a full RFC 1035 implementation: it does not support
    /// parenthesised continuations, `$TTL` or `$INCLUDE` directives,
    /// record classes other than `IN`, or escape sequences.  The only
    /// directive it interprets is `$ORIGIN`.  Comment stripping does
    /// not understand quoted strings, so a `;` inside a quoted TXT
    /// value starts a comment.
    ///
    /// A line that cannot be made into a record is skipped rather than
    /// failing the parse; record-like lines that are skipped are
    /// reported in the returned diagnostics.
    pub fn deserialise(data: &str) -> Self {
        let mut records = Vec::new();
        let mut diagnostics = Vec::new();
        let mut origin = String::new();

        for (index, raw) in data.lines().enumerate() {
            match parse_line(&origin, raw) {
                Line::Record(record) => records.push(record),
                Line::Origin(name) => origin = name,
                Line::Skip => (),
                Line::Malformed(problem) => diagnostics.push(Diagnostic {
                    line_number: index + 1,
                    line: raw.to_string(),
                    problem,
                }),
            }
        }

        Self {
            records,
            diagnostics,
        }
    }
}

/// What a single line contributes to the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Record(Record),
    Origin(String),
    Skip,
    Malformed(Problem),
}

/// Parse a single line in the context of the current origin.
fn parse_line(origin: &str, raw: &str) -> Line {
    // everything from the first ';' is a comment, even inside quotes
    let line = match raw.find(';') {
        Some(i) => raw[..i].trim(),
        None => raw.trim(),
    };

    if line.is_empty() {
        return Line::Skip;
    }

    if line.starts_with("$ORIGIN") {
        return match line.split_whitespace().nth(1) {
            Some(name) => Line::Origin(name.to_string()),
            None => Line::Malformed(Problem::MissingOriginName),
        };
    }

    // no other directive is interpreted.  this branch also swallows
    // any line opening with a literal '@', including apex record
    // lines: only the `<ttl> @ <type> ...` form reaches the owner
    // substitution below.
    if line.starts_with('$') || line.starts_with('@') {
        return Line::Skip;
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 3 {
        return Line::Malformed(Problem::TooFewTokens);
    }

    let mut i = 0;
    let mut entry = tokens[i];
    i += 1;

    // a leading all-digit token is a leftover TTL column; the value is
    // discarded
    if entry.chars().all(|c| c.is_ascii_digit()) {
        entry = tokens[i];
        i += 1;
    }

    // the class token, which may or may not be present
    if tokens[i].eq_ignore_ascii_case("IN") {
        i += 1;
    }

    let record_type = match tokens.get(i) {
        Some(token) => (*token).to_string(),
        None => return Line::Malformed(Problem::MissingRecordType),
    };
    i += 1;

    let raw_answers = tokens[i..].join(" ");

    let answers_list = match record_type.as_str() {
        // keep the priority / weight / port structure together
        "MX" | "SRV" => Answers::Single(raw_answers),
        "TXT" => Answers::Single(strip_quotes(&raw_answers)),
        _ if raw_answers.contains(' ') => Answers::Multiple(
            raw_answers
                .split_whitespace()
                .map(str::to_string)
                .collect(),
        ),
        _ => Answers::Single(raw_answers),
    };

    let mut entry = entry.to_string();
    if entry == "@" {
        entry = origin.to_string();
    }
    if entry == origin {
        entry = String::new();
    }

    Line::Record(Record {
        record_type,
        entry,
        answers_list,
        ttl: DEFAULT_TTL,
    })
}

/// Strip one wrapping pair of double quotes, if present.  No other
/// escape processing is done.
fn strip_quotes(answers: &str) -> String {
    if answers.len() >= 2 && answers.starts_with('"') && answers.ends_with('"') {
        answers[1..answers.len() - 1].to_string()
    } else {
        answers.to_string()
    }
}
