use std::fmt::Write as _;

use crate::types::*;

impl RecordSet {
    /// Render the records in a normalised form, one per line, in input
    /// order.  An empty owner is rendered as `@`.
    ///
    /// This is a presentation format, not a faithful inverse of
    /// parsing: TTL columns, comments, and directives from the input
    /// are gone by this point.
    pub fn serialise(&self) -> String {
        let mut out = String::new();

        for record in &self.records {
            let entry = if record.entry.is_empty() {
                "@"
            } else {
                record.entry.as_str()
            };
            let _ = writeln!(
                out,
                "{} {} IN {} {}",
                entry, record.ttl, record.record_type, record.answers_list
            );
        }

        out
    }
}

impl std::fmt::Display for Answers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Answers::Single(answer) => write!(f, "{answer}"),
            Answers::Multiple(answers) => write!(f, "{}", answers.join(" ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialise_records() {
        let rs = RecordSet {
            records: vec![
                Record {
                    record_type: "A".to_string(),
                    entry: String::new(),
                    answers_list: Answers::Single("192.0.2.1".to_string()),
                    ttl: 3600,
                },
                Record {
                    record_type: "A".to_string(),
                    entry: "www".to_string(),
                    answers_list: Answers::Multiple(vec![
                        "192.0.2.1".to_string(),
                        "192.0.2.2".to_string(),
                    ]),
                    ttl: 3600,
                },
                Record {
                    record_type: "MX".to_string(),
                    entry: "mail".to_string(),
                    answers_list: Answers::Single("10 mail.example.com.".to_string()),
                    ttl: 3600,
                },
            ],
            diagnostics: Vec::new(),
        };

        assert_eq!(
            "@ 3600 IN A 192.0.2.1\n\
             www 3600 IN A 192.0.2.1 192.0.2.2\n\
             mail 3600 IN MX 10 mail.example.com.\n",
            rs.serialise()
        );
    }

    #[test]
    fn serialise_empty() {
        assert_eq!("", RecordSet::default().serialise());
    }
}
