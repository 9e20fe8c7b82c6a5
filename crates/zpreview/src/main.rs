use clap::Parser;
use std::io::{stdin, Read};
use std::process;

use zone_types::types::RecordSet;

// the doc comments for this struct turn into the CLI help text
#[derive(Parser)]
/// Read a zone file from stdin, parse it leniently, and output the
/// records in a normalised form to stdout.  Skipped record-like lines
/// are reported on stderr.
///
/// Part of zimport.
struct Args {}

fn main() {
    Args::parse();

    let mut buf = String::new();
    if let Err(err) = stdin().read_to_string(&mut buf) {
        eprintln!("error reading zone file from stdin: {err:?}");
        process::exit(1);
    }

    let records = RecordSet::deserialise(&buf);
    for diagnostic in &records.diagnostics {
        eprintln!("; skipped {diagnostic}");
    }
    print!("{}", records.serialise());
}
