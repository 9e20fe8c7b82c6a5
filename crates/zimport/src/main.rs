use clap::Parser;
use std::path::PathBuf;
use std::process;
use tokio::fs::read_to_string;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use zone_api::client::{Client, DEFAULT_BASE_URL};
use zone_api::types::{RecordPayload, ZonePayload};
use zone_types::types::{Record, RecordSet};

// the doc comments for this struct turn into the CLI help text
#[derive(Parser)]
/// Parse a DNS zone file and import its records into a hosted DNS
/// zone.
///
/// The parser is lenient: it reads one record per line, ignores
/// directives other than $ORIGIN, applies a fixed TTL of 3600, and
/// skips lines it cannot understand rather than giving up.  It is
/// meant for one-shot imports of hand-authored zone files, not as a
/// zone-file compiler.
///
/// Without --submit only the preview is printed and no network call is
/// made.  With --submit the zone is created first, then all records
/// are created concurrently; if any record fails, the import is
/// reported as failed, but records already created remotely are not
/// rolled back.
struct Args {
    /// Path to the zone file to import
    #[clap(value_parser)]
    zone_file: PathBuf,

    /// Create the zone and its records via the API instead of only
    /// printing the preview
    #[clap(long, action(clap::ArgAction::SetTrue))]
    submit: bool,

    /// API token used to authenticate requests
    #[clap(long, env = "ZIMPORT_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Name of the zone to create
    #[clap(long)]
    name: Option<String>,

    /// Domain of the zone to create
    #[clap(long)]
    domain: Option<String>,

    /// Base URL of the DNS API
    #[clap(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let data = match read_to_string(&args.zone_file).await {
        Ok(data) => data,
        Err(err) => {
            eprintln!("error reading zone file \"{:?}\": {err:?}", args.zone_file);
            process::exit(1);
        }
    };

    let parsed = RecordSet::deserialise(&data);
    for diagnostic in &parsed.diagnostics {
        tracing::warn!(
            line_number = diagnostic.line_number,
            line = %diagnostic.line,
            reason = %diagnostic.problem,
            "skipped unparseable line"
        );
    }

    print_preview(&parsed);

    if !args.submit {
        return;
    }

    let (token, name, domain) = match (args.token, args.name, args.domain) {
        (Some(token), Some(name), Some(domain)) => (token, name, domain),
        _ => {
            eprintln!("--token, --name, and --domain are all required to submit");
            process::exit(1);
        }
    };

    if parsed.records.is_empty() {
        eprintln!("no records parsed from the zone file, nothing to import");
        process::exit(1);
    }

    let client = Client::new(&args.base_url, &token);
    let zone = ZonePayload::new(&name, &domain);
    let payloads: Vec<RecordPayload> = parsed.records.iter().map(RecordPayload::from).collect();

    tracing::info!(%name, %domain, "creating zone");
    let zone_id = match client.create_zone(&zone).await {
        Ok(id) => id,
        Err(error) => {
            eprintln!("error creating zone: {error}");
            process::exit(1);
        }
    };

    tracing::info!(zone_id, count = payloads.len(), "creating records");
    let outcome = client.create_records(zone_id, &payloads).await;
    if let Some(message) = outcome.aggregate_error() {
        eprintln!("error creating records: {message}");
        process::exit(1);
    }

    println!(
        "\nzone '{name}' created with {} records",
        outcome.created
    );
}

/// Print the parsed records grouped by type, in order of first
/// appearance.
fn print_preview(parsed: &RecordSet) {
    println!(";; {} records", parsed.records.len());

    for record_type in parsed.record_types() {
        let of_type: Vec<&Record> = parsed
            .records
            .iter()
            .filter(|record| record.record_type == record_type)
            .collect();

        println!("\n;; {} ({})", record_type, of_type.len());
        for record in of_type {
            let entry = if record.entry.is_empty() {
                "@"
            } else {
                record.entry.as_str()
            };
            println!("{}\t{}\t{}", entry, record.ttl, record.answers_list);
        }
    }
}
