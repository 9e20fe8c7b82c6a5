use std::collections::BTreeMap;

use futures_util::future::join_all;
use serde::Deserialize;

use crate::types::{RecordPayload, ZonePayload};

/// Base URL of the hosted DNS API.
pub const DEFAULT_BASE_URL: &str = "https://api.azionapi.net";

const ACCEPT: &str = "application/json; version=3";

/// Client for the hosted DNS API.
///
/// Requests carry a `Token`-style `Authorization` header.  There is no
/// retry, timeout, or cancellation: a hung request hangs the caller.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl Client {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Create a new zone, returning its identifier.
    ///
    /// # Errors
    ///
    /// If the request fails, the response has a non-success status, or
    /// the response body has no `id`.
    pub async fn create_zone(&self, zone: &ZonePayload) -> Result<u64, Error> {
        let body = self
            .post(&format!("{}/intelligent_dns", self.base_url), zone)
            .await?;

        match serde_json::from_str::<CreatedZone>(&body) {
            Ok(CreatedZone { id: Some(id) }) => Ok(id),
            _ => Err(Error::InvalidResponse),
        }
    }

    /// Create a single record in an existing zone.
    ///
    /// # Errors
    ///
    /// If the request fails, the response has a non-success status, or
    /// the response body is not JSON.
    pub async fn create_record(&self, zone_id: u64, record: &RecordPayload) -> Result<(), Error> {
        let body = self
            .post(
                &format!("{}/intelligent_dns/{zone_id}/records", self.base_url),
                record,
            )
            .await?;

        match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(_) => Ok(()),
            Err(_) => Err(Error::InvalidResponse),
        }
    }

    /// Create every record in the zone, concurrently and in no
    /// particular order.  Failed creations do not undo successful
    /// ones, and nothing is retried: the per-record results are
    /// collected into the returned outcome.
    pub async fn create_records(&self, zone_id: u64, records: &[RecordPayload]) -> BatchOutcome {
        let results = join_all(
            records
                .iter()
                .map(|record| self.create_record(zone_id, record)),
        )
        .await;

        let mut outcome = BatchOutcome::default();
        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok(()) => outcome.created += 1,
                Err(error) => {
                    tracing::warn!(zone_id, index, %error, "record creation failed");
                    outcome.failures.push(Failure { index, error });
                }
            }
        }
        outcome
    }

    async fn post<T: serde::Serialize>(&self, url: &str, payload: &T) -> Result<String, Error> {
        tracing::debug!(url, "POST");

        let response = self
            .http
            .post(url)
            .header("Authorization", format!("Token {}", self.token))
            .header("Accept", ACCEPT)
            .json(payload)
            .send()
            .await
            .map_err(|error| Error::Request { error })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| Error::Request { error })?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(Error::Status {
                status: status.as_u16(),
                message: error_message(&body),
            })
        }
    }
}

/// Per-record results of a batch creation.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// How many records were created.
    pub created: usize,

    /// The records which were not, by position in the submitted batch.
    pub failures: Vec<Failure>,
}

#[derive(Debug)]
pub struct Failure {
    pub index: usize,
    pub error: Error,
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Collapse the failures into the single message shown to the
    /// user.  Records created before a failure stay created.
    pub fn aggregate_error(&self) -> Option<String> {
        let first = self.failures.first()?;
        Some(format!(
            "{} of {} records could not be created, first failure at record {}: {}",
            self.failures.len(),
            self.created + self.failures.len(),
            first.index + 1,
            first.error
        ))
    }
}

/// An error from one API call.
#[derive(Debug)]
pub enum Error {
    /// The request could not be sent or the response not read.
    Request { error: reqwest::Error },

    /// The response had a non-success status.  The message is
    /// whatever could be extracted from the response body.
    Status { status: u16, message: Option<String> },

    /// The response body could not be understood.
    InvalidResponse,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Request { error } => write!(f, "request failed: {error}"),
            Error::Status {
                message: Some(message),
                ..
            } => {
                write!(f, "{message}")
            }
            Error::Status {
                status,
                message: None,
            } => write!(f, "HTTP status {status}"),
            Error::InvalidResponse => write!(f, "invalid response from the API"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Request { error } => Some(error),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct CreatedZone {
    id: Option<u64>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,

    #[serde(default)]
    errors: BTreeMap<String, serde_json::Value>,
}

/// Pull a human-readable message out of an error response body: the
/// `error` field if there is one, otherwise the values of the `errors`
/// map flattened and comma-joined in key order.  `None` if the body is
/// not JSON or has neither.
fn error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;

    if let Some(message) = parsed.error {
        return Some(message);
    }

    let mut parts = Vec::new();
    for value in parsed.errors.values() {
        flatten_into(value, &mut parts);
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

fn flatten_into(value: &serde_json::Value, out: &mut Vec<String>) {
    match value {
        serde_json::Value::String(message) => out.push(message.clone()),
        serde_json::Value::Array(values) => {
            for value in values {
                flatten_into(value, out);
            }
        }
        other => out.push(other.to_string()),
    }
}
