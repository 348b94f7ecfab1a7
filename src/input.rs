// JSON input decoding

use std::io::{BufReader, Read};

use tracing::debug;

use crate::error::DecodeError;
use crate::models::ServerRecord;

/// Reads one JSON array of server records. Trailing data after the array is rejected.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<ServerRecord>, DecodeError> {
    let records: Vec<ServerRecord> = serde_json::from_reader(BufReader::new(reader))?;
    debug!(count = records.len(), "decoded server records");
    Ok(records)
}

pub fn parse_records(s: &str) -> Result<Vec<ServerRecord>, DecodeError> {
    read_records(s.as_bytes())
}
