// File: src/corpus.rs
//! Parsing of the two artifacts the engine consumes: the index (every record,
//! summarized) and one detail record.
use crate::core::types::{ContentRecord, DetailRecord, IndexRecord};
use crate::error::RelatedError;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

pub fn read_index<R: Read>(reader: R) -> Result<Vec<ContentRecord>, RelatedError> {
    let records: Vec<IndexRecord> = serde_json::from_reader(reader)?;
    Ok(records.into_iter().map(ContentRecord::from).collect())
}

pub fn read_detail<R: Read>(reader: R) -> Result<ContentRecord, RelatedError> {
    let record: DetailRecord = serde_json::from_reader(reader)?;
    Ok(record.into())
}

pub fn load_index(path: &Path) -> Result<Vec<ContentRecord>, RelatedError> {
    let file = File::open(path)?;
    let records = read_index(BufReader::new(file))?;
    debug!(path = %path.display(), records = records.len(), "loaded index");
    Ok(records)
}

pub fn load_detail(path: &Path) -> Result<ContentRecord, RelatedError> {
    let file = File::open(path)?;
    let record = read_detail(BufReader::new(file))?;
    debug!(path = %path.display(), id = record.id(), "loaded detail");
    Ok(record)
}
