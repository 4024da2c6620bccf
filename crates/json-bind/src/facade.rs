//! String entry points.
//!
//! Text parsing and rendering are delegated to serde_json; the engine core
//! only ever sees an already-parsed value tree. Entry points taking a path
//! navigate into the document before decoding, so a record (or a list of
//! records) can be read out of an envelope.

use serde_json::Value;

use json_bind_path::{format_path, read_at, Step};

use crate::codec::MappedRecord;
use crate::error::BindError;
use crate::schema::{decode_at, decode_list};

/// Parses `text` and decodes a record from the document root.
pub fn from_json_str<T: MappedRecord>(text: &str) -> Result<T, BindError> {
    let document: Value = serde_json::from_str(text)?;
    T::decode_from(&document)
}

/// Parses `text` and decodes a record from the value at `path`.
pub fn from_json_str_at<T: MappedRecord>(text: &str, path: &[Step]) -> Result<T, BindError> {
    let document: Value = serde_json::from_str(text)?;
    decode_at(&document, path)
}

/// Parses `text` as an array of records, order preserved.
pub fn list_from_json_str<T: MappedRecord>(text: &str) -> Result<Vec<T>, BindError> {
    let document: Value = serde_json::from_str(text)?;
    decode_list(&document)
}

/// Parses `text` and decodes the array of records at `path`.
pub fn list_from_json_str_at<T: MappedRecord>(
    text: &str,
    path: &[Step],
) -> Result<Vec<T>, BindError> {
    let document: Value = serde_json::from_str(text)?;
    match read_at(&document, path) {
        Some(value) => decode_list(value),
        None => Err(BindError::MissingRequired {
            path: format_path(path),
        }),
    }
}

/// Encodes a record and renders it as compact JSON text.
pub fn to_json_string<T: MappedRecord>(record: &T) -> Result<String, BindError> {
    Ok(serde_json::to_string(&record.encode_to()?)?)
}

/// Encodes a record and renders it as pretty-printed JSON text.
pub fn to_json_string_pretty<T: MappedRecord>(record: &T) -> Result<String, BindError> {
    Ok(serde_json::to_string_pretty(&record.encode_to()?)?)
}
