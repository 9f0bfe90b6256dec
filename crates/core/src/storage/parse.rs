//! Stored value parsing utilities
//!
//! Reads and writes whole JSON arrays through a [`Medium`], mapping
//! failures onto [`StorageError`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::medium::Medium;
use crate::error::StorageError;

/// Decode a JSON array; blank input and `null` are an empty array
pub fn decode_list<T: DeserializeOwned>(
    bytes: &[u8],
    location: &str,
) -> Result<Vec<T>, StorageError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let list: Option<Vec<T>> =
        serde_json::from_slice(bytes).map_err(|source| StorageError::Malformed {
            location: location.to_string(),
            source,
        })?;
    Ok(list.unwrap_or_default())
}

/// Encode a list as a tab-indented JSON array
pub fn encode_list<T: Serialize>(list: &[T], location: &str) -> Result<Vec<u8>, StorageError> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    list.serialize(&mut ser).map_err(|source| StorageError::Malformed {
        location: location.to_string(),
        source,
    })?;
    Ok(out)
}

/// Read a named list; `None` when the blob is absent
pub fn read_list<T: DeserializeOwned>(
    medium: &dyn Medium,
    name: &str,
) -> Result<Option<Vec<T>>, StorageError> {
    let location = medium.locate(name);
    let bytes = medium
        .read(name)
        .map_err(|source| StorageError::Read {
            location: location.clone(),
            source,
        })?;
    bytes.map(|b| decode_list(&b, &location)).transpose()
}

/// Rewrite a named list in full
pub fn write_list<T: Serialize>(
    medium: &dyn Medium,
    name: &str,
    list: &[T],
) -> Result<(), StorageError> {
    let location = medium.locate(name);
    let bytes = encode_list(list, &location)?;
    medium
        .write(name, &bytes)
        .map_err(|source| StorageError::Write { location, source })
}
