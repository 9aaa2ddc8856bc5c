//! Payload validation
//!
//! Validators inspect the raw JSON body before anything is deserialized or
//! persisted. They never transform the payload; a passing payload is then
//! deserialized into its typed form by [`parse`].

use openmusic_core::{AlbumPayload, CatalogError, Result, SongPayload};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A payload type with a schema check on its raw JSON form
pub trait PayloadSchema: DeserializeOwned {
    fn validate(value: &Value) -> Result<()>;
}

impl PayloadSchema for AlbumPayload {
    fn validate(value: &Value) -> Result<()> {
        validate_album_payload(value)
    }
}

impl PayloadSchema for SongPayload {
    fn validate(value: &Value) -> Result<()> {
        validate_song_payload(value)
    }
}

/// Validate a raw payload and deserialize it
///
/// `null` fields are dropped first so optional fields fall back to defaults.
pub fn parse<T: PayloadSchema>(mut value: Value) -> Result<T> {
    T::validate(&value)?;
    if let Some(fields) = value.as_object_mut() {
        fields.retain(|_, v| !v.is_null());
    }
    serde_json::from_value(value).map_err(|e| CatalogError::validation(e.to_string()))
}

/// `name` (non-empty string) and `year` (integer) are required
pub fn validate_album_payload(value: &Value) -> Result<()> {
    let fields = as_object(value)?;
    required_string(fields, "name")?;
    required_integer(fields, "year")?;
    Ok(())
}

/// `title`, `year`, `genre` and `performer` are required; `duration` and
/// `albumId` are optional
pub fn validate_song_payload(value: &Value) -> Result<()> {
    let fields = as_object(value)?;
    required_string(fields, "title")?;
    required_integer(fields, "year")?;
    required_string(fields, "genre")?;
    required_string(fields, "performer")?;

    if let Some(duration) = present(fields, "duration") {
        let duration = integer(duration, "duration")?;
        if duration < 0 {
            return Err(CatalogError::validation(
                "\"duration\" must be greater than or equal to 0",
            ));
        }
    }

    if let Some(album_id) = present(fields, "albumId") {
        if !album_id.is_string() {
            return Err(CatalogError::validation("\"albumId\" must be a string"));
        }
    }

    Ok(())
}

fn as_object(value: &Value) -> Result<&Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| CatalogError::validation("payload must be an object"))
}

/// A field counts as absent when missing or `null`
fn present<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    fields.get(name).filter(|v| !v.is_null())
}

fn required_string(fields: &Map<String, Value>, name: &str) -> Result<()> {
    let value = present(fields, name)
        .ok_or_else(|| CatalogError::validation(format!("\"{name}\" is required")))?;

    match value.as_str() {
        Some(s) if s.trim().is_empty() => Err(CatalogError::validation(format!(
            "\"{name}\" is not allowed to be empty"
        ))),
        Some(_) => Ok(()),
        None => Err(CatalogError::validation(format!(
            "\"{name}\" must be a string"
        ))),
    }
}

fn required_integer(fields: &Map<String, Value>, name: &str) -> Result<()> {
    let value = present(fields, name)
        .ok_or_else(|| CatalogError::validation(format!("\"{name}\" is required")))?;
    integer(value, name).map(|_| ())
}

fn integer(value: &Value, name: &str) -> Result<i32> {
    value
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| CatalogError::validation(format!("\"{name}\" must be an integer")))
}
