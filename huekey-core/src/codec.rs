//! Stored-value codec for the color column.
//!
//! A value is stored as a compact two-element JSON array,
//! `["<hex>","<saturation>"]`. Blank values are stored as NULL. Rows written
//! in any older serialization format are rejected as corrupt, not converted.

use crate::error::{ColorError, Result};
use huekey_model::ColorValue;

/// Decode the raw column content of one record.
///
/// NULL decodes to an empty value. Bytes that are not a two-element string
/// sequence are an error; they are never replaced by a default.
pub fn decode(raw: Option<&[u8]>) -> Result<ColorValue> {
    let Some(bytes) = raw else {
        return Ok(ColorValue::empty());
    };

    let (hex, saturation): (String, String) =
        serde_json::from_slice(bytes).map_err(ColorError::Decode)?;
    Ok(ColorValue { hex, saturation })
}

/// Encode a value for the column; `None` stands for NULL.
pub fn encode(value: &ColorValue) -> Result<Option<Vec<u8>>> {
    if value.is_blank() {
        return Ok(None);
    }

    serde_json::to_vec(&(value.hex(), value.saturation()))
        .map(Some)
        .map_err(ColorError::Encode)
}
