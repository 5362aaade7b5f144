use huekey_contracts::store::StoreError;
use huekey_model::RecordId;
use thiserror::Error;

/// Errors raised by the color attribute.
#[derive(Error, Debug)]
pub enum ColorError {
    /// Raw column bytes are not a serialized color pair.
    #[error("Failed to decode stored color value: {0}")]
    Decode(#[source] serde_json::Error),

    /// Same as `Decode`, raised while sorting and tied to the offending record.
    #[error("Stored color value of record {id} is corrupt: {source}")]
    CorruptRecord {
        id: RecordId,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be serialized for the column.
    #[error("Failed to encode color value: {0}")]
    Encode(#[source] serde_json::Error),

    /// The column store failed to deliver rows.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Attribute settings failed validation.
    #[error("Invalid attribute setting: {0}")]
    InvalidSetting(String),
}

/// Result type used throughout huekey-core.
pub type Result<T> = std::result::Result<T, ColorError>;
