use crate::error::ModelError;
use std::fmt;
use std::str::FromStr;

/// Opaque ordinal key of a record in the owning store.
///
/// Only uniqueness matters to the sorter; the numeric value carries no
/// ordering meaning of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RecordId(pub u64);

impl RecordId {
    pub const fn new(value: u64) -> Self {
        RecordId(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        RecordId(value)
    }
}

impl From<RecordId> for u64 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(RecordId)
            .map_err(|_| ModelError::InvalidRecordId(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_ids() {
        assert_eq!("42".parse::<RecordId>().unwrap(), RecordId(42));
        assert_eq!(" 7 ".parse::<RecordId>().unwrap(), RecordId(7));
    }

    #[test]
    fn rejects_non_numeric_ids() {
        let err = "abc".parse::<RecordId>().unwrap_err();
        assert_eq!(err, ModelError::InvalidRecordId("abc".to_string()));
    }
}
