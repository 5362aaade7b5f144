use crate::error::ModelError;
use std::fmt;
use std::str::FromStr;

/// Direction requested by the framework when it asks for sorted ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Interpret the framework's direction keyword.
    ///
    /// Only the exact keyword `DESC` selects descending order; anything else,
    /// including lowercase `desc`, falls back to ascending. Use [`FromStr`]
    /// for a strict parse.
    pub fn from_keyword(keyword: &str) -> Self {
        if keyword == "DESC" {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    pub fn is_descending(self) -> bool {
        matches!(self, SortDirection::Descending)
    }

    pub fn keyword(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl From<bool> for SortDirection {
    /// `true` means descending, matching the sorter's flag.
    fn from(descending: bool) -> Self {
        if descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for SortDirection {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(ModelError::InvalidDirection(s.to_string())),
        }
    }
}
