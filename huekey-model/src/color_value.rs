//! The stored value of a color attribute: a hex color plus a saturation.

use std::fmt;

/// Hex color and saturation pair as kept for one record.
///
/// Both halves stay textual. `hex` is normally empty, a 3-digit shorthand or a
/// 6-digit color, but any string is carried through untouched. `saturation`
/// is a run of decimal digits with no enforced range.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "(String, String)", into = "(String, String)"))]
pub struct ColorValue {
    pub hex: String,
    pub saturation: String,
}

impl ColorValue {
    pub fn new(hex: impl Into<String>, saturation: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            saturation: saturation.into(),
        }
    }

    /// The value decoded from an absent column.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn saturation(&self) -> &str {
        &self.saturation
    }

    /// True when neither half carries information.
    ///
    /// A half counts as blank when it is empty or exactly `"0"`. Blank values
    /// are persisted as an absent column rather than as a serialized pair.
    pub fn is_blank(&self) -> bool {
        is_falsy(&self.hex) && is_falsy(&self.saturation)
    }

    pub fn into_parts(self) -> (String, String) {
        (self.hex, self.saturation)
    }
}

fn is_falsy(component: &str) -> bool {
    component.is_empty() || component == "0"
}

impl From<(String, String)> for ColorValue {
    fn from((hex, saturation): (String, String)) -> Self {
        Self { hex, saturation }
    }
}

impl From<(&str, &str)> for ColorValue {
    fn from((hex, saturation): (&str, &str)) -> Self {
        Self::new(hex, saturation)
    }
}

impl From<ColorValue> for (String, String) {
    fn from(value: ColorValue) -> Self {
        value.into_parts()
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}/{}", self.hex, self.saturation)
    }
}
