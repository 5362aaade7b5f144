//! Per-attribute settings as configured by the framework.

use crate::error::{ColorError, Result};
use crate::sorting::HexPolicy;
use serde::{Deserialize, Serialize};

fn default_colname() -> String {
    "color".to_string()
}

/// Settings of one color attribute. Every field has a default, so a partial
/// TOML or JSON document is enough to configure an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ColorAttributeSettings {
    /// Column holding the serialized pair. Must be a plain identifier since
    /// it ends up in queries built by the store.
    #[serde(default = "default_colname")]
    pub colname: String,
    /// Human readable label shown next to the widget.
    pub name: String,
    /// Read-only attributes render without the color picker.
    pub readonly: bool,
    pub mandatory: bool,
    pub searchable: bool,
    pub filterable: bool,
    pub sortable: bool,
    /// Listing group flag handed through to the framework untouched.
    pub flag: Option<u8>,
    /// Extra CSS classes for the widget wrapper. Also read from `tl_class`,
    /// the key the framework's own palettes use.
    #[serde(alias = "tl_class")]
    pub css_class: String,
    /// How hex strings of unexpected shape are ranked when sorting. Keep
    /// `lenient` unless stored data is known to be clean.
    pub hex_policy: HexPolicy,
}

impl Default for ColorAttributeSettings {
    fn default() -> Self {
        Self {
            colname: default_colname(),
            name: String::new(),
            readonly: false,
            mandatory: false,
            searchable: false,
            filterable: false,
            sortable: true,
            flag: None,
            css_class: String::new(),
            hex_policy: HexPolicy::default(),
        }
    }
}

impl ColorAttributeSettings {
    pub fn with_colname(colname: impl Into<String>) -> Self {
        Self {
            colname: colname.into(),
            ..Self::default()
        }
    }

    /// Reject settings the attribute cannot work with.
    pub fn validate(&self) -> Result<()> {
        let mut chars = self.colname.chars();
        let valid = match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        };

        if !valid {
            return Err(ColorError::InvalidSetting(format!(
                "colname {:?} is not a plain column identifier",
                self.colname
            )));
        }

        Ok(())
    }
}
