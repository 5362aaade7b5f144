//! Field declaration data handed to the framework's form layer.
//!
//! Nothing here renders anything; the framework reads these values to build
//! the two-part text input (hex and saturation) and its picker.

use crate::settings::ColorAttributeSettings;
use serde::{Deserialize, Serialize};

/// Column type of the serialized pair.
pub const SQL_DATA_TYPE: &str = "TINYBLOB NULL";

/// Longest hex value the input accepts.
pub const HEX_MAX_LENGTH: usize = 6;

/// Setting names every simple attribute understands.
pub const BASE_SETTING_NAMES: &[&str] = &[
    "id",
    "pid",
    "sorting",
    "tstamp",
    "name",
    "description",
    "type",
    "colname",
    "isvariant",
    "isunique",
];

/// Setting names added by the color attribute.
pub const COLOR_SETTING_NAMES: &[&str] =
    &["flag", "searchable", "filterable", "sortable", "mandatory"];

const WIDGET_CLASS: &str = " wizard inline";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
}

/// Widget evaluation flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEval {
    pub maxlength: usize,
    /// Number of text boxes: hex and saturation.
    pub size: usize,
    pub multiple: bool,
    pub colorpicker: bool,
    pub is_hex_color: bool,
    pub decode_entities: bool,
    pub mandatory: bool,
    pub readonly: bool,
    pub css_class: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub label: String,
    pub input_type: InputType,
    pub eval: FieldEval,
}

/// Caller supplied values taking precedence over the attribute settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldOverrides {
    pub label: Option<String>,
    pub readonly: Option<bool>,
    pub mandatory: Option<bool>,
    pub css_class: Option<String>,
}

impl FieldDefinition {
    pub fn for_settings(settings: &ColorAttributeSettings, overrides: &FieldOverrides) -> Self {
        let readonly = overrides.readonly.unwrap_or(settings.readonly);
        let mandatory = overrides.mandatory.unwrap_or(settings.mandatory);
        let mut css_class = overrides
            .css_class
            .clone()
            .unwrap_or_else(|| settings.css_class.clone());
        css_class.push_str(WIDGET_CLASS);

        Self {
            label: overrides
                .label
                .clone()
                .unwrap_or_else(|| settings.name.clone()),
            input_type: InputType::Text,
            eval: FieldEval {
                maxlength: HEX_MAX_LENGTH,
                size: 2,
                multiple: true,
                colorpicker: !readonly,
                is_hex_color: true,
                decode_entities: true,
                mandatory,
                readonly,
                css_class,
            },
        }
    }
}

/// All setting names of a color attribute, base names first.
pub fn attribute_setting_names() -> Vec<&'static str> {
    BASE_SETTING_NAMES
        .iter()
        .chain(COLOR_SETTING_NAMES)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_the_color_widget() {
        let settings = ColorAttributeSettings {
            name: "Background".to_string(),
            mandatory: true,
            css_class: "w50".to_string(),
            ..ColorAttributeSettings::default()
        };

        let field = FieldDefinition::for_settings(&settings, &FieldOverrides::default());
        assert_eq!(field.label, "Background");
        assert_eq!(field.input_type, InputType::Text);
        assert_eq!(field.eval.maxlength, 6);
        assert_eq!(field.eval.size, 2);
        assert!(field.eval.multiple);
        assert!(field.eval.colorpicker);
        assert!(field.eval.is_hex_color);
        assert!(field.eval.decode_entities);
        assert!(field.eval.mandatory);
        assert_eq!(field.eval.css_class, "w50 wizard inline");
    }

    #[test]
    fn readonly_drops_the_picker() {
        let overrides = FieldOverrides {
            readonly: Some(true),
            ..FieldOverrides::default()
        };

        let field = FieldDefinition::for_settings(&ColorAttributeSettings::default(), &overrides);
        assert!(field.eval.readonly);
        assert!(!field.eval.colorpicker);
        assert_eq!(field.eval.css_class, " wizard inline");
    }

    #[test]
    fn overrides_win_over_settings() {
        let settings = ColorAttributeSettings {
            name: "Color".to_string(),
            mandatory: true,
            css_class: "w50".to_string(),
            ..ColorAttributeSettings::default()
        };
        let overrides = FieldOverrides {
            label: Some("Farbe".to_string()),
            mandatory: Some(false),
            css_class: Some("clr".to_string()),
            readonly: None,
        };

        let field = FieldDefinition::for_settings(&settings, &overrides);
        assert_eq!(field.label, "Farbe");
        assert!(!field.eval.mandatory);
        assert_eq!(field.eval.css_class, "clr wizard inline");
    }

    #[test]
    fn setting_names_extend_the_base_list() {
        let names = attribute_setting_names();
        assert_eq!(&names[..BASE_SETTING_NAMES.len()], BASE_SETTING_NAMES);
        assert_eq!(
            &names[BASE_SETTING_NAMES.len()..],
            &["flag", "searchable", "filterable", "sortable", "mandatory"]
        );
    }
}
