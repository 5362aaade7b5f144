//! The color attribute as seen by the host framework.

use crate::codec;
use crate::error::{ColorError, Result};
use crate::field::{self, FieldDefinition, FieldOverrides};
use crate::settings::ColorAttributeSettings;
use crate::sorting::ColorSortEngine;
use huekey_contracts::host::AttributeHost;
use huekey_contracts::store::RawColumnStore;
use huekey_model::{ColorValue, RecordId, SortDirection};
use tracing::{debug, warn};

/// A color attribute bound to its model and column store.
#[derive(Debug)]
pub struct ColorAttribute<H, S> {
    host: H,
    store: S,
    settings: ColorAttributeSettings,
    engine: ColorSortEngine,
}

impl<H, S> ColorAttribute<H, S>
where
    H: AttributeHost,
    S: RawColumnStore,
{
    /// Wire an attribute; fails when the settings do not validate.
    pub fn new(host: H, store: S, settings: ColorAttributeSettings) -> Result<Self> {
        settings.validate()?;
        let engine = ColorSortEngine::new(settings.hex_policy);

        Ok(Self {
            host,
            store,
            settings,
            engine,
        })
    }

    pub fn settings(&self) -> &ColorAttributeSettings {
        &self.settings
    }

    pub fn column_name(&self) -> &str {
        &self.settings.colname
    }

    pub fn engine(&self) -> &ColorSortEngine {
        &self.engine
    }

    /// Sort `ids` by their stored colors.
    ///
    /// Rows are decoded in the order the store returns them, and that order
    /// breaks ties. Ids the store has no row for are left out. A row that
    /// cannot be decoded fails the whole call.
    pub fn sort_ids(&self, ids: &[RecordId], direction: SortDirection) -> Result<Vec<RecordId>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let table = self.host.table_name();
        let column = self.column_name();
        let rows = self.store.fetch_column(table, column, ids)?;

        debug!(
            table,
            column,
            requested = ids.len(),
            fetched = rows.len(),
            "fetched color column"
        );
        if rows.len() < ids.len() {
            warn!(
                table,
                column,
                missing = ids.len() - rows.len(),
                "store returned fewer rows than requested"
            );
        }

        let decoded = rows
            .into_iter()
            .map(|row| match codec::decode(row.raw.as_deref()) {
                Ok(value) => Ok((row.id, value)),
                Err(ColorError::Decode(source)) => {
                    Err(ColorError::CorruptRecord { id: row.id, source })
                }
                Err(other) => Err(other),
            })
            .collect::<Result<Vec<(RecordId, ColorValue)>>>()?;

        Ok(self
            .engine
            .order(decoded.iter().map(|(id, value)| (*id, value)), direction))
    }

    /// Same as [`Self::sort_ids`] with the framework's direction keyword.
    pub fn sort_ids_by_keyword(&self, ids: &[RecordId], keyword: &str) -> Result<Vec<RecordId>> {
        self.sort_ids(ids, SortDirection::from_keyword(keyword))
    }

    /// Decode raw column content.
    pub fn unserialize_data(&self, raw: Option<&[u8]>) -> Result<ColorValue> {
        codec::decode(raw)
    }

    /// Encode a value for the column; `None` means NULL.
    pub fn serialize_data(&self, value: &ColorValue) -> Result<Option<Vec<u8>>> {
        codec::encode(value)
    }

    pub fn sql_data_type(&self) -> &'static str {
        field::SQL_DATA_TYPE
    }

    pub fn attribute_setting_names(&self) -> Vec<&'static str> {
        field::attribute_setting_names()
    }

    pub fn field_definition(&self, overrides: &FieldOverrides) -> FieldDefinition {
        FieldDefinition::for_settings(&self.settings, overrides)
    }
}
