use serde_json::{Map, Value};

/// Top-level key holding the time of the last refresh pass.
pub const LAST_UPDATE_KEY: &str = "last_update";

/// Local-time format of the `last_update` field.
pub const LAST_UPDATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// In-memory catalog document.
///
/// Entries other than `last_update` are kept as opaque JSON so they survive
/// a load/save cycle unchanged, in their original key order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogDocument {
    entries: Map<String, Value>,
}

impl CatalogDocument {
    pub fn new(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }

    pub fn contains_platform(&self, platform: &str) -> bool {
        self.entries.contains_key(platform)
    }

    /// The raw `doc` value of a platform entry, of whatever JSON type.
    pub fn doc_value(&self, platform: &str) -> Option<&Value> {
        self.entries.get(platform)?.get("doc")
    }

    #[cfg(test)]
    pub(crate) fn last_update(&self) -> Option<&str> {
        self.entries.get(LAST_UPDATE_KEY)?.as_str()
    }

    pub fn set_last_update(&mut self, stamp: impl Into<String>) {
        self.entries
            .insert(LAST_UPDATE_KEY.to_string(), Value::String(stamp.into()));
    }
}
