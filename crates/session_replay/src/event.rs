use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Shared string table from the `dictionary-data` region.
///
/// Keys are small integers encoded as text. Events refer to entries by index,
/// so every lookup goes through [`EventIndex::key`] first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Dictionary(HashMap<String, String>);

impl Dictionary {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Looks up the entry an event position points at.
    pub fn resolve(&self, index: Option<&EventIndex>) -> Option<&str> {
        let key = index?.key()?;
        self.get(&key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One position of a recorded event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct EventIndex(Value);

impl EventIndex {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Dictionary key for this index: the value's text form.
    ///
    /// `3` and `"3"` both map to `"3"`. Null and composite values have no key.
    pub fn key(&self) -> Option<String> {
        match &self.0 {
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

/// A fixed-layout event row from the `event-data` region.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RecordedEvent(Vec<EventIndex>);

impl RecordedEvent {
    pub const PATH_POSITION: usize = 2;
    pub const TYPE_POSITION: usize = 3;
    pub const ARGS_POSITION: usize = 6;
    pub const METHOD_POSITION: usize = 7;

    pub fn new(fields: Vec<EventIndex>) -> Self {
        Self(fields)
    }

    pub fn field(&self, position: usize) -> Option<&EventIndex> {
        self.0.get(position)
    }

    pub fn path(&self) -> Option<&EventIndex> {
        self.field(Self::PATH_POSITION)
    }

    pub fn event_type(&self) -> Option<&EventIndex> {
        self.field(Self::TYPE_POSITION)
    }

    pub fn args(&self) -> Option<&EventIndex> {
        self.field(Self::ARGS_POSITION)
    }

    pub fn method(&self) -> Option<&EventIndex> {
        self.field(Self::METHOD_POSITION)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn numeric_and_text_indices_share_a_key() {
        let dict: Dictionary = [("3".to_string(), "Remote".to_string())]
            .into_iter()
            .collect();
        let numeric = EventIndex::new(json!(3));
        let text = EventIndex::new(json!("3"));
        assert_eq!(dict.resolve(Some(&numeric)), Some("Remote"));
        assert_eq!(dict.resolve(Some(&text)), Some("Remote"));
    }

    #[test]
    fn null_and_missing_positions_miss() {
        let dict: Dictionary = [("0".to_string(), "x".to_string())].into_iter().collect();
        assert_eq!(dict.resolve(Some(&EventIndex::new(Value::Null))), None);
        assert_eq!(dict.resolve(None), None);

        let short: RecordedEvent = serde_json::from_value(json!([0, 0, 0])).unwrap();
        assert!(short.path().is_some());
        assert!(short.method().is_none());
    }

    #[test]
    fn booleans_use_json_spelling() {
        assert_eq!(EventIndex::new(json!(true)).key().as_deref(), Some("true"));
        assert_eq!(EventIndex::new(json!(false)).key().as_deref(), Some("false"));
        assert_eq!(EventIndex::new(Value::Null).key(), None);
        assert_eq!(EventIndex::new(json!([1])).key(), None);
    }

    #[test]
    fn named_positions_read_the_fixed_layout() {
        let fields = (0..8u64).map(|n| EventIndex::new(json!(n * 10))).collect();
        let row = RecordedEvent::new(fields);
        assert_eq!(row.path().and_then(EventIndex::key).as_deref(), Some("20"));
        assert_eq!(row.event_type().and_then(EventIndex::key).as_deref(), Some("30"));
        assert_eq!(row.args().and_then(EventIndex::key).as_deref(), Some("60"));
        assert_eq!(row.method().and_then(EventIndex::key).as_deref(), Some("70"));
    }
}
