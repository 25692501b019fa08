//! Tabular row model

pub use serde_json::Value;

/// One tabular row: an ordered mapping of field name to value
///
/// Field order is significant and survives cloning. Lookups are linear,
/// which is fine at typical column counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: Vec<(String, Value)>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `name`, if the field exists
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Set `name` to `value`: replaced in place if the field exists,
    /// appended otherwise
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Whether the row has a field called `name`
    pub fn contains_field(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Field names in order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// (name, value) pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the row has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (name, value) in iter {
            row.set(name, value);
        }
        row
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Row {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> Row {
        [
            ("title".to_string(), Value::from("Moby-Dick")),
            ("year".to_string(), Value::from(1851)),
            ("text".to_string(), Value::from("Call me Ishmael.")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_field_order_is_preserved() {
        let row = sample_row();
        let names: Vec<&str> = row.field_names().collect();
        assert_eq!(names, vec!["title", "year", "text"]);
    }

    #[test]
    fn test_get_and_contains() {
        let row = sample_row();
        assert_eq!(row.get("year"), Some(&Value::from(1851)));
        assert!(row.contains_field("text"));
        assert!(!row.contains_field("author"));
        assert_eq!(row.get("author"), None);
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut row = sample_row();
        row.set("year", Value::from(1852));
        let names: Vec<&str> = row.field_names().collect();
        assert_eq!(names, vec!["title", "year", "text"]);
        assert_eq!(row.get("year"), Some(&Value::from(1852)));
    }

    #[test]
    fn test_set_appends_new_fields_last() {
        let mut row = sample_row();
        row.set("source_doc", Value::from(0));
        assert_eq!(row.field_names().last(), Some("source_doc"));
        assert_eq!(row.len(), 4);
    }

    #[test]
    fn test_clone_then_extend_leaves_original_untouched() {
        let row = sample_row();
        let mut copy = row.clone();
        copy.set("match", Value::from("Ishmael"));
        assert_eq!(row.len(), 3);
        assert_eq!(copy.len(), 4);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_preserves_field_order() {
        let json = serde_json::to_string(&sample_row()).unwrap();
        assert_eq!(
            json,
            r#"{"title":"Moby-Dick","year":1851,"text":"Call me Ishmael."}"#
        );
    }
}
