use std::fmt;

use serde_json::Value;

use super::JsonObject;

/// A record with dynamic attribute lookup.
///
/// Unlike the typed records, a `SimpleRecord` has no fixed field set; every
/// key of the JSON object is an attribute.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use webex_api::models::SimpleRecord;
///
/// let data = serde_json::from_value(json!({"id": "p1", "displayName": "Ada"})).unwrap();
/// let person = SimpleRecord::new("person", data);
///
/// assert_eq!(person.get("displayName"), Some(&json!("Ada")));
/// assert_eq!(person.attributes().collect::<Vec<_>>(), ["id", "displayName"]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimpleRecord {
    model: &'static str,
    data: JsonObject,
}

impl SimpleRecord {
    /// Creates a record for the given model name.
    #[must_use]
    pub const fn new(model: &'static str, data: JsonObject) -> Self {
        Self { model, data }
    }

    /// Returns the model name, e.g. `"room"`.
    #[must_use]
    pub const fn model(&self) -> &'static str {
        self.model
    }

    /// Looks up an attribute by its JSON key.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    /// Looks up a string attribute.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Iterates over attribute names in server order.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Returns the underlying JSON object.
    #[must_use]
    pub const fn json_data(&self) -> &JsonObject {
        &self.data
    }

    /// Consumes the record, returning the underlying JSON object.
    #[must_use]
    pub fn into_json(self) -> JsonObject {
        self.data
    }
}

impl fmt::Display for SimpleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pretty = serde_json::to_string_pretty(&self.data).map_err(|_| fmt::Error)?;
        f.write_str(&pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_record_lookup() {
        let data = match json!({"id": "r1", "title": "T", "isLocked": false}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let record = SimpleRecord::new("room", data);

        assert_eq!(record.model(), "room");
        assert_eq!(record.get_str("title"), Some("T"));
        assert_eq!(record.get("isLocked"), Some(&json!(false)));
        assert!(record.get("missing").is_none());
        assert_eq!(record.attributes().count(), 3);
        assert!(record.to_string().contains("\"title\": \"T\""));
    }
}
