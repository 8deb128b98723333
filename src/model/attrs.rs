use super::value::Value;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// An insertion-ordered attribute map. Rendering and equality both follow
/// insertion order; inserting an existing key overwrites in place.
#[derive(PartialEq, Clone, Debug, Default)]
pub struct Attributes {
  entries: Vec<(String, Value)>,
}

impl Attributes {
  pub fn new() -> Attributes {
    Attributes::default()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn get(&self, key: &str) -> Option<&Value> {
    self
      .entries
      .iter()
      .find(|(existing, _)| existing == key)
      .map(|(_, value)| value)
  }

  pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
    let key = key.into();
    for (existing, slot) in &mut self.entries {
      if *existing == key {
        return Some(std::mem::replace(slot, value));
      }
    }
    self.entries.push((key, value));
    None
  }

  pub fn extend(&mut self, other: Attributes) {
    for (key, value) in other.entries {
      self.insert(key, value);
    }
  }

  /// Appends one class name to the `class_` entry, creating the list on
  /// first use. An existing scalar value becomes the first list item.
  pub fn append_class(&mut self, class: impl Into<String>) {
    let class = Value::String(class.into());
    match self.get("class_").cloned() {
      None => {
        self.insert("class_", Value::List(vec![class]));
      }
      Some(Value::List(mut items)) => {
        items.push(class);
        self.insert("class_", Value::List(items));
      }
      Some(other) => {
        self.insert("class_", Value::List(vec![other, class]));
      }
    }
  }

  pub fn iter(&self) -> std::slice::Iter<(String, Value)> {
    self.entries.iter()
  }

  /// The attribute codec. Keys keep insertion order and lose a trailing `_`
  /// marker; `true` renders bare, `false` disappears, lists join on spaces,
  /// anything else coerces to a quoted string.
  pub fn encode(&self) -> String {
    let mut output = String::new();

    for (key, value) in &self.entries {
      let key = key.strip_suffix('_').unwrap_or(key);

      match value {
        Value::Boolean(false) => continue,
        Value::Boolean(true) | Value::Null => {
          output.push(' ');
          output.push_str(key);
        }
        other => {
          output.push(' ');
          output.push_str(key);
          output.push_str("=\"");
          output.push_str(&other.to_string());
          output.push('"');
        }
      }
    }

    output
  }
}

impl<K: Into<String>, const N: usize> From<[(K, Value); N]> for Attributes {
  fn from(entries: [(K, Value); N]) -> Attributes {
    let mut attributes = Attributes::new();
    for (key, value) in entries {
      attributes.insert(key, value);
    }
    attributes
  }
}

impl IntoIterator for Attributes {
  type Item = (String, Value);
  type IntoIter = std::vec::IntoIter<(String, Value)>;

  fn into_iter(self) -> Self::IntoIter {
    self.entries.into_iter()
  }
}

impl<'a> IntoIterator for &'a Attributes {
  type Item = &'a (String, Value);
  type IntoIter = std::slice::Iter<'a, (String, Value)>;

  fn into_iter(self) -> Self::IntoIter {
    self.entries.iter()
  }
}

impl Serialize for Attributes {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    let mut map = serializer.serialize_map(Some(self.entries.len()))?;
    for (key, value) in &self.entries {
      map.serialize_entry(key, value)?;
    }
    map.end()
  }
}
