use serde::Serialize;
use std::fmt;

/// An attribute value. Booleans select bare-attribute rendering, lists are
/// space-joined, everything else coerces through `Display`.
#[derive(PartialEq, Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum Value {
  String(String),
  Number(f64),
  Boolean(bool),
  List(Vec<Value>),
  Null,
}

impl From<&str> for Value {
  fn from(value: &str) -> Value {
    Value::String(value.into())
  }
}

impl From<String> for Value {
  fn from(value: String) -> Value {
    Value::String(value)
  }
}

impl From<bool> for Value {
  fn from(value: bool) -> Value {
    Value::Boolean(value)
  }
}

impl From<i32> for Value {
  fn from(value: i32) -> Value {
    Value::Number(value.into())
  }
}

impl From<f64> for Value {
  fn from(value: f64) -> Value {
    Value::Number(value)
  }
}

impl From<Vec<Value>> for Value {
  fn from(value: Vec<Value>) -> Value {
    Value::List(value)
  }
}

impl From<Vec<&str>> for Value {
  fn from(value: Vec<&str>) -> Value {
    Value::List(value.into_iter().map(Value::from).collect())
  }
}

impl fmt::Display for Value {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Value::String(value) => write!(f, "{}", value),
      Value::Number(value) => write!(f, "{}", value),
      Value::Boolean(value) => write!(f, "{}", value),
      Value::List(items) => {
        for (index, item) in items.iter().enumerate() {
          if index > 0 {
            write!(f, " ")?;
          }
          write!(f, "{}", item)?;
        }
        Ok(())
      }
      Value::Null => Ok(()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn display_joins_lists_with_spaces() {
    let value = Value::from(vec!["heading", "uppercase"]);
    assert_eq!(value.to_string(), "heading uppercase");
  }

  #[test]
  fn display_formats_numbers_like_source_text() {
    assert_eq!(Value::from(5).to_string(), "5");
    assert_eq!(Value::from(123.456).to_string(), "123.456");
  }
}
