use super::attrs::Attributes;
use super::tag::{EndTag, SelfClosingTag, StartTag, Tag};
use crate::error::{MarkupError, MarkupResult};
use crate::fragment::Fragment;

/// The sealed result of matching an opening tag against a closing tag.
#[derive(PartialEq, Clone, Debug)]
pub struct Element {
  pub name: String,
  pub attributes: Attributes,
  pub contents: Vec<Node>,
}

impl Element {
  pub fn new(name: impl Into<String>, attributes: Attributes, contents: Vec<Node>) -> Element {
    Element {
      name: name.into(),
      attributes,
      contents,
    }
  }
}

/// Every kind of value a fragment can take in or hold. `Text` is raw and is
/// escaped the first time it is appended or rendered; `Raw` is trusted
/// markup emitted verbatim. `List` exists only as append input and is
/// folded item by item.
#[derive(PartialEq, Clone, Debug)]
pub enum Node {
  Text(String),
  Raw(String),
  Tag(Tag),
  Start(StartTag),
  End(EndTag),
  Void(SelfClosingTag),
  Element(Element),
  Fragment(Fragment),
  List(Vec<Node>),
}

impl Node {
  /// Wraps pre-escaped markup that must not be escaped again.
  pub fn raw(markup: impl Into<String>) -> Node {
    Node::Raw(markup.into())
  }

  pub fn text(text: impl Into<String>) -> Node {
    Node::Text(text.into())
  }

  /// Types a reference as an opening tag. Fails on anything already typed.
  pub fn open(&self) -> MarkupResult<Node> {
    match self {
      Node::Tag(tag) => Ok(Node::Start(tag.open())),
      Node::Start(start) => Err(MarkupError::AlreadyTyped(start.name.clone())),
      Node::End(end) => Err(MarkupError::AlreadyTyped(end.name.clone())),
      Node::Void(void) => Err(MarkupError::AlreadyTyped(void.name.clone())),
      Node::Element(element) => Err(MarkupError::AlreadyTyped(element.name.clone())),
      _ => Err(MarkupError::NotATag),
    }
  }

  /// Types a reference as a closing tag. Same failure rules as [`Node::open`].
  pub fn close(&self) -> MarkupResult<Node> {
    match self {
      Node::Tag(tag) => Ok(Node::End(tag.close())),
      Node::Start(start) => Err(MarkupError::AlreadyTyped(start.name.clone())),
      Node::End(end) => Err(MarkupError::AlreadyTyped(end.name.clone())),
      Node::Void(void) => Err(MarkupError::AlreadyTyped(void.name.clone())),
      Node::Element(element) => Err(MarkupError::AlreadyTyped(element.name.clone())),
      _ => Err(MarkupError::NotATag),
    }
  }
}

impl From<&str> for Node {
  fn from(value: &str) -> Node {
    Node::Text(value.into())
  }
}

impl From<String> for Node {
  fn from(value: String) -> Node {
    Node::Text(value)
  }
}

impl From<i32> for Node {
  fn from(value: i32) -> Node {
    Node::Text(value.to_string())
  }
}

impl From<f64> for Node {
  fn from(value: f64) -> Node {
    Node::Text(value.to_string())
  }
}

impl From<Tag> for Node {
  fn from(value: Tag) -> Node {
    Node::Tag(value)
  }
}

impl From<&Tag> for Node {
  fn from(value: &Tag) -> Node {
    Node::Tag(value.clone())
  }
}

impl From<StartTag> for Node {
  fn from(value: StartTag) -> Node {
    Node::Start(value)
  }
}

impl From<EndTag> for Node {
  fn from(value: EndTag) -> Node {
    Node::End(value)
  }
}

impl From<SelfClosingTag> for Node {
  fn from(value: SelfClosingTag) -> Node {
    Node::Void(value)
  }
}

impl From<&SelfClosingTag> for Node {
  fn from(value: &SelfClosingTag) -> Node {
    Node::Void(value.clone())
  }
}

impl From<Element> for Node {
  fn from(value: Element) -> Node {
    Node::Element(value)
  }
}

impl From<Fragment> for Node {
  fn from(value: Fragment) -> Node {
    Node::Fragment(value)
  }
}

impl From<Vec<Node>> for Node {
  fn from(value: Vec<Node>) -> Node {
    Node::List(value)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn open_types_a_bare_tag() {
    let node = Node::from(Tag::new("h1"));
    assert_eq!(node.open(), Ok(Node::Start(StartTag::new("h1"))));
  }

  #[test]
  fn open_twice_fails() {
    let node = Node::Start(StartTag::new("h1"));
    assert_eq!(node.open(), Err(MarkupError::AlreadyTyped("h1".into())));
    assert_eq!(node.close(), Err(MarkupError::AlreadyTyped("h1".into())));
  }

  #[test]
  fn open_on_an_element_fails() {
    let node = Node::Element(Element::new("h1", attrs!(), vec![]));
    assert_eq!(node.open(), Err(MarkupError::AlreadyTyped("h1".into())));
  }

  #[test]
  fn open_on_text_fails() {
    assert_eq!(Node::from("words").open(), Err(MarkupError::NotATag));
  }
}
