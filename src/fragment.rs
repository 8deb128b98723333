use crate::error::{MarkupError, MarkupResult};
use crate::escape::escape;
use crate::model::{EndTag, Node};
use std::ops::Range;

/// An ordered, immutable-on-append log of rendered pieces. Every operation
/// returns a new fragment; the receiver is never touched. Nesting structure
/// emerges only through the matching scan in [`Fragment::append`], which
/// collapses a balanced span into a sealed element the moment its closing
/// tag arrives.
#[derive(PartialEq, Clone, Debug, Default)]
pub struct Fragment {
  contents: Vec<Node>,
}

impl Fragment {
  pub fn new() -> Fragment {
    Fragment::default()
  }

  pub fn len(&self) -> usize {
    self.contents.len()
  }

  pub fn is_empty(&self) -> bool {
    self.contents.is_empty()
  }

  pub fn get(&self, index: usize) -> Option<&Node> {
    self.contents.get(index)
  }

  pub fn iter(&self) -> std::slice::Iter<Node> {
    self.contents.iter()
  }

  pub fn slice(&self, range: Range<usize>) -> Fragment {
    Fragment {
      contents: self.contents[range].to_vec(),
    }
  }

  /// Appends one item, dispatching on its kind:
  ///
  /// - text is escaped once and stored verbatim afterwards
  /// - opening, self-closing and element nodes append as-is
  /// - a bare tag is implicitly opened
  /// - a closing tag runs the matching scan
  /// - fragments and lists fold item by item
  pub fn append(&self, item: impl Into<Node>) -> MarkupResult<Fragment> {
    self.append_node(item.into())
  }

  fn append_node(&self, item: Node) -> MarkupResult<Fragment> {
    match item {
      Node::Text(text) => Ok(self.push(Node::Raw(escape(&text)))),
      Node::Raw(markup) => Ok(self.push(Node::Raw(markup))),
      Node::Tag(tag) => Ok(self.push(Node::Start(tag.open()))),
      Node::Start(start) => Ok(self.push(Node::Start(start))),
      Node::Void(void) => Ok(self.push(Node::Void(void))),
      Node::Element(element) => Ok(self.push(Node::Element(element))),
      Node::End(end) => self.close_scope(end),
      Node::Fragment(fragment) => {
        let mut result = self.clone();
        for node in fragment.contents {
          result = result.append_node(node)?;
        }
        Ok(result)
      }
      Node::List(items) => {
        let mut result = self.clone();
        for node in items {
          result = result.append_node(node)?;
        }
        Ok(result)
      }
    }
  }

  /// Closes the nearest open scope against the operand tag. Typed tags and
  /// non-tag operands are rejected; when no scope is open at all, a
  /// synthesized closing tag appends as a literal leaf.
  pub fn close_against(&self, item: impl Into<Node>) -> MarkupResult<Fragment> {
    match item.into() {
      Node::Tag(tag) => self.close_scope(tag.close()),
      Node::Start(start) => Err(MarkupError::AlreadyTyped(start.name)),
      Node::End(end) => Err(MarkupError::AlreadyTyped(end.name)),
      Node::Void(void) => Err(MarkupError::AlreadyTyped(void.name)),
      _ => Err(MarkupError::NotATag),
    }
  }

  /// The matching scan: walk backwards for the nearest opening tag. A name
  /// match seals the span through the opening's render strategy; any other
  /// opening is a hard mismatch. Sealed elements and nested fragments are
  /// opaque to the scan. No opening anywhere leaves the closing tag as a
  /// literal leaf.
  fn close_scope(&self, end: EndTag) -> MarkupResult<Fragment> {
    for (index, item) in self.contents.iter().enumerate().rev() {
      if let Node::Start(start) = item {
        if start.name != end.name {
          return Err(MarkupError::TagMismatch {
            expected: start.name.clone(),
            got: end.name,
          });
        }

        let inner = self.contents[index + 1..].to_vec();
        let mut contents = self.contents[..index].to_vec();
        contents.push(start.seal(inner));
        return Ok(Fragment { contents });
      }
    }

    Ok(self.push(Node::End(end)))
  }

  fn push(&self, node: Node) -> Fragment {
    let mut contents = self.contents.clone();
    contents.push(node);
    Fragment { contents }
  }
}
