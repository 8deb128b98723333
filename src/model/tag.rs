use super::attrs::Attributes;
use super::node::{Element, Node};
use super::value::Value;
use std::fmt;
use std::rc::Rc;

/// Signature shared by component render functions: the matched contents and
/// the opening tag's attributes go in, a renderable node comes out.
pub type ComponentFn = dyn Fn(Vec<Node>, &Attributes) -> Node;

/// What happens when an opening tag is matched by a closing tag. The default
/// seals the span into an [`Element`]; a component substitutes its own
/// render function.
#[derive(Clone, Default)]
pub enum RenderStrategy {
  #[default]
  Default,
  Component(Rc<ComponentFn>),
}

impl PartialEq for RenderStrategy {
  fn eq(&self, other: &RenderStrategy) -> bool {
    match (self, other) {
      (RenderStrategy::Default, RenderStrategy::Default) => true,
      (RenderStrategy::Component(left), RenderStrategy::Component(right)) => {
        Rc::ptr_eq(left, right)
      }
      _ => false,
    }
  }
}

impl fmt::Debug for RenderStrategy {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      RenderStrategy::Default => write!(f, "Default"),
      RenderStrategy::Component(_) => write!(f, "Component(..)"),
    }
  }
}

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum SelfClosingStyle {
  Html,
  Xml,
}

impl fmt::Display for SelfClosingStyle {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      SelfClosingStyle::Html => write!(f, ">"),
      SelfClosingStyle::Xml => write!(f, "/>"),
    }
  }
}

/// An untyped tag reference. It carries a name and pending attributes but
/// cannot render or join a fragment until [`Tag::open`] or [`Tag::close`]
/// types it.
#[derive(PartialEq, Clone, Debug)]
pub struct Tag {
  pub name: String,
  pub attributes: Attributes,
  pub strategy: RenderStrategy,
}

impl Tag {
  pub fn new(name: impl Into<String>) -> Tag {
    Tag {
      name: name.into(),
      attributes: Attributes::new(),
      strategy: RenderStrategy::Default,
    }
  }

  pub fn open(&self) -> StartTag {
    StartTag {
      name: self.name.clone(),
      attributes: self.attributes.clone(),
      strategy: self.strategy.clone(),
    }
  }

  pub fn close(&self) -> EndTag {
    EndTag {
      name: self.name.clone(),
    }
  }

  /// Returns a new tag with merged attributes. The shorthand is a
  /// `#id.class1.class2` selector: a leading `#` segment sets `id_`, the
  /// dot segments accumulate on the `class_` list. Explicit attributes
  /// merge on top.
  pub fn with(&self, shorthand: Option<&str>, attributes: Attributes) -> Tag {
    let mut merged = self.attributes.clone();

    if let Some(shorthand) = shorthand {
      let mut classes: Vec<&str> = shorthand.split('.').collect();
      if let Some(id) = classes.first().and_then(|first| first.strip_prefix('#')) {
        merged.insert("id_", Value::from(id));
        classes.remove(0);
      }
      for class in classes {
        merged.append_class(class);
      }
    }

    merged.extend(attributes);

    Tag {
      name: self.name.clone(),
      attributes: merged,
      strategy: self.strategy.clone(),
    }
  }

  /// Appends one dash-translated class name, returning a new tag.
  pub fn with_class(&self, class: &str) -> Tag {
    let mut attributes = self.attributes.clone();
    attributes.append_class(class.replace('_', "-"));

    Tag {
      name: self.name.clone(),
      attributes,
      strategy: self.strategy.clone(),
    }
  }
}

/// A typed opening tag. Starts a nesting scope when appended to a fragment.
#[derive(PartialEq, Clone, Debug)]
pub struct StartTag {
  pub name: String,
  pub attributes: Attributes,
  pub strategy: RenderStrategy,
}

impl StartTag {
  pub fn new(name: impl Into<String>) -> StartTag {
    Tag::new(name).open()
  }

  /// Seals a matched span. The single dispatch point for the per-tag render
  /// strategy: either a generic element or the component's own output.
  pub fn seal(&self, contents: Vec<Node>) -> Node {
    match &self.strategy {
      RenderStrategy::Default => Node::Element(Element {
        name: self.name.clone(),
        attributes: self.attributes.clone(),
        contents,
      }),
      RenderStrategy::Component(render) => render(contents, &self.attributes),
    }
  }
}

impl fmt::Display for StartTag {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "<{}{}>", self.name, self.attributes.encode())
  }
}

/// A typed closing tag. Terminates the nearest open scope.
#[derive(PartialEq, Clone, Debug)]
pub struct EndTag {
  pub name: String,
}

impl EndTag {
  pub fn new(name: impl Into<String>) -> EndTag {
    EndTag { name: name.into() }
  }
}

impl fmt::Display for EndTag {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "</{}>", self.name)
  }
}

/// A tag with no contents and no closing counterpart.
#[derive(PartialEq, Clone, Debug)]
pub struct SelfClosingTag {
  pub name: String,
  pub attributes: Attributes,
  pub style: SelfClosingStyle,
}

impl SelfClosingTag {
  pub fn new(name: impl Into<String>, style: SelfClosingStyle) -> SelfClosingTag {
    SelfClosingTag {
      name: name.into(),
      attributes: Attributes::new(),
      style,
    }
  }

  pub fn with(&self, shorthand: Option<&str>, attributes: Attributes) -> SelfClosingTag {
    let merged = Tag {
      name: self.name.clone(),
      attributes: self.attributes.clone(),
      strategy: RenderStrategy::Default,
    }
    .with(shorthand, attributes);

    SelfClosingTag {
      name: merged.name,
      attributes: merged.attributes,
      style: self.style,
    }
  }
}

impl fmt::Display for SelfClosingTag {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "<{}{}{}", self.name, self.attributes.encode(), self.style)
  }
}
