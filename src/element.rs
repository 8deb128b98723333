use crate::ast::{Call, Expr};
use crate::error::{MarkupError, MarkupResult};
use crate::escape::escape;
use crate::htmltags;
use crate::model::{Attributes, ComponentFn, Node, SelfClosingStyle, Value};
use crate::render::html::render_to_string;
use crate::transform::ELEMENT_CONSTRUCTOR;
use std::collections::HashMap;
use std::rc::Rc;

/// Component functions looked up by name when a deferred element with a
/// live reference renders.
pub type Registry = HashMap<String, Rc<ComponentFn>>;

/// What a deferred element points at: a tag name fixed at transform time,
/// or an identifier resolved against the [`Registry`] at render time.
#[derive(PartialEq, Clone, Debug)]
pub enum Ref {
  Static(String),
  Dynamic(String),
}

impl Ref {
  fn name(&self) -> &str {
    match self {
      Ref::Static(name) | Ref::Dynamic(name) => name,
    }
  }
}

/// One item of a deferred element's contents.
#[derive(PartialEq, Clone, Debug)]
pub enum Content {
  Text(String),
  Element(Deferred),
}

impl Content {
  fn render(&self, registry: &Registry) -> MarkupResult<String> {
    match self {
      Content::Text(text) => Ok(escape(text)),
      Content::Element(element) => element.render(registry),
    }
  }

  fn to_node(&self, registry: &Registry) -> MarkupResult<Node> {
    match self {
      Content::Text(text) => Ok(Node::Text(text.clone())),
      Content::Element(element) => Ok(Node::Raw(element.render(registry)?)),
    }
  }
}

/// The declarative element the syntax transform constructs: a reference,
/// positional contents and keyword attributes, rendered on demand.
/// `contents: None` means the self-closing form; `Some(vec![])` is an
/// explicit open/close pair with no children. The two render differently,
/// so the distinction survives construction.
#[derive(PartialEq, Clone, Debug)]
pub struct Deferred {
  pub reference: Option<Ref>,
  pub contents: Option<Vec<Content>>,
  pub attributes: Attributes,
}

impl Deferred {
  pub fn new(
    reference: Option<Ref>,
    contents: Option<Vec<Content>>,
    attributes: Attributes,
  ) -> Deferred {
    Deferred {
      reference,
      contents,
      attributes,
    }
  }

  /// Materializes a deferred element from a transformed constructor call.
  /// Anything other than the shape the transform emits is rejected.
  pub fn from_call(expr: &Expr) -> MarkupResult<Deferred> {
    let call = match expr {
      Expr::Call(call) => call,
      other => return Err(malformed(other)),
    };

    match call.func.as_ref() {
      Expr::Ident(name) if name == ELEMENT_CONSTRUCTOR => (),
      other => return Err(malformed(other)),
    }

    let mut args = call.args.iter();

    let reference = match args.next() {
      Some(Expr::String(name)) => Some(Ref::Static(name.clone())),
      Some(Expr::Ident(name)) => Some(Ref::Dynamic(name.clone())),
      Some(Expr::Null) | None => None,
      Some(other) => return Err(malformed(other)),
    };

    let contents = match args.next() {
      Some(Expr::List(items)) => Some(
        items
          .iter()
          .map(convert_content)
          .collect::<MarkupResult<Vec<_>>>()?,
      ),
      Some(other) => return Err(malformed(other)),
      None => None,
    };

    let mut attributes = Attributes::new();
    for (key, value) in &call.kwargs {
      attributes.insert(key.clone(), convert_value(value)?);
    }

    Ok(Deferred::new(reference, contents, attributes))
  }

  /// Renders the element. A live reference found in the registry hands the
  /// contents and attributes to the component; everything else renders as
  /// markup, with the void-element catalog picking the self-closing style.
  pub fn render(&self, registry: &Registry) -> MarkupResult<String> {
    if let Some(Ref::Dynamic(name)) = &self.reference {
      if let Some(component) = registry.get(name) {
        let contents = match &self.contents {
          Some(items) => items
            .iter()
            .map(|item| item.to_node(registry))
            .collect::<MarkupResult<Vec<_>>>()?,
          None => vec![],
        };
        return render_to_string(&component(contents, &self.attributes));
      }
    }

    let reference = match &self.reference {
      Some(reference) => reference,
      None => {
        let mut output = String::new();
        if let Some(items) = &self.contents {
          for item in items {
            output.push_str(&item.render(registry)?);
          }
        }
        return Ok(output);
      }
    };

    let name = reference.name();
    match &self.contents {
      None => {
        let style = if htmltags::is_void(name) {
          SelfClosingStyle::Html
        } else {
          SelfClosingStyle::Xml
        };
        Ok(format!("<{}{}{}", name, self.attributes.encode(), style))
      }
      Some(children) => {
        let mut output = format!("<{}{}>", name, self.attributes.encode());
        for child in children {
          output.push_str(&child.render(registry)?);
        }
        output.push_str("</");
        output.push_str(name);
        output.push('>');
        Ok(output)
      }
    }
  }
}

fn convert_content(expr: &Expr) -> MarkupResult<Content> {
  match expr {
    Expr::String(text) => Ok(Content::Text(text.clone())),
    Expr::Number(number) => Ok(Content::Text(number.to_string())),
    Expr::Boolean(value) => Ok(Content::Text(value.to_string())),
    Expr::Call(_) => Ok(Content::Element(Deferred::from_call(expr)?)),
    other => Err(malformed(other)),
  }
}

fn convert_value(expr: &Expr) -> MarkupResult<Value> {
  match expr {
    Expr::Null => Ok(Value::Null),
    Expr::Boolean(value) => Ok(Value::Boolean(*value)),
    Expr::Number(number) => Ok(Value::Number(*number)),
    Expr::String(text) => Ok(Value::String(text.clone())),
    Expr::List(items) => Ok(Value::List(
      items
        .iter()
        .map(convert_value)
        .collect::<MarkupResult<Vec<_>>>()?,
    )),
    other => Err(malformed(other)),
  }
}

fn malformed(expr: &Expr) -> MarkupError {
  MarkupError::Syntax(format!("not a deferred element constructor: {:?}", expr))
}
