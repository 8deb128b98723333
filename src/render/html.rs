use crate::error::{MarkupError, MarkupResult};
use crate::escape::escape;
use crate::fragment::Fragment;
use crate::model::{Element, Node};
use std::fmt;
use std::io::{Error, ErrorKind, Write};

/// Renders a node tree into a writer. Fails on I/O errors and on untyped
/// tags, which have no rendering.
pub fn render<W: Write>(node: &Node, writer: &mut W) -> Result<(), Error> {
  let rendered =
    render_to_string(node).map_err(|err| Error::new(ErrorKind::InvalidInput, err))?;
  writer.write_all(&rendered.into_bytes())
}

pub fn render_to_string(node: &Node) -> MarkupResult<String> {
  let mut output = String::new();
  write_node(node, &mut output)?;
  Ok(output)
}

fn write_node(node: &Node, output: &mut String) -> MarkupResult<()> {
  match node {
    Node::Text(text) => output.push_str(&escape(text)),
    Node::Raw(markup) => output.push_str(markup),
    Node::Tag(tag) => return Err(MarkupError::UntypedTag(tag.name.clone())),

    Node::Start(start) => {
      output.push('<');
      output.push_str(&start.name);
      output.push_str(&start.attributes.encode());
      output.push('>');
    }

    Node::End(end) => {
      output.push_str("</");
      output.push_str(&end.name);
      output.push('>');
    }

    Node::Void(void) => {
      output.push('<');
      output.push_str(&void.name);
      output.push_str(&void.attributes.encode());
      output.push_str(&void.style.to_string());
    }

    Node::Element(element) => write_element(element, output)?,
    Node::Fragment(fragment) => write_fragment(fragment, output)?,

    Node::List(items) => {
      for item in items {
        write_node(item, output)?;
      }
    }
  }

  Ok(())
}

fn write_element(element: &Element, output: &mut String) -> MarkupResult<()> {
  output.push('<');
  output.push_str(&element.name);
  output.push_str(&element.attributes.encode());
  output.push('>');

  for child in &element.contents {
    write_node(child, output)?;
  }

  output.push_str("</");
  output.push_str(&element.name);
  output.push('>');
  Ok(())
}

fn write_fragment(fragment: &Fragment, output: &mut String) -> MarkupResult<()> {
  for node in fragment.iter() {
    write_node(node, output)?;
  }
  Ok(())
}

impl fmt::Display for Node {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let mut output = String::new();
    write_node(self, &mut output).map_err(|_| fmt::Error)?;
    write!(f, "{}", output)
  }
}

impl fmt::Display for Element {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let mut output = String::new();
    write_element(self, &mut output).map_err(|_| fmt::Error)?;
    write!(f, "{}", output)
  }
}

impl fmt::Display for Fragment {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let mut output = String::new();
    write_fragment(self, &mut output).map_err(|_| fmt::Error)?;
    write!(f, "{}", output)
  }
}
