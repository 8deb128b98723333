use crate::model::{Attributes, Node, RenderStrategy, Tag};
use std::rc::Rc;

/// Wraps a render function in a tag. When the tag's opening is closed, the
/// matched contents and attributes go to the function instead of sealing a
/// generic element, and its return value splices in as a single node.
/// Underscores in the name become dashes, so a function-style identifier
/// turns into a custom-element name.
pub fn component<F>(name: &str, render: F) -> Tag
where
  F: Fn(Vec<Node>, &Attributes) -> Node + 'static,
{
  Tag {
    name: name.replace('_', "-"),
    attributes: Attributes::new(),
    strategy: RenderStrategy::Component(Rc::new(render)),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fragment::Fragment;
  use crate::model::Value;
  use pretty_assertions::assert_eq;

  fn wrapper_component() -> Tag {
    component("my_component", |contents, attributes| {
      let div = Tag::new("div").with(None, attributes.clone());
      let f = Fragment::new()
        .append(div.open())
        .unwrap()
        .append(contents)
        .unwrap()
        .close_against(&div)
        .unwrap();
      Node::Fragment(f)
    })
  }

  #[test]
  fn component_name_translates_underscores() {
    assert_eq!(wrapper_component().name, "my-component");
  }

  #[test]
  fn component_overrides_element_construction() {
    let my_component = wrapper_component();
    let h1 = Tag::new("h1");
    let f = Fragment::new()
      .append(Tag::new("html"))
      .unwrap()
      .append(Tag::new("body"))
      .unwrap()
      .append(&my_component)
      .unwrap()
      .append(&h1)
      .unwrap()
      .append("hello")
      .unwrap()
      .close_against(&h1)
      .unwrap()
      .close_against(&my_component)
      .unwrap();

    assert_eq!(f.to_string(), "<html><body><div><h1>hello</h1></div>");
  }

  #[test]
  fn component_reads_its_attributes() {
    let navbar = component("navbar", |_contents, attributes| {
      let ul = Tag::new("ul").with(None, attrs!(class_ = vec!["navbar"]));
      let mut f = Fragment::new().append(ul.open()).unwrap();

      if let Some(Value::List(targets)) = attributes.get("targets") {
        for target in targets {
          let target = target.to_string();
          let li = Tag::new("li").with(None, attrs!(class_ = target.clone()));
          let a = Tag::new("a").with(None, attrs!(href = format!("/{}", target)));
          let mut label: Vec<char> = target.chars().collect();
          label[0] = label[0].to_ascii_uppercase();

          f = f
            .append(&li)
            .unwrap()
            .append(&a)
            .unwrap()
            .append(label.into_iter().collect::<String>())
            .unwrap()
            .close_against(&a)
            .unwrap()
            .close_against(&li)
            .unwrap();
        }
      }

      Node::Fragment(f.close_against(&ul).unwrap())
    });

    let targets = Value::from(vec!["home", "about", "products", "contact"]);
    let opened = navbar.with(None, attrs!(targets = targets));
    let f = Fragment::new()
      .append(opened.open())
      .unwrap()
      .close_against(&navbar)
      .unwrap();

    assert_eq!(
      f.to_string(),
      "<ul class=\"navbar\">\
       <li class=\"home\"><a href=\"/home\">Home</a></li>\
       <li class=\"about\"><a href=\"/about\">About</a></li>\
       <li class=\"products\"><a href=\"/products\">Products</a></li>\
       <li class=\"contact\"><a href=\"/contact\">Contact</a></li>\
       </ul>"
    );
  }
}
