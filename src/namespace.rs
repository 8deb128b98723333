use crate::model::Tag;

/// Mints tag references on demand for prefixed or ad-hoc markup, eg. XML
/// namespaces or custom-element libraries. Stateless; looking the same name
/// up twice yields value-equal tags.
#[derive(PartialEq, Clone, Debug)]
pub struct Namespace {
  prefix: Option<String>,
  translate: bool,
}

impl Namespace {
  pub fn new(prefix: Option<&str>) -> Namespace {
    Namespace {
      prefix: prefix.map(String::from),
      translate: true,
    }
  }

  /// Disables the underscore-to-dash translation for markup vocabularies
  /// where underscores are meaningful.
  pub fn without_translation(mut self) -> Namespace {
    self.translate = false;
    self
  }

  pub fn tag(&self, name: &str) -> Tag {
    let name = name.strip_suffix('_').unwrap_or(name);
    let name = if self.translate {
      name.replace('_', "-")
    } else {
      name.to_string()
    };

    match &self.prefix {
      Some(prefix) => Tag::new(format!("{}{}", prefix, name)),
      None => Tag::new(name),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fragment::Fragment;
  use pretty_assertions::assert_eq;

  #[test]
  fn namespace_with_prefix() {
    let xsl = Namespace::new(Some("xsl:"));
    let stylesheet = xsl.tag("stylesheet");
    let template = xsl.tag("template").with(None, attrs!(match_ = "/"));
    let condition = xsl.tag("if_").with(None, attrs!(test = "price &gt; 10"));
    let html = Tag::new("html");
    let body = Tag::new("body");
    let h1 = Tag::new("h1");

    let f = Fragment::new()
      .append(&stylesheet)
      .unwrap()
      .append(&template)
      .unwrap()
      .append(&html)
      .unwrap()
      .append(&body)
      .unwrap()
      .append(&condition)
      .unwrap()
      .append(&h1)
      .unwrap()
      .append("Very expensive")
      .unwrap()
      .close_against(&h1)
      .unwrap()
      .close_against(&condition)
      .unwrap()
      .close_against(&body)
      .unwrap()
      .close_against(&html)
      .unwrap()
      .close_against(&template)
      .unwrap()
      .close_against(&stylesheet)
      .unwrap();

    assert_eq!(
      f.to_string(),
      "<xsl:stylesheet><xsl:template match=\"/\">\
       <html><body><xsl:if test=\"price &gt; 10\">\
       <h1>Very expensive</h1>\
       </xsl:if></body></html>\
       </xsl:template></xsl:stylesheet>"
    );
  }

  #[test]
  fn namespace_with_prefix_and_translation() {
    let shoelace = Namespace::new(Some("sl-"));
    let button = shoelace
      .tag("icon_button")
      .with(None, attrs!(name = "gear", disabled = true));
    assert_eq!(
      button.open().to_string(),
      r#"<sl-icon-button name="gear" disabled>"#
    );
  }

  #[test]
  fn repeated_lookups_are_value_equal() {
    let ns = Namespace::new(Some("x-"));
    assert_eq!(ns.tag("panel"), ns.tag("panel"));
  }

  #[test]
  fn translation_can_be_disabled() {
    let ns = Namespace::new(None).without_translation();
    assert_eq!(ns.tag("snake_case").name, "snake_case");
  }
}
