use crate::ast::{Expr, Markup};
use crate::error::{MarkupError, MarkupResult};
use pest::iterators::Pair;
use pest::Parser;

#[derive(Parser)]
#[grammar = "literal.pest"]
struct LiteralParser;

/// Parses one embedded-markup literal into an [`Expr::Markup`] node.
/// Malformed input, including an open/close name mismatch, is a syntax
/// error at parse time.
pub fn parse(input: &str) -> MarkupResult<Expr> {
  let mut pairs = LiteralParser::parse(Rule::Top, input)
    .map_err(|err| MarkupError::Syntax(err.to_string()))?;

  match pairs.next() {
    Some(pair) => convert_markup(pair),
    None => Err(MarkupError::Syntax("empty literal".into())),
  }
}

fn convert_markup(pair: Pair<Rule>) -> MarkupResult<Expr> {
  match pair.as_rule() {
    Rule::SelfClosing => {
      let mut inner = pair.into_inner();
      let reference = inner.next().map(|p| p.as_str().to_string()).unwrap_or_default();
      let attributes = convert_attributes(inner)?;

      Ok(Expr::Markup(Markup {
        reference,
        attributes,
        contents: None,
      }))
    }

    Rule::OpenClose => {
      let mut inner = pair.into_inner();
      let reference = inner.next().map(|p| p.as_str().to_string()).unwrap_or_default();
      let mut attributes = Vec::new();
      let mut contents = Vec::new();

      for item in inner {
        match item.as_rule() {
          Rule::Attribute => attributes.push(convert_attribute(item)?),
          Rule::CloseRef => {
            let closing = item.as_str().trim();
            if closing != reference {
              return Err(MarkupError::Syntax(format!(
                "literal opens '{}' but closes '{}'",
                reference, closing
              )));
            }
          }
          _ => contents.push(convert_content(item)?),
        }
      }

      Ok(Expr::Markup(Markup {
        reference,
        attributes,
        contents: Some(contents),
      }))
    }

    _ => unreachable!(),
  }
}

fn convert_attributes(
  pairs: pest::iterators::Pairs<Rule>,
) -> MarkupResult<Vec<(String, Option<Expr>)>> {
  pairs
    .filter(|pair| pair.as_rule() == Rule::Attribute)
    .map(convert_attribute)
    .collect()
}

fn convert_attribute(pair: Pair<Rule>) -> MarkupResult<(String, Option<Expr>)> {
  let mut inner = pair.into_inner();
  let key = inner.next().map(|p| p.as_str().to_string()).unwrap_or_default();
  let value = inner.next().map(convert_content).transpose()?;
  Ok((key, value))
}

fn convert_content(pair: Pair<Rule>) -> MarkupResult<Expr> {
  match pair.as_rule() {
    Rule::SelfClosing | Rule::OpenClose => convert_markup(pair),
    Rule::ValueString => {
      let content = pair.into_inner().next().map(|p| p.as_str()).unwrap_or("");
      Ok(Expr::string(content))
    }
    Rule::ValueNumber => Ok(Expr::Number(pair.as_str().parse().unwrap())),
    Rule::ValueBoolean => Ok(Expr::Boolean(pair.as_str().parse().unwrap())),
    Rule::ValueList => {
      let items = pair
        .into_inner()
        .map(convert_content)
        .collect::<MarkupResult<Vec<_>>>()?;
      Ok(Expr::List(items))
    }
    Rule::Identifier => Ok(Expr::ident(pair.as_str())),
    _ => unreachable!(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn parse_self_closing_literal() {
    let output = parse(r#"<hr class="divider"/>"#);
    assert_eq!(
      output,
      Ok(Expr::Markup(Markup {
        reference: "hr".into(),
        attributes: vec![("class".into(), Some(Expr::string("divider")))],
        contents: None,
      }))
    );
  }

  #[test]
  fn parse_open_close_with_text() {
    let output = parse(r#"<span> "Hello" </span>"#);
    assert_eq!(
      output,
      Ok(Expr::Markup(Markup {
        reference: "span".into(),
        attributes: vec![],
        contents: Some(vec![Expr::string("Hello")]),
      }))
    );
  }

  #[test]
  fn parse_open_close_with_empty_body() {
    let output = parse("<div></div>");
    assert_eq!(
      output,
      Ok(Expr::Markup(Markup {
        reference: "div".into(),
        attributes: vec![],
        contents: Some(vec![]),
      }))
    );
  }

  #[test]
  fn parse_multiple_attributes() {
    let output = parse(r#"<h1 autocapitalize="on" role="heading"> "Hello World!" </h1>"#);
    assert_eq!(
      output,
      Ok(Expr::Markup(Markup {
        reference: "h1".into(),
        attributes: vec![
          ("autocapitalize".into(), Some(Expr::string("on"))),
          ("role".into(), Some(Expr::string("heading"))),
        ],
        contents: Some(vec![Expr::string("Hello World!")]),
      }))
    );
  }

  #[test]
  fn parse_number_and_list_attribute_values() {
    let output = parse(r#"<h1 tabindex=5 data_stuff=[1, "Hello", 45.6]> "x" </h1>"#);
    assert_eq!(
      output,
      Ok(Expr::Markup(Markup {
        reference: "h1".into(),
        attributes: vec![
          ("tabindex".into(), Some(Expr::Number(5.0))),
          (
            "data_stuff".into(),
            Some(Expr::List(vec![
              Expr::Number(1.0),
              Expr::string("Hello"),
              Expr::Number(45.6),
            ]))
          ),
        ],
        contents: Some(vec![Expr::string("x")]),
      }))
    );
  }

  #[test]
  fn parse_valueless_attribute() {
    let output = parse("<input disabled/>");
    assert_eq!(
      output,
      Ok(Expr::Markup(Markup {
        reference: "input".into(),
        attributes: vec![("disabled".into(), None)],
        contents: None,
      }))
    );
  }

  #[test]
  fn parse_nested_literals() {
    let output = parse(r#"<p> <span> "Some text" </span> </p>"#);
    assert_eq!(
      output,
      Ok(Expr::Markup(Markup {
        reference: "p".into(),
        attributes: vec![],
        contents: Some(vec![Expr::Markup(Markup {
          reference: "span".into(),
          attributes: vec![],
          contents: Some(vec![Expr::string("Some text")]),
        })]),
      }))
    );
  }

  #[test]
  fn parse_identifier_content() {
    let output = parse("<p> greeting </p>");
    assert_eq!(
      output,
      Ok(Expr::Markup(Markup {
        reference: "p".into(),
        attributes: vec![],
        contents: Some(vec![Expr::ident("greeting")]),
      }))
    );
  }

  #[test]
  fn mismatched_close_is_a_syntax_error() {
    assert!(matches!(parse("<a></b>"), Err(MarkupError::Syntax(_))));
  }

  #[test]
  fn unterminated_literal_is_a_syntax_error() {
    assert!(matches!(parse("<a href="), Err(MarkupError::Syntax(_))));
  }

  #[test]
  fn trailing_garbage_is_a_syntax_error() {
    assert!(matches!(parse("<br/> extra"), Err(MarkupError::Syntax(_))));
  }
}
