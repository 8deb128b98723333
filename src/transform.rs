use crate::ast::{Call, Expr, Markup};
use crate::htmltags;

/// The identifier every rewritten literal calls.
pub const ELEMENT_CONSTRUCTOR: &str = "Deferred";

/// Rewrites every embedded-markup literal in the tree into a deferred
/// element constructor call, innermost literals first. Pure tree-to-tree;
/// the output contains no [`Expr::Markup`] nodes.
pub fn transform(expr: Expr) -> Expr {
  match expr {
    Expr::Markup(markup) => transform_markup(markup),

    Expr::List(items) => Expr::List(items.into_iter().map(transform).collect()),

    Expr::Call(call) => Expr::Call(Call {
      func: Box::new(transform(*call.func)),
      args: call.args.into_iter().map(transform).collect(),
      kwargs: call
        .kwargs
        .into_iter()
        .map(|(key, value)| (key, transform(value)))
        .collect(),
    }),

    other => other,
  }
}

fn transform_markup(markup: Markup) -> Expr {
  // A catalog name is static markup; anything else stays a live reference
  // so user components resolve at render time.
  let reference = if htmltags::is_standard(&markup.reference) {
    Expr::String(markup.reference)
  } else {
    Expr::Ident(markup.reference)
  };

  let kwargs = markup
    .attributes
    .into_iter()
    .map(|(key, value)| {
      let value = value.map(transform).unwrap_or(Expr::Boolean(true));
      (key, value)
    })
    .collect();

  let mut args = vec![reference];
  if let Some(contents) = markup.contents {
    args.push(Expr::List(contents.into_iter().map(transform).collect()));
  }

  Expr::Call(Call::new(Expr::ident(ELEMENT_CONSTRUCTOR), args, kwargs))
}
