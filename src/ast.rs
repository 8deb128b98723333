use serde::Serialize;

/// A minimal host expression tree. The unextended grammar is everything but
/// [`Expr::Markup`]; the syntax transform removes every `Markup` node, so a
/// transformed tree is plain constructor calls over literals and
/// identifiers.
#[derive(PartialEq, Clone, Debug, Serialize)]
pub enum Expr {
  Null,
  Boolean(bool),
  Number(f64),
  String(String),
  Ident(String),
  List(Vec<Expr>),
  Call(Call),
  Markup(Markup),
}

impl Expr {
  pub fn string(value: impl Into<String>) -> Expr {
    Expr::String(value.into())
  }

  pub fn ident(name: impl Into<String>) -> Expr {
    Expr::Ident(name.into())
  }
}

/// A constructor or function call with positional and keyword arguments.
#[derive(PartialEq, Clone, Debug, Serialize)]
pub struct Call {
  pub func: Box<Expr>,
  pub args: Vec<Expr>,
  pub kwargs: Vec<(String, Expr)>,
}

impl Call {
  pub fn new(func: Expr, args: Vec<Expr>, kwargs: Vec<(String, Expr)>) -> Call {
    Call {
      func: Box::new(func),
      args,
      kwargs,
    }
  }
}

/// An embedded-markup literal as parsed: the extended grammar's contribution
/// to the tree. `contents` is `None` for the self-closing form and `Some`
/// (possibly empty) for an open/close pair; the transform keeps that
/// distinction all the way into the deferred element.
#[derive(PartialEq, Clone, Debug, Serialize)]
pub struct Markup {
  pub reference: String,
  pub attributes: Vec<(String, Option<Expr>)>,
  pub contents: Option<Vec<Expr>>,
}
