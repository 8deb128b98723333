use thiserror::Error;

pub type MarkupResult<T> = Result<T, MarkupError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarkupError {
  #[error("tag '{0}' is untyped; open or close it first")]
  UntypedTag(String),

  #[error("tag '{0}' already has its type set")]
  AlreadyTyped(String),

  #[error("tag mismatch: closing '{got}' but the nearest open tag is '{expected}'")]
  TagMismatch { expected: String, got: String },

  #[error("only tags can close a scope")]
  NotATag,

  #[error("malformed markup literal: {0}")]
  Syntax(String),
}
