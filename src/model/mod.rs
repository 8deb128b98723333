pub mod attrs;
pub mod node;
pub mod tag;
pub mod value;

pub use attrs::Attributes;
pub use node::{Element, Node};
pub use tag::{ComponentFn, EndTag, RenderStrategy, SelfClosingStyle, SelfClosingTag, StartTag, Tag};
pub use value::Value;
