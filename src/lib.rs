

#[macro_use]
extern crate pest_derive;
extern crate pest;

#[macro_use]
pub mod macros;
pub mod ast;
pub mod component;
pub mod element;
pub mod error;
pub mod escape;
pub mod fragment;
pub mod htmltags;
pub mod literal;
pub mod model;
pub mod namespace;
pub mod render;
pub mod transform;
