//! Expression IR of the sugar-to-C++ compiler.
//!
//! The parser builds a [`ast::Root`] bottom-up; backends implement
//! [`visitor::Visitor`] and walk the finished, immutable tree through
//! [`visitor::AstNode::accept`].

pub mod ast;
pub mod cpp_renderer;
pub mod errors;
pub mod kind_collector;
pub mod tokens;
pub mod visitor;

pub use ast::{Expression, NodeKind, Root, Statement};
pub use cpp_renderer::{CppRenderer, RenderOptions};
pub use errors::{Error, Result};
pub use kind_collector::KindCollector;
pub use visitor::{AstNode, Visitor};

mod tests;
