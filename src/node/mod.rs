//! Expression node model: the tree variants, their value computation,
//! canonical ordering, simplification algebra and textual rendering.

mod ast;
mod display;
mod eval;
mod order;
mod simplify;

pub use ast::Node;
