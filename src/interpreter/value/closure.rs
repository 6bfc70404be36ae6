use crate::{
    ast::{Ast, NodeId},
    interpreter::evaluator::environment::NameTable,
};

/// A user-defined function.
///
/// The body is copied out of the defining block's tree, so a closure stays
/// valid after that block has been dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Closure {
    /// Parameter names, in order.
    pub params:   Vec<String>,
    /// Bindings visible at the definition site.
    pub captured: NameTable,
    /// Private arena holding the body.
    pub body:     Ast,
    /// Root of the body inside `body`.
    pub root:     NodeId,
}
