use std::rc::Rc;

use crate::{
    ast::{Ast, Node},
    error::EvalError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, child},
            environment::NameTable,
            index::resolve_index,
        },
        tag::Tag,
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `target := expr`.
    ///
    /// Three targets are accepted:
    /// - a plain name, bound through [`Environment::define`];
    /// - a subscripted name `m_{i, j}`, whose matrix binding is updated in
    ///   place, in the global table whenever the name exists there;
    /// - a call form `f(a, b)`, which defines a function.
    ///
    /// The assignment yields the assigned value.
    ///
    /// # Errors
    /// `InvalidAssignmentTarget` for any other left side, plus the errors of
    /// the right side and of the subscript.
    ///
    /// [`Environment::define`]: crate::interpreter::evaluator::environment::Environment::define
    pub(crate) fn eval_assign(&mut self,
                              ast: &Ast,
                              node: &Node,
                              mut local: Option<&mut NameTable>)
                              -> EvalResult<Value> {
        let target = &ast[child(node, node.left)?];
        let body = child(node, node.right)?;

        match target.tag {
            Tag::Ident if target.fields.is_empty() => {
                let value = self.eval(ast, body, local.as_deref_mut())?;
                self.env.define(target.label.clone(), value.clone(), local);
                Ok(value)
            },
            Tag::Ident => {
                let indices = self.eval_indices(ast, target, local.as_deref_mut())?;
                let value = self.eval(ast, body, local.as_deref_mut())?;
                let coord = target.coord;

                let slot = self.env
                               .lookup_for_write(&target.label, local)
                               .ok_or_else(|| EvalError::UndefinedVariable { name: target.label.clone(),
                                                                             coord })?;
                let Value::Matrix(matrix) = slot else {
                    return Err(slot.type_error("matrix", coord));
                };
                let (row, col) = resolve_index(matrix, &indices, coord)?;
                *Rc::make_mut(matrix).get_mut(row, col) = value.clone();
                Ok(value)
            },
            Tag::Func => self.define_function(ast, target, body, local),
            _ => Err(EvalError::InvalidAssignmentTarget { coord: target.coord }),
        }
    }
}
