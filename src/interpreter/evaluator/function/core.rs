use tracing::trace;

use crate::{
    ast::{Ast, Node, NodeId},
    error::EvalError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            environment::NameTable,
            function::{builtin, constant::constant},
        },
        scanner::Coordinate,
        tag::Tag,
        value::{closure::Closure, core::Value},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the location
/// of the call. It returns the computed value wrapped in `EvalResult`.
type BuiltinFn = fn(&[Value], Coordinate) -> EvalResult<Value>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - the control word without its backslash,
/// - the number of arguments,
/// - a function pointer implementing the builtin.
///
/// The macro produces `BuiltinDef` (internal metadata), `BUILTIN_TABLE`
/// (static table for lookup) and `BUILTIN_FUNCTIONS` (public list of builtin
/// names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Control words (without backslash) of every builtin function.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"    => { arity: 1, func: builtin::sin },
    "cos"    => { arity: 1, func: builtin::cos },
    "tan"    => { arity: 1, func: builtin::tan },
    "arcsin" => { arity: 1, func: builtin::arcsin },
    "arccos" => { arity: 1, func: builtin::arccos },
    "arctan" => { arity: 1, func: builtin::arctan },
    "sinh"   => { arity: 1, func: builtin::sinh },
    "cosh"   => { arity: 1, func: builtin::cosh },
    "tanh"   => { arity: 1, func: builtin::tanh },
    "exp"    => { arity: 1, func: builtin::exp },
    "ln"     => { arity: 1, func: builtin::ln },
    "lg"     => { arity: 1, func: builtin::lg },
    "abs"    => { arity: 1, func: builtin::abs },
    "floor"  => { arity: 1, func: builtin::floor },
    "ceil"   => { arity: 1, func: builtin::ceil },
    "round"  => { arity: 1, func: builtin::round },
    "sign"   => { arity: 1, func: builtin::sign },
    "val"    => { arity: 1, func: builtin::val },
    "sqrt"   => { arity: 1, func: builtin::sqrt },
    "max"    => { arity: 2, func: builtin::max },
    "min"    => { arity: 2, func: builtin::min },
    "hypot"  => { arity: 2, func: builtin::hypot },
    "mod"    => { arity: 2, func: builtin::modulo },
    "atan"   => { arity: 2, func: builtin::atan },
}

impl Context {
    /// Evaluates a generic keyword such as `\pi`, `\meter` or `\sqrt{2}`.
    ///
    /// Constants take no arguments. Builtin functions check their argument
    /// count before the arguments are handed over.
    ///
    /// # Errors
    /// - `UndefinedKeyword` for control words that are neither.
    /// - `ArgumentCountMismatch` for a wrong number of arguments.
    pub(crate) fn eval_keyword(&mut self,
                               ast: &Ast,
                               node: &Node,
                               mut local: Option<&mut NameTable>)
                               -> EvalResult<Value> {
        let word = node.label.trim_start_matches('\\');

        if let Some(value) = constant(word) {
            if !node.fields.is_empty() {
                return Err(EvalError::ArgumentCountMismatch { name:     node.label.clone(),
                                                              expected: 0,
                                                              found:    node.fields.len(),
                                                              coord:    node.coord, });
            }
            return Ok(value);
        }

        let builtin = BUILTIN_TABLE.iter()
                                   .find(|b| b.name == word)
                                   .ok_or_else(|| EvalError::UndefinedKeyword { name:  node.label.clone(),
                                                                                coord: node.coord, })?;
        if node.fields.len() != builtin.arity {
            return Err(EvalError::ArgumentCountMismatch { name:     node.label.clone(),
                                                          expected: builtin.arity,
                                                          found:    node.fields.len(),
                                                          coord:    node.coord, });
        }

        let mut args = Vec::with_capacity(node.fields.len());
        for &arg in &node.fields {
            args.push(self.eval(ast, arg, local.as_deref_mut())?);
        }
        (builtin.func)(&args, node.coord)
    }

    /// Evaluates a call `f(a, b)` of a user-defined function.
    ///
    /// The callee is resolved like any other name, then the arguments are
    /// evaluated left to right in the caller's scope.
    pub(crate) fn eval_call(&mut self,
                            ast: &Ast,
                            node: &Node,
                            mut local: Option<&mut NameTable>)
                            -> EvalResult<Value> {
        let callee = self.env
                         .lookup(&node.label, local.as_deref())
                         .cloned()
                         .ok_or_else(|| EvalError::UndefinedVariable { name:  node.label.clone(),
                                                                       coord: node.coord, })?;
        let closure = callee.as_closure(node.coord)?;

        let mut args = Vec::with_capacity(node.fields.len());
        for &arg in &node.fields {
            args.push(self.eval(ast, arg, local.as_deref_mut())?);
        }
        self.call_closure(&node.label, closure, args, node.coord)
    }

    /// Executes a closure with already evaluated arguments.
    ///
    /// The body runs against a fresh local table: the captured snapshot with
    /// the parameters bound on top. Writes to names that exist globally
    /// still reach the global table.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` if `args` does not match the parameters.
    /// - `RecursionLimit` once calls nest deeper than the configured bound.
    pub fn call_closure(&mut self,
                        name: &str,
                        closure: &Closure,
                        args: Vec<Value>,
                        coord: Coordinate)
                        -> EvalResult<Value> {
        if args.len() != closure.params.len() {
            return Err(EvalError::ArgumentCountMismatch { name: name.to_string(),
                                                          expected: closure.params.len(),
                                                          found: args.len(),
                                                          coord });
        }
        if self.depth >= self.settings.max_call_depth {
            return Err(EvalError::RecursionLimit { limit: self.settings.max_call_depth,
                                                   coord });
        }

        let mut table = closure.captured.clone();
        table.extend(closure.params.iter().cloned().zip(args));

        self.depth += 1;
        let result = self.eval(&closure.body, closure.root, Some(&mut table));
        self.depth -= 1;
        result
    }

    /// Defines `f(a, b) := body`.
    ///
    /// Parameters must be distinct plain identifiers. The closure captures a
    /// copy of the defining scope (the local table inside a call, the global
    /// table otherwise) and a private copy of the body subtree, then is bound
    /// to the function's name like any other value.
    pub(crate) fn define_function(&mut self,
                                  ast: &Ast,
                                  target: &Node,
                                  body: NodeId,
                                  local: Option<&mut NameTable>)
                                  -> EvalResult<Value> {
        let mut params: Vec<String> = Vec::with_capacity(target.fields.len());
        for &field in &target.fields {
            let param = &ast[field];
            if param.tag != Tag::Ident || !param.fields.is_empty() {
                return Err(EvalError::InvalidFunctionDefinition { coord: target.coord });
            }
            if params.contains(&param.label) {
                return Err(EvalError::DuplicateParameter { name:  param.label.clone(),
                                                           coord: param.coord, });
            }
            params.push(param.label.clone());
        }

        let captured = self.env.snapshot(local.as_deref());
        let (body, root) = ast.subtree(body);
        trace!(name = %target.label, params = ?params, nodes = body.len(), "defining function");

        let closure = Value::from(Closure { params,
                                            captured,
                                            body,
                                            root });
        self.env.define(target.label.clone(), closure.clone(), local);
        Ok(closure)
    }
}
