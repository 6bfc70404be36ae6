use crate::{
    ast::{Ast, Node, NodeId},
    error::EvalError,
    interpreter::{
        evaluator::{
            environment::{Environment, NameTable},
            replacement::ReplacementMap,
        },
        tag::Tag,
        value::{core::Value, matrix::Matrix},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Default bound on the iterations of one `\while` or `\product` loop.
pub const MAX_ITERATIONS: usize = 10_000;
/// Default bound on nested function calls.
pub const MAX_CALL_DEPTH: usize = 256;
/// Default step of `\range` when none is given.
pub const RANGE_STEP: f64 = 0.1;
/// Default bound on the number of elements a `\range` may produce.
pub const MAX_RANGE_LEN: usize = 1_000_000;

/// Limits and defaults applied during evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Maximum iterations of one `\while` or `\product` loop.
    pub max_iterations: usize,
    /// Maximum depth of nested function calls.
    pub max_call_depth: usize,
    /// Step of `\range` when the optional `[step]` is omitted.
    pub range_step:     f64,
    /// Maximum number of elements of one range.
    pub max_range_len:  usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self { max_iterations: MAX_ITERATIONS,
               max_call_depth: MAX_CALL_DEPTH,
               range_step:     RANGE_STEP,
               max_range_len:  MAX_RANGE_LEN, }
    }
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the global name table, which
/// persists across blocks of one document, and the replacements recorded
/// while evaluating the current block.
///
/// ## Usage
///
/// `Context` is created once per document and reused for every block. Each
/// block's tree is evaluated with [`Context::eval`] at global scope; the
/// caller then stitches and clears the replacement map.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Global bindings.
    pub env:          Environment,
    /// Placeholder and graphic rewrites of the current block.
    pub replacements: ReplacementMap,
    /// Evaluation limits.
    pub settings:     Settings,
    pub(crate) depth: usize,
}

impl Context {
    /// Creates a context with empty tables and default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context with empty tables and the given settings.
    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self { settings,
               ..Self::default() }
    }

    /// Evaluates the node `id` of `ast` and returns the resulting value.
    ///
    /// This is the main entry point for evaluation. The evaluator dispatches
    /// on the node tag: leaves, names and calls, statement lists, matrix
    /// literals, operators, and the keyword forms.
    ///
    /// # Parameters
    /// - `ast`: Arena the node lives in.
    /// - `id`: Node to evaluate.
    /// - `local`: Local table of the active function call, or `None` at
    ///   global scope.
    ///
    /// # Returns
    /// The node's value. Statement lists yield their last statement's value
    /// (`0` when empty).
    ///
    /// # Example
    /// ```
    /// use texcalc::interpreter::{
    ///     evaluator::core::Context,
    ///     lexer::tokenize,
    ///     parser::core::parse,
    ///     scanner::Block,
    ///     value::core::Value,
    /// };
    ///
    /// let tokens = tokenize(&Block::from_source("x := 4 \\\\ x^2 + 1")).unwrap();
    /// let (ast, root) = parse(&tokens).unwrap();
    ///
    /// let mut ctx = Context::new();
    /// assert_eq!(ctx.eval(&ast, root, None).unwrap(), Value::number(17.0));
    /// ```
    pub fn eval(&mut self,
                ast: &Ast,
                id: NodeId,
                mut local: Option<&mut NameTable>)
                -> EvalResult<Value> {
        let node = &ast[id];
        match node.tag {
            Tag::Number => Self::eval_number(node),
            Tag::Ident => self.eval_ident(ast, node, local),
            Tag::Func => self.eval_call(ast, node, local),
            Tag::Keyword => self.eval_keyword(ast, node, local),
            Tag::Root | Tag::BeginBlock => {
                let mut result = Value::default();
                for &statement in &node.fields {
                    result = self.eval(ast, statement, local.as_deref_mut())?;
                }
                Ok(result)
            },
            Tag::BeginMatrix => self.eval_matrix_literal(ast, node, local),
            Tag::BeginCase => self.eval_cases(ast, node, local),
            Tag::Assign => self.eval_assign(ast, node, local),
            Tag::Eq | Tag::Neq => self.eval_equality(ast, node, local),
            Tag::Frac => {
                let (left, right) = self.eval_operands(ast, node, local)?;
                Self::eval_binary(Tag::Div, &left, &right, node.coord)
            },
            tag if tag.info().is_binary => {
                let (left, right) = self.eval_operands(ast, node, local)?;
                Self::eval_binary(tag, &left, &right, node.coord)
            },
            Tag::UAdd | Tag::USub | Tag::Not => {
                let operand = self.eval(ast, child(node, node.right)?, local)?;
                Self::eval_unary(node.tag, &operand, node.coord)
            },
            Tag::Transpose => {
                let operand = self.eval(ast, child(node, node.left)?, local)?;
                Self::eval_transpose(&operand, node.coord)
            },
            Tag::Range => self.eval_range(ast, node, local),
            Tag::If => self.eval_if(ast, node, local),
            Tag::While => self.eval_while(ast, node, local),
            Tag::Product => self.eval_product(ast, node, local),
            Tag::Graphic => self.eval_graphic(ast, node, local),
            Tag::Placeholder => Err(EvalError::PlaceholderOutsideEquality { coord: node.coord }),
            _ => Err(unsupported(node)),
        }
    }

    fn eval_number(node: &Node) -> EvalResult<Value> {
        node.label
            .parse::<f64>()
            .map(Value::number)
            .map_err(|_| EvalError::Domain { name:  node.label.clone(),
                                             coord: node.coord, })
    }

    /// Evaluates a `pmatrix` literal row by row.
    fn eval_matrix_literal(&mut self,
                           ast: &Ast,
                           node: &Node,
                           mut local: Option<&mut NameTable>)
                           -> EvalResult<Value> {
        let mut rows = Vec::with_capacity(node.fields.len());
        for &row in &node.fields {
            let mut cells = Vec::with_capacity(ast[row].fields.len());
            for &cell in &ast[row].fields {
                cells.push(self.eval(ast, cell, local.as_deref_mut())?);
            }
            rows.push(cells);
        }
        Matrix::from_rows(rows).map(Value::from).ok_or_else(|| unsupported(node))
    }

    /// Evaluates both children of a binary node, left first.
    pub(crate) fn eval_operands(&mut self,
                                ast: &Ast,
                                node: &Node,
                                mut local: Option<&mut NameTable>)
                                -> EvalResult<(Value, Value)> {
        let left = self.eval(ast, child(node, node.left)?, local.as_deref_mut())?;
        let right = self.eval(ast, child(node, node.right)?, local)?;
        Ok((left, right))
    }
}

/// Unwraps a child slot the parser always fills for `node`'s tag.
pub(crate) fn child(node: &Node, slot: Option<NodeId>) -> EvalResult<NodeId> {
    slot.ok_or_else(|| unsupported(node))
}

pub(crate) fn unsupported(node: &Node) -> EvalError {
    EvalError::Unsupported { construct: node.label.clone(),
                             coord:     node.coord, }
}
