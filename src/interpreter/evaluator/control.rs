use crate::{
    ast::{Ast, Node},
    error::EvalError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, child},
            environment::NameTable,
        },
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `\ifexpr{cond} then \otherwise else`.
    ///
    /// The condition holds only if it is a scalar equal to `1`. Without an
    /// `\otherwise` branch a failed condition yields `0`.
    pub(crate) fn eval_if(&mut self,
                          ast: &Ast,
                          node: &Node,
                          mut local: Option<&mut NameTable>)
                          -> EvalResult<Value> {
        let cond = self.eval(ast, child(node, node.cond)?, local.as_deref_mut())?;
        if cond.is_true() {
            self.eval(ast, child(node, node.right)?, local)
        } else if let Some(otherwise) = node.left {
            self.eval(ast, otherwise, local)
        } else {
            Ok(Value::default())
        }
    }

    /// Evaluates the alternatives of a case block in order and returns the
    /// value of the first one whose `\when` condition holds. An `\otherwise`
    /// alternative always matches.
    ///
    /// # Errors
    /// `NoMatchingCase` if no alternative matches.
    pub(crate) fn eval_cases(&mut self,
                             ast: &Ast,
                             node: &Node,
                             mut local: Option<&mut NameTable>)
                             -> EvalResult<Value> {
        for &alt in &node.fields {
            let alt = &ast[alt];
            let matched = match alt.cond {
                Some(cond) => self.eval(ast, cond, local.as_deref_mut())?.is_true(),
                None => true,
            };
            if matched {
                return self.eval(ast, child(alt, alt.right)?, local);
            }
        }
        Err(EvalError::NoMatchingCase { coord: node.coord })
    }

    /// Evaluates `\while cond \\ body`.
    ///
    /// The body runs while the condition is a scalar equal to `1`; the loop
    /// yields the last body value, or `0` if the body never ran.
    ///
    /// # Errors
    /// `IterationLimit` if the body would run more than
    /// `settings.max_iterations` times.
    pub(crate) fn eval_while(&mut self,
                             ast: &Ast,
                             node: &Node,
                             local: Option<&mut NameTable>)
                             -> EvalResult<Value> {
        let mut result = Value::default();
        self.run_loop(ast, node, local, |value| {
                result = value;
                Ok(())
            })?;
        Ok(result)
    }

    /// Evaluates `\product cond \\ body`: a `\while` loop that multiplies
    /// its body values together.
    ///
    /// Every factor must be a dimensionless scalar. An empty product is `1`.
    pub(crate) fn eval_product(&mut self,
                               ast: &Ast,
                               node: &Node,
                               local: Option<&mut NameTable>)
                               -> EvalResult<Value> {
        let mut product = 1.0;
        self.run_loop(ast, node, local, |factor| {
                let (v, dim) = factor.as_scalar(node.coord)?;
                if !dim.is_dimensionless() {
                    return Err(EvalError::DimensionedProduct { coord: node.coord });
                }
                product *= v;
                Ok(())
            })?;
        Ok(Value::number(product))
    }

    /// Runs the bounded loop shared by `\while` and `\product`, handing each
    /// body value to `each`.
    fn run_loop(&mut self,
                ast: &Ast,
                node: &Node,
                mut local: Option<&mut NameTable>,
                mut each: impl FnMut(Value) -> EvalResult<()>)
                -> EvalResult<()> {
        let cond = child(node, node.cond)?;
        let body = child(node, node.right)?;
        let limit = self.settings.max_iterations;

        let mut iterations = 0;
        while self.eval(ast, cond, local.as_deref_mut())?.is_true() {
            if iterations == limit {
                return Err(EvalError::IterationLimit { limit,
                                                       coord: node.coord });
            }
            iterations += 1;
            each(self.eval(ast, body, local.as_deref_mut())?)?;
        }
        Ok(())
    }
}
