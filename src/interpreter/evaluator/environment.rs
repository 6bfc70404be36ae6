use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// A flat mapping from names to values.
pub type NameTable = HashMap<String, Value>;

/// The global name table, plus the resolution rules that combine it with an
/// optional local table owned by the active function call.
///
/// - Reads look in the local table first, then in the global one.
/// - Writes land in the global table when the name already exists there;
///   otherwise in the local table if there is one, else in the global table.
///
/// # Example
/// ```
/// use texcalc::interpreter::{
///     evaluator::environment::{Environment, NameTable},
///     value::core::Value,
/// };
///
/// let mut env = Environment::new();
/// env.define("x", Value::number(1.0), None);
///
/// let mut local = NameTable::new();
/// env.define("x", Value::number(2.0), Some(&mut local));
/// env.define("y", Value::number(3.0), Some(&mut local));
///
/// // `x` already existed globally, so the write went there.
/// assert_eq!(env.global()["x"], Value::number(2.0));
/// assert!(!local.contains_key("x"));
/// assert_eq!(local["y"], Value::number(3.0));
/// assert!(env.lookup("y", None).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Environment {
    global: NameTable,
}

impl Environment {
    /// Creates an environment with an empty global table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The global table.
    #[must_use]
    pub const fn global(&self) -> &NameTable {
        &self.global
    }

    /// Resolves a name for reading.
    #[must_use]
    pub fn lookup<'a>(&'a self, name: &str, local: Option<&'a NameTable>) -> Option<&'a Value> {
        local.and_then(|table| table.get(name)).or_else(|| self.global.get(name))
    }

    /// Resolves a name for in-place modification, following the same rule as
    /// [`Environment::define`]: a name that exists globally is modified there,
    /// even when the local table holds a captured copy of it.
    pub fn lookup_for_write<'a>(&'a mut self,
                                name: &str,
                                local: Option<&'a mut NameTable>)
                                -> Option<&'a mut Value> {
        if self.global.contains_key(name) {
            return self.global.get_mut(name);
        }
        local.and_then(|table| table.get_mut(name))
    }

    /// Binds a name, following the global-override rule.
    pub fn define(&mut self, name: impl Into<String>, value: Value, local: Option<&mut NameTable>) {
        let name = name.into();
        match local {
            Some(table) if !self.global.contains_key(&name) => {
                table.insert(name, value);
            },
            _ => {
                self.global.insert(name, value);
            },
        }
    }

    /// Copies the table a function defined here should capture: the local
    /// table inside a call, the global table otherwise.
    #[must_use]
    pub fn snapshot(&self, local: Option<&NameTable>) -> NameTable {
        local.unwrap_or(&self.global).clone()
    }
}
