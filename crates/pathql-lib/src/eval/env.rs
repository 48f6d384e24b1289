//! Variable environment.

use indexmap::IndexMap;

use super::Value;

/// Global bindings plus a stack of lambda scopes. Lookups search innermost
/// first, so lambda parameters shadow globals.
#[derive(Debug, Default)]
pub struct Env {
    globals: IndexMap<String, Value>,
    scopes: Vec<IndexMap<String, Value>>,
}

impl Env {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name))
            .or_else(|| self.globals.get(name))
    }

    /// `let` binding. Rebinding replaces the old value.
    pub fn set_global(&mut self, name: impl Into<String>, value: Value) {
        self.globals.insert(name.into(), value);
    }

    pub fn push_scope(&mut self, bindings: IndexMap<String, Value>) {
        self.scopes.push(bindings);
    }

    pub fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    /// Global names in binding order.
    pub fn globals(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.globals.iter().map(|(k, v)| (k.as_str(), v))
    }
}
