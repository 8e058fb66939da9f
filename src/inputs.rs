use std::collections::HashMap;

use crate::variable::{Antecedent, Variable, VariableKey};

/// Crisp values for the input variables of one evaluation.
#[derive(Clone, Debug, Default)]
pub struct Inputs(pub(crate) HashMap<VariableKey, f64>);

impl Inputs {
    pub fn new() -> Self {
        Inputs(HashMap::new())
    }

    /// Sets (or replaces) the value of `var`.
    pub fn add(&mut self, var: Variable<Antecedent>, val: f64) {
        self.0.insert(var.0, val);
    }

    pub fn get(&self, var: Variable<Antecedent>) -> Option<f64> {
        self.0.get(&var.0).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
