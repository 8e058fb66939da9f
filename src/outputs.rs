use crate::error::{ComputeError, ComputeResult};
use crate::variable::{Consequent, Variable, VariableKey};

/// An input that fell outside of its universe and was clamped to the nearest bound.
#[derive(Clone, Debug, PartialEq)]
pub struct ClippedInput {
    pub variable: String,
    pub supplied: f64,
    pub used: f64,
}

/// Result of one output variable.
#[derive(Clone, Debug, PartialEq)]
pub struct InferredOutput {
    name: String,
    value: Option<f64>,
    universe: Vec<f64>,
    aggregated: Vec<f64>,
}

impl InferredOutput {
    pub(crate) fn new(name: String, value: Option<f64>, universe: Vec<f64>, aggregated: Vec<f64>) -> Self {
        Self {
            name,
            value,
            universe,
            aggregated,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Crisp value, `None` when no rule contributed to this output.
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Sampled `(x, degree)` pairs of the aggregated fuzzy set.
    pub fn aggregated(&self) -> Vec<(f64, f64)> {
        self.universe.iter().copied().zip(self.aggregated.iter().copied()).collect()
    }
}

/// Everything one evaluation produced.
#[derive(Clone, Debug, PartialEq)]
pub struct Outputs {
    inferred: Vec<(VariableKey, InferredOutput)>,
    firing_strengths: Vec<f64>,
    clipped: Vec<ClippedInput>,
}

impl Outputs {
    pub(crate) fn new(
        inferred: Vec<(VariableKey, InferredOutput)>,
        firing_strengths: Vec<f64>,
        clipped: Vec<ClippedInput>,
    ) -> Self {
        Self {
            inferred,
            firing_strengths,
            clipped,
        }
    }

    fn entry(&self, key: VariableKey) -> Option<&InferredOutput> {
        self.inferred.iter().find(|(k, _)| *k == key).map(|(_, output)| output)
    }

    pub fn output(&self, name: &str) -> Option<&InferredOutput> {
        self.inferred
            .iter()
            .map(|(_, output)| output)
            .find(|output| output.name == name)
    }

    pub fn get_inferred_membership(&self, var: Variable<Consequent>) -> Option<f64> {
        self.entry(var.0).and_then(InferredOutput::value)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.output(name).and_then(InferredOutput::value)
    }

    /// Crisp value of `name`, telling an unknown variable apart from an undefined output.
    pub fn value(&self, name: &str) -> ComputeResult<f64> {
        let output = self
            .output(name)
            .ok_or_else(|| ComputeError::UnknownVariable(name.to_owned()))?;

        output
            .value
            .ok_or_else(|| ComputeError::UndefinedOutput(name.to_owned()))
    }

    pub fn is_undefined(&self, var: Variable<Consequent>) -> bool {
        self.entry(var.0).is_some_and(|output| output.value.is_none())
    }

    /// Names of the outputs no rule contributed to.
    pub fn undefined(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|output| output.value.is_none()).map(InferredOutput::name)
    }

    pub fn aggregated(&self, var: Variable<Consequent>) -> Option<Vec<(f64, f64)>> {
        self.entry(var.0).map(InferredOutput::aggregated)
    }

    /// Output variables in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &InferredOutput> {
        self.inferred.iter().map(|(_, output)| output)
    }

    /// Strength of every rule, in rule order.
    pub fn firing_strengths(&self) -> &[f64] {
        &self.firing_strengths
    }

    pub fn clipped(&self) -> &[ClippedInput] {
        &self.clipped
    }

    pub fn was_clipped(&self, name: &str) -> bool {
        self.clipped.iter().any(|clip| clip.variable == name)
    }
}
