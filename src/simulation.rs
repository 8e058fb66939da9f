use crate::error::{ComputeError, ComputeResult};
use crate::inference::InferenceEngine;
use crate::inputs::Inputs;
use crate::outputs::Outputs;

/// One set of named inputs and the outputs most recently computed from them.
///
/// Changing an input discards the previous outputs, so `output` never answers
/// with values computed from older inputs.
#[derive(Debug)]
pub struct Simulation<'e> {
    engine: &'e InferenceEngine,
    inputs: Inputs,
    outputs: Option<Outputs>,
}

impl<'e> Simulation<'e> {
    pub(crate) fn new(engine: &'e InferenceEngine) -> Self {
        Self {
            engine,
            inputs: Inputs::new(),
            outputs: None,
        }
    }

    pub fn set_input(&mut self, name: &str, value: f64) -> ComputeResult<()> {
        let var = self
            .engine
            .antecedent(name)
            .ok_or_else(|| ComputeError::UnknownVariable(name.to_owned()))?;

        self.inputs.add(var, value);
        self.outputs = None;

        Ok(())
    }

    pub fn input(&self, name: &str) -> Option<f64> {
        self.engine.antecedent(name).and_then(|var| self.inputs.get(var))
    }

    pub fn compute(&mut self) -> ComputeResult<&Outputs> {
        let outputs = self.engine.compute(&self.inputs)?;

        Ok(&*self.outputs.insert(outputs))
    }

    pub fn outputs(&self) -> Option<&Outputs> {
        self.outputs.as_ref()
    }

    /// Crisp value of one output variable from the last `compute`.
    pub fn output(&self, name: &str) -> ComputeResult<f64> {
        self.outputs.as_ref().ok_or(ComputeError::NotComputed)?.value(name)
    }
}
