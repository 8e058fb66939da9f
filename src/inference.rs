use slotmap::SecondaryMap;
use tracing::{debug, trace, warn};

use crate::dsl::Expr;
use crate::error::{ComputeError, ComputeResult, ConfigError, ConfigResult};
use crate::inputs::Inputs;
use crate::ops::{AndOp, InferenceOps, OrOp};
use crate::outputs::{ClippedInput, InferredOutput, Outputs};
use crate::rules::Rules;
use crate::simulation::Simulation;
use crate::variable::{Antecedent, Consequent, LinguisticVariable, Variable, VariableKey, VariableKind, Variables};

/// Premise with every label resolved to its term index. Built once, so
/// evaluation never has to handle a missing variable or label.
#[derive(Clone, Debug)]
enum Premise {
    Is(VariableKey, usize),
    And(Box<Premise>, Box<Premise>),
    Or(Box<Premise>, Box<Premise>),
}

impl Premise {
    fn resolve(expr: &Expr, vars: &Variables) -> ConfigResult<Self> {
        Ok(match expr {
            Expr::Is(var_key, label) => {
                let var = vars
                    .get(*var_key)
                    .ok_or_else(|| ConfigError::UnknownVariable(format!("{var_key:?}")))?;

                expect_kind(var, VariableKind::Antecedent)?;

                Premise::Is(*var_key, lookup_term(var, label)?)
            },
            Expr::And(lhs, rhs) => Premise::And(
                Box::new(Premise::resolve(lhs, vars)?),
                Box::new(Premise::resolve(rhs, vars)?),
            ),
            Expr::Or(lhs, rhs) => Premise::Or(
                Box::new(Premise::resolve(lhs, vars)?),
                Box::new(Premise::resolve(rhs, vars)?),
            ),
        })
    }

    fn eval(&self, fuzzified: &SecondaryMap<VariableKey, Vec<f64>>, and_op: AndOp, or_op: OrOp) -> f64 {
        match self {
            Premise::Is(var_key, term) => fuzzified[*var_key][*term],
            Premise::And(lhs, rhs) => and_op.call(
                lhs.eval(fuzzified, and_op, or_op),
                rhs.eval(fuzzified, and_op, or_op),
            ),
            Premise::Or(lhs, rhs) => or_op.call(
                lhs.eval(fuzzified, and_op, or_op),
                rhs.eval(fuzzified, and_op, or_op),
            ),
        }
    }
}

fn expect_kind(var: &LinguisticVariable, kind: VariableKind) -> ConfigResult<()> {
    if var.kind() == kind {
        return Ok(());
    }

    Err(ConfigError::WrongKind {
        name: var.name().to_owned(),
        expected: match kind {
            VariableKind::Antecedent => "antecedent",
            VariableKind::Consequent => "consequent",
        },
    })
}

fn lookup_term(var: &LinguisticVariable, label: &str) -> ConfigResult<usize> {
    var.term_index(label).ok_or_else(|| ConfigError::UnknownLabel {
        variable: var.name().to_owned(),
        label: label.to_owned(),
    })
}

#[derive(Clone, Debug)]
struct CompiledRule {
    premise: Premise,
    output: VariableKey,
    term: usize,
    weight: f64,
}

/// Mamdani inference over an immutable set of variables and rules.
///
/// Crisp inputs are fuzzified, each rule's premise is folded with the AND/OR
/// operators into a firing strength (times the rule weight), the consequent
/// term is clipped at that strength, all clipped sets of one output are
/// combined with a pointwise max and the result is defuzzified.
///
/// `compute` takes `&self` and keeps no state between calls, so one engine
/// can serve any number of threads.
#[derive(Debug)]
pub struct InferenceEngine {
    vars: Variables,
    rules: Vec<CompiledRule>,
    ops: InferenceOps,
}

impl InferenceEngine {
    /// Builds an engine with min/max connectives, clipping implication and
    /// centroid defuzzification.
    pub fn new(vars: Variables, rules: Rules) -> ConfigResult<Self> {
        Self::with_ops(vars, rules, InferenceOps::default())
    }

    pub fn with_ops(vars: Variables, rules: Rules, ops: InferenceOps) -> ConfigResult<Self> {
        let mut compiled = Vec::with_capacity(rules.len());

        for (i, rule) in rules.0.iter().enumerate() {
            if !(rule.weight > 0. && rule.weight <= 1.) {
                return Err(ConfigError::InvalidWeight {
                    rule: i,
                    weight: rule.weight,
                });
            }

            let premise = Premise::resolve(&rule.premise, &vars)?;
            let output = rule.consequence.0;
            let output_var = vars
                .get(output)
                .ok_or_else(|| ConfigError::UnknownVariable(format!("{output:?}")))?;

            expect_kind(output_var, VariableKind::Consequent)?;

            let term = lookup_term(output_var, &rule.consequence.1)?;

            compiled.push(CompiledRule {
                premise,
                output,
                term,
                weight: rule.weight,
            });
        }

        debug!(
            variables = vars.len(),
            rules = compiled.len(),
            ?ops,
            "built inference engine"
        );

        Ok(Self {
            vars,
            rules: compiled,
            ops,
        })
    }

    pub fn ops(&self) -> InferenceOps {
        self.ops
    }

    pub fn variables(&self) -> &Variables {
        &self.vars
    }

    pub fn variable(&self, name: &str) -> Option<&LinguisticVariable> {
        self.vars.find(name).map(|(_, var)| var)
    }

    pub fn antecedent(&self, name: &str) -> Option<Variable<Antecedent>> {
        self.find_kind(name, VariableKind::Antecedent).map(Variable::new)
    }

    pub fn consequent(&self, name: &str) -> Option<Variable<Consequent>> {
        self.find_kind(name, VariableKind::Consequent).map(Variable::new)
    }

    fn find_kind(&self, name: &str, kind: VariableKind) -> Option<VariableKey> {
        self.vars
            .find(name)
            .filter(|(_, var)| var.kind() == kind)
            .map(|(key, _)| key)
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Sampled membership curve of one term, without running an evaluation.
    pub fn membership_curve(&self, variable: &str, label: &str) -> Option<Vec<(f64, f64)>> {
        self.variable(variable)?.curve(label)
    }

    /// Builds [`Inputs`] from `(variable name, value)` pairs.
    pub fn inputs<'n>(&self, values: impl IntoIterator<Item = (&'n str, f64)>) -> ComputeResult<Inputs> {
        let mut inputs = Inputs::new();

        for (name, value) in values {
            let var = self
                .antecedent(name)
                .ok_or_else(|| ComputeError::UnknownVariable(name.to_owned()))?;

            inputs.add(var, value);
        }

        Ok(inputs)
    }

    /// Starts an evaluation session against this engine.
    pub fn simulate(&self) -> Simulation<'_> {
        Simulation::new(self)
    }

    /// Evaluates every rule for `inputs` and defuzzifies each output variable.
    ///
    /// Fails only when an input variable has no value or a non-finite one.
    /// Inputs outside their universe are clamped to it and reported through
    /// [`Outputs::clipped`]. An output that no rule contributed to is reported
    /// as undefined without affecting the other outputs.
    pub fn compute(&self, inputs: &Inputs) -> ComputeResult<Outputs> {
        let mut fuzzified = SecondaryMap::with_capacity(inputs.len());
        let mut clipped = Vec::new();

        for (key, var) in self.vars.iter().filter(|(_, var)| var.kind() == VariableKind::Antecedent) {
            let supplied = *inputs
                .0
                .get(&key)
                .ok_or_else(|| ComputeError::MissingInput(var.name().to_owned()))?;

            if !supplied.is_finite() {
                return Err(ComputeError::NonFiniteInput {
                    name: var.name().to_owned(),
                    value: supplied,
                });
            }

            let used = var.clip(supplied);

            if used != supplied {
                warn!(variable = var.name(), supplied, used, "input outside of universe, clipped");
                clipped.push(ClippedInput {
                    variable: var.name().to_owned(),
                    supplied,
                    used,
                });
            }

            let degrees = var.degrees(used);

            trace!(variable = var.name(), value = used, ?degrees, "fuzzified");
            fuzzified.insert(key, degrees);
        }

        let firing_strengths: Vec<f64> = self
            .rules
            .iter()
            .map(|rule| rule.weight * rule.premise.eval(&fuzzified, self.ops.and_op, self.ops.or_op))
            .collect();

        debug!(?firing_strengths, "fired rules");

        let mut aggregated: SecondaryMap<VariableKey, Vec<f64>> = self
            .vars
            .iter()
            .filter(|(_, var)| var.kind() == VariableKind::Consequent)
            .map(|(key, var)| (key, vec![0.; var.universe().len()]))
            .collect();

        for (rule, &strength) in self.rules.iter().zip(&firing_strengths) {
            if strength <= 0. {
                continue;
            }

            let consequent = self.vars.0[rule.output].sampled(rule.term);
            let implied = self.ops.imp_op.call(strength, consequent.iter().copied());

            for (agg, m) in aggregated[rule.output].iter_mut().zip(implied) {
                *agg = f64::max(*agg, m);
            }
        }

        let mut inferred = Vec::with_capacity(aggregated.len());

        for (key, var) in self.vars.iter().filter(|(_, var)| var.kind() == VariableKind::Consequent) {
            let membership = aggregated.remove(key).unwrap_or_default();
            let value = self.ops.defuzz_op.call(var.universe(), &membership);

            match value {
                Some(value) => debug!(variable = var.name(), value, "defuzzified"),
                None => warn!(variable = var.name(), "no rule fired, output undefined"),
            }

            inferred.push((
                key,
                InferredOutput::new(var.name().to_owned(), value, var.universe().to_vec(), membership),
            ));
        }

        Ok(Outputs::new(inferred, firing_strengths, clipped))
    }
}
