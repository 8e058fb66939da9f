use std::collections::{HashMap, HashSet};
use std::marker::PhantomData;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};

use crate::error::{ConfigError, ConfigResult};
use crate::linspace::Linspace;
use crate::terms::{MembershipFunction, Terms};

/// Upper bound on the number of samples in one universe.
const MAX_SAMPLES: usize = 1 << 20;

new_key_type! {
    /// A variable key
    pub struct VariableKey;
}

/// Marker for input variables, the ones premises are written over.
#[derive(Clone, Copy, Debug)]
pub enum Antecedent {}

/// Marker for output variables, the ones rules conclude about.
#[derive(Clone, Copy, Debug)]
pub enum Consequent {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableKind {
    Antecedent,
    Consequent,
}

/// Typed handle to a variable stored in [`Variables`].
pub struct Variable<K>(pub(crate) VariableKey, PhantomData<K>);

impl<K> Variable<K> {
    pub(crate) fn new(key: VariableKey) -> Self {
        Variable(key, PhantomData)
    }

    pub fn key(&self) -> VariableKey {
        self.0
    }
}

impl<K> Clone for Variable<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Variable<K> {}

impl<K> std::fmt::Debug for Variable<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Variable").field(&self.0).finish()
    }
}

impl<K> PartialEq for Variable<K> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<K> Eq for Variable<K> {}

/// Arena of all variables of one fuzzy system.
#[derive(Debug, Default)]
pub struct Variables(pub(crate) SlotMap<VariableKey, LinguisticVariable>);

impl Variables {
    pub fn new() -> Self {
        Self(SlotMap::with_key())
    }

    /// Adds an input variable. `step` is the sampling resolution of the universe.
    pub fn add_antecedent(
        &mut self,
        name: impl Into<String>,
        universe_range: RangeInclusive<f64>,
        step: f64,
        terms: Terms,
    ) -> ConfigResult<Variable<Antecedent>> {
        self.insert(name.into(), VariableKind::Antecedent, universe_range, step, terms)
            .map(Variable::new)
    }

    /// Adds an output variable. `step` is the sampling resolution of the universe.
    pub fn add_consequent(
        &mut self,
        name: impl Into<String>,
        universe_range: RangeInclusive<f64>,
        step: f64,
        terms: Terms,
    ) -> ConfigResult<Variable<Consequent>> {
        self.insert(name.into(), VariableKind::Consequent, universe_range, step, terms)
            .map(Variable::new)
    }

    fn insert(
        &mut self,
        name: String,
        kind: VariableKind,
        universe_range: RangeInclusive<f64>,
        step: f64,
        terms: Terms,
    ) -> ConfigResult<VariableKey> {
        if self.find(&name).is_some() {
            return Err(ConfigError::DuplicateVariable(name));
        }

        let var = LinguisticVariable::new(name, kind, universe_range, step, terms)?;

        Ok(self.0.insert(var))
    }

    pub fn get(&self, key: VariableKey) -> Option<&LinguisticVariable> {
        self.0.get(key)
    }

    pub fn find(&self, name: &str) -> Option<(VariableKey, &LinguisticVariable)> {
        self.0.iter().find(|(_, var)| var.name == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Variables in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (VariableKey, &LinguisticVariable)> {
        self.0.iter()
    }
}

/// A named numeric universe and the labelled membership functions over it.
///
/// Every term is also kept pre-sampled over the universe, which is what
/// implication and the plotting diagnostics operate on. Crisp inputs are
/// fuzzified against the analytic function instead, so an input between two
/// samples is not rounded to either of them.
#[derive(Clone, Debug)]
pub struct LinguisticVariable {
    name: String,
    kind: VariableKind,
    min_u: f64,
    max_u: f64,
    step: f64,
    universe: Vec<f64>,
    terms: Vec<(String, MembershipFunction)>,
    sampled: Vec<Vec<f64>>,
}

impl LinguisticVariable {
    fn new(
        name: String,
        kind: VariableKind,
        universe_range: RangeInclusive<f64>,
        step: f64,
        terms: Terms,
    ) -> ConfigResult<Self> {
        let min_u = *universe_range.start();
        let max_u = *universe_range.end();
        let finite = min_u.is_finite() && max_u.is_finite() && step.is_finite();
        let spans = (max_u - min_u) / step;

        if !finite || min_u >= max_u || step <= 0. || !(spans < MAX_SAMPLES as f64) {
            return Err(ConfigError::InvalidUniverse {
                name,
                min: min_u,
                max: max_u,
                step,
            });
        }

        let mut labels = HashSet::with_capacity(terms.len());

        for (label, membership) in &terms.0 {
            if !labels.insert(label.as_str()) {
                return Err(ConfigError::DuplicateLabel {
                    variable: name,
                    label: label.clone(),
                });
            }

            if membership.validate().is_err() {
                return Err(ConfigError::InvalidTerm {
                    variable: name,
                    label: label.clone(),
                    points: membership.points(),
                });
            }
        }

        let universe = Linspace::stepped(min_u, max_u, step).ok_or_else(|| ConfigError::InvalidUniverse {
            name: name.clone(),
            min: min_u,
            max: max_u,
            step,
        })?;
        let sampled = terms
            .0
            .iter()
            .map(|(_, membership)| universe.iter().map(|&u| membership.degree(u)).collect())
            .collect();

        Ok(Self {
            name,
            kind,
            min_u,
            max_u,
            step,
            universe,
            terms: terms.0,
            sampled,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> VariableKind {
        self.kind
    }

    pub fn range(&self) -> RangeInclusive<f64> {
        self.min_u..=self.max_u
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Sample points of the universe, ascending.
    pub fn universe(&self) -> &[f64] {
        &self.universe
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|(label, _)| label.as_str())
    }

    pub fn membership(&self, label: &str) -> Option<&MembershipFunction> {
        self.term_index(label).map(|i| &self.terms[i].1)
    }

    pub(crate) fn term_index(&self, label: &str) -> Option<usize> {
        self.terms.iter().position(|(l, _)| l == label)
    }

    pub(crate) fn sampled(&self, term: usize) -> &[f64] {
        &self.sampled[term]
    }

    pub(crate) fn clip(&self, x: f64) -> f64 {
        x.clamp(self.min_u, self.max_u)
    }

    /// Degree of every term at `x`, in term declaration order.
    pub(crate) fn degrees(&self, x: f64) -> Vec<f64> {
        self.terms.iter().map(|(_, membership)| membership.degree(x)).collect()
    }

    /// Degree of membership of `x` in every term of this variable.
    pub fn fuzzify(&self, x: f64) -> HashMap<&str, f64> {
        self.labels().zip(self.degrees(x)).collect()
    }

    /// Sampled `(x, degree)` curve of one term, for plotting.
    pub fn curve(&self, label: &str) -> Option<Vec<(f64, f64)>> {
        let term = self.term_index(label)?;

        Some(self.universe.iter().copied().zip(self.sampled(term).iter().copied()).collect())
    }

    /// Sampled curves of every term, in declaration order.
    pub fn curves(&self) -> Vec<(&str, Vec<(f64, f64)>)> {
        self.labels()
            .zip(&self.sampled)
            .map(|(label, degrees)| (label, self.universe.iter().copied().zip(degrees.iter().copied()).collect()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temperature_terms() -> Terms {
        Terms::new()
            .with("low", MembershipFunction::trapezoidal(50., 50., 55., 60.).unwrap())
            .with("medium", MembershipFunction::trapezoidal(55., 60., 70., 75.).unwrap())
            .with("high", MembershipFunction::trapezoidal(70., 75., 80., 80.).unwrap())
    }

    #[test]
    fn test_fuzzify_shared_boundary() {
        let mut vars = Variables::new();
        let temperature = vars.add_antecedent("temperature", 50. ..=80., 5., temperature_terms()).unwrap();
        let var = vars.get(temperature.key()).unwrap();

        let at_60 = var.fuzzify(60.);

        assert_eq!(at_60["low"], 0.);
        assert_eq!(at_60["medium"], 1.);
        assert_eq!(at_60["high"], 0.);

        let at_57_5 = var.fuzzify(57.5);

        assert_eq!(at_57_5["low"], 0.5);
        assert_eq!(at_57_5["medium"], 0.5);
        assert_eq!(at_57_5["low"] + at_57_5["medium"], 1.);
    }

    #[test]
    fn test_curves() {
        let mut vars = Variables::new();
        let temperature = vars.add_antecedent("temperature", 50. ..=80., 5., temperature_terms()).unwrap();
        let var = vars.get(temperature.key()).unwrap();

        assert_eq!(var.universe(), &[50., 55., 60., 65., 70., 75., 80.]);
        assert_eq!(
            var.curve("low").unwrap(),
            vec![(50., 1.), (55., 1.), (60., 0.), (65., 0.), (70., 0.), (75., 0.), (80., 0.)]
        );
        assert!(var.curve("scorching").is_none());

        let curves = var.curves();

        assert_eq!(curves.len(), 3);
        assert_eq!(curves[2].0, "high");
        assert_eq!(curves[2].1.last(), Some(&(80., 1.)));
    }

    #[test]
    fn test_invalid_variables() {
        let mut vars = Variables::new();

        assert!(matches!(
            vars.add_antecedent("t", 80. ..=50., 5., Terms::new()),
            Err(ConfigError::InvalidUniverse { .. })
        ));
        assert!(matches!(
            vars.add_antecedent("t", 50. ..=80., 0., Terms::new()),
            Err(ConfigError::InvalidUniverse { .. })
        ));

        let duplicated = temperature_terms().with("low", MembershipFunction::triangular(50., 52., 54.).unwrap());

        assert_eq!(
            vars.add_antecedent("t", 50. ..=80., 5., duplicated).unwrap_err(),
            ConfigError::DuplicateLabel {
                variable: "t".into(),
                label: "low".into()
            }
        );

        let malformed = Terms::new().with("odd", MembershipFunction::Triangular { a: 3., b: 1., c: 2. });

        assert!(matches!(
            vars.add_consequent("t", 0. ..=10., 1., malformed),
            Err(ConfigError::InvalidTerm { .. })
        ));

        vars.add_antecedent("t", 50. ..=80., 5., temperature_terms()).unwrap();

        assert_eq!(
            vars.add_consequent("t", 0. ..=10., 1., Terms::new()).unwrap_err(),
            ConfigError::DuplicateVariable("t".into())
        );
    }

    #[test]
    fn test_rejects_unbounded_sampling() {
        let mut vars = Variables::new();

        for (range, step) in [(0. ..=1e300, 1e-10), (-f64::MAX..=f64::MAX, 1.), (0. ..=10., 1e-9)] {
            assert!(matches!(
                vars.add_antecedent("x", range, step, Terms::new()),
                Err(ConfigError::InvalidUniverse { .. })
            ));
        }

        let var = vars.add_antecedent("x", 0. ..=1., 1. / 1024., Terms::new()).unwrap();

        assert_eq!(vars.get(var.key()).unwrap().universe().len(), 1025);
    }
}
