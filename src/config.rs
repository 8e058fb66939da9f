//! Declarative description of a fuzzy system, loadable from JSON.
//!
//! ```json
//! {
//!   "variables": [
//!     { "name": "load", "kind": "antecedent", "min": 0, "max": 100, "step": 10,
//!       "terms": [{ "label": "heavy", "membership": { "shape": "trapezoidal", "a": 40, "b": 80, "c": 100, "d": 100 } }] },
//!     { "name": "fan", "kind": "consequent", "min": 0, "max": 10, "step": 1,
//!       "terms": [{ "label": "fast", "membership": { "shape": "triangular", "a": 6, "b": 8, "c": 10 } }] }
//!   ],
//!   "rules": [
//!     { "when": { "is": { "variable": "load", "label": "heavy" } },
//!       "then": { "variable": "fan", "label": "fast" } }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::dsl::{Consequence, Expr};
use crate::error::{ConfigError, ConfigResult};
use crate::inference::InferenceEngine;
use crate::ops::InferenceOps;
use crate::rules::Rules;
use crate::terms::{MembershipFunction, Terms};
use crate::variable::{VariableKey, VariableKind, Variables};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    pub variables: Vec<VariableConfig>,
    pub rules: Vec<RuleConfig>,
    #[serde(default)]
    pub ops: InferenceOps,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariableConfig {
    pub name: String,
    pub kind: VariableKind,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub terms: Vec<TermConfig>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TermConfig {
    pub label: String,
    pub membership: MembershipFunction,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExprConfig {
    Is(LabelRef),
    And(Box<ExprConfig>, Box<ExprConfig>),
    Or(Box<ExprConfig>, Box<ExprConfig>),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelRef {
    pub variable: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub when: ExprConfig,
    pub then: LabelRef,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl SystemConfig {
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates the description and assembles an engine from it.
    pub fn build(&self) -> ConfigResult<InferenceEngine> {
        let mut vars = Variables::new();

        for var in &self.variables {
            let terms = var
                .terms
                .iter()
                .fold(Terms::new(), |terms, term| terms.with(term.label.clone(), term.membership));

            match var.kind {
                VariableKind::Antecedent => {
                    vars.add_antecedent(var.name.clone(), var.min..=var.max, var.step, terms)?;
                },
                VariableKind::Consequent => {
                    vars.add_consequent(var.name.clone(), var.min..=var.max, var.step, terms)?;
                },
            }
        }

        let mut rules = Rules::with_capacity(self.rules.len());

        for rule in &self.rules {
            let premise = rule.when.resolve(&vars)?;
            let key = lookup(&vars, &rule.then.variable, VariableKind::Consequent)?;

            rules.add_weighted(premise, Consequence(key, rule.then.label.clone()), rule.weight);
        }

        InferenceEngine::with_ops(vars, rules, self.ops)
    }
}

impl ExprConfig {
    fn resolve(&self, vars: &Variables) -> ConfigResult<Expr> {
        Ok(match self {
            ExprConfig::Is(LabelRef { variable, label }) => {
                let key = lookup(vars, variable, VariableKind::Antecedent)?;

                Expr::Is(key, label.clone())
            },
            ExprConfig::And(lhs, rhs) => lhs.resolve(vars)?.and(rhs.resolve(vars)?),
            ExprConfig::Or(lhs, rhs) => lhs.resolve(vars)?.or(rhs.resolve(vars)?),
        })
    }
}

fn lookup(vars: &Variables, name: &str, kind: VariableKind) -> ConfigResult<VariableKey> {
    let (key, var) = vars
        .find(name)
        .ok_or_else(|| ConfigError::UnknownVariable(name.to_owned()))?;

    if var.kind() != kind {
        return Err(ConfigError::WrongKind {
            name: name.to_owned(),
            expected: match kind {
                VariableKind::Antecedent => "antecedent",
                VariableKind::Consequent => "consequent",
            },
        });
    }

    Ok(key)
}
