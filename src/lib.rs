//! Mamdani fuzzy inference.
//!
//! Variables are declared over a sampled universe with labelled triangular or
//! trapezoidal membership functions. Rules join `variable.is(label)`
//! propositions with AND/OR and conclude an output label. An
//! [`InferenceEngine`] validates all of it once and then maps crisp inputs to
//! crisp outputs using min/max connectives, clipping implication, max
//! aggregation and centroid defuzzification.
//!
//! ```
//! use fuzzy_mamdani::{InferenceEngine, Inputs, MembershipFunction as Mf, Rules, Terms, Variables};
//!
//! let mut vars = Variables::new();
//! let load = vars.add_antecedent(
//!     "load",
//!     0. ..=100.,
//!     10.,
//!     Terms::new()
//!         .with("light", Mf::trapezoidal(0., 0., 20., 60.)?)
//!         .with("heavy", Mf::trapezoidal(40., 80., 100., 100.)?),
//! )?;
//! let fan = vars.add_consequent(
//!     "fan",
//!     0. ..=10.,
//!     1.,
//!     Terms::new()
//!         .with("slow", Mf::triangular(0., 2., 4.)?)
//!         .with("fast", Mf::triangular(6., 8., 10.)?),
//! )?;
//! let mut rules = Rules::new();
//!
//! rules.add(load.is("light"), fan.is("slow"));
//! rules.add(load.is("heavy"), fan.is("fast"));
//!
//! let engine = InferenceEngine::new(vars, rules)?;
//! let mut inputs = Inputs::new();
//!
//! inputs.add(load, 90.);
//!
//! let outputs = engine.compute(&inputs)?;
//!
//! assert_eq!(outputs.get_inferred_membership(fan), Some(8.));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod dsl;
mod error;
mod inference;
mod inputs;
mod linspace;
mod math;
mod ops;
mod outputs;
mod rules;
mod simulation;
pub mod steak;
mod terms;
mod variable;

pub use config::{ExprConfig, LabelRef, RuleConfig, SystemConfig, TermConfig, VariableConfig};
pub use dsl::{Consequence, Expr};
pub use error::{ComputeError, ComputeResult, ConfigError, ConfigResult};
pub use inference::InferenceEngine;
pub use inputs::Inputs;
pub use ops::{AndOp, DefuzzificationOp, ImplicationOp, InferenceOps, OrOp};
pub use outputs::{ClippedInput, InferredOutput, Outputs};
pub use rules::{Rule, Rules};
pub use simulation::Simulation;
pub use terms::{MembershipFunction, Terms};
pub use variable::{Antecedent, Consequent, LinguisticVariable, Variable, VariableKey, VariableKind, Variables};
