use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;
pub type ComputeResult<T> = Result<T, ComputeError>;

/// Raised while assembling variables, rules or an engine. Nothing built from a
/// failing configuration is usable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("variable {name:?} has an invalid universe [{min}, {max}] with step {step}")]
    InvalidUniverse { name: String, min: f64, max: f64, step: f64 },

    #[error("control points {0:?} are not weakly increasing")]
    InvalidControlPoints(Vec<f64>),

    #[error("term {label:?} of variable {variable:?} has invalid control points {points:?}")]
    InvalidTerm {
        variable: String,
        label: String,
        points: Vec<f64>,
    },

    #[error("variable {0:?} is declared more than once")]
    DuplicateVariable(String),

    #[error("variable {variable:?} declares label {label:?} more than once")]
    DuplicateLabel { variable: String, label: String },

    #[error("unknown variable {0:?}")]
    UnknownVariable(String),

    #[error("variable {variable:?} has no term labelled {label:?}")]
    UnknownLabel { variable: String, label: String },

    #[error("variable {name:?} cannot be used as {expected}")]
    WrongKind { name: String, expected: &'static str },

    #[error("rule #{rule} has weight {weight}, expected a value in (0, 1]")]
    InvalidWeight { rule: usize, weight: f64 },

    #[error("malformed configuration: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Raised while evaluating an engine against one set of inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputeError {
    #[error("no value supplied for input variable {0:?}")]
    MissingInput(String),

    #[error("input variable {name:?} received a non-finite value {value}")]
    NonFiniteInput { name: String, value: f64 },

    #[error("unknown variable {0:?}")]
    UnknownVariable(String),

    #[error("outputs have not been computed for the current inputs")]
    NotComputed,

    #[error("no rule fired for output variable {0:?}, its centroid is undefined")]
    UndefinedOutput(String),
}
