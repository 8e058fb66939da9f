use crate::dsl::{Consequence, Expr};

/// Ordered rule base. Order does not change results but fixes the order of
/// reported firing strengths.
#[derive(Clone, Debug, Default)]
pub struct Rules(pub(crate) Vec<Rule>);

impl Rules {
    pub fn new() -> Self {
        Rules(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Rules(Vec::with_capacity(capacity))
    }

    pub fn add(&mut self, premise: Expr, consequence: Consequence) {
        self.add_weighted(premise, consequence, 1.0);
    }

    /// Weight multiplies the firing strength before implication and must lie in `(0, 1]`.
    pub fn add_weighted(&mut self, premise: Expr, consequence: Consequence, weight: f64) {
        self.0.push(Rule {
            premise,
            consequence,
            weight,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    pub(crate) premise: Expr,
    pub(crate) consequence: Consequence,
    pub(crate) weight: f64,
}

impl Rule {
    pub fn premise(&self) -> &Expr {
        &self.premise
    }

    pub fn consequence(&self) -> &Consequence {
        &self.consequence
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}
