use crate::variable::{Antecedent, Consequent, Variable, VariableKey};

/// Rule premise as written: a tree of `is` propositions joined by AND/OR.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Is(VariableKey, String),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn or(self, rhs: Expr) -> Self {
        Expr::Or(Box::new(self), Box::new(rhs))
    }

    pub fn and(self, rhs: Expr) -> Self {
        Expr::And(Box::new(self), Box::new(rhs))
    }

    pub fn and2(self, rhs: Expr, rhs2: Expr) -> Self {
        self.and(rhs).and(rhs2)
    }

    /// Every `(variable, label)` leaf, left to right.
    pub fn propositions(&self) -> Vec<(VariableKey, &str)> {
        let mut props = Vec::new();

        fn parse<'p>(expr: &'p Expr, out: &mut Vec<(VariableKey, &'p str)>) {
            match expr {
                Expr::Is(var_key, term) => out.push((*var_key, term.as_str())),
                Expr::And(lhs, rhs) | Expr::Or(lhs, rhs) => {
                    parse(lhs, out);
                    parse(rhs, out);
                },
            }
        }

        parse(self, &mut props);

        props
    }
}

/// Rule conclusion: an output variable and one of its labels.
#[derive(Clone, Debug, PartialEq)]
pub struct Consequence(pub(crate) VariableKey, pub(crate) String);

impl Variable<Antecedent> {
    pub fn is(self, label: impl Into<String>) -> Expr {
        Expr::Is(self.0, label.into())
    }
}

impl Variable<Consequent> {
    pub fn is(self, label: impl Into<String>) -> Consequence {
        Consequence(self.0, label.into())
    }
}

#[test]
fn test_propositions_in_order() {
    use slotmap::SlotMap;

    let mut keys = SlotMap::<VariableKey, ()>::with_key();
    let thickness = Variable::<Antecedent>::new(keys.insert(()));
    let temperature = Variable::<Antecedent>::new(keys.insert(()));

    let premise = thickness
        .is("thin")
        .or(thickness.is("medium"))
        .and(temperature.is("low"));

    assert_eq!(
        premise.propositions(),
        vec![
            (thickness.key(), "thin"),
            (thickness.key(), "medium"),
            (temperature.key(), "low")
        ]
    );
    assert!(matches!(premise, Expr::And(..)));
}
