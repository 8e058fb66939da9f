use std::iter::Sum;

use num::Float;
use serde::{Deserialize, Serialize};

use crate::math::{interp, segment_areas};

/// And operator method for combining the compositions of propositions
/// in a fuzzy rule premise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AndOp {
    #[default]
    Min,
    Prod,
    BoundedProd,
    DrasticProd,
}

impl AndOp {
    pub fn call<F: Float>(self, u: F, v: F) -> F {
        match self {
            Self::Min => F::min(u, v),
            Self::Prod => u * v,
            Self::BoundedProd => F::max(F::zero(), u + v - F::one()),
            Self::DrasticProd => {
                if u == F::one() {
                    v
                } else if v == F::one() {
                    u
                } else {
                    F::zero()
                }
            },
        }
    }
}

/// Or operator method for combining the compositions of propositions
/// in a fuzzy rule premise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrOp {
    #[default]
    Max,
    ProbOr,
    BoundedSum,
    DrasticSum,
}

impl OrOp {
    pub fn call<F: Float>(self, u: F, v: F) -> F {
        match self {
            Self::Max => F::max(u, v),
            Self::ProbOr => u + v - u * v,
            Self::BoundedSum => F::min(F::one(), u + v),
            Self::DrasticSum => {
                if u == F::zero() {
                    v
                } else if v == F::zero() {
                    u
                } else {
                    F::one()
                }
            },
        }
    }
}

/// How a rule's firing strength shapes its consequent membership function.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImplicationOp {
    /// Clip the consequent at the firing strength
    #[default]
    Min,
    /// Scale the consequent by the firing strength
    Prod,
}

impl ImplicationOp {
    pub fn call<F: Float>(self, strength: F, membership: impl IntoIterator<Item = F>) -> impl Iterator<Item = F> {
        membership.into_iter().map(move |m| match self {
            Self::Min => F::min(strength, m),
            Self::Prod => strength * m,
        })
    }
}

/// Method for defuzzificating the resulting membership function.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefuzzificationOp {
    /// Mean of the sample points weighted by their membership
    #[default]
    Centroid,
    /// Point splitting the area under the membership function in two halves
    Bisector,
    /// Mean of the values for which the membership function is maximum
    MeanOfMaximum,
    /// Smallest value for which the membership function is maximum
    SmallestOfMaximum,
    /// Largest value for which the membership function is maximum
    LargestOfMaximum,
}

impl DefuzzificationOp {
    /// Collapses a sampled fuzzy set to a crisp value. Returns `None` when the
    /// set is empty, i.e. zero everywhere, where every method is undefined.
    pub fn call<F: Float + Sum>(self, universe: &[F], membership: &[F]) -> Option<F> {
        debug_assert_eq!(universe.len(), membership.len());

        let maximum = membership.iter().copied().fold(F::zero(), F::max);

        if maximum <= F::zero() {
            return None;
        }

        let at_maximum = || {
            universe
                .iter()
                .copied()
                .zip(membership.iter().copied())
                .filter_map(move |(u, m)| (m == maximum).then_some(u))
        };

        match self {
            Self::Centroid => {
                let den = membership.iter().copied().sum::<F>();
                let num = universe
                    .iter()
                    .zip(membership)
                    .map(|(&u, &m)| u * m)
                    .sum::<F>();

                Some(num / den)
            },
            Self::Bisector => {
                let areas = segment_areas(universe, membership);
                let total_area = areas.iter().copied().sum::<F>();

                // A lone spike has no area to split
                if total_area == F::zero() {
                    return Self::MeanOfMaximum.call(universe, membership);
                }

                let target = total_area / (F::one() + F::one());
                let mut cum_area = F::zero();

                for (i, area) in areas.iter().copied().enumerate() {
                    if cum_area + area >= target {
                        let xp = [universe[i], universe[i + 1]];
                        let fp = [cum_area, cum_area + area];
                        let coords = fp.into_iter().zip(xp);

                        return interp(Some(target), coords).into_iter().next();
                    }

                    cum_area = cum_area + area;
                }

                universe.last().copied()
            },
            Self::MeanOfMaximum => {
                let (len, sum) = at_maximum().fold((0usize, F::zero()), |(len, sum), u| (len + 1, sum + u));

                F::from(len).map(|len| sum / len)
            },
            Self::SmallestOfMaximum => at_maximum().reduce(F::min),
            Self::LargestOfMaximum => at_maximum().reduce(F::max),
        }
    }
}

/// Operator set of a Mamdani engine. The default is min/max connectives with
/// min (clipping) implication and centroid defuzzification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceOps {
    pub and_op: AndOp,
    pub or_op: OrOp,
    pub imp_op: ImplicationOp,
    pub defuzz_op: DefuzzificationOp,
}

impl InferenceOps {
    pub fn new(and_op: AndOp, or_op: OrOp, imp_op: ImplicationOp, defuzz_op: DefuzzificationOp) -> Self {
        Self {
            and_op,
            or_op,
            imp_op,
            defuzz_op,
        }
    }
}

#[test]
fn test_connectives() {
    assert_eq!(AndOp::Min.call(0.3, 0.7), 0.3);
    assert_eq!(OrOp::Max.call(0.3, 0.7), 0.7);
    assert_eq!(AndOp::Prod.call(0.5, 0.5), 0.25);
    assert_eq!(OrOp::ProbOr.call(0.5, 0.5), 0.75);
    assert_eq!(AndOp::BoundedProd.call(0.25, 0.5), 0.);
    assert_eq!(OrOp::BoundedSum.call(0.75, 0.5), 1.);
    assert_eq!(AndOp::DrasticProd.call(1., 0.4), 0.4);
    assert_eq!(AndOp::DrasticProd.call(0.9, 0.4), 0.);
    assert_eq!(OrOp::DrasticSum.call(0., 0.4), 0.4);
    assert_eq!(OrOp::DrasticSum.call(0.1, 0.4), 1.);
}

#[test]
fn test_implication() {
    let membership = [0., 0.5, 1., 0.5, 0.];

    assert_eq!(
        ImplicationOp::Min.call(0.6, membership).collect::<Vec<f64>>(),
        vec![0., 0.5, 0.6, 0.5, 0.]
    );
    assert_eq!(
        ImplicationOp::Prod.call(0.5, membership).collect::<Vec<f64>>(),
        vec![0., 0.25, 0.5, 0.25, 0.]
    );
    assert!(ImplicationOp::Min.call(0., membership).all(|m| m == 0.));
}

#[test]
fn test_defuzzification() {
    let universe = [0., 1., 2., 3., 4.];
    let membership = [0., 1., 1., 0.5, 0.];

    assert_eq!(DefuzzificationOp::Centroid.call(&universe, &membership), Some(4.5 / 2.5));
    assert_eq!(DefuzzificationOp::MeanOfMaximum.call(&universe, &membership), Some(1.5));
    assert_eq!(DefuzzificationOp::SmallestOfMaximum.call(&universe, &membership), Some(1.));
    assert_eq!(DefuzzificationOp::LargestOfMaximum.call(&universe, &membership), Some(2.));

    let symmetric = [0., 0.5, 1., 0.5, 0.];

    assert_eq!(DefuzzificationOp::Bisector.call(&universe, &symmetric), Some(2.));
    assert_eq!(DefuzzificationOp::Centroid.call(&universe, &symmetric), Some(2.));
}

#[test]
fn test_empty_set_is_undefined() {
    let universe = [0., 1., 2.];
    let empty = [0., 0., 0.];

    assert_eq!(DefuzzificationOp::Centroid.call(&universe, &empty), None);
    assert_eq!(DefuzzificationOp::Bisector.call(&universe, &empty), None);
    assert_eq!(DefuzzificationOp::MeanOfMaximum.call(&universe, &empty), None);
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_min_max_connectives(p in 0.0f64..=1.0, q in 0.0f64..=1.0) {
            prop_assert_eq!(AndOp::Min.call(p, q), p.min(q));
            prop_assert_eq!(OrOp::Max.call(p, q), p.max(q));
        }

        #[test]
        fn prop_connectives_commute_and_associate(p in 0.0f64..=1.0, q in 0.0f64..=1.0, r in 0.0f64..=1.0) {
            let and = AndOp::Min;
            let or = OrOp::Max;

            prop_assert_eq!(and.call(p, q), and.call(q, p));
            prop_assert_eq!(or.call(p, q), or.call(q, p));
            prop_assert_eq!(and.call(and.call(p, q), r), and.call(p, and.call(q, r)));
            prop_assert_eq!(or.call(or.call(p, q), r), or.call(p, or.call(q, r)));
        }

        #[test]
        fn prop_centroid_within_support(membership in prop::collection::vec(0.0f64..=1.0, 11)) {
            let universe: Vec<f64> = (0..11).map(f64::from).collect();

            if let Some(x) = DefuzzificationOp::Centroid.call(&universe, &membership) {
                prop_assert!((-1e-9..=10.0 + 1e-9).contains(&x));
            } else {
                prop_assert!(membership.iter().all(|&m| m == 0.));
            }
        }
    }
}
