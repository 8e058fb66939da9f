use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Piecewise linear membership shape.
///
/// Both shapes are zero outside of their first and last control point, ramp
/// linearly towards the peak and are one on the peak (a single point for a
/// triangle, the plateau `[b, c]` for a trapezoid). Coincident control points
/// are allowed and describe an open shoulder, e.g. `Trapezoidal { a: 0.5, b: 0.5, .. }`
/// is fully saturated at its left edge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum MembershipFunction {
    Triangular { a: f64, b: f64, c: f64 },
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
}

impl MembershipFunction {
    pub fn triangular(a: f64, b: f64, c: f64) -> ConfigResult<Self> {
        let mf = MembershipFunction::Triangular { a, b, c };

        mf.validate()?;

        Ok(mf)
    }

    pub fn trapezoidal(a: f64, b: f64, c: f64, d: f64) -> ConfigResult<Self> {
        let mf = MembershipFunction::Trapezoidal { a, b, c, d };

        mf.validate()?;

        Ok(mf)
    }

    /// Control points in ascending order.
    pub fn points(&self) -> Vec<f64> {
        match *self {
            Self::Triangular { a, b, c } => vec![a, b, c],
            Self::Trapezoidal { a, b, c, d } => vec![a, b, c, d],
        }
    }

    /// Checks that every control point is finite and weakly increasing.
    pub fn validate(&self) -> ConfigResult<()> {
        let points = self.points();
        let finite = points.iter().all(|p| p.is_finite());
        let ordered = points.windows(2).all(|w| w[0] <= w[1]);

        if finite && ordered {
            Ok(())
        } else {
            Err(ConfigError::InvalidControlPoints(points))
        }
    }

    fn corners(&self) -> (f64, f64, f64, f64) {
        match *self {
            Self::Triangular { a, b, c } => (a, b, b, c),
            Self::Trapezoidal { a, b, c, d } => (a, b, c, d),
        }
    }

    /// Degree of membership of `x`, always within `[0, 1]`. NaN maps to zero.
    pub fn degree(&self, x: f64) -> f64 {
        let (a, b, c, d) = self.corners();

        if x.is_nan() || x < a || x > d {
            return 0.;
        }

        let y = if (b..=c).contains(&x) {
            1.
        } else if x < b {
            // a <= x < b so b - a > 0
            (x - a) / (b - a)
        } else {
            // c < x <= d so d - c > 0
            (d - x) / (d - c)
        };

        y.clamp(0., 1.)
    }
}

/// Ordered set of labelled membership functions for one variable.
#[derive(Clone, Debug, Default)]
pub struct Terms(pub(crate) Vec<(String, MembershipFunction)>);

impl Terms {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, label: impl Into<String>, membership: MembershipFunction) {
        self.0.push((label.into(), membership));
    }

    /// Chaining form of [`Terms::insert`].
    pub fn with(mut self, label: impl Into<String>, membership: MembershipFunction) -> Self {
        self.insert(label, membership);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
