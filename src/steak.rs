//! Steak doneness from thickness (cm), pan temperature (°C) and frying time (min).

use crate::error::ConfigResult;
use crate::inference::InferenceEngine;
use crate::rules::Rules;
use crate::terms::{MembershipFunction as Mf, Terms};
use crate::variable::{Antecedent, Consequent, Variable, Variables};

pub struct SteakDoneness {
    pub engine: InferenceEngine,
    pub thickness: Variable<Antecedent>,
    pub temperature: Variable<Antecedent>,
    pub frying_time: Variable<Antecedent>,
    pub doneness: Variable<Consequent>,
}

impl SteakDoneness {
    pub fn new() -> ConfigResult<Self> {
        let mut vars = Variables::new();

        let thickness = vars.add_antecedent(
            "thickness",
            0.5..=5.,
            0.5,
            Terms::new()
                .with("thin", Mf::trapezoidal(0.5, 0.5, 1., 1.5)?)
                .with("medium", Mf::trapezoidal(1., 2., 3.5, 4.)?)
                .with("thick", Mf::trapezoidal(3.5, 4., 5., 5.)?),
        )?;
        let temperature = vars.add_antecedent(
            "temperature",
            50. ..=80.,
            5.,
            Terms::new()
                .with("low", Mf::trapezoidal(50., 50., 55., 60.)?)
                .with("medium", Mf::trapezoidal(55., 60., 70., 75.)?)
                .with("high", Mf::trapezoidal(70., 75., 80., 80.)?),
        )?;
        let frying_time = vars.add_antecedent(
            "frying_time",
            2. ..=16.,
            2.,
            Terms::new()
                .with("short", Mf::trapezoidal(2., 2., 4., 6.)?)
                .with("medium", Mf::trapezoidal(4., 6., 10., 12.)?)
                .with("long", Mf::trapezoidal(10., 12., 14., 16.)?)
                .with("very long", Mf::trapezoidal(12., 14., 16., 16.)?),
        )?;
        let doneness = vars.add_consequent(
            "doneness",
            0. ..=10.,
            1.,
            Terms::new()
                .with("rare", Mf::triangular(0., 1., 2.)?)
                .with("medium rare", Mf::triangular(1., 3., 4.)?)
                .with("medium", Mf::triangular(3., 5., 7.)?)
                .with("medium well", Mf::triangular(6., 7., 9.)?)
                .with("well", Mf::triangular(8., 9., 10.)?),
        )?;

        let (th, te, ft) = (thickness, temperature, frying_time);
        let mut rules = Rules::with_capacity(15);

        rules.add(
            th.is("thin").or(th.is("medium")).and2(te.is("low"), ft.is("short")),
            doneness.is("rare"),
        );
        rules.add(
            th.is("thick")
                .and2(te.is("low").or(te.is("medium")), ft.is("short").or(ft.is("medium"))),
            doneness.is("rare"),
        );
        rules.add(
            th.is("thin")
                .and2(te.is("medium").or(te.is("high")), ft.is("short").or(ft.is("medium"))),
            doneness.is("medium rare"),
        );
        rules.add(
            th.is("thin").or(th.is("medium")).and2(te.is("low"), ft.is("medium")),
            doneness.is("medium rare"),
        );
        rules.add(
            th.is("thick").and2(te.is("high"), ft.is("short")),
            doneness.is("medium rare"),
        );
        rules.add(
            th.is("medium")
                .and2(te.is("medium").or(te.is("high")), ft.is("short").or(ft.is("medium"))),
            doneness.is("medium rare"),
        );
        rules.add(
            th.is("thick").and2(te.is("low"), ft.is("long").or(ft.is("very long"))),
            doneness.is("medium rare"),
        );
        rules.add(
            th.is("thick").and2(te.is("medium").or(te.is("high")), ft.is("medium")),
            doneness.is("medium rare"),
        );
        rules.add(
            th.is("thin").and2(te.is("medium"), ft.is("long")),
            doneness.is("medium"),
        );
        rules.add(
            th.is("medium").or(th.is("thick")).and2(te.is("medium"), ft.is("long")),
            doneness.is("medium"),
        );
        rules.add(
            th.is("thin").or(th.is("medium")).and2(te.is("low"), ft.is("long")),
            doneness.is("medium"),
        );
        rules.add(
            th.is("thin").and2(te.is("high"), ft.is("medium").or(ft.is("long"))),
            doneness.is("medium well"),
        );
        rules.add(
            th.is("medium").and2(te.is("medium").or(te.is("high")), ft.is("long")),
            doneness.is("medium well"),
        );
        rules.add(
            th.is("thick").and2(te.is("high"), ft.is("long")),
            doneness.is("medium well"),
        );
        rules.add(ft.is("very long"), doneness.is("well"));

        Ok(Self {
            engine: InferenceEngine::new(vars, rules)?,
            thickness,
            temperature,
            frying_time,
            doneness,
        })
    }
}
