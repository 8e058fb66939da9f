use fuzzy_mamdani::{ComputeError, ConfigError, SystemConfig};

const PARTIAL_STEAK: &str = r#"{
    "variables": [
        { "name": "thickness", "kind": "antecedent", "min": 0.5, "max": 5, "step": 0.5,
          "terms": [
            { "label": "thin", "membership": { "shape": "trapezoidal", "a": 0.5, "b": 0.5, "c": 1, "d": 1.5 } },
            { "label": "medium", "membership": { "shape": "trapezoidal", "a": 1, "b": 2, "c": 3.5, "d": 4 } }
          ] },
        { "name": "temperature", "kind": "antecedent", "min": 50, "max": 80, "step": 5,
          "terms": [
            { "label": "low", "membership": { "shape": "trapezoidal", "a": 50, "b": 50, "c": 55, "d": 60 } }
          ] },
        { "name": "frying_time", "kind": "antecedent", "min": 2, "max": 16, "step": 2,
          "terms": [
            { "label": "short", "membership": { "shape": "trapezoidal", "a": 2, "b": 2, "c": 4, "d": 6 } },
            { "label": "medium", "membership": { "shape": "trapezoidal", "a": 4, "b": 6, "c": 10, "d": 12 } }
          ] },
        { "name": "doneness", "kind": "consequent", "min": 0, "max": 10, "step": 1,
          "terms": [
            { "label": "rare", "membership": { "shape": "triangular", "a": 0, "b": 1, "c": 2 } },
            { "label": "medium rare", "membership": { "shape": "triangular", "a": 1, "b": 3, "c": 4 } }
          ] }
    ],
    "rules": [
        { "when": { "and": [
            { "and": [
                { "or": [
                    { "is": { "variable": "thickness", "label": "thin" } },
                    { "is": { "variable": "thickness", "label": "medium" } } ] },
                { "is": { "variable": "temperature", "label": "low" } } ] },
            { "is": { "variable": "frying_time", "label": "short" } } ] },
          "then": { "variable": "doneness", "label": "rare" } },
        { "when": { "and": [
            { "and": [
                { "or": [
                    { "is": { "variable": "thickness", "label": "thin" } },
                    { "is": { "variable": "thickness", "label": "medium" } } ] },
                { "is": { "variable": "temperature", "label": "low" } } ] },
            { "is": { "variable": "frying_time", "label": "medium" } } ] },
          "then": { "variable": "doneness", "label": "medium rare" } }
    ]
}"#;

#[test]
fn json_engine_matches_programmatic_one() {
    let engine = SystemConfig::from_json(PARTIAL_STEAK).unwrap().build().unwrap();
    let inputs = engine
        .inputs([("thickness", 1.), ("temperature", 52.), ("frying_time", 5.)])
        .unwrap();
    let outputs = engine.compute(&inputs).unwrap();

    assert_eq!(outputs.firing_strengths(), &[0.5, 0.5]);
    assert_eq!(outputs.value("doneness"), Ok(2.));
}

#[test]
fn unfired_output_is_reported_undefined() {
    let engine = SystemConfig::from_json(PARTIAL_STEAK).unwrap().build().unwrap();
    let inputs = engine
        .inputs([("thickness", 5.), ("temperature", 80.), ("frying_time", 16.)])
        .unwrap();
    let outputs = engine.compute(&inputs).unwrap();

    assert_eq!(outputs.firing_strengths(), &[0., 0.]);
    assert_eq!(outputs.get("doneness"), None);
    assert_eq!(outputs.value("doneness"), Err(ComputeError::UndefinedOutput("doneness".into())));
}

#[test]
fn unknown_label_fails_the_build() {
    let json = PARTIAL_STEAK.replace(r#""label": "medium rare" } }"#, r#""label": "blue" } }"#);
    let err = SystemConfig::from_json(&json).unwrap().build().unwrap_err();

    assert_eq!(
        err,
        ConfigError::UnknownLabel {
            variable: "doneness".into(),
            label: "blue".into()
        }
    );
}
