/// **(internal)** Test evaluating several important formulae on several models.
/// Compare the computed satisfaction degrees with the expected numbers (precomputed by
/// hand on the small models below).
mod _test_against_precomputed;

/// **(internal)** Test algebraic laws relating the evaluation of different formulae.
mod _test_formula_equivalences;

/// **(internal)** Utilities used in tests, such as building graphs from literal models.
mod _test_util;

// a single unregulated Boolean gene; both states only self-loop
const MODEL_SINGLETON: &str = r#"{ "variables": { "x": 1 }, "regulations": [] }"#;

// a single ternary gene rising along the chain (0) -> (1) -> (2)
const MODEL_CHAIN: &str = r#"{
    "variables": { "x": 2 },
    "regulations": [
        { "target": "x",
          "regulators": [ { "variable": "x", "thresholds": [1] } ],
          "contexts": [ { "intervals": ["*"], "target_value": 2 } ] }
    ]
}"#;

// two Boolean genes: `a` rises unconditionally, `b` follows `a`;
// STG: (0,0) -> (1,0) -> (1,1) with a self-loop, and (0,1) -> (1,1)
const MODEL_TWO_GENE: &str = r#"{
    "variables": { "a": 1, "b": 1 },
    "regulations": [
        { "target": "a",
          "regulators": [ { "variable": "a", "thresholds": [1] } ],
          "contexts": [ { "intervals": ["*"], "target_value": 1 } ] },
        { "target": "b",
          "regulators": [ { "variable": "a", "thresholds": [1] },
                          { "variable": "b", "thresholds": [1] } ],
          "contexts": [ { "intervals": [2, "*"], "target_value": 1 },
                        { "intervals": [1, 1], "target_value": 0 },
                        { "intervals": [1, 2], "target_value": 1 } ] }
    ]
}"#;

// mutual inhibition of two ternary genes (a toggle switch); the self-looping states
// (2,0) and (0,2) are the two stable attractors
const MODEL_TOGGLE: &str = r#"{
    "variables": { "a": 2, "b": 2 },
    "regulations": [
        { "target": "a",
          "regulators": [ { "variable": "b", "thresholds": [1] } ],
          "contexts": [ { "intervals": [1], "target_value": 2 },
                        { "intervals": [2], "target_value": 0 } ] },
        { "target": "b",
          "regulators": [ { "variable": "a", "thresholds": [1] } ],
          "contexts": [ { "intervals": [1], "target_value": 2 },
                        { "intervals": [2], "target_value": 0 } ] }
    ]
}"#;
