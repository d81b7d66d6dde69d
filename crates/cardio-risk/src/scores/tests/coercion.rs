use super::common::*;
use crate::scores::{ClinicalInput, FieldValue, RiskTier, ScoreError};

#[test]
fn strict_policy_rejects_unparseable_age() {
    let engine = strict_engine();
    let input = ClinicalInput::new().with("age", "abc");

    let err = engine
        .evaluate("cha2ds2_vasc", &input)
        .expect_err("strict policy rejects text age");

    assert_eq!(
        err,
        ScoreError::InvalidNumber {
            field: "age",
            value: "abc".to_string(),
        }
    );
    assert!(err.is_input_error());
}

#[test]
fn lenient_policy_reads_unparseable_age_as_zero() {
    let engine = lenient_engine();
    let input = ClinicalInput::new().with("age", "abc").with("sex", "F");

    let result = engine
        .evaluate("cha2ds2_vasc", &input)
        .expect("lenient policy falls back");

    assert_eq!(result.points, 1);
    assert_eq!(result.tier, RiskTier::Low);
}

#[test]
fn strict_policy_lists_allowed_codes() {
    let engine = strict_engine();
    let input = ClinicalInput::new().with("history", "extreme");

    let err = engine
        .evaluate("heart", &input)
        .expect_err("unknown code rejected");

    match &err {
        ScoreError::UnknownCode {
            field,
            code,
            allowed,
        } => {
            assert_eq!(*field, "history");
            assert_eq!(code, "extreme");
            assert_eq!(allowed, &vec!["slight", "moderate", "high"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("slight, moderate, high"));
}

#[test]
fn lenient_policy_uses_enumeration_default() {
    let engine = lenient_engine();
    let input = ClinicalInput::new()
        .with("history", "extreme")
        .with("troponin", "gt3x");

    let result = engine.evaluate("heart", &input).expect("falls back");

    assert_eq!(result.points, 2);
}

#[test]
fn boolean_words_are_recognised() {
    let engine = strict_engine();

    for truthy in ["sí", "SI", "yes", " true ", "1", "on"] {
        let input = ClinicalInput::new().with("known_cad", truthy);
        let result = engine.evaluate("timi", &input).expect("evaluates");
        assert_eq!(result.points, 1, "'{truthy}' should count as present");
    }

    for falsy in ["no", "0", "", "off", "maybe"] {
        let input = ClinicalInput::new().with("known_cad", falsy);
        let result = engine.evaluate("timi", &input).expect("evaluates");
        assert_eq!(result.points, 0, "'{falsy}' should count as absent");
    }
}

#[test]
fn numeric_flags_follow_non_zero() {
    let engine = strict_engine();
    let input = ClinicalInput::new()
        .with("hypertension", 1)
        .with("diabetes", 0)
        .with("heart_failure", 2.0);

    let result = engine.evaluate("cha2ds2_vasc", &input).expect("evaluates");

    assert_eq!(result.points, 2);
}

#[test]
fn codes_match_case_insensitively() {
    let engine = strict_engine();
    let input = ClinicalInput::new()
        .with("troponin", "GT3X")
        .with("ecg", " Nonspecific ");

    let result = engine.evaluate("heart", &input).expect("evaluates");

    assert_eq!(result.points, 3);
}

#[test]
fn sex_accepts_spelled_out_aliases() {
    let engine = strict_engine();

    for alias in ["female", "Mujer", "f"] {
        let result = engine
            .evaluate("cha2ds2_vasc", &ClinicalInput::new().with("sex", alias))
            .expect("alias accepted");
        assert_eq!(result.points, 1, "'{alias}'");
    }
}

#[test]
fn values_of_the_wrong_kind_take_the_default() {
    let engine = strict_engine();
    let input = ClinicalInput::new()
        .with("history", true)
        .with("ecg", 2)
        .with("age_band", 70.0);

    let result = engine.evaluate("heart", &input).expect("evaluates");

    assert_eq!(result.points, 0);

    let boolean_age = ClinicalInput::new().with("age", true);
    let result = engine
        .evaluate("has_bled", &boolean_age)
        .expect("evaluates");
    assert_eq!(result.points, 0);
}

#[test]
fn decimal_ages_are_truncated() {
    let engine = strict_engine();
    let input = ClinicalInput::new().with("age", 74.9);

    let result = engine.evaluate("cha2ds2_vasc", &input).expect("evaluates");

    assert_eq!(result.points, 1);
    let age = result
        .components
        .iter()
        .find(|component| component.field == "age")
        .expect("age component");
    assert_eq!(age.points, 1);
    assert!(age.notes.contains("74"));
}

#[test]
fn non_finite_decimals_follow_the_policy() {
    let input = ClinicalInput::new().with("age", f64::NAN);

    let err = strict_engine()
        .evaluate("timi", &input)
        .expect_err("NaN rejected");
    assert!(matches!(err, ScoreError::InvalidNumber { field: "age", .. }));

    let result = lenient_engine().evaluate("timi", &input).expect("defaults");
    assert_eq!(result.points, 0);
}

#[test]
fn undeclared_fields_are_ignored() {
    let engine = strict_engine();
    let input = cha2ds2_vasc_patient(70, "M")
        .with("weight_kg", "heavy")
        .with("troponin", "gt3x");

    let result = engine.evaluate("cha2ds2_vasc", &input).expect("evaluates");

    assert_eq!(result.points, 1);
}

#[test]
fn json_null_counts_as_missing() {
    let input: ClinicalInput =
        serde_json::from_str(r#"{"age": null, "sex": "F", "stroke": true}"#).expect("parses");

    assert_eq!(input.len(), 2);
    assert!(input.get("age").is_none());
    assert_eq!(input.get("stroke"), Some(&FieldValue::Boolean(true)));

    let result = strict_engine()
        .evaluate("cha2ds2_vasc", &input)
        .expect("evaluates");
    assert_eq!(result.points, 3);
}

#[test]
fn json_values_keep_their_kind() {
    let input: ClinicalInput =
        serde_json::from_str(r#"{"age": 70, "weight": 71.5, "sex": "M", "stroke": false}"#)
            .expect("parses");

    assert_eq!(input.get("age"), Some(&FieldValue::Integer(70)));
    assert_eq!(input.get("weight"), Some(&FieldValue::Decimal(71.5)));
    assert_eq!(input.get("sex"), Some(&FieldValue::Text("M".to_string())));
    assert_eq!(input.get("stroke"), Some(&FieldValue::Boolean(false)));
}

#[test]
fn text_numbers_are_parsed() {
    let engine = strict_engine();
    let input: ClinicalInput = [("age", "66"), ("cad_risk_factors", " 3 ")]
        .into_iter()
        .collect();

    let result = engine.evaluate("timi", &input).expect("evaluates");

    assert_eq!(result.points, 2);
}

#[test]
fn lenient_fallbacks_are_logged() {
    let engine = lenient_engine();
    let input = ClinicalInput::new()
        .with("age", "7O")
        .with("sex", "F")
        .with("stroke", "tal vez");

    let (result, logs) = with_captured_logs(|| engine.evaluate("cha2ds2_vasc", &input));

    assert_eq!(result.expect("lenient policy scores").points, 1);
    assert!(logs.contains("WARN"), "{logs}");
    assert!(logs.contains("unparseable number, using 0"), "{logs}");
    assert!(logs.contains("7O"), "{logs}");
    assert!(logs.contains("unrecognised boolean"), "{logs}");
}

#[test]
fn unknown_codes_under_lenient_policy_are_logged() {
    let engine = lenient_engine();
    let input = ClinicalInput::new().with("troponin", "huge");

    let (result, logs) = with_captured_logs(|| engine.evaluate("heart", &input));

    assert_eq!(result.expect("falls back").points, 0);
    assert!(logs.contains("unknown code, using default"), "{logs}");
    assert!(logs.contains("huge"), "{logs}");
}

#[test]
fn numeric_text_and_decimals_agree_for_flags() {
    let engine = strict_engine();

    let from_text = engine
        .evaluate("timi", &ClinicalInput::new().with("known_cad", "2"))
        .expect("evaluates");
    let from_integer = engine
        .evaluate("timi", &ClinicalInput::new().with("known_cad", 2))
        .expect("evaluates");
    assert_eq!(from_text.points, 1);
    assert_eq!(from_integer.points, 1);

    let not_a_number = engine
        .evaluate("timi", &ClinicalInput::new().with("known_cad", f64::NAN))
        .expect("evaluates");
    assert_eq!(not_a_number.points, 0);

    let infinite = engine
        .evaluate("timi", &ClinicalInput::new().with("known_cad", f64::INFINITY))
        .expect("evaluates");
    assert_eq!(infinite.points, 0);
}

#[test]
fn decimal_text_is_truncated_like_decimals() {
    let engine = strict_engine();
    let input = ClinicalInput::new().with("age", "74.9");

    let result = engine.evaluate("cha2ds2_vasc", &input).expect("evaluates");

    assert_eq!(result.points, 1);
}

#[test]
fn arrays_and_objects_read_as_missing() {
    let input: ClinicalInput = serde_json::from_str(
        r#"{"age": [80], "sex": "F", "heart_failure": {"yes": true}, "troponin": ["gt3x"]}"#,
    )
    .expect("parses");

    assert!(matches!(input.get("age"), Some(FieldValue::Other(_))));

    let result = strict_engine()
        .evaluate("cha2ds2_vasc", &input)
        .expect("wrong kinds default");
    assert_eq!(result.points, 1);
}
