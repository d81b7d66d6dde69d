use super::common::*;
use crate::scores::{ClinicalInput, RiskTier, ScoreError, ScoreId};

#[test]
fn elderly_woman_with_heart_failure_is_recommended_anticoagulation() {
    let engine = strict_engine();
    let input = cha2ds2_vasc_patient(80, "F").with("heart_failure", true);

    let result = engine.evaluate("cha2ds2_vasc", &input).expect("score evaluates");

    assert_eq!(result.points, 4);
    assert_eq!(result.max_points, 9);
    assert_eq!(result.tier, RiskTier::High);
    assert!(result.interpretation.contains("mujer"));
    assert!(result.interpretation.contains("se recomienda"));
}

#[test]
fn has_bled_counts_age_over_sixty_five_only() {
    let engine = strict_engine();
    let input = ClinicalInput::new().with("age", 70);

    let result = engine.evaluate("has_bled", &input).expect("score evaluates");

    assert_eq!(result.points, 1);
    assert_eq!(result.tier, RiskTier::Low);
    assert!(result.interpretation.contains("bajo"));
}

#[test]
fn has_bled_three_points_flags_modifiable_factors() {
    let engine = strict_engine();
    let input = ClinicalInput::new()
        .with("age", 66)
        .with("labile_inr", true)
        .with("alcohol", true);

    let result = engine.evaluate("has_bled", &input).expect("score evaluates");

    assert_eq!(result.points, 3);
    assert_eq!(result.tier, RiskTier::High);
    assert!(result.interpretation.contains("factores modificables"));
}

#[test]
fn has_bled_age_threshold_is_strict() {
    let engine = strict_engine();
    let result = engine
        .evaluate("has_bled", &ClinicalInput::new().with("age", 65))
        .expect("score evaluates");
    assert_eq!(result.points, 0);
}

#[test]
fn timi_with_age_and_risk_factors_is_low_risk() {
    let engine = strict_engine();
    let result = engine
        .evaluate("timi", &timi_patient(70, 3, &[]))
        .expect("score evaluates");

    assert_eq!(result.points, 2);
    assert_eq!(result.tier, RiskTier::Low);
    assert!(result.interpretation.contains("8%"));
}

#[test]
fn timi_tiers_follow_event_rate_bands() {
    let engine = strict_engine();

    let intermediate = engine
        .evaluate("timi", &timi_patient(70, 3, &["known_cad"]))
        .expect("score evaluates");
    assert_eq!(intermediate.points, 3);
    assert_eq!(intermediate.tier, RiskTier::Intermediate);

    let high = engine
        .evaluate(
            "timi",
            &timi_patient(70, 3, &["known_cad", "aspirin_last_7d", "st_deviation"]),
        )
        .expect("score evaluates");
    assert_eq!(high.points, 5);
    assert_eq!(high.tier, RiskTier::High);

    let everything = engine
        .evaluate(
            "timi",
            &timi_patient(
                90,
                5,
                &[
                    "known_cad",
                    "aspirin_last_7d",
                    "severe_angina",
                    "st_deviation",
                    "elevated_markers",
                ],
            ),
        )
        .expect("score evaluates");
    assert_eq!(everything.points, 7);
    assert_eq!(everything.max_points, 7);
}

#[test]
fn worst_heart_presentation_scores_ten() {
    let engine = strict_engine();
    let result = engine
        .evaluate("heart", &worst_heart_presentation())
        .expect("score evaluates");

    assert_eq!(result.points, 10);
    assert_eq!(result.tier, RiskTier::High);
    assert!(result.interpretation.contains("50%"));
}

#[test]
fn heart_band_edges() {
    let engine = strict_engine();

    let three = ClinicalInput::new()
        .with("history", "moderate")
        .with("ecg", "nonspecific")
        .with("troponin", "1_3x");
    let result = engine.evaluate("heart", &three).expect("score evaluates");
    assert_eq!(result.points, 3);
    assert_eq!(result.tier, RiskTier::Low);

    let four = three.clone().with("riskf", "one_or_two");
    let result = engine.evaluate("heart", &four).expect("score evaluates");
    assert_eq!(result.points, 4);
    assert_eq!(result.tier, RiskTier::Intermediate);

    let seven = ClinicalInput::new()
        .with("history", "high")
        .with("ecg", "st_deviation")
        .with("age_band", "ge65")
        .with("riskf", "one_or_two");
    let result = engine.evaluate("heart", &seven).expect("score evaluates");
    assert_eq!(result.points, 7);
    assert_eq!(result.tier, RiskTier::High);
}

#[test]
fn missing_or_blank_age_contributes_nothing() {
    let engine = strict_engine();

    let missing = ClinicalInput::new().with("sex", "M");
    let result = engine
        .evaluate("cha2ds2_vasc", &missing)
        .expect("missing age is not an error");
    assert_eq!(result.points, 0);
    assert_eq!(result.tier, RiskTier::Low);

    let blank = ClinicalInput::new().with("age", "").with("sex", "M");
    let result = engine
        .evaluate("cha2ds2_vasc", &blank)
        .expect("blank age is not an error");
    assert_eq!(result.points, 0);
}

#[test]
fn empty_input_scores_zero_for_every_score() {
    let engine = strict_engine();
    for id in ScoreId::ALL {
        let result = engine
            .evaluate_score(id, &ClinicalInput::new())
            .expect("defaults apply");
        assert_eq!(result.points, 0, "{id} should default to zero");
        assert_eq!(result.tier, RiskTier::Low);
    }
}

#[test]
fn sex_shifts_the_cha2ds2_vasc_thresholds() {
    let engine = strict_engine();

    let woman_alone = engine
        .evaluate("cha2ds2_vasc", &cha2ds2_vasc_patient(40, "F"))
        .expect("score evaluates");
    assert_eq!(woman_alone.points, 1);
    assert_eq!(woman_alone.tier, RiskTier::Low);

    let man_one = engine
        .evaluate(
            "cha2ds2_vasc",
            &cha2ds2_vasc_patient(40, "M").with("hypertension", true),
        )
        .expect("score evaluates");
    assert_eq!(man_one.points, 1);
    assert_eq!(man_one.tier, RiskTier::Intermediate);

    let woman_two = engine
        .evaluate("cha2ds2_vasc", &cha2ds2_vasc_patient(70, "F"))
        .expect("score evaluates");
    assert_eq!(woman_two.points, 2);
    assert_eq!(woman_two.tier, RiskTier::Intermediate);

    let man_two = engine
        .evaluate("cha2ds2_vasc", &cha2ds2_vasc_patient(76, "M"))
        .expect("score evaluates");
    assert_eq!(man_two.points, 2);
    assert_eq!(man_two.tier, RiskTier::High);
}

#[test]
fn stroke_history_is_worth_two_points() {
    let engine = strict_engine();
    let result = engine
        .evaluate(
            "cha2ds2_vasc",
            &cha2ds2_vasc_patient(50, "M").with("stroke", true),
        )
        .expect("score evaluates");

    assert_eq!(result.points, 2);
    let stroke = result
        .components
        .iter()
        .find(|component| component.field == "stroke")
        .expect("stroke component reported");
    assert_eq!(stroke.points, 2);
}

#[test]
fn components_add_up_to_points() {
    let engine = strict_engine();
    let input = cha2ds2_vasc_patient(68, "F")
        .with("diabetes", true)
        .with("vascular_disease", true);

    let result = engine.evaluate("cha2ds2_vasc", &input).expect("score evaluates");

    let sum: u8 = result.components.iter().map(|component| component.points).sum();
    assert_eq!(sum, result.points);
    assert_eq!(result.components.len(), 7);
}

#[test]
fn unknown_score_is_rejected() {
    let engine = strict_engine();
    let err = engine
        .evaluate("grace", &ClinicalInput::new())
        .expect_err("grace is not bundled");

    assert_eq!(
        err,
        ScoreError::UnknownScore {
            id: "grace".to_string()
        }
    );
    assert!(!err.is_input_error());
}

#[test]
fn score_ids_accept_display_spellings() {
    for raw in ["cha2ds2_vasc", "CHA2DS2-VASc", "cha₂ds₂-vasc", " Cha2ds2Vasc "] {
        assert_eq!(raw.parse::<ScoreId>(), Ok(ScoreId::Cha2ds2Vasc), "{raw}");
    }
    assert_eq!("HAS-BLED".parse::<ScoreId>(), Ok(ScoreId::HasBled));
    assert_eq!("TIMI".parse::<ScoreId>(), Ok(ScoreId::Timi));
    assert_eq!("Heart".parse::<ScoreId>(), Ok(ScoreId::Heart));
}

#[test]
fn evaluation_is_deterministic() {
    let engine = strict_engine();
    let input = worst_heart_presentation();
    let first = engine.evaluate("heart", &input).expect("score evaluates");
    let second = engine.evaluate("heart", &input).expect("score evaluates");
    assert_eq!(first, second);
}
