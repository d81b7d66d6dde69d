use crate::infra::{input_from_assignments, parse_assignment};
use cardio_risk::config::{AppConfig, ScoringConfig};
use cardio_risk::error::AppError;
use cardio_risk::scores::{
    ClinicalInput, FieldKind, InputPolicy, ScoreDefinition, ScoreEngine, ScoreResult,
    ScoreSummary,
};
use clap::Args;
use serde::Serialize;

#[derive(Args, Debug, Default)]
pub(crate) struct ListArgs {
    /// Print the catalog as JSON instead of a text listing
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Score identifier (cha2ds2_vasc, has_bled, timi, heart)
    pub(crate) score_id: String,
    /// Field values as FIELD=VALUE pairs, e.g. age=74 sex=F stroke=si
    #[arg(value_name = "FIELD=VALUE", value_parser = parse_assignment)]
    pub(crate) fields: Vec<(String, String)>,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
    /// Fall back to field defaults instead of rejecting malformed values
    #[arg(long)]
    pub(crate) lenient: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print every outcome as JSON
    #[arg(long)]
    pub(crate) json: bool,
    /// Evaluate the sample patients with the lenient input policy
    #[arg(long)]
    pub(crate) lenient: bool,
}

/// One sample patient evaluated by the demo.
#[derive(Debug, Serialize)]
struct DemoOutcome {
    label: &'static str,
    score_id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<ScoreResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub(crate) fn run_list(args: ListArgs) -> Result<(), AppError> {
    let engine = ScoreEngine::default();

    if args.json {
        let summaries: Vec<ScoreSummary<'_>> =
            engine.list_scores().iter().map(ScoreSummary::from).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for definition in engine.list_scores() {
        print!("{}", render_definition(definition));
    }
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs, config: &AppConfig) -> Result<(), AppError> {
    let ScoreArgs {
        score_id,
        fields,
        json,
        lenient,
    } = args;

    let engine = engine_for(lenient, &config.scoring);
    let definition = engine.definition(&score_id)?;
    let input = input_from_assignments(&fields);
    let result = engine.evaluate_score(definition.id, &input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_result(definition, &result));
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    let engine = engine_for(args.lenient, &config.scoring);
    let outcomes = demo_outcomes(&engine);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
        return Ok(());
    }

    println!("Cardio risk demo ({} input policy)", engine.policy().label());
    for outcome in &outcomes {
        println!("\n{}", outcome.label);
        match (&outcome.result, &outcome.error) {
            (Some(result), _) => {
                let definition = ScoreDefinition::for_id(result.score);
                print!("{}", render_result(definition, result));
            }
            (None, Some(error)) => println!("  Rejected: {error}"),
            (None, None) => println!("  No outcome"),
        }
    }
    Ok(())
}

/// `--lenient` wins over `APP_INPUT_POLICY`.
fn engine_for(lenient: bool, scoring: &ScoringConfig) -> ScoreEngine {
    if lenient {
        ScoreEngine::new(InputPolicy::Lenient)
    } else {
        ScoreEngine::new(scoring.input_policy)
    }
}

fn demo_patients() -> Vec<(&'static str, &'static str, ClinicalInput)> {
    vec![
        (
            "Woman, 80, with heart failure",
            "cha2ds2_vasc",
            ClinicalInput::new()
                .with("age", 80)
                .with("sex", "F")
                .with("heart_failure", true),
        ),
        (
            "Anticoagulated patient, 70, no other bleeding factors",
            "has_bled",
            ClinicalInput::new().with("age", 70),
        ),
        (
            "NSTEMI work-up, 70, three coronary risk factors",
            "timi",
            ClinicalInput::new()
                .with("age", 70)
                .with("cad_risk_factors", 3),
        ),
        (
            "Chest pain with every HEART component at its worst",
            "heart",
            ClinicalInput::new()
                .with("history", "high")
                .with("ecg", "st_deviation")
                .with("age_band", "ge65")
                .with("riskf", "three_or_more")
                .with("troponin", "gt3x"),
        ),
        (
            "Form submitted with a typo in the age field",
            "cha2ds2_vasc",
            ClinicalInput::new().with("age", "7O").with("sex", "M"),
        ),
    ]
}

fn demo_outcomes(engine: &ScoreEngine) -> Vec<DemoOutcome> {
    demo_patients()
        .into_iter()
        .map(
            |(label, score_id, input)| match engine.evaluate(score_id, &input) {
                Ok(result) => DemoOutcome {
                    label,
                    score_id,
                    result: Some(result),
                    error: None,
                },
                Err(err) => DemoOutcome {
                    label,
                    score_id,
                    result: None,
                    error: Some(err.to_string()),
                },
            },
        )
        .collect()
}

fn render_definition(definition: &ScoreDefinition) -> String {
    let mut out = format!(
        "{} [{}] (0-{} points)\n  {}\n",
        definition.name,
        definition.id,
        definition.max_points(),
        definition.description
    );

    for field in &definition.fields {
        let detail = match &field.kind {
            FieldKind::Boolean => "yes/no".to_string(),
            FieldKind::Integer { unit } => unit.to_string(),
            FieldKind::Enumeration { options, default } => {
                let codes: Vec<&str> = options.iter().map(|option| option.code).collect();
                format!("one of {} (default {default})", codes.join("|"))
            }
        };
        out.push_str(&format!(
            "  - {}: {} [{}: {}], up to {} pt\n",
            field.name,
            field.label,
            field.kind.label(),
            detail,
            field.max_points
        ));
    }
    out
}

fn render_result(definition: &ScoreDefinition, result: &ScoreResult) -> String {
    let mut out = format!(
        "{}: {}/{} points, {} risk\n  {}\n",
        definition.name,
        result.points,
        result.max_points,
        result.tier.label(),
        result.interpretation
    );

    out.push_str("  Components:\n");
    for component in &result.components {
        out.push_str(&format!(
            "    - {} (+{}): {}\n",
            component.field, component.points, component.notes
        ));
    }
    out
}
