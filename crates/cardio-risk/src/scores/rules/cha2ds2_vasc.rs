//! CHA₂DS₂-VASc stroke risk in atrial fibrillation.
//!
//! Sex both adds a point and selects the threshold table: a woman with no
//! other risk factor scores 1 and is still classified as low risk.

use super::super::catalog::{CodedOption, FieldSpec, ScoreDefinition};
use super::super::coercion::FieldReader;
use super::super::domain::{RiskTier, ScoreComponent, ScoreError, ScoreId};
use super::super::interpretation::{Interpretation, TierTable};
use super::{flag_component, option_component, Assessment};

const HEART_FAILURE: &str = "heart_failure";
const HYPERTENSION: &str = "hypertension";
const AGE: &str = "age";
const DIABETES: &str = "diabetes";
const STROKE: &str = "stroke";
const VASCULAR_DISEASE: &str = "vascular_disease";
const SEX: &str = "sex";

const MALE_TABLE: TierTable = TierTable::new(
    &[
        (
            0,
            Interpretation::new(
                RiskTier::Low,
                "Riesgo bajo (hombre, 0 puntos): no se recomienda anticoagulación.",
            ),
        ),
        (
            1,
            Interpretation::new(
                RiskTier::Intermediate,
                "Riesgo moderado (hombre, 1 punto): considerar anticoagulación oral.",
            ),
        ),
    ],
    Interpretation::new(
        RiskTier::High,
        "Riesgo alto (hombre, ≥2 puntos): se recomienda anticoagulación oral.",
    ),
);

const FEMALE_TABLE: TierTable = TierTable::new(
    &[
        (
            1,
            Interpretation::new(
                RiskTier::Low,
                "Riesgo bajo (mujer, 1 punto): no se recomienda anticoagulación.",
            ),
        ),
        (
            2,
            Interpretation::new(
                RiskTier::Intermediate,
                "Riesgo moderado (mujer, 2 puntos): considerar anticoagulación oral.",
            ),
        ),
    ],
    Interpretation::new(
        RiskTier::High,
        "Riesgo alto (mujer, ≥3 puntos): se recomienda anticoagulación oral.",
    ),
);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl CodedOption for Sex {
    const ALL: &'static [Self] = &[Sex::Male, Sex::Female];
    const DEFAULT: Self = Sex::Male;

    fn code(self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Sex::Male => "Masculino",
            Sex::Female => "Femenino",
        }
    }

    fn points(self) -> u8 {
        match self {
            Sex::Male => 0,
            Sex::Female => 1,
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Sex::Male => &["male", "masculino", "hombre"],
            Sex::Female => &["female", "femenino", "mujer"],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cha2ds2VascInput {
    pub heart_failure: bool,
    pub hypertension: bool,
    pub age: i64,
    pub diabetes: bool,
    pub stroke: bool,
    pub vascular_disease: bool,
    pub sex: Sex,
}

impl Cha2ds2VascInput {
    pub(crate) fn read(reader: &FieldReader<'_>) -> Result<Self, ScoreError> {
        Ok(Self {
            heart_failure: reader.flag(HEART_FAILURE),
            hypertension: reader.flag(HYPERTENSION),
            age: reader.integer(AGE)?,
            diabetes: reader.flag(DIABETES),
            stroke: reader.flag(STROKE),
            vascular_disease: reader.flag(VASCULAR_DISEASE),
            sex: reader.option(SEX)?,
        })
    }

    pub fn age_points(&self) -> u8 {
        match self.age {
            age if age >= 75 => 2,
            65..=74 => 1,
            _ => 0,
        }
    }

    pub fn components(&self) -> Vec<ScoreComponent> {
        vec![
            flag_component(HEART_FAILURE, "Insuficiencia cardiaca", self.heart_failure, 1),
            flag_component(HYPERTENSION, "Hipertensión", self.hypertension, 1),
            ScoreComponent {
                field: AGE,
                points: self.age_points(),
                notes: format!("Edad: {} años", self.age),
            },
            flag_component(DIABETES, "Diabetes", self.diabetes, 1),
            flag_component(STROKE, "ACV/AIT/tromboembolismo previo", self.stroke, 2),
            flag_component(VASCULAR_DISEASE, "Enfermedad vascular", self.vascular_disease, 1),
            option_component(SEX, "Sexo", self.sex),
        ]
    }

    pub fn points(&self) -> u8 {
        self.components().iter().map(|component| component.points).sum()
    }

    pub fn interpret(&self, points: u8) -> Interpretation {
        match self.sex {
            Sex::Male => MALE_TABLE.classify(points),
            Sex::Female => FEMALE_TABLE.classify(points),
        }
    }
}

fn assess(reader: &FieldReader<'_>) -> Result<Assessment, ScoreError> {
    let input = Cha2ds2VascInput::read(reader)?;
    let components = input.components();
    let points = components.iter().map(|component| component.points).sum();

    Ok(Assessment {
        components,
        interpretation: input.interpret(points),
    })
}

pub(crate) fn definition() -> ScoreDefinition {
    ScoreDefinition {
        id: ScoreId::Cha2ds2Vasc,
        name: "CHA₂DS₂-VASc",
        description: "Riesgo de ictus en fibrilación auricular; orienta la anticoagulación.",
        fields: vec![
            FieldSpec::boolean(HEART_FAILURE, "Insuficiencia cardiaca congestiva", 1),
            FieldSpec::boolean(HYPERTENSION, "Hipertensión arterial", 1),
            FieldSpec::integer(AGE, "Edad", "años", 2),
            FieldSpec::boolean(DIABETES, "Diabetes mellitus", 1),
            FieldSpec::boolean(STROKE, "ACV, AIT o tromboembolismo previo", 2),
            FieldSpec::boolean(
                VASCULAR_DISEASE,
                "Enfermedad vascular (IAM previo, arteriopatía periférica, placa aórtica)",
                1,
            ),
            FieldSpec::enumeration::<Sex>(SEX, "Sexo"),
        ],
        assess,
    }
}
