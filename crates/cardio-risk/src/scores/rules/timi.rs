//! TIMI risk for unstable angina / NSTEMI: seven criteria worth one point each.

use super::super::catalog::{FieldSpec, ScoreDefinition};
use super::super::coercion::FieldReader;
use super::super::domain::{RiskTier, ScoreComponent, ScoreError, ScoreId};
use super::super::interpretation::{Interpretation, TierTable};
use super::{flag_component, Assessment};

const AGE: &str = "age";
const CAD_RISK_FACTORS: &str = "cad_risk_factors";
const KNOWN_CAD: &str = "known_cad";
const ASPIRIN: &str = "aspirin_last_7d";
const SEVERE_ANGINA: &str = "severe_angina";
const ST_DEVIATION: &str = "st_deviation";
const ELEVATED_MARKERS: &str = "elevated_markers";

const TABLE: TierTable = TierTable::new(
    &[
        (
            2,
            Interpretation::new(
                RiskTier::Low,
                "Riesgo bajo: ~≤8% de muerte, IAM o revascularización urgente a 14 días.",
            ),
        ),
        (
            4,
            Interpretation::new(
                RiskTier::Intermediate,
                "Riesgo intermedio: ~13–20% de eventos a 14 días.",
            ),
        ),
    ],
    Interpretation::new(RiskTier::High, "Riesgo alto: ~26–41% de eventos a 14 días."),
);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimiInput {
    pub age: i64,
    /// Count of known coronary risk factors (family history, hypertension,
    /// hypercholesterolemia, diabetes, active smoking).
    pub cad_risk_factors: i64,
    pub known_cad: bool,
    pub aspirin_last_7d: bool,
    pub severe_angina: bool,
    pub st_deviation: bool,
    pub elevated_markers: bool,
}

impl TimiInput {
    pub(crate) fn read(reader: &FieldReader<'_>) -> Result<Self, ScoreError> {
        Ok(Self {
            age: reader.integer(AGE)?,
            cad_risk_factors: reader.integer(CAD_RISK_FACTORS)?,
            known_cad: reader.flag(KNOWN_CAD),
            aspirin_last_7d: reader.flag(ASPIRIN),
            severe_angina: reader.flag(SEVERE_ANGINA),
            st_deviation: reader.flag(ST_DEVIATION),
            elevated_markers: reader.flag(ELEVATED_MARKERS),
        })
    }

    pub fn components(&self) -> Vec<ScoreComponent> {
        vec![
            ScoreComponent {
                field: AGE,
                points: u8::from(self.age >= 65),
                notes: format!("Edad: {} años", self.age),
            },
            ScoreComponent {
                field: CAD_RISK_FACTORS,
                points: u8::from(self.cad_risk_factors >= 3),
                notes: format!("Factores de riesgo coronario: {}", self.cad_risk_factors),
            },
            flag_component(KNOWN_CAD, "Enfermedad coronaria conocida", self.known_cad, 1),
            flag_component(ASPIRIN, "AAS en los últimos 7 días", self.aspirin_last_7d, 1),
            flag_component(SEVERE_ANGINA, "Angina grave", self.severe_angina, 1),
            flag_component(ST_DEVIATION, "Desviación del ST", self.st_deviation, 1),
            flag_component(ELEVATED_MARKERS, "Marcadores elevados", self.elevated_markers, 1),
        ]
    }

    pub fn points(&self) -> u8 {
        self.components().iter().map(|component| component.points).sum()
    }

    pub fn interpret(points: u8) -> Interpretation {
        TABLE.classify(points)
    }
}

fn assess(reader: &FieldReader<'_>) -> Result<Assessment, ScoreError> {
    let input = TimiInput::read(reader)?;
    let components = input.components();
    let points = components.iter().map(|component| component.points).sum();

    Ok(Assessment {
        components,
        interpretation: TimiInput::interpret(points),
    })
}

pub(crate) fn definition() -> ScoreDefinition {
    ScoreDefinition {
        id: ScoreId::Timi,
        name: "TIMI (AI/IAMSEST)",
        description: "Riesgo de eventos a 14 días en angina inestable o IAM sin elevación del ST.",
        fields: vec![
            FieldSpec::integer(AGE, "Edad", "años", 1),
            FieldSpec::integer(CAD_RISK_FACTORS, "Factores de riesgo coronario", "factores", 1),
            FieldSpec::boolean(KNOWN_CAD, "Enfermedad coronaria conocida (estenosis ≥50%)", 1),
            FieldSpec::boolean(ASPIRIN, "AAS en los últimos 7 días", 1),
            FieldSpec::boolean(SEVERE_ANGINA, "≥2 episodios de angina en 24 h", 1),
            FieldSpec::boolean(ST_DEVIATION, "Desviación del ST ≥0,5 mm", 1),
            FieldSpec::boolean(ELEVATED_MARKERS, "Marcadores cardiacos elevados", 1),
        ],
        assess,
    }
}
