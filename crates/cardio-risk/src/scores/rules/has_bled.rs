//! HAS-BLED bleeding risk for patients on or considered for anticoagulation.

use super::super::catalog::{FieldSpec, ScoreDefinition};
use super::super::coercion::FieldReader;
use super::super::domain::{RiskTier, ScoreComponent, ScoreError, ScoreId};
use super::super::interpretation::{Interpretation, TierTable};
use super::{flag_component, Assessment};

const HYPERTENSION: &str = "hypertension";
const RENAL_DISEASE: &str = "renal_disease";
const HEPATIC_DISEASE: &str = "hepatic_disease";
const STROKE: &str = "stroke";
const BLEEDING: &str = "bleeding";
const LABILE_INR: &str = "labile_inr";
const AGE: &str = "age";
const DRUGS: &str = "drugs";
const ALCOHOL: &str = "alcohol";

const TABLE: TierTable = TierTable::new(
    &[(
        2,
        Interpretation::new(RiskTier::Low, "Riesgo de sangrado bajo (≤2 puntos)."),
    )],
    Interpretation::new(
        RiskTier::High,
        "Riesgo de sangrado alto (≥3 puntos): identificar y corregir factores modificables; \
         no contraindica por sí solo la anticoagulación.",
    ),
);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HasBledInput {
    /// Uncontrolled hypertension, systolic above 160 mmHg.
    pub hypertension: bool,
    pub renal_disease: bool,
    pub hepatic_disease: bool,
    pub stroke: bool,
    pub bleeding: bool,
    pub labile_inr: bool,
    pub age: i64,
    pub drugs: bool,
    pub alcohol: bool,
}

impl HasBledInput {
    pub(crate) fn read(reader: &FieldReader<'_>) -> Result<Self, ScoreError> {
        Ok(Self {
            hypertension: reader.flag(HYPERTENSION),
            renal_disease: reader.flag(RENAL_DISEASE),
            hepatic_disease: reader.flag(HEPATIC_DISEASE),
            stroke: reader.flag(STROKE),
            bleeding: reader.flag(BLEEDING),
            labile_inr: reader.flag(LABILE_INR),
            age: reader.integer(AGE)?,
            drugs: reader.flag(DRUGS),
            alcohol: reader.flag(ALCOHOL),
        })
    }

    pub fn elderly(&self) -> bool {
        self.age > 65
    }

    pub fn components(&self) -> Vec<ScoreComponent> {
        vec![
            flag_component(HYPERTENSION, "Hipertensión no controlada", self.hypertension, 1),
            flag_component(RENAL_DISEASE, "Función renal alterada", self.renal_disease, 1),
            flag_component(HEPATIC_DISEASE, "Función hepática alterada", self.hepatic_disease, 1),
            flag_component(STROKE, "ACV previo", self.stroke, 1),
            flag_component(BLEEDING, "Sangrado o predisposición", self.bleeding, 1),
            flag_component(LABILE_INR, "INR lábil", self.labile_inr, 1),
            ScoreComponent {
                field: AGE,
                points: u8::from(self.elderly()),
                notes: format!("Edad: {} años", self.age),
            },
            flag_component(DRUGS, "Fármacos", self.drugs, 1),
            flag_component(ALCOHOL, "Alcohol", self.alcohol, 1),
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
    let input = HasBledInput::read(reader)?;
    let components = input.components();
    let points = components.iter().map(|component| component.points).sum();

    Ok(Assessment {
        components,
        interpretation: HasBledInput::interpret(points),
    })
}

pub(crate) fn definition() -> ScoreDefinition {
    ScoreDefinition {
        id: ScoreId::HasBled,
        name: "HAS-BLED",
        description: "Riesgo de sangrado mayor en pacientes anticoagulados.",
        fields: vec![
            FieldSpec::boolean(HYPERTENSION, "Hipertensión no controlada (PAS > 160 mmHg)", 1),
            FieldSpec::boolean(RENAL_DISEASE, "Función renal alterada", 1),
            FieldSpec::boolean(HEPATIC_DISEASE, "Función hepática alterada", 1),
            FieldSpec::boolean(STROKE, "ACV previo", 1),
            FieldSpec::boolean(BLEEDING, "Historia o predisposición de sangrado", 1),
            FieldSpec::boolean(LABILE_INR, "INR lábil", 1),
            FieldSpec::integer(AGE, "Edad", "años", 1),
            FieldSpec::boolean(DRUGS, "Fármacos (antiagregantes, AINE)", 1),
            FieldSpec::boolean(ALCOHOL, "Consumo de alcohol", 1),
        ],
        assess,
    }
}
