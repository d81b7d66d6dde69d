//! HEART score for chest pain: five components rated 0, 1 or 2.

use super::super::catalog::{CodedOption, FieldSpec, ScoreDefinition};
use super::super::coercion::FieldReader;
use super::super::domain::{RiskTier, ScoreComponent, ScoreError, ScoreId};
use super::super::interpretation::{Interpretation, TierTable};
use super::{option_component, Assessment};

const HISTORY: &str = "history";
const ECG: &str = "ecg";
const AGE_BAND: &str = "age_band";
const RISK_FACTORS: &str = "riskf";
const TROPONIN: &str = "troponin";

const TABLE: TierTable = TierTable::new(
    &[
        (
            3,
            Interpretation::new(
                RiskTier::Low,
                "Riesgo bajo: <3% de eventos cardiacos adversos mayores a 6 semanas.",
            ),
        ),
        (
            6,
            Interpretation::new(
                RiskTier::Intermediate,
                "Riesgo intermedio: ~12–20% de eventos cardiacos adversos mayores a 6 semanas.",
            ),
        ),
    ],
    Interpretation::new(
        RiskTier::High,
        "Riesgo alto: ~50% de eventos cardiacos adversos mayores a 6 semanas.",
    ),
);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum History {
    #[default]
    Slight,
    Moderate,
    High,
}

impl CodedOption for History {
    const ALL: &'static [Self] = &[History::Slight, History::Moderate, History::High];
    const DEFAULT: Self = History::Slight;

    fn code(self) -> &'static str {
        match self {
            History::Slight => "slight",
            History::Moderate => "moderate",
            History::High => "high",
        }
    }

    fn label(self) -> &'static str {
        match self {
            History::Slight => "Levemente sospechosa",
            History::Moderate => "Moderadamente sospechosa",
            History::High => "Altamente sospechosa",
        }
    }

    fn points(self) -> u8 {
        match self {
            History::Slight => 0,
            History::Moderate => 1,
            History::High => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Ecg {
    #[default]
    Normal,
    Nonspecific,
    StDeviation,
}

impl CodedOption for Ecg {
    const ALL: &'static [Self] = &[Ecg::Normal, Ecg::Nonspecific, Ecg::StDeviation];
    const DEFAULT: Self = Ecg::Normal;

    fn code(self) -> &'static str {
        match self {
            Ecg::Normal => "normal",
            Ecg::Nonspecific => "nonspecific",
            Ecg::StDeviation => "st_deviation",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Ecg::Normal => "Normal",
            Ecg::Nonspecific => "Alteración inespecífica de la repolarización",
            Ecg::StDeviation => "Desviación significativa del ST",
        }
    }

    fn points(self) -> u8 {
        match self {
            Ecg::Normal => 0,
            Ecg::Nonspecific => 1,
            Ecg::StDeviation => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AgeBand {
    #[default]
    Under45,
    From45To64,
    From65,
}

impl CodedOption for AgeBand {
    const ALL: &'static [Self] = &[AgeBand::Under45, AgeBand::From45To64, AgeBand::From65];
    const DEFAULT: Self = AgeBand::Under45;

    fn code(self) -> &'static str {
        match self {
            AgeBand::Under45 => "lt45",
            AgeBand::From45To64 => "45_64",
            AgeBand::From65 => "ge65",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AgeBand::Under45 => "< 45 años",
            AgeBand::From45To64 => "45–64 años",
            AgeBand::From65 => "≥ 65 años",
        }
    }

    fn points(self) -> u8 {
        match self {
            AgeBand::Under45 => 0,
            AgeBand::From45To64 => 1,
            AgeBand::From65 => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RiskFactors {
    #[default]
    NoneKnown,
    OneOrTwo,
    ThreeOrMore,
}

impl CodedOption for RiskFactors {
    const ALL: &'static [Self] = &[
        RiskFactors::NoneKnown,
        RiskFactors::OneOrTwo,
        RiskFactors::ThreeOrMore,
    ];
    const DEFAULT: Self = RiskFactors::NoneKnown;

    fn code(self) -> &'static str {
        match self {
            RiskFactors::NoneKnown => "none",
            RiskFactors::OneOrTwo => "one_or_two",
            RiskFactors::ThreeOrMore => "three_or_more",
        }
    }

    fn label(self) -> &'static str {
        match self {
            RiskFactors::NoneKnown => "Ninguno conocido",
            RiskFactors::OneOrTwo => "1–2 factores de riesgo",
            RiskFactors::ThreeOrMore => "≥ 3 factores o enfermedad aterosclerótica",
        }
    }

    fn points(self) -> u8 {
        match self {
            RiskFactors::NoneKnown => 0,
            RiskFactors::OneOrTwo => 1,
            RiskFactors::ThreeOrMore => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Troponin {
    #[default]
    Normal,
    OneToThreeTimes,
    AboveThreeTimes,
}

impl CodedOption for Troponin {
    const ALL: &'static [Self] = &[
        Troponin::Normal,
        Troponin::OneToThreeTimes,
        Troponin::AboveThreeTimes,
    ];
    const DEFAULT: Self = Troponin::Normal;

    fn code(self) -> &'static str {
        match self {
            Troponin::Normal => "normal",
            Troponin::OneToThreeTimes => "1_3x",
            Troponin::AboveThreeTimes => "gt3x",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Troponin::Normal => "≤ límite normal",
            Troponin::OneToThreeTimes => "1–3× límite normal",
            Troponin::AboveThreeTimes => "> 3× límite normal",
        }
    }

    fn points(self) -> u8 {
        match self {
            Troponin::Normal => 0,
            Troponin::OneToThreeTimes => 1,
            Troponin::AboveThreeTimes => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeartInput {
    pub history: History,
    pub ecg: Ecg,
    pub age_band: AgeBand,
    pub risk_factors: RiskFactors,
    pub troponin: Troponin,
}

impl HeartInput {
    pub(crate) fn read(reader: &FieldReader<'_>) -> Result<Self, ScoreError> {
        Ok(Self {
            history: reader.option(HISTORY)?,
            ecg: reader.option(ECG)?,
            age_band: reader.option(AGE_BAND)?,
            risk_factors: reader.option(RISK_FACTORS)?,
            troponin: reader.option(TROPONIN)?,
        })
    }

    pub fn components(&self) -> Vec<ScoreComponent> {
        vec![
            option_component(HISTORY, "Historia", self.history),
            option_component(ECG, "ECG", self.ecg),
            option_component(AGE_BAND, "Edad", self.age_band),
            option_component(RISK_FACTORS, "Factores de riesgo", self.risk_factors),
            option_component(TROPONIN, "Troponina", self.troponin),
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
    let input = HeartInput::read(reader)?;
    let components = input.components();
    let points = components.iter().map(|component| component.points).sum();

    Ok(Assessment {
        components,
        interpretation: HeartInput::interpret(points),
    })
}

pub(crate) fn definition() -> ScoreDefinition {
    ScoreDefinition {
        id: ScoreId::Heart,
        name: "HEART",
        description: "Estratificación del dolor torácico: eventos cardiacos adversos mayores a 6 semanas.",
        fields: vec![
            FieldSpec::enumeration::<History>(HISTORY, "Historia clínica"),
            FieldSpec::enumeration::<Ecg>(ECG, "ECG"),
            FieldSpec::enumeration::<AgeBand>(AGE_BAND, "Edad"),
            FieldSpec::enumeration::<RiskFactors>(RISK_FACTORS, "Factores de riesgo"),
            FieldSpec::enumeration::<Troponin>(TROPONIN, "Troponina"),
        ],
        assess,
    }
}
