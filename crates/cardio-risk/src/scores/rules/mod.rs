pub mod cha2ds2_vasc;
pub mod has_bled;
pub mod heart;
pub mod timi;

use super::catalog::CodedOption;
use super::domain::ScoreComponent;
use super::interpretation::Interpretation;

/// Output of a scoring rule before it is wrapped into a `ScoreResult`.
#[derive(Debug, Clone)]
pub(crate) struct Assessment {
    pub components: Vec<ScoreComponent>,
    pub interpretation: Interpretation,
}

impl Assessment {
    pub(crate) fn points(&self) -> u8 {
        self.components.iter().map(|component| component.points).sum()
    }
}

pub(crate) fn flag_component(
    field: &'static str,
    label: &str,
    present: bool,
    weight: u8,
) -> ScoreComponent {
    ScoreComponent {
        field,
        points: if present { weight } else { 0 },
        notes: if present {
            format!("{label}: presente")
        } else {
            format!("{label}: ausente")
        },
    }
}

pub(crate) fn option_component<T: CodedOption>(
    field: &'static str,
    label: &str,
    value: T,
) -> ScoreComponent {
    ScoreComponent {
        field,
        points: value.points(),
        notes: format!("{label}: {} ({})", value.label(), value.code()),
    }
}
