//! Risk-score definitions and the stateless engine that evaluates them.

mod catalog;
mod coercion;
mod domain;
mod interpretation;
pub mod router;
pub mod rules;

#[cfg(test)]
mod tests;

pub use catalog::{
    catalog, CodedOption, EnumOption, FieldKind, FieldSpec, ScoreDefinition, ScoreSummary,
};
pub use coercion::FieldReader;
pub use domain::{
    ClinicalInput, FieldValue, InputPolicy, RiskTier, ScoreComponent, ScoreError, ScoreId,
    ScoreResult,
};
pub use interpretation::Interpretation;
pub use router::score_router;
pub use rules::cha2ds2_vasc::{Cha2ds2VascInput, Sex};
pub use rules::has_bled::HasBledInput;
pub use rules::heart::{AgeBand, Ecg, HeartInput, History, RiskFactors, Troponin};
pub use rules::timi::TimiInput;

use tracing::debug;

/// Stateless evaluator over the static score catalog.
///
/// Holds only the input policy, so one instance can be shared freely across
/// threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreEngine {
    policy: InputPolicy,
}

impl ScoreEngine {
    pub fn new(policy: InputPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    /// Definitions in display order.
    pub fn list_scores(&self) -> &'static [ScoreDefinition] {
        catalog()
    }

    pub fn definition(&self, score_id: &str) -> Result<&'static ScoreDefinition, ScoreError> {
        let id: ScoreId = score_id.parse()?;
        Ok(ScoreDefinition::for_id(id))
    }

    pub fn evaluate(
        &self,
        score_id: &str,
        input: &ClinicalInput,
    ) -> Result<ScoreResult, ScoreError> {
        let id: ScoreId = score_id.parse()?;
        self.evaluate_score(id, input)
    }

    pub fn evaluate_score(
        &self,
        id: ScoreId,
        input: &ClinicalInput,
    ) -> Result<ScoreResult, ScoreError> {
        let definition = ScoreDefinition::for_id(id);

        for name in input.names() {
            if definition.field(name).is_none() {
                debug!(score = %id, field = name, "ignoring undeclared field");
            }
        }

        let reader = FieldReader::new(input, self.policy, id);
        let assessment = (definition.assess)(&reader)?;
        let points = assessment.points();

        debug!(score = %id, points, tier = assessment.interpretation.tier.label(), "score evaluated");

        Ok(ScoreResult {
            score: id,
            points,
            max_points: definition.max_points(),
            tier: assessment.interpretation.tier,
            interpretation: assessment.interpretation.text.to_string(),
            components: assessment.components,
        })
    }
}
