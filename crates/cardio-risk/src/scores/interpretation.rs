use super::domain::RiskTier;

/// Risk tier plus the fixed text shown to the clinician.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpretation {
    pub tier: RiskTier,
    pub text: &'static str,
}

impl Interpretation {
    pub(crate) const fn new(tier: RiskTier, text: &'static str) -> Self {
        Self { tier, text }
    }
}

/// Ordered threshold table mapping a point total onto one interpretation.
///
/// Each band covers totals up to and including its bound; totals above the
/// last bound fall into `above`, so every total maps to exactly one entry.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TierTable {
    bands: &'static [(u8, Interpretation)],
    above: Interpretation,
}

impl TierTable {
    pub(crate) const fn new(bands: &'static [(u8, Interpretation)], above: Interpretation) -> Self {
        Self { bands, above }
    }

    pub(crate) fn classify(&self, points: u8) -> Interpretation {
        self.bands
            .iter()
            .find(|(up_to, _)| points <= *up_to)
            .map(|(_, interpretation)| *interpretation)
            .unwrap_or(self.above)
    }
}
