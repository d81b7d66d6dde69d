use cardio_risk::scores::ClinicalInput;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Splits a `FIELD=VALUE` command-line argument.
pub(crate) fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (field, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{raw}'"))?;

    let field = field.trim();
    if field.is_empty() {
        return Err(format!("missing field name in '{raw}'"));
    }

    Ok((field.to_string(), value.trim().to_string()))
}

/// Builds clinical input from command-line assignments; values stay as text
/// and are coerced by the engine.
pub(crate) fn input_from_assignments(fields: &[(String, String)]) -> ClinicalInput {
    fields
        .iter()
        .map(|(field, value)| (field.clone(), value.clone()))
        .collect()
}
