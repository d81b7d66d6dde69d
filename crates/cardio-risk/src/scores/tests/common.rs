use std::io;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::scores::{score_router, ClinicalInput, InputPolicy, ScoreEngine};

pub(super) fn strict_engine() -> ScoreEngine {
    ScoreEngine::new(InputPolicy::Strict)
}

pub(super) fn lenient_engine() -> ScoreEngine {
    ScoreEngine::new(InputPolicy::Lenient)
}

pub(super) fn cha2ds2_vasc_patient(age: i64, sex: &str) -> ClinicalInput {
    ClinicalInput::new().with("age", age).with("sex", sex)
}

/// Every HEART component at its highest band.
pub(super) fn worst_heart_presentation() -> ClinicalInput {
    ClinicalInput::new()
        .with("history", "high")
        .with("ecg", "st_deviation")
        .with("age_band", "ge65")
        .with("riskf", "three_or_more")
        .with("troponin", "gt3x")
}

pub(super) fn timi_patient(age: i64, risk_factors: i64, switches: &[&str]) -> ClinicalInput {
    switches.iter().fold(
        ClinicalInput::new()
            .with("age", age)
            .with("cad_risk_factors", risk_factors),
        |input, name| input.with(*name, true),
    )
}

pub(super) fn router(policy: InputPolicy) -> axum::Router {
    score_router(Arc::new(ScoreEngine::new(policy)))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Log sink shared with a scoped subscriber.
#[derive(Clone, Default)]
pub(super) struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` under a subscriber that records formatted events.
pub(super) fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let sink = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || sink.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let value = tracing::subscriber::with_default(subscriber, f);
    let bytes = logs.0.lock().expect("log buffer poisoned").clone();
    (value, String::from_utf8_lossy(&bytes).into_owned())
}
