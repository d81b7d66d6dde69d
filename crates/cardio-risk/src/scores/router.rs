use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::catalog::ScoreSummary;
use super::domain::{ClinicalInput, ScoreResult};
use super::ScoreEngine;
use crate::error::AppError;

/// Body accepted by the evaluate endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub inputs: ClinicalInput,
}

/// Router builder exposing score listing and evaluation.
pub fn score_router(engine: Arc<ScoreEngine>) -> Router {
    Router::new()
        .route("/api/v1/scores", get(list_handler))
        .route("/api/v1/scores/:score_id", get(definition_handler))
        .route("/api/v1/scores/:score_id/evaluate", post(evaluate_handler))
        .with_state(engine)
}

pub(crate) async fn list_handler(
    State(engine): State<Arc<ScoreEngine>>,
) -> Json<Vec<ScoreSummary<'static>>> {
    Json(
        engine
            .list_scores()
            .iter()
            .map(ScoreSummary::from)
            .collect(),
    )
}

pub(crate) async fn definition_handler(
    State(engine): State<Arc<ScoreEngine>>,
    Path(score_id): Path<String>,
) -> Result<Json<ScoreSummary<'static>>, AppError> {
    let definition = engine.definition(&score_id)?;
    Ok(Json(ScoreSummary::from(definition)))
}

pub(crate) async fn evaluate_handler(
    State(engine): State<Arc<ScoreEngine>>,
    Path(score_id): Path<String>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<ScoreResult>, AppError> {
    let Json(request) = payload?;
    let result = engine.evaluate(&score_id, &request.inputs)?;
    Ok(Json(result))
}
