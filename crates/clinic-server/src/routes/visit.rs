use axum::Json;
use serde::Serialize;

use clinic_core::models::form::VisitForm;
use clinic_core::models::visit::VisitInput;
use clinic_export::summary::build_summary_now;
use clinic_rules::{Evaluation, evaluate};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct EvaluateResponse {
    pub evaluation: Evaluation,
    pub summary: String,
}

/// Convert the submitted form and evaluate it. Shared by every POST route.
pub(crate) fn prepare(form: VisitForm) -> Result<(VisitInput, Evaluation), ApiError> {
    let input = VisitInput::try_from(form)?;
    let evaluation = evaluate(&input)?;
    Ok((input, evaluation))
}

pub async fn evaluate_visit(Json(form): Json<VisitForm>) -> Result<Json<EvaluateResponse>, ApiError> {
    let (input, evaluation) = prepare(form)?;
    let summary = build_summary_now(&input, &evaluation);
    Ok(Json(EvaluateResponse {
        evaluation,
        summary,
    }))
}
