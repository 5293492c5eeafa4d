use axum::Json;
use axum::http::header;
use axum::response::IntoResponse;

use clinic_core::models::form::VisitForm;
use clinic_export::docx::generate_docx;
use clinic_export::render::render_report;
use clinic_export::styles::DocumentStyles;
use clinic_export::summary::build_summary_now;

use crate::error::ApiError;
use crate::routes::visit::prepare;

pub const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const DOCX_FILENAME: &str = "clinic_companion_visit_prep.docx";

fn rendered_report(form: VisitForm) -> Result<String, ApiError> {
    let (input, evaluation) = prepare(form)?;
    let summary = build_summary_now(&input, &evaluation);
    Ok(render_report(&input, &evaluation, &summary)?)
}

pub async fn markdown_report(Json(form): Json<VisitForm>) -> Result<impl IntoResponse, ApiError> {
    let markdown = rendered_report(form)?;
    Ok(([(header::CONTENT_TYPE, "text/markdown; charset=utf-8")], markdown))
}

pub async fn docx_report(Json(form): Json<VisitForm>) -> Result<impl IntoResponse, ApiError> {
    let markdown = rendered_report(form)?;
    let bytes = generate_docx(&markdown, &DocumentStyles::default())?;

    Ok((
        [
            (header::CONTENT_TYPE, DOCX_MEDIA_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{DOCX_FILENAME}\""),
            ),
        ],
        bytes,
    ))
}
