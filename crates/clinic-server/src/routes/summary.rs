use axum::Json;
use axum::http::header;
use axum::response::IntoResponse;

use clinic_core::models::form::VisitForm;
use clinic_export::summary::{SummaryDownload, build_summary_now};

use crate::error::ApiError;
use crate::routes::visit::prepare;

pub async fn download_summary(Json(form): Json<VisitForm>) -> Result<impl IntoResponse, ApiError> {
    let (input, evaluation) = prepare(form)?;
    let download = SummaryDownload::new(build_summary_now(&input, &evaluation));

    Ok((
        [
            (header::CONTENT_TYPE, format!("{}; charset=utf-8", download.media_type)),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", download.filename),
            ),
        ],
        download.content,
    ))
}
