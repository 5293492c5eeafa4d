use axum::Json;
use serde::Serialize;

use clinic_core::models::form::option_sets;

#[derive(Serialize)]
pub struct OptionSet {
    field: &'static str,
    options: Vec<&'static str>,
}

/// The literal choices accepted by every option field of the form.
pub async fn list_options() -> Json<Vec<OptionSet>> {
    Json(
        option_sets()
            .into_iter()
            .map(|(field, options)| OptionSet { field, options })
            .collect(),
    )
}
