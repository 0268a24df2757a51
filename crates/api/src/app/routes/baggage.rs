use std::sync::Arc;

use axum::{extract::Extension, Json};

use aerosense_insights::baggage::{self, BaggagePrediction};

use crate::app::{dto, services::AppServices};

pub async fn predict(
    Extension(services): Extension<Arc<AppServices>>,
    body: Option<Json<dto::BaggagePredictRequest>>,
) -> Json<BaggagePrediction> {
    let request = body.map(|Json(b)| b).unwrap_or_default();
    let tag_number = request
        .tag_number
        .unwrap_or_else(|| dto::DEFAULT_TAG_NUMBER.to_string());

    Json(baggage::predict(&services.delivery_model, &tag_number))
}
