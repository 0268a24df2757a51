use std::sync::Arc;

use axum::{extract::Extension, Json};
use chrono::Utc;

use aerosense_insights::maintenance::{self, MaintenanceForecast};

use crate::app::{dto, services::AppServices};

pub async fn predict(
    Extension(services): Extension<Arc<AppServices>>,
    body: Option<Json<dto::MaintenancePredictRequest>>,
) -> Json<MaintenanceForecast> {
    let request = body.map(|Json(b)| b).unwrap_or_default();
    let asset_id = request
        .asset_id
        .unwrap_or_else(|| dto::DEFAULT_ASSET_ID.to_string());

    Json(maintenance::predict(&services.risk_model, &asset_id, Utc::now()))
}
