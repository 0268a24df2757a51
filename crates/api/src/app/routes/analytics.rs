use axum::Json;
use chrono::Local;

use aerosense_insights::forecast::{self, Forecast};

use crate::app::dto;

pub async fn predict(body: Option<Json<dto::AnalyticsPredictRequest>>) -> Json<Forecast> {
    let request = body.map(|Json(b)| b).unwrap_or_default();
    let context = request.context.unwrap_or_default();
    let horizon_hours = request.horizon_hours.unwrap_or(dto::DEFAULT_HORIZON_HOURS);

    // Forecast hours follow the airport's local clock.
    let now = Local::now().fixed_offset();
    Json(forecast::predict(&context, horizon_hours, now))
}
