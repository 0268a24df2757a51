use axum::Json;
use chrono::Utc;

use aerosense_insights::flights::{self, GatePlan};

use crate::app::dto;

pub async fn optimize(
    body: Option<Json<dto::OptimizeFlightsRequest>>,
) -> Json<serde_json::Value> {
    let request = body.map(|Json(b)| b).unwrap_or_default();
    let flight_list = request.flights.unwrap_or_default();

    match flights::optimize(&flight_list, Utc::now()) {
        GatePlan::NoData => Json(serde_json::json!({
            "suggestions": [],
            "status": "no_data",
        })),
        GatePlan::Optimized { suggestions, optimized_at } => Json(serde_json::json!({
            "suggestions": suggestions,
            "optimizationTimestamp": optimized_at.to_rfc3339(),
            "algorithm": flights::ALGORITHM,
        })),
    }
}
