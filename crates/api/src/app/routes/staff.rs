use axum::Json;

use aerosense_insights::staffing::{self, StaffingPlan};

use crate::app::dto;

pub async fn allocate(body: Option<Json<dto::StaffAllocateRequest>>) -> Json<StaffingPlan> {
    let request = body.map(|Json(b)| b).unwrap_or_default();
    let passengers = request
        .predicted_passengers
        .unwrap_or(dto::DEFAULT_PASSENGERS);

    Json(staffing::allocate(passengers))
}
