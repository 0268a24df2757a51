use axum::Json;
use chrono::{Local, Timelike};

use aerosense_insights::pricing::{self, PricingRecommendation};

pub async fn pricing() -> Json<PricingRecommendation> {
    Json(pricing::recommend(Local::now().hour()))
}
