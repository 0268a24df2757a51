use axum::Json;
use chrono::{Local, Timelike};

use aerosense_insights::environment::{self, EnvironmentStats};

pub async fn stats() -> Json<EnvironmentStats> {
    Json(environment::stats(Local::now().hour()))
}
