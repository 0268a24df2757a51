use std::sync::Arc;

use axum::{extract::Extension, Json};

use aerosense_insights::security::{self, SecurityAssessment};

use crate::app::services::AppServices;

pub async fn analyze(
    Extension(services): Extension<Arc<AppServices>>,
    payload: Option<Json<serde_json::Value>>,
) -> Json<SecurityAssessment> {
    // Optional cosmetic latency so dashboards show a "scan in progress"
    // state; zero by default.
    if !services.scan_delay.is_zero() {
        tokio::time::sleep(services.scan_delay).await;
    }

    let payload = payload.map(|Json(v)| v).unwrap_or(serde_json::Value::Null);
    Json(security::analyze(&payload))
}
