//! Asset wear simulation and failure-risk scoring.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use aerosense_core::{derive, round_to};

use crate::error::ModelError;
use crate::regression::LinearModel;

pub const PREDICTION_ENGINE: &str = "ridge degradation model v2";

/// Synthetic inspection history: (wear level, operating hours) against
/// failure probability in percent.
const TRAINING_ROWS: [([f64; 2], f64); 5] = [
    ([0.15, 320.0], 14.0),
    ([0.34, 880.0], 31.0),
    ([0.52, 1500.0], 50.0),
    ([0.71, 2150.0], 70.0),
    ([0.88, 2820.0], 91.0),
];

/// Failure-risk model, fitted once at startup and read-only afterwards.
#[derive(Debug, Clone, Copy)]
pub struct RiskModel(LinearModel);

impl RiskModel {
    pub fn fit() -> Result<Self, ModelError> {
        LinearModel::fit(&TRAINING_ROWS).map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenanceForecast {
    #[serde(rename = "assetId")]
    pub asset_id: String,
    #[serde(rename = "wearLevel")]
    pub wear_level: f64,
    #[serde(rename = "riskScore")]
    pub risk_score: f64,
    pub status: &'static str,
    #[serde(rename = "nextRecommendedMaintenance")]
    pub next_recommended_maintenance: String,
    #[serde(rename = "visionDetection")]
    pub vision_detection: Vec<&'static str>,
    #[serde(rename = "predictionEngine")]
    pub prediction_engine: &'static str,
}

/// Score an asset. Wear level and operating hours are derived from the
/// asset id, fed through the regression, and clamped into [0, 100].
pub fn predict(model: &RiskModel, asset_id: &str, now: DateTime<Utc>) -> MaintenanceForecast {
    let wear_level = derive(&format!("{asset_id}:wear"), 0.1, 0.9);
    let op_hours = derive(&format!("{asset_id}:hours"), 100.0, 3000.0);
    let risk = model.0.predict(wear_level, op_hours).clamp(0.0, 100.0);

    let status = if risk > 75.0 {
        "critical"
    } else if risk > 40.0 {
        "scheduled"
    } else {
        "operational"
    };

    let horizon_days = if risk > 50.0 { 7 } else { 30 };
    let next = (now + Duration::days(horizon_days)).format("%Y-%m-%d").to_string();

    let vision_detection = if risk > 60.0 {
        vec!["Surface Cracks", "Hydraulic Leak Potential"]
    } else {
        Vec::new()
    };

    MaintenanceForecast {
        asset_id: asset_id.to_string(),
        wear_level: round_to(wear_level, 2),
        risk_score: round_to(risk, 1),
        status,
        next_recommended_maintenance: next,
        vision_detection,
        prediction_engine: PREDICTION_ENGINE,
    }
}
