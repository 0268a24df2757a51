//! Request DTOs.
//!
//! The wire contract is permissive: every field is optional, and a missing
//! or malformed field falls back to its stated default instead of failing
//! the request.

use serde::Deserialize;

use aerosense_insights::flights::FlightDescriptor;

pub const DEFAULT_TAG_NUMBER: &str = "UNK";
pub const DEFAULT_ASSET_ID: &str = "GATE-01";
pub const DEFAULT_PASSENGERS: i64 = 1200;
pub const DEFAULT_USER_ID: &str = "anonymous";
pub const DEFAULT_HORIZON_HOURS: u32 = 24;

#[derive(Debug, Default, Deserialize)]
pub struct OptimizeFlightsRequest {
    /// Accepted for forward compatibility with the scheduling frontend;
    /// gate assignment only looks at the flight list itself.
    pub date: Option<String>,
    pub flights: Option<Vec<FlightDescriptor>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BaggagePredictRequest {
    #[serde(rename = "tagNumber")]
    pub tag_number: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MaintenancePredictRequest {
    #[serde(rename = "assetId")]
    pub asset_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StaffAllocateRequest {
    #[serde(rename = "predictedPassengers")]
    pub predicted_passengers: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatbotRequest {
    pub query: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsPredictRequest {
    pub context: Option<String>,
    pub horizon_hours: Option<u32>,
}
