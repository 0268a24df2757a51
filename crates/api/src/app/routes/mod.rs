use axum::{
    routing::{get, post},
    Router,
};

pub mod analytics;
pub mod baggage;
pub mod chatbot;
pub mod environment;
pub mod flights;
pub mod maintenance;
pub mod revenue;
pub mod security;
pub mod staff;
pub mod system;

/// Router for the full prediction surface.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::health))
        .route("/health", get(system::health))
        .route("/optimize-flights", post(flights::optimize))
        .route("/security/analyze", post(security::analyze))
        .route("/baggage/predict", post(baggage::predict))
        .route("/maintenance/predict", post(maintenance::predict))
        .route("/staff/allocate", post(staff::allocate))
        .route("/revenue/pricing", post(revenue::pricing))
        .route("/environment/stats", post(environment::stats))
        .route("/chatbot", post(chatbot::respond))
        .route("/analytics/predict", post(analytics::predict))
}
