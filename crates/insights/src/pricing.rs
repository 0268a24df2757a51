//! Time-of-day dynamic pricing for parking and retail.

use std::f64::consts::PI;

use serde::Serialize;

use aerosense_core::round_to;

pub const ALGORITHM: &str = "elastic demand curve v2";

const ECONOMY_BASE: f64 = 15.0;
const PREMIUM_BASE: f64 = 40.0;

/// Sinusoidal demand over the local hour: lowest around 04:00, peaking
/// around 10:00 and 22:00-adjacent shoulders, always in [0, 1].
pub fn demand_factor(hour: u32) -> f64 {
    ((hour as f64 - 4.0) * PI / 12.0).sin() * 0.5 + 0.5
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParkingPrices {
    pub economy: f64,
    pub premium: f64,
    pub demand_index: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingRecommendation {
    pub parking: ParkingPrices,
    #[serde(rename = "retailInsights")]
    pub retail_insights: &'static str,
    #[serde(rename = "recommendedPromos")]
    pub recommended_promos: Vec<&'static str>,
    pub algorithm: &'static str,
}

pub fn recommend(hour: u32) -> PricingRecommendation {
    let demand = demand_factor(hour);

    let retail_insights = if demand > 0.65 {
        "high"
    } else if demand > 0.35 {
        "moderate"
    } else {
        "low"
    };

    let recommended_promos = if demand >= 0.5 {
        vec!["Free Coffee for Lounge A", "20% Off Duty Free Perfumes"]
    } else {
        vec!["Early-bird parking rate before 06:00"]
    };

    PricingRecommendation {
        parking: ParkingPrices {
            economy: round_to(ECONOMY_BASE * (1.0 + 0.5 * demand), 2),
            premium: round_to(PREMIUM_BASE * (1.0 + 0.8 * demand), 2),
            demand_index: round_to(demand, 2),
        },
        retail_insights,
        recommended_promos,
        algorithm: ALGORITHM,
    }
}
