//! Workforce allocation from a predicted passenger volume.

use serde::Serialize;

use aerosense_core::{derive_unit, round_to};

pub const MODEL: &str = "gradient-boosted staffing planner";

/// Passenger volumes above this always raise a stress alert, independent
/// of the derived stress level.
const SURGE_PASSENGERS: i64 = 2000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Allocation {
    pub security: i64,
    pub checkin: i64,
    pub maintenance: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffingPlan {
    pub allocation: Allocation,
    #[serde(rename = "efficiencyScore")]
    pub efficiency_score: f64,
    pub sentiment_context: Vec<String>,
    pub model: &'static str,
}

/// Allocate staff per area with per-area floors. Divisions are integer
/// divisions of the passenger count; negative inputs clamp to zero.
pub fn allocate(predicted_passengers: i64) -> StaffingPlan {
    let passengers = predicted_passengers.max(0);
    let stress = derive_unit(&passengers.to_string());

    let allocation = Allocation {
        security: (passengers / 180).max(5),
        checkin: (passengers / 120).max(4),
        maintenance: (passengers / 350).max(2),
    };

    let mut sentiment_context = Vec::new();
    if passengers > SURGE_PASSENGERS || stress > 0.8 {
        let terminal = if stress > 0.5 { "Terminal B" } else { "Terminal A" };
        sentiment_context.push(format!("High stress detected in {terminal} staff feedback"));
    }

    StaffingPlan {
        allocation,
        efficiency_score: round_to(0.85 + stress * 0.14, 3),
        sentiment_context,
        model: MODEL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_volume_allocates_known_headcounts() {
        let plan = allocate(1200);
        assert_eq!(plan.allocation.security, 6);
        assert_eq!(plan.allocation.checkin, 10);
        assert_eq!(plan.allocation.maintenance, 3);
    }

    #[test]
    fn floors_hold_for_small_volumes() {
        let plan = allocate(100);
        assert_eq!(plan.allocation.security, 5);
        assert_eq!(plan.allocation.checkin, 4);
        assert_eq!(plan.allocation.maintenance, 2);
    }

    #[test]
    fn negative_volumes_clamp_to_zero() {
        assert_eq!(allocate(-50).allocation, allocate(0).allocation);
    }

    #[test]
    fn surge_volumes_always_raise_an_alert() {
        let plan = allocate(2500);
        assert_eq!(plan.sentiment_context.len(), 1);
        assert!(plan.sentiment_context[0].contains("Terminal"));
    }

    #[test]
    fn alerts_track_stress_outside_the_surge_band() {
        for passengers in (0i64..2000).step_by(37) {
            let stress = derive_unit(&passengers.to_string());
            let plan = allocate(passengers);
            assert_eq!(plan.sentiment_context.is_empty(), stress <= 0.8);
            if let Some(alert) = plan.sentiment_context.first() {
                let expected = if stress > 0.5 { "Terminal B" } else { "Terminal A" };
                assert!(alert.contains(expected));
            }
        }
    }

    #[test]
    fn efficiency_is_an_affine_image_of_stress() {
        for passengers in [0i64, 800, 1200, 4096] {
            let stress = derive_unit(&passengers.to_string());
            let plan = allocate(passengers);
            assert_eq!(plan.efficiency_score, round_to(0.85 + stress * 0.14, 3));
            assert!((0.85..=0.99).contains(&plan.efficiency_score));
        }
    }
}
