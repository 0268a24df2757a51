//! Simulated camera-feed threat assessment.

use serde::Serialize;
use serde_json::Value as JsonValue;

use aerosense_core::{derive_unit, round_to};

pub const DETECTION_ENGINE: &str = "YOLOv8 + custom behavioral model";

/// Scores above this emit an anomaly; the sub-ranges inside pick the
/// anomaly type, location and risk level.
const ANOMALY_THRESHOLD: f64 = 0.85;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecurityAnomaly {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub location: &'static str,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecurityAssessment {
    pub status: &'static str,
    pub risk_level: &'static str,
    pub anomalies: Vec<SecurityAnomaly>,
    pub processed_frames: u32,
    pub detection_engine: &'static str,
}

/// Assess an arbitrary frame-metadata payload.
///
/// The anomaly score is derived from the payload's compact JSON text, so
/// the same payload always produces the same verdict. serde_json keeps
/// object keys ordered, which makes that text stable.
pub fn analyze(payload: &JsonValue) -> SecurityAssessment {
    let score = derive_unit(&payload.to_string());

    let (risk_level, anomalies) = if score > ANOMALY_THRESHOLD {
        let kind = if score > 0.92 {
            "Unattended Baggage"
        } else {
            "Suspicious Movement Pattern"
        };
        let location = if score > 0.90 {
            "Terminal 1, Zone C"
        } else {
            "Terminal 2, Security Checkpoint"
        };
        let risk_level = if score > 0.95 { "critical" } else { "elevated" };
        let anomaly = SecurityAnomaly {
            kind,
            location,
            confidence: round_to(score, 2),
        };
        (risk_level, vec![anomaly])
    } else {
        ("low", Vec::new())
    };

    tracing::debug!(score, risk_level, "security frame analyzed");

    SecurityAssessment {
        status: "active",
        risk_level,
        anomalies,
        processed_frames: 124,
        detection_engine: DETECTION_ENGINE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn assessment_is_deterministic_per_payload() {
        let payload = json!({ "camera": "T1-C4", "frame": 99 });
        assert_eq!(analyze(&payload), analyze(&payload));
    }

    #[test]
    fn verdict_bands_match_the_derived_score() {
        let mut saw_quiet = false;
        let mut saw_anomaly = false;

        for i in 0..500 {
            let payload = json!({ "camera": format!("cam-{i}") });
            let score = derive_unit(&payload.to_string());
            let assessment = analyze(&payload);

            if score > 0.85 {
                saw_anomaly = true;
                assert_eq!(assessment.anomalies.len(), 1);
                let anomaly = &assessment.anomalies[0];
                assert_eq!(
                    anomaly.kind,
                    if score > 0.92 { "Unattended Baggage" } else { "Suspicious Movement Pattern" }
                );
                assert_eq!(
                    anomaly.location,
                    if score > 0.90 { "Terminal 1, Zone C" } else { "Terminal 2, Security Checkpoint" }
                );
                assert_eq!(
                    assessment.risk_level,
                    if score > 0.95 { "critical" } else { "elevated" }
                );
            } else {
                saw_quiet = true;
                assert!(assessment.anomalies.is_empty());
                assert_eq!(assessment.risk_level, "low");
            }
        }

        // 500 seeds comfortably hit both sides of the 0.85 threshold.
        assert!(saw_quiet && saw_anomaly);
    }

    #[test]
    fn null_payload_is_legal() {
        let assessment = analyze(&JsonValue::Null);
        assert_eq!(assessment.status, "active");
        assert_eq!(assessment.processed_frames, 124);
    }
}
