use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        Self::spawn_with(false).await
    }

    /// Build the same router as prod, bound to an ephemeral port.
    async fn spawn_with(enable_nlg: bool) -> Self {
        let config = aerosense_api::config::Config {
            bind: "127.0.0.1:0".to_string(),
            scan_delay: std::time::Duration::ZERO,
            enable_nlg,
        };
        let app = aerosense_api::app::build_app(&config).expect("failed to build app");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn post_json(
    srv: &TestServer,
    path: &str,
    body: &serde_json::Value,
) -> serde_json::Value {
    let res = reqwest::Client::new()
        .post(format!("{}{}", srv.base_url, path))
        .json(body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK, "POST {path}");
    res.json().await.unwrap()
}

#[tokio::test]
async fn health_reports_service_identity() {
    let srv = TestServer::spawn().await;

    for path in ["/", "/health"] {
        let res = reqwest::get(format!("{}{}", srv.base_url, path)).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body, json!({ "status": "ok", "service": "aerosense-ai" }));
    }
}

#[tokio::test]
async fn empty_flight_list_returns_exactly_no_data() {
    let srv = TestServer::spawn().await;

    let body = post_json(&srv, "/optimize-flights", &json!({})).await;
    assert_eq!(body, json!({ "suggestions": [], "status": "no_data" }));

    // An explicitly empty list gets the same answer.
    let body = post_json(&srv, "/optimize-flights", &json!({ "flights": [] })).await;
    assert_eq!(body, json!({ "suggestions": [], "status": "no_data" }));
}

#[tokio::test]
async fn flight_suggestions_are_sorted_and_reproducible() {
    let srv = TestServer::spawn().await;

    let request = json!({
        "flights": [
            { "flightNumber": "UA910", "airline": "UA", "scheduledDeparture": "2026-08-05T18:00:00Z" },
            { "flightNumber": "AF006", "airline": "AF", "scheduledDeparture": "2026-08-05T07:30:00Z" },
            { "flightNumber": "LH441", "airline": "LH" }
        ]
    });

    let first = post_json(&srv, "/optimize-flights", &request).await;
    let second = post_json(&srv, "/optimize-flights", &request).await;
    assert_eq!(first["suggestions"], second["suggestions"]);

    let order: Vec<&str> = first["suggestions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["flightNumber"].as_str().unwrap())
        .collect();
    // Missing departure sorts as the empty string, i.e. first.
    assert_eq!(order, vec!["LH441", "AF006", "UA910"]);

    for suggestion in first["suggestions"].as_array().unwrap() {
        let confidence = suggestion["confidence"].as_f64().unwrap();
        assert!((0.95..=0.99).contains(&confidence));
        assert!(suggestion["recommendedGate"].as_str().unwrap().len() >= 2);
    }
}

#[tokio::test]
async fn staffing_divides_with_floors() {
    let srv = TestServer::spawn().await;

    let body = post_json(&srv, "/staff/allocate", &json!({ "predictedPassengers": 1200 })).await;
    assert_eq!(body["allocation"]["security"], 6);
    assert_eq!(body["allocation"]["checkin"], 10);
    assert_eq!(body["allocation"]["maintenance"], 3);

    // Missing body falls back to the 1200-passenger default.
    let res = reqwest::Client::new()
        .post(format!("{}/staff/allocate", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let defaulted: serde_json::Value = res.json().await.unwrap();
    assert_eq!(defaulted["allocation"], body["allocation"]);
}

#[tokio::test]
async fn chatbot_flight_keyword_always_wins() {
    for enable_nlg in [false, true] {
        let srv = TestServer::spawn_with(enable_nlg).await;

        let body = post_json(
            &srv,
            "/chatbot",
            &json!({ "query": "where is my flight", "userId": "u-42" }),
        )
        .await;

        let response = body["response"].as_str().unwrap();
        assert!(response.contains("flight inquiries"), "nlg={enable_nlg}: {response}");
        assert_eq!(body["userId"], "u-42");
        assert_eq!(body["sentiment"], "NEUTRAL");
    }
}

#[tokio::test]
async fn chatbot_defaults_user_and_empathizes_on_negative_queries() {
    let srv = TestServer::spawn().await;

    let body = post_json(&srv, "/chatbot", &json!({ "query": "I lost my wallet" })).await;
    assert_eq!(body["userId"], "anonymous");
    assert_eq!(body["sentiment"], "NEGATIVE");
    assert!(body["response"].as_str().unwrap().starts_with("I'm sorry to hear that."));
}

#[tokio::test]
async fn maintenance_risk_is_clamped_for_any_asset() {
    let srv = TestServer::spawn().await;

    for asset_id in ["", "GATE-01", "RWY-27L", "☃"] {
        let body = post_json(&srv, "/maintenance/predict", &json!({ "assetId": asset_id })).await;
        let risk = body["riskScore"].as_f64().unwrap();
        assert!((0.0..=100.0).contains(&risk), "asset {asset_id:?}: {risk}");
        assert!(body["nextRecommendedMaintenance"].as_str().unwrap().len() == 10);
    }
}

#[tokio::test]
async fn baggage_prediction_defaults_the_tag_number() {
    let srv = TestServer::spawn().await;

    // No body at all: the handler defaults rather than rejecting.
    let res = reqwest::Client::new()
        .post(format!("{}/baggage/predict", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["tagNumber"], "UNK");
    assert!(body["estimatedDeliveryTimeMinutes"].as_i64().unwrap() >= 5);
    let confidence = body["predictionConfidence"].as_f64().unwrap();
    assert!((0.94..=0.99).contains(&confidence));
}

#[tokio::test]
async fn security_analysis_is_deterministic_per_payload() {
    let srv = TestServer::spawn().await;

    let payload = json!({ "camera": "T1-C4", "zone": "C" });
    let first = post_json(&srv, "/security/analyze", &payload).await;
    let second = post_json(&srv, "/security/analyze", &payload).await;
    assert_eq!(first, second);
    assert_eq!(first["status"], "active");
    assert!(["low", "elevated", "critical"]
        .contains(&first["risk_level"].as_str().unwrap()));
}

#[tokio::test]
async fn pricing_snapshot_has_the_expected_shape() {
    let srv = TestServer::spawn().await;

    let body = post_json(&srv, "/revenue/pricing", &json!({})).await;
    let economy = body["parking"]["economy"].as_f64().unwrap();
    let premium = body["parking"]["premium"].as_f64().unwrap();
    let demand = body["parking"]["demand_index"].as_f64().unwrap();

    // Bases are 15 and 40 with at most 50% / 80% uplift.
    assert!((15.0..=22.5).contains(&economy));
    assert!((40.0..=72.0).contains(&premium));
    assert!((0.0..=1.0).contains(&demand));
    assert!(!body["recommendedPromos"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn analytics_forecast_matches_the_requested_horizon() {
    let srv = TestServer::spawn().await;

    let body = post_json(
        &srv,
        "/analytics/predict",
        &json!({ "context": "passenger_flow", "horizon_hours": 5 }),
    )
    .await;

    assert_eq!(body["context"], "passenger_flow");
    let points = body["forecast"].as_array().unwrap();
    assert_eq!(points.len(), 5);
    for point in points {
        let value = point["value"].as_f64().unwrap();
        let interval = point["confidence_interval"].as_array().unwrap();
        let lo = interval[0].as_f64().unwrap();
        let hi = interval[1].as_f64().unwrap();
        assert!(lo <= hi);
        assert!(lo - 0.01 <= value && value <= hi + 0.01);
    }
}
