mod common;

use actix_web::{http::header, test};
use serde_json::{json, Value};

use common::{kathmandu, place, TestApp};
use nepal_itinerary_api::config::OvershootPolicy;

async fn generate(test_app: &TestApp, body: Value) -> (u16, Value) {
    let app = test::init_service(test_app.create_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/itineraries/generate")
        .set_json(&body)
        .to_request();

    let resp = test::call_service(&app, req).await;
    let status = resp.status().as_u16();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

#[actix_rt::test]
async fn test_generate_week_in_kathmandu() {
    let (status, body) = generate(
        &TestApp::new(),
        json!({ "duration": 7, "selectedPlaces": [kathmandu()], "budget": "mid" }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["title"], "7-Day Kathmandu Adventure");
    assert_eq!(body["budgetLevel"], "mid");

    let days = body["dailyPlan"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["title"], "Day 1: Kathmandu (Arrival)");
    assert_eq!(days[6]["title"], "Day 7: Kathmandu (Departure)");
    assert_eq!(days[0]["meals"][0]["included"], false);
    assert_eq!(days[1]["meals"][0]["included"], true);
    assert_eq!(days[0]["activities"][0]["type"], "logistics");
    assert_eq!(days[0]["transportation"], "Walking, taxi, rickshaw");
    assert!(days[0]["tips"]
        .as_str()
        .unwrap()
        .contains("The difficulty level here is Easy"));

    assert_eq!(body["costBreakdown"]["accommodation"], 455);
    assert_eq!(body["totalCost"], body["costBreakdown"]["total"]);
}

#[actix_rt::test]
async fn test_generate_defaults_to_mid_budget() {
    let (status, body) = generate(
        &TestApp::new(),
        json!({ "duration": 2, "selectedPlaces": [place("Pokhara", "natural")] }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["budgetLevel"], "mid");
    assert_eq!(body["dailyPlan"][0]["dailyCost"], 65);
}

#[actix_rt::test]
async fn test_generate_without_destinations_is_bad_request() {
    let (status, body) = generate(
        &TestApp::new(),
        json!({ "duration": 5, "selectedPlaces": [], "budget": "budget" }),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(
        body["error"],
        "Select at least one destination to generate an itinerary"
    );
}

#[actix_rt::test]
async fn test_generate_rejects_trip_longer_than_configured_maximum() {
    let (status, body) = generate(
        &TestApp::new(),
        json!({ "duration": 31, "selectedPlaces": [kathmandu()] }),
    )
    .await;

    assert_eq!(status, 400);
    assert!(body["error"].as_str().unwrap().contains("maximum of 30 days"));
}

#[actix_rt::test]
async fn test_generate_malformed_body_returns_json_error() {
    let (status, body) = generate(
        &TestApp::new(),
        json!({ "duration": "seven", "selectedPlaces": [kathmandu()] }),
    )
    .await;

    assert_eq!(status, 400);
    assert!(body["error"].is_string());
}

#[actix_rt::test]
async fn test_generate_truncates_extra_destinations() {
    let (status, body) = generate(
        &TestApp::new(),
        json!({
            "duration": 2,
            "selectedPlaces": [place("A", "urban"), place("B", "urban"), place("C", "urban")],
            "budget": "budget"
        }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["dailyPlan"].as_array().unwrap().len(), 2);
    assert_eq!(body["destinations"], json!(["A", "B"]));
    assert_eq!(body["skippedDestinations"], json!(["C"]));
}

#[actix_rt::test]
async fn test_generate_reject_policy_returns_unprocessable() {
    let (status, body) = generate(
        &TestApp::with_policy(OvershootPolicy::Reject),
        json!({
            "duration": 2,
            "selectedPlaces": [place("A", "urban"), place("B", "urban"), place("C", "urban")]
        }),
    )
    .await;

    assert_eq!(status, 422);
    assert!(body["error"].as_str().unwrap().contains("cannot fit into 2 days"));
}

#[actix_rt::test]
async fn test_export_returns_plain_text_attachment() {
    let test_app = TestApp::new();
    let (_, itinerary) = generate(
        &test_app,
        json!({ "duration": 3, "selectedPlaces": [kathmandu()], "budget": "luxury" }),
    )
    .await;

    let app = test::init_service(test_app.create_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/itineraries/export")
        .set_json(&itinerary)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let disposition = resp
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .and_then(|value| value.to_str().ok())
        .unwrap()
        .to_string();
    assert_eq!(
        disposition,
        "attachment; filename=\"3-day-kathmandu-adventure.txt\""
    );

    let body = test::read_body(resp).await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("3-DAY KATHMANDU ADVENTURE"));
    assert!(text.contains("Day 3: Kathmandu (Departure)"));
    assert!(text.contains("COST BREAKDOWN"));
}

#[actix_rt::test]
async fn test_share_returns_summary_text() {
    let test_app = TestApp::new();
    let (_, itinerary) = generate(
        &test_app,
        json!({ "duration": 4, "selectedPlaces": [kathmandu(), place("Lumbini", "religious")], "budget": "budget" }),
    )
    .await;

    let app = test::init_service(test_app.create_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/itineraries/share")
        .set_json(&itinerary)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    let text = body["text"].as_str().unwrap();
    assert!(text.starts_with("4-Day Kathmandu & Lumbini Adventure"));
    assert!(text.contains("Budget: budget"));
    assert!(text.contains(&format!("Total cost: ${}", itinerary["totalCost"])));
}
