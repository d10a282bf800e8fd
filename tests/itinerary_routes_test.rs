mod common;

use actix_web::{http::header, test};
use serde_json::json;
use serial_test::serial;

use common::TestApp;

#[actix_rt::test]
#[serial]
async fn test_get_all_itineraries_returns_seeded_summaries() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/itineraries").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let items = body.as_array().expect("expected an array");
    assert_eq!(items.len(), 6);

    // Summaries only: no nested lists on the listing endpoint
    assert_eq!(items[0]["title"], "Phuket Beach Getaway");
    assert_eq!(items[0]["duration_nights"], 3);
    assert!(items[0].get("accommodations").is_none());
}

#[actix_rt::test]
#[serial]
async fn test_get_all_honors_limit() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/itineraries?limit=2")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[actix_rt::test]
#[serial]
async fn test_get_all_search_filter_matches_title_or_description() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/itineraries?search=krabi")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["title"].as_str().unwrap())
        .collect();

    // Two match by title, Thailand Explorer by description
    assert_eq!(
        titles,
        vec![
            "Krabi Beach Retreat",
            "Phuket & Krabi Combo",
            "Thailand Explorer"
        ]
    );
}

#[actix_rt::test]
#[serial]
async fn test_get_all_nights_filter_is_exact() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/itineraries?nights=5")
        .to_request();

    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let items = body.as_array().unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Phuket Explorer");
}

#[actix_rt::test]
#[serial]
async fn test_get_itinerary_by_valid_id() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/itineraries/1")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Phuket Beach Getaway");
    assert_eq!(body["accommodations"].as_array().unwrap().len(), 1);
    assert_eq!(body["transfers"].as_array().unwrap().len(), 2);
    assert_eq!(body["activities"].as_array().unwrap().len(), 2);
    assert_eq!(body["accommodations"][0]["check_in_date"], "2023-06-01");
}

#[actix_rt::test]
#[serial]
async fn test_get_itinerary_by_unknown_id_is_404_with_detail() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/itineraries/999")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Itinerary not found");
}

#[actix_rt::test]
#[serial]
async fn test_get_itinerary_by_invalid_id_format() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/itineraries/not_a_number")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
}

#[actix_rt::test]
#[serial]
async fn test_create_itinerary_then_fetch_it() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries")
        .set_json(&json!({
            "title": "Custom Phuket Trip",
            "description": "A hand-assembled trip",
            "duration_nights": 3,
            "accommodations": [{
                "name": "Patong Beach Hotel",
                "location": "Patong Beach, Phuket",
                "check_in_date": "2024-01-10",
                "check_out_date": "2024-01-13",
                "nights": 3
            }],
            "transfers": [{
                "from_location": "Phuket International Airport",
                "to_location": "Patong Beach Hotel",
                "transport_type": "Private Car",
                "date": "2024-01-10"
            }],
            "activities": [{
                "name": "Phi Phi Islands Tour",
                "location": "Phi Phi Islands",
                "date": "2024-01-11",
                "duration_hours": 8.0,
                "description": "Full day island tour"
            }]
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let id = body["id"].as_i64().expect("created id");
    assert_eq!(id, 7); // six seeded itineraries come first
    assert_eq!(body["accommodations"][0]["check_in_date"], "2024-01-10");

    let req = test::TestRequest::get()
        .uri(&format!("/api/itineraries/{}", id))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Custom Phuket Trip");
    assert_eq!(body["duration_nights"], 3);
}

#[actix_rt::test]
#[serial]
async fn test_create_with_malformed_json_returns_detail() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries")
        .set_payload("{ invalid json")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["detail"].as_str().is_some());
}

#[actix_rt::test]
#[serial]
async fn test_create_with_missing_fields_returns_400() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries")
        .set_json(&json!({
            "description": "No title, no lists"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
#[serial]
async fn test_create_with_bad_date_format_returns_400() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries")
        .set_json(&json!({
            "title": "Bad Dates",
            "duration_nights": 1,
            "accommodations": [{
                "name": "Hotel",
                "location": "Phuket",
                "check_in_date": "01/10/2024",
                "check_out_date": "01/11/2024",
                "nights": 1
            }],
            "transfers": [],
            "activities": []
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
#[serial]
async fn test_schedule_groups_days_off_activity_dates() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/itineraries/1/schedule")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let days = body.as_array().unwrap();

    // Two activity dates; the check-in/transfer-only arrival and departure
    // days produce no entries
    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["day_number"], 1);
    assert_eq!(days[0]["date"], "2023-06-02");
    assert_eq!(days[1]["day_number"], 2);
    assert_eq!(days[1]["date"], "2023-06-03");
    assert!(days[0]["transfers"].as_array().unwrap().is_empty());
    assert!(days[0].get("check_in").is_none());
}

#[actix_rt::test]
#[serial]
async fn test_schedule_for_unknown_id_is_404() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/itineraries/999/schedule")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_rt::test]
#[serial]
async fn test_itinerary_routes_with_wrong_methods() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::put().uri("/api/itineraries").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 405);

    let req = test::TestRequest::delete()
        .uri("/api/itineraries/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 405);
}

#[actix_rt::test]
#[serial]
async fn test_health_reports_seeded_store() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["services"]["store"]["status"], "ok");
}
