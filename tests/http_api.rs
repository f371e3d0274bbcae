use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};

use calm_mind::{server, EngineConfig, SessionStore};

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(SessionStore::new(EngineConfig::default())))
                .configure(server::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn conversation_round_trip() {
    let app = app!();

    let req = test::TestRequest::post().uri("/sessions").to_request();
    let opened: Value = test::call_and_read_body_json(&app, req).await;
    let id = opened["sessionId"].as_str().unwrap().to_string();
    assert!(!opened["greeting"].as_str().unwrap().is_empty());

    let req = test::TestRequest::post()
        .uri(&format!("/sessions/{id}/messages"))
        .set_json(json!({ "userInput": "estou muito ansioso" }))
        .to_request();
    let reply: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(reply["originalEmotion"], "ansiedade");
    assert_eq!(reply["emotion"], "anxious");
    assert_eq!(reply["suggestedExercise"], "breathing-478");
    assert_eq!(reply["urgent"], false);

    let req = test::TestRequest::get()
        .uri(&format!("/sessions/{id}/history"))
        .to_request();
    let history: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(history.as_array().unwrap().len(), 2);
    assert_eq!(history[0]["content"], "estou muito ansioso");

    let req = test::TestRequest::post()
        .uri(&format!("/sessions/{id}/reset"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/sessions/{id}/history"))
        .to_request();
    let history: Value = test::call_and_read_body_json(&app, req).await;
    assert!(history.as_array().unwrap().is_empty());

    let req = test::TestRequest::delete()
        .uri(&format!("/sessions/{id}"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn unknown_session_is_not_found() {
    let app = app!();
    let id = uuid::Uuid::new_v4();

    let req = test::TestRequest::post()
        .uri(&format!("/sessions/{id}/messages"))
        .set_json(json!({ "userInput": "oi" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri(&format!("/sessions/{id}"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn malformed_json_is_bad_request() {
    let app = app!();
    let req = test::TestRequest::post().uri("/sessions").to_request();
    let opened: Value = test::call_and_read_body_json(&app, req).await;
    let id = opened["sessionId"].as_str().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/sessions/{id}/messages"))
        .insert_header(("content-type", "application/json"))
        .set_payload("{bad")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri(&format!("/sessions/{id}/history"))
        .to_request();
    let history: Value = test::call_and_read_body_json(&app, req).await;
    assert!(history.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn crisis_reply_carries_hotline() {
    let app = app!();
    let req = test::TestRequest::post().uri("/sessions").to_request();
    let opened: Value = test::call_and_read_body_json(&app, req).await;
    let id = opened["sessionId"].as_str().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/sessions/{id}/messages"))
        .set_json(json!({ "userInput": "não quero mais viver" }))
        .to_request();
    let reply: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(reply["originalEmotion"], "crisis");
    assert_eq!(reply["urgent"], true);
    assert_eq!(reply["suggestedExercise"], "grounding");
    assert!(reply["message"].as_str().unwrap().contains("188"));
}

#[actix_web::test]
async fn index_page_is_served() {
    let app = app!();
    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}
