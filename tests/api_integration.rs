//! Integration tests for the HTTP API
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot`

use aura_match::core::create_router;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn post_json(app: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_router();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["cachedScores"], 0);
}

#[tokio::test]
async fn test_score_endpoint() {
    let app = create_router();
    let body = json!({
        "viewer": {
            "personalityType": "INTJ",
            "attachmentStyle": "Secure",
            "interests": ["Art"]
        },
        "candidate": {
            "personalityType": "ENFP",
            "attachmentStyle": "Secure",
            "interests": ["Art"]
        }
    });

    let (status, json) = post_json(app, "/score", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["details"]["intellectual"], 98.0);
    assert_eq!(json["details"]["emotional"], 100.0);
    assert_eq!(json["details"]["lifestyle"], 100.0);
    // 25 + 24.5 + 20 + 24 = 93.5
    assert_eq!(json["score"], 94);
    assert_eq!(json["label"], "Union Cosmique");
}

#[tokio::test]
async fn test_score_is_cached() {
    let app = create_router();
    let body = json!({ "viewer": {}, "candidate": {} });

    let (status, _) = post_json(app.clone(), "/score", body.clone()).await;
    assert_eq!(status, StatusCode::OK);
    let (_, _) = post_json(app.clone(), "/score", body).await;

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let health: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(health["cachedScores"], 1);
}

#[tokio::test]
async fn test_rank_endpoint() {
    let app = create_router();
    let body = json!({
        "viewer": { "personalityType": "INFJ", "attachmentStyle": "Secure" },
        "candidates": [
            { "id": "meh", "personalityType": "ESTP", "attachmentStyle": "Avoidant" },
            { "id": "great", "personalityType": "ENTP", "attachmentStyle": "Secure" }
        ]
    });

    let (status, json) = post_json(app, "/rank", body).await;

    assert_eq!(status, StatusCode::OK);
    let ranked = json.as_array().unwrap();
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0]["candidateId"], "great");
    assert_eq!(ranked[1]["candidateId"], "meh");
}

#[tokio::test]
async fn test_swipe_endpoint() {
    let app = create_router();
    let body = json!({
        "direction": "super",
        "candidateBio": "x".repeat(200),
        "elapsedMs": 500
    });

    let (status, json) = post_json(app, "/aura/swipe", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["intensity"], 55.5);
    assert_eq!(json["depth"], 51.0);
    assert_eq!(json["dominantElement"], "FEU");
    assert!(json["lastAction"].is_string());
}

#[tokio::test]
async fn test_message_endpoint_with_existing_aura() {
    let app = create_router();
    let body = json!({
        "aura": { "intensity": 10, "depth": 20, "stability": 99.5, "openness": 30, "dominantElement": "TERRE" },
        "text": "ok",
        "elapsedSincePreviousMs": 5000
    });

    let (status, json) = post_json(app, "/aura/message", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["stability"], 100.0);
    assert_eq!(json["intensity"], 11.0);
    assert_eq!(json["depth"], 19.5);
}

#[tokio::test]
async fn test_seed_endpoint() {
    let app = create_router();
    let body = json!({ "bio": "short", "personalityType": "ESTJ" });

    let (status, json) = post_json(app, "/aura/seed", body).await;

    assert_eq!(status, StatusCode::OK);
    // E → intensity, S → stability, J → stability, short bio → depth -5
    assert_eq!(json["intensity"], 55.0);
    assert_eq!(json["stability"], 60.0);
    assert_eq!(json["depth"], 45.0);
    assert_eq!(json["dominantElement"], "TERRE");
}

#[tokio::test]
async fn test_bad_direction_is_rejected() {
    let app = create_router();
    let body = json!({ "direction": "sideways", "elapsedMs": 100 });

    let (status, _) = post_json(app, "/aura/swipe", body).await;

    assert!(status.is_client_error());
}
