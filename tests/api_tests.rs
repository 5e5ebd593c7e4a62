use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;
use std::sync::Arc;
use tender_service::bidding::model::{Bid, NewBid};
use tender_service::database::DatabaseManager;
use tender_service::state::AppState;
use tender_service::store::{SqliteTenderStore, TenderStore};
use tender_service::tender::lifecycle::LifecyclePolicy;
use tender_service::tender::model::{NewTender, Tender};
use tower::ServiceExt;

/// 항상 실패하는 저장소
struct FailingStore;

#[async_trait]
impl TenderStore for FailingStore {
    async fn current_tenders(&self, _cutoff: NaiveDateTime) -> Result<Vec<Tender>, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn past_tenders(&self, _cutoff: NaiveDateTime) -> Result<Vec<Tender>, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn tender(&self, _tender_id: i64) -> Result<Option<Tender>, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn bids_for(&self, _tender_id: i64) -> Result<Vec<Bid>, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn insert_tender(&self, _tender: &NewTender) -> Result<i64, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn insert_bid(&self, _bid: &NewBid) -> Result<i64, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }
}

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn midnight() -> NaiveDateTime {
    at(0, 0)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn ids(body: &Value) -> Vec<i64> {
    body["tenders"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|t| t["id"].as_i64())
        .collect()
}

/// 2시간 유예, 현재 시각 2024-01-01 00:00 고정
async fn app_with_grace() -> (Router, Arc<SqliteTenderStore>) {
    let db_manager = Arc::new(DatabaseManager::in_memory().await.unwrap());
    db_manager.initialize_database().await.unwrap();
    let store = Arc::new(SqliteTenderStore::new(db_manager));
    let policy = LifecyclePolicy::from_minutes(120).unwrap();

    let state = AppState::new(store.clone(), policy).with_clock(midnight);
    (tender_service::create_app(state), store)
}

async fn insert_tender(store: &SqliteTenderStore, name: &str, end: NaiveDateTime) -> i64 {
    store
        .insert_tender(&NewTender {
            name: name.to_string(),
            description: String::new(),
            institution_id: 1,
            start_datetime: at(0, 0) - chrono::Duration::days(1),
            end_datetime: end,
            maximum_budget: 100.0,
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let app = tender_service::create_app(AppState::new(
        Arc::new(FailingStore),
        LifecyclePolicy::default(),
    ));

    for uri in ["/tenders", "/tenders/past", "/tender/1"] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
        assert_eq!(body["error"], "Error accessing database.");
    }

    let (status, _) = send(&app, post_form("/tender/1/bid", "institution_id=1&bid_amount=5")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = send(
        &app,
        post_form(
            "/tender/add",
            "name=Desks&description=&institution=2&start_datetime=2024-02-01T09%3A00&end_datetime=2024-02-01T10%3A00&maximum_budget=10",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_validation_runs_before_store() {
    let app = tender_service::create_app(AppState::new(
        Arc::new(FailingStore),
        LifecyclePolicy::default(),
    ));

    let (status, body) = send(&app, post_form("/tender/add", "name=")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid form input");
    assert!(body["fields"].as_array().unwrap().len() >= 5);
}

#[tokio::test]
async fn test_grace_offset_splits_lists() {
    let (app, store) = app_with_grace().await;
    let later = insert_tender(&store, "A", at(3, 0)).await;
    let soon = insert_tender(&store, "B", at(1, 0)).await;
    let boundary = insert_tender(&store, "C", at(2, 0)).await;

    let (status, body) = send(&app, get("/tenders")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![later]);

    let (status, body) = send(&app, get("/tenders/past")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![boundary, soon]);
}

#[tokio::test]
async fn test_detail_uses_same_grace_offset() {
    let (app, store) = app_with_grace().await;
    let soon = insert_tender(&store, "B", at(1, 0)).await;

    let (status, body) = send(&app, get(&format!("/tender/{}", soon))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lifecycle"], "concluded");

    let (status, body) = send(
        &app,
        post_form(&format!("/tender/{}/bid", soon), "institution_id=3&bid_amount=10"),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "ALREADY_ENDED");
}

#[tokio::test]
async fn test_bid_redirects_to_detail() {
    let (app, store) = app_with_grace().await;
    let later = insert_tender(&store, "A", at(3, 0)).await;

    let response = app
        .clone()
        .oneshot(post_form(
            &format!("/tender/{}/bid", later),
            "institution_id=3&bid_amount=10",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()["location"],
        format!("/tender/{}", later).as_str()
    );

    let bids = store.bids_for(later).await.unwrap();
    assert_eq!(bids.len(), 1);
    assert_eq!(bids[0].timestamp, midnight());
}
