// End to end tests through the assembled router: REST, GraphQL and the shared handlers
// behind them, backed by the seeded in-memory store.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::state::{make_offline_state, make_test_state};

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or_default())
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn reports_healthy() {
    let response = router(make_test_state().await)
        .oneshot(get("/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn detail_matches_the_dashboard_row() {
    let app = router(make_test_state().await);

    let (_, list) = send(app.clone(), get("/equipment")).await;
    let (status, detail) = send(app.clone(), get("/equipment/1")).await;
    let (_, overview) = send(app, get("/equipment-utilization")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(list[0], detail);
    for field in ["utilization_percentage", "utilization_hours", "idle_hours", "avg_power"] {
        assert_eq!(overview[0][field], detail[field], "{field}");
    }
}

#[tokio::test]
async fn explicit_ranges_are_idempotent() {
    let app = router(make_test_state().await);
    let uri = "/equipment/1?start_date=2024-04-29&end_date=2024-05-02";

    let (_, first) = send(app.clone(), get(uri)).await;
    let (_, second) = send(app, get(uri)).await;

    assert_eq!(first, second);
    assert_eq!(first["utilization_hours"], 14.0);
    assert_eq!(first["baseline_hours"], 72.0);
    assert_eq!(first["utilization_percentage"], 19.44);
}

#[tokio::test]
async fn map_data_carries_the_dashboard_summary() {
    let app = router(make_test_state().await);

    let (_, list) = send(app.clone(), get("/equipment")).await;
    let (status, map) = send(app, get("/equipment-map-data")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(map[1]["equipment_name"], "Equipment 2");
    assert_eq!(map[0]["utilization_hours"], list[0]["utilization_hours"]);
    assert_eq!(map[0]["latest_location"], list[0]["latest_location"]);
}

#[tokio::test]
async fn graphql_and_rest_agree() {
    let app = router(make_test_state().await);
    let request = Request::post("/gql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({
                "query": "{ equipmentSummary(equipmentId: 1) { utilizationPercentage powerConsumption isActive } }"
            })
            .to_string(),
        ))
        .unwrap();

    let (_, rest) = send(app.clone(), get("/equipment/1")).await;
    let (status, gql) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    let summary = &gql["data"]["equipmentSummary"];
    assert_eq!(summary["utilizationPercentage"], rest["utilization_percentage"]);
    assert_eq!(summary["powerConsumption"], rest["power_consumption"]);
    assert_eq!(summary["isActive"], rest["is_active"]);
}

#[tokio::test]
async fn serves_graphiql() {
    let response = router(make_test_state().await)
        .oneshot(get("/gql"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn allows_cross_origin_dashboards() {
    let request = Request::get("/equipment")
        .header(header::ORIGIN, "http://dashboard.local")
        .body(Body::empty())
        .unwrap();

    let response = router(make_test_state().await)
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn every_endpoint_fails_whole_when_the_store_is_down() {
    let app = router(make_offline_state());

    for uri in [
        "/equipment",
        "/equipment/1",
        "/equipment-utilization",
        "/equipment-map-data",
    ] {
        let (status, body) = send(app.clone(), get(uri)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert!(body["error"].is_string(), "{uri}");
    }
}
