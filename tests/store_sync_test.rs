//! State-synchronization tests: snapshot replacement, alert filtering,
//! selection revalidation, and fail-soft load errors, all driven through
//! the app's message loop with a mock transport.

mod common;

use common::{alerts_body, mock_app, ok_json, plants_body, stats_body, pump, url};

use verdant::adapters::mock::MockResponse;
use verdant::traits::HttpError;
use verdant::view_state::DashboardViewState;

#[tokio::test]
async fn test_repeated_identical_loads_leave_snapshot_identical() {
    let (mut app, mock) = mock_app();
    mock.set_response(
        "GET",
        &url("/plants"),
        ok_json(&plants_body(&[("p1", "Kitchen Fern", "Fern"), ("p2", "Basil", "Herb")])),
    );

    app.load_plants();
    pump(&mut app).await;
    let first = app.store.plants().to_vec();
    assert_eq!(first.len(), 2);

    app.load_plants();
    pump(&mut app).await;

    assert_eq!(first, app.store.plants());
}

#[tokio::test]
async fn test_visible_alerts_are_exactly_the_unresolved_subset() {
    let (mut app, mock) = mock_app();
    mock.set_response(
        "GET",
        &url("/alerts"),
        ok_json(&alerts_body(&[
            ("a1", false, "2026-08-05T10:00:00Z"),
            ("a2", true, "2026-08-05T09:00:00Z"),
            ("a3", false, "2026-08-05T08:00:00Z"),
            ("a4", true, "2026-08-05T07:00:00Z"),
        ])),
    );

    app.load_alerts();
    pump(&mut app).await;

    // Full set retained, visible set filtered, newest first
    assert_eq!(app.store.alerts().len(), 4);
    let visible: Vec<&str> = app
        .store
        .visible_alerts()
        .iter()
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(visible, vec!["a1", "a3"]);
}

#[tokio::test]
async fn test_first_load_selects_first_plant() {
    let (mut app, mock) = mock_app();
    mock.set_response(
        "GET",
        &url("/plants"),
        ok_json(&plants_body(&[("p1", "Kitchen Fern", "Fern"), ("p2", "Basil", "Herb")])),
    );

    assert!(app.selected_plant_id.is_none());
    app.load_plants();
    pump(&mut app).await;

    // Deterministic default: first plant in server-returned order
    assert_eq!(app.selected_plant_id.as_deref(), Some("p1"));
    assert_eq!(app.selected_plant().unwrap().name, "Kitchen Fern");
}

#[tokio::test]
async fn test_selection_unset_when_plant_disappears() {
    let (mut app, mock) = mock_app();
    mock.set_response(
        "GET",
        &url("/plants"),
        ok_json(&plants_body(&[("p1", "Fern", "Fern"), ("p2", "Basil", "Herb")])),
    );

    app.load_plants();
    pump(&mut app).await;
    app.select_plant_at(1);
    assert_eq!(app.selected_plant_id.as_deref(), Some("p2"));

    // p2 is gone from the next snapshot
    mock.set_response(
        "GET",
        &url("/plants"),
        ok_json(&plants_body(&[("p1", "Fern", "Fern")])),
    );
    app.load_plants();
    pump(&mut app).await;

    // Fails closed: no stale reference, no silent fallback
    assert!(app.selected_plant_id.is_none());
    assert!(app.selected_plant().is_none());
}

#[tokio::test]
async fn test_load_failure_keeps_prior_snapshot_and_stays_quiet() {
    let (mut app, mock) = mock_app();
    mock.set_response(
        "GET",
        &url("/plants"),
        ok_json(&plants_body(&[("p1", "Fern", "Fern")])),
    );

    app.load_plants();
    pump(&mut app).await;
    assert_eq!(app.store.plants().len(), 1);

    mock.set_response(
        "GET",
        &url("/plants"),
        MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
    );
    app.load_plants();
    pump(&mut app).await;

    // Fail-soft: stale-but-consistent view, no user-facing interruption
    assert_eq!(app.store.plants().len(), 1);
    assert_eq!(app.selected_plant_id.as_deref(), Some("p1"));
    assert!(app.latest_notice().is_none());
}

#[tokio::test]
async fn test_empty_alerts_all_clear_with_stats_untouched() {
    let (mut app, mock) = mock_app();
    mock.set_response("GET", &url("/alerts"), ok_json("[]"));
    mock.set_response("GET", &url("/dashboard/stats"), ok_json(&stats_body(4, 0, 70.0)));

    app.load_alerts();
    app.load_dashboard_stats();
    pump(&mut app).await;

    assert!(app.store.visible_alerts().is_empty());

    let dashboard = DashboardViewState::from_store(&app.store);
    assert!(dashboard.all_clear);
    // health_percentage comes from the aggregate, independent of the alert list
    assert_eq!(dashboard.health_percentage, 70.0);
    assert_eq!(dashboard.total_plants, 4);
}

#[tokio::test]
async fn test_stats_replaced_wholesale_on_reload() {
    let (mut app, mock) = mock_app();
    mock.set_response("GET", &url("/dashboard/stats"), ok_json(&stats_body(2, 1, 50.0)));
    app.load_dashboard_stats();
    pump(&mut app).await;
    assert_eq!(app.store.stats().unwrap().total_plants, 2);

    mock.set_response("GET", &url("/dashboard/stats"), ok_json(&stats_body(3, 0, 80.0)));
    app.load_dashboard_stats();
    pump(&mut app).await;

    let stats = app.store.stats().unwrap();
    assert_eq!(stats.total_plants, 3);
    assert_eq!(stats.active_alerts, 0);
    assert_eq!(stats.health_percentage, 80.0);
}

#[tokio::test]
async fn test_resolved_alert_does_not_reappear_after_racing_loads() {
    let (mut app, mock) = mock_app();
    mock.set_response(
        "GET",
        &url("/alerts"),
        ok_json(&alerts_body(&[("a1", false, "2026-08-05T10:00:00Z")])),
    );
    app.load_alerts();
    pump(&mut app).await;
    assert_eq!(app.store.visible_alerts().len(), 1);

    // The resolve completes server-side; every later fetch sees it resolved
    mock.set_response(
        "PATCH",
        &url("/alerts/a1/resolve"),
        ok_json(r#"{"message":"Alert resolved"}"#),
    );
    mock.set_response(
        "GET",
        &url("/alerts"),
        ok_json(&alerts_body(&[("a1", true, "2026-08-05T10:00:00Z")])),
    );

    // Resolve (which schedules its own reload) racing a manual refresh
    app.alerts_index = 0;
    app.resolve_selected_alert();
    app.load_alerts();
    pump(&mut app).await;

    // Eventual consistency: whichever load wins, a1 must not reappear
    assert!(app.store.visible_alerts().is_empty());
    assert!(mock.count_requests("PATCH", "/alerts/a1/resolve") == 1);
    assert!(mock.count_requests("GET", "/alerts") >= 2);
}

#[tokio::test]
async fn test_resolve_failure_still_resynchronizes_and_notifies() {
    let (mut app, mock) = mock_app();
    mock.set_response(
        "GET",
        &url("/alerts"),
        ok_json(&alerts_body(&[("a1", false, "2026-08-05T10:00:00Z")])),
    );
    app.load_alerts();
    pump(&mut app).await;

    mock.set_response(
        "PATCH",
        &url("/alerts/a1/resolve"),
        MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
    );
    mock.clear_requests();

    app.resolve_selected_alert();
    pump(&mut app).await;

    // Surfaced to the user, and the declared reload side effect still ran
    assert!(app.latest_notice().is_some());
    assert_eq!(mock.count_requests("GET", "/alerts"), 1);
    assert_eq!(app.store.visible_alerts().len(), 1);
}

#[tokio::test]
async fn test_water_plant_schedules_plants_reload() {
    let (mut app, mock) = mock_app();
    mock.set_response(
        "GET",
        &url("/plants"),
        ok_json(&plants_body(&[("p1", "Fern", "Fern")])),
    );
    app.load_plants();
    pump(&mut app).await;

    mock.set_response(
        "POST",
        &url("/plants/p1/water"),
        ok_json(r#"{"message":"Plant watered successfully"}"#),
    );
    mock.clear_requests();

    app.water_selected_plant();
    pump(&mut app).await;

    assert_eq!(mock.count_requests("POST", "/plants/p1/water"), 1);
    assert_eq!(mock.count_requests("GET", "/plants"), 1);
}
