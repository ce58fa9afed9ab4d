mod common;

use axum::http::StatusCode;
use common::{get_json, send_json, setup_seeded_app, setup_test_app};
use serde_json::json;

#[tokio::test]
async fn test_catalog_lists_roles_cities_and_permissions() {
    let app = setup_test_app();

    let (status, body) = get_json(&app, "/api/scopes/catalog").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["roles"].as_array().unwrap().len(), 6);
    assert_eq!(body["cities"][0], "All");
    assert_eq!(body["global_city"], "All");
    assert_eq!(body["permissions"].as_array().unwrap().len(), 12);
}

#[tokio::test]
async fn test_seeded_admin_scopes_apply_in_every_city() {
    let app = setup_seeded_app();

    let (status, body) = get_json(&app, "/api/scopes/Admin/Kampala").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "Admin");
    assert_eq!(body["city"], "Kampala");
    assert_eq!(
        body["scopes"],
        json!({
            "cms.publish": true,
            "events.read": true,
            "orders.read": true,
            "payouts.view": true
        })
    );
}

#[tokio::test]
async fn test_unseeded_role_has_empty_scope() {
    let app = setup_test_app();

    let (status, body) = get_json(&app, "/api/scopes/Admin/All").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["scopes"], json!({}));
}

#[tokio::test]
async fn test_city_override_wins_over_global() {
    let app = setup_test_app();

    let (status, _) = send_json(
        &app,
        "PUT",
        "/api/scopes/Finance/All",
        json!({"scopes": {"events.read": true, "payouts.view": true}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send_json(
        &app,
        "PUT",
        "/api/scopes/Finance/Kampala",
        json!({"scopes": {"events.read": false}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["scopes"]["events.read"], false);
    assert_eq!(body["scopes"]["payouts.view"], true);

    let (_, body) = get_json(&app, "/api/scopes/Finance/Nairobi").await;
    assert_eq!(body["scopes"]["events.read"], true);
    assert!(body["scopes"].get("orders.refund").is_none());
}

#[tokio::test]
async fn test_update_merges_instead_of_replacing() {
    let app = setup_test_app();

    send_json(
        &app,
        "PUT",
        "/api/scopes/Support/Entebbe",
        json!({"scopes": {"users.read": true}}),
    )
    .await;
    let (_, body) = send_json(
        &app,
        "PUT",
        "/api/scopes/Support/Entebbe",
        json!({"scopes": {"users.block": false}}),
    )
    .await;

    assert_eq!(
        body["scopes"],
        json!({"users.block": false, "users.read": true})
    );
}

#[tokio::test]
async fn test_unknown_permission_keys_are_stored() {
    let app = setup_test_app();

    let (status, body) = send_json(
        &app,
        "PUT",
        "/api/scopes/Organizer/All",
        json!({"scopes": {"reports.export": true}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["scopes"]["reports.export"], true);
}

#[tokio::test]
async fn test_enable_and_disable_all() {
    let app = setup_test_app();

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/scopes/Support/Nairobi/all",
        json!({"enabled": true}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let scopes = body["scopes"].as_object().unwrap();
    assert_eq!(scopes.len(), 12);
    assert!(scopes.values().all(|v| v.as_bool() == Some(true)));

    let (_, body) = send_json(
        &app,
        "POST",
        "/api/scopes/Support/Nairobi/all",
        json!({"enabled": false}),
    )
    .await;
    assert!(body["scopes"].as_object().unwrap().values().all(|v| v.as_bool() == Some(false)));
}

#[tokio::test]
async fn test_scope_rows_filter_and_columns() {
    let app = setup_test_app();

    send_json(
        &app,
        "PUT",
        "/api/scopes/Finance/All",
        json!({"scopes": {"payouts.view": true}}),
    )
    .await;
    send_json(
        &app,
        "PUT",
        "/api/scopes/Finance/Kampala",
        json!({"scopes": {"payouts.execute": false}}),
    )
    .await;

    let (status, body) = get_json(&app, "/api/scopes/Finance/Kampala/rows?q=PAYOUTS").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"permission": "payouts.view", "global": true, "city": null, "effective": true},
            {"permission": "payouts.execute", "global": null, "city": false, "effective": false}
        ])
    );
}

#[tokio::test]
async fn test_scope_rows_for_global_city_have_no_city_column() {
    let app = setup_seeded_app();

    let (_, body) = get_json(&app, "/api/scopes/Admin/All/rows?q=cms").await;

    assert_eq!(
        body,
        json!([
            {"permission": "cms.publish", "global": true, "city": null, "effective": true}
        ])
    );
}

#[tokio::test]
async fn test_empty_filter_lists_whole_catalog() {
    let app = setup_test_app();

    let (_, body) = get_json(&app, "/api/scopes/Finance/Kampala/rows?q=").await;

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 12);
    assert!(rows.iter().all(|r| r["effective"].is_null()));
}

#[tokio::test]
async fn test_role_summaries() {
    let app = setup_seeded_app();

    send_json(
        &app,
        "PUT",
        "/api/scopes/Admin/Mombasa",
        json!({"scopes": {"events.read": false}}),
    )
    .await;

    let (status, body) = get_json(&app, "/api/scopes/roles").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"role": "Admin", "cities": ["All", "Mombasa"], "granted": 4, "denied": 1}
        ])
    );
}

#[tokio::test]
async fn test_empty_update_leaves_role_summaries_unchanged() {
    let app = setup_test_app();

    let (status, body) = send_json(
        &app,
        "PUT",
        "/api/scopes/Ghost/Kampala",
        json!({"scopes": {}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["scopes"], json!({}));

    let (status, body) = get_json(&app, "/api/scopes/roles").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_blank_permission_key_is_rejected() {
    let app = setup_test_app();

    let (status, body) = send_json(
        &app,
        "PUT",
        "/api/scopes/Finance/All",
        json!({"scopes": {" ": true}}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Permission keys must not be blank");
}

#[tokio::test]
async fn test_missing_scopes_field_is_bad_request() {
    let app = setup_test_app();

    let (status, body) = send_json(&app, "PUT", "/api/scopes/Finance/All", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "scopes is required");
}
