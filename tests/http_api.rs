//! Request/response surface: `/join`, `/state` and the operational endpoints.

mod common;

use common::*;
use docsapp::models::GroupUpdateMessage;
use serde_json::json;

#[tokio::test]
async fn join_with_unknown_group_is_rejected() {
    let (state, app) = test_app();

    let response = send(&app, join_request(r#"{"groupId":"bogus"}"#, None)).await;
    assert_eq!(response.status(), 400);
    let cookie = session_cookie(&response).unwrap();
    assert_eq!(
        body_json(response).await,
        json!({"ok": false, "error": "Invalid group"})
    );

    let response = send(&app, get_request("/state", Some(&cookie))).await;
    let body = body_json(response).await;
    assert_eq!(body["groupId"], json!(null));
    assert_eq!(body["combinedText"], json!(""));
    assert_eq!(state.hub.non_empty_fragments().await, 0);
}

#[tokio::test]
async fn join_without_a_group_id_is_rejected() {
    let (_, app) = test_app();

    let response = send(&app, join_request("{}", None)).await;
    assert_eq!(response.status(), 400);
    assert_eq!(body_json(response).await["error"], json!("Invalid group"));

    let response = send(&app, join_request("not json", None)).await;
    assert_eq!(response.status(), 400);
    assert_eq!(
        body_json(response).await,
        json!({"ok": false, "error": "Invalid group"})
    );
}

#[tokio::test]
async fn join_then_state_reports_the_group() {
    let (_, app) = test_app();

    let response = send(&app, join_request(r#"{"groupId":"g2"}"#, None)).await;
    assert_eq!(response.status(), 200);
    let cookie = session_cookie(&response).unwrap();
    assert!(cookie.starts_with("docsapp.sid="));
    assert_eq!(body_json(response).await, json!({"ok": true}));

    let response = send(&app, get_request("/state", Some(&cookie))).await;
    assert_eq!(response.status(), 200);
    assert!(session_cookie(&response).is_none());
    assert_eq!(
        body_json(response).await,
        json!({
            "groupId": "g2",
            "groupTexts": {"g1": "", "g2": "", "g3": "", "g4": "", "g5": ""},
            "combinedText": ""
        })
    );
}

#[tokio::test]
async fn join_accepts_a_form_body() {
    let (_, app) = test_app();

    let response = send(&app, form_join_request("groupId=g3", None)).await;
    assert_eq!(response.status(), 200);
    let cookie = session_cookie(&response).unwrap();
    assert_eq!(body_json(response).await, json!({"ok": true}));

    let response = send(&app, get_request("/state", Some(&cookie))).await;
    assert_eq!(body_json(response).await["groupId"], json!("g3"));

    let response = send(&app, form_join_request("groupId=bogus", Some(&cookie))).await;
    assert_eq!(response.status(), 400);
    assert_eq!(
        body_json(response).await,
        json!({"ok": false, "error": "Invalid group"})
    );

    // A form without the field is rejected the same way.
    let response = send(&app, form_join_request("other=g1", Some(&cookie))).await;
    assert_eq!(response.status(), 400);

    let response = send(&app, get_request("/state", Some(&cookie))).await;
    assert_eq!(body_json(response).await["groupId"], json!("g3"));
}

#[tokio::test]
async fn rejoining_overwrites_the_selection() {
    let (_, app) = test_app();
    let cookie = join_as(&app, "g1").await;

    let response = send(&app, join_request(r#"{"groupId":"g4"}"#, Some(&cookie))).await;
    assert_eq!(response.status(), 200);
    assert!(session_cookie(&response).is_none());

    let body = body_json(send(&app, get_request("/state", Some(&cookie))).await).await;
    assert_eq!(body["groupId"], json!("g4"));

    // A failed re-join keeps the earlier choice.
    let response = send(&app, join_request(r#"{"groupId":"nope"}"#, Some(&cookie))).await;
    assert_eq!(response.status(), 400);
    let body = body_json(send(&app, get_request("/state", Some(&cookie))).await).await;
    assert_eq!(body["groupId"], json!("g4"));
}

#[tokio::test]
async fn state_without_a_session_starts_one() {
    let (_, app) = test_app();

    let response = send(&app, get_request("/state", None)).await;
    assert_eq!(response.status(), 200);
    assert!(session_cookie(&response).is_some());
    assert_eq!(body_json(response).await["groupId"], json!(null));

    // Sessions are per client.
    let _ = join_as(&app, "g3").await;
    let body = body_json(send(&app, get_request("/state", None)).await).await;
    assert_eq!(body["groupId"], json!(null));
}

#[tokio::test]
async fn state_reflects_committed_updates() {
    let (state, app) = test_app();
    let g1 = state.registry.resolve("g1").cloned();
    let g3 = state.registry.resolve("g3").cloned();
    for (bound, group, text) in [(&g1, "g1", "Hello"), (&g3, "g3", "  World\n")] {
        state
            .hub
            .apply_update(
                bound.as_ref(),
                GroupUpdateMessage {
                    group_id: group.to_string(),
                    text: json!(text),
                },
            )
            .await
            .unwrap();
    }

    let body = body_json(send(&app, get_request("/state", None)).await).await;
    assert_eq!(body["groupTexts"]["g1"], json!("Hello"));
    assert_eq!(body["groupTexts"]["g3"], json!("  World\n"));
    assert_eq!(body["combinedText"], json!("Hello\n\nWorld"));
}

#[tokio::test]
async fn operational_endpoints() {
    let (_, app) = test_app();

    let body = body_json(send(&app, get_request("/api/health", None)).await).await;
    assert_eq!(body, json!({"status": "ok", "message": "Server is running"}));

    let body = body_json(send(&app, get_request("/api/ready", None)).await).await;
    assert_eq!(body["status"], json!("ok"));

    let body = body_json(send(&app, get_request("/api/v1/diagnostics", None)).await).await;
    assert_eq!(body["nConn"], json!(0));
    assert_eq!(body["nGroups"], json!(5));
    assert_eq!(body["nNonEmpty"], json!(0));

    let response = send(&app, get_request("/api-docs/openapi.json", None)).await;
    assert_eq!(response.status(), 200);
    let spec = body_json(response).await;
    assert!(spec["paths"]["/join"].is_object());
    assert!(spec["paths"]["/state"].is_object());
}
