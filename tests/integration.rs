mod common;

use serde_json::{json, Value};

use common::{init_tracing, RecordingTransport};
use zadarapy::api::vpsa::logs::LogQuery;
use zadarapy::api::{ApiError, HttpMethod, ReturnType};
use zadarapy::prelude::*;

const DRIVE: &str = "volume-00002a73";
const ACCOUNT: &str = "91ea5bd5cdc04adb9f5e3c00a346c463";

#[tokio::test]
async fn get_all_drives_sends_pagination_and_returns_response_unmodified() {
    init_tracing();

    let response = json!({"response": {"status": 0, "drives": [{"name": DRIVE}]}});
    let transport = RecordingTransport::new(response.clone());

    let output = drives::get_all(&transport, Some(5), Some(10), ReturnType::Native)
        .await
        .unwrap();

    assert_eq!(output.as_value(), Some(&response));

    let call = transport.last_call();
    assert_eq!(call.method, HttpMethod::Get);
    assert_eq!(call.path, "/api/drives.json");
    assert_eq!(call.parameters.len(), 2);
    assert_eq!(call.parameters["start"], 5);
    assert_eq!(call.parameters["limit"], 10);
    assert!(call.body.is_none());
    assert!(!call.secure);
}

#[tokio::test]
async fn listing_omits_unsupplied_pagination() {
    let transport = RecordingTransport::ok();

    drives::get_free(&transport, Some(5), None, ReturnType::Native)
        .await
        .unwrap();

    let call = transport.last_call();
    assert_eq!(call.path, "/api/drives/free.json");
    assert_eq!(call.parameters.keys().collect::<Vec<_>>(), vec!["start"]);

    drives::get_all(&transport, None, None, ReturnType::Native)
        .await
        .unwrap();
    assert!(transport.last_call().parameters.is_empty());
}

#[tokio::test]
async fn negative_pagination_never_reaches_the_transport() {
    let transport = RecordingTransport::ok();

    let err = drives::get_all(&transport, Some(-1), Some(10), ReturnType::Native)
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());

    let err = drives::get_free(&transport, None, Some(-10), ReturnType::Native)
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());

    let err = accounts::get_all(&transport, Some(-5), None, ReturnType::Native)
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());

    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn rename_with_single_quote_is_rejected_before_sending() {
    let transport = RecordingTransport::ok();

    let err = drives::rename(&transport, DRIVE, "it's mine", ReturnType::Native)
        .await
        .unwrap_err();

    match err {
        ZadaraError::InvalidArgument(invalid) => {
            assert_eq!(invalid.field(), "newname");
            assert_eq!(invalid.value(), "it's mine");
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn rename_strips_whitespace_into_the_body() {
    let transport = RecordingTransport::ok();

    drives::rename(&transport, DRIVE, "  spare-01  ", ReturnType::Native)
        .await
        .unwrap();

    let call = transport.last_call();
    assert_eq!(call.method, HttpMethod::Post);
    assert_eq!(call.path, "/api/drives/volume-00002a73/rename.json");

    let body: Value = serde_json::from_str(call.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({"newname": "spare-01"}));
}

#[tokio::test]
async fn malformed_drive_ids_are_rejected() {
    let transport = RecordingTransport::ok();

    for bad_id in ["", "volume-2a73", "VOLUME-00002a73", "pool-00002a73", "volume-00002a73/.."] {
        let err = drives::get(&transport, bad_id, ReturnType::Native)
            .await
            .unwrap_err();

        match err {
            ZadaraError::InvalidArgument(invalid) => assert_eq!(invalid.field(), "drive_id"),
            other => panic!("unexpected error for {bad_id:?}: {other}"),
        }
    }

    // The drive is checked before the replacement name
    let err = drives::replace(&transport, "volume-xyz", "it's", ReturnType::Native)
        .await
        .unwrap_err();
    assert!(matches!(err, ZadaraError::InvalidArgument(ref invalid) if invalid.field() == "drive_id"));

    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn drive_actions_use_their_endpoints() {
    let transport = RecordingTransport::ok();

    drives::get(&transport, DRIVE, ReturnType::Native).await.unwrap();
    drives::remove(&transport, DRIVE, ReturnType::Native).await.unwrap();
    drives::replace(&transport, DRIVE, "drive-000", ReturnType::Native)
        .await
        .unwrap();
    drives::shred(&transport, DRIVE, ReturnType::Native).await.unwrap();
    drives::cancel_shred(&transport, DRIVE, ReturnType::Native)
        .await
        .unwrap();

    let seen: Vec<(HttpMethod, String)> = transport
        .calls()
        .into_iter()
        .map(|call| (call.method, call.path))
        .collect();

    assert_eq!(
        seen,
        vec![
            (HttpMethod::Get, "/api/drives/volume-00002a73.json".to_string()),
            (HttpMethod::Post, "/api/drives/volume-00002a73/remove.json".to_string()),
            (HttpMethod::Post, "/api/drives/volume-00002a73/rename.json".to_string()),
            (HttpMethod::Post, "/api/drives/volume-00002a73/shred.json".to_string()),
            (HttpMethod::Post, "/api/drives/volume-00002a73/cancel_shred.json".to_string()),
        ]
    );

    // Replace shares the rename action and is told apart by its body
    let calls = transport.calls();
    assert_eq!(calls[2].body.as_deref(), Some(r#"{"toname":"drive-000"}"#));
}

#[tokio::test]
async fn drive_performance_interval() {
    let transport = RecordingTransport::ok();

    drives::performance(
        &transport,
        DRIVE,
        drives::DEFAULT_PERFORMANCE_INTERVAL,
        ReturnType::Native,
    )
    .await
    .unwrap();

    let call = transport.last_call();
    assert_eq!(call.path, "/api/drives/volume-00002a73/performance.json");
    assert_eq!(call.parameters["interval"], 1);

    let err = drives::performance(&transport, DRIVE, 0, ReturnType::Native)
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(transport.calls().len(), 1);
}

#[tokio::test]
async fn delete_account_normalizes_force() {
    let transport = RecordingTransport::ok();

    accounts::delete(&transport, ACCOUNT, Some("yes"), ReturnType::Native)
        .await
        .unwrap();

    let call = transport.last_call();
    assert_eq!(call.method, HttpMethod::Delete);
    assert_eq!(call.path, format!("/api/zios/accounts/{ACCOUNT}.json"));
    assert!(call.secure);

    let body: Value = serde_json::from_str(call.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({"force": "YES"}));

    for spelling in ["YES", "Yes", "yEs"] {
        accounts::delete(&transport, ACCOUNT, Some(spelling), ReturnType::Native)
            .await
            .unwrap();
        assert_eq!(transport.last_call().body.as_deref(), Some(r#"{"force":"YES"}"#));
    }

    accounts::delete(&transport, ACCOUNT, None, ReturnType::Native)
        .await
        .unwrap();
    assert_eq!(transport.last_call().body.as_deref(), Some(r#"{"force":"NO"}"#));

    let err = accounts::delete(&transport, ACCOUNT, Some("maybe"), ReturnType::Native)
        .await
        .unwrap_err();
    match err {
        ZadaraError::InvalidArgument(invalid) => assert_eq!(invalid.field(), "force"),
        other => panic!("unexpected error: {other}"),
    }

    assert_eq!(transport.calls().len(), 5);
}

#[tokio::test]
async fn account_endpoints_require_secure_channel() {
    let transport = RecordingTransport::ok();

    accounts::get(&transport, ACCOUNT, ReturnType::Native).await.unwrap();
    accounts::create(&transport, " accounting ", ReturnType::Native)
        .await
        .unwrap();
    accounts::cleanup(&transport, ACCOUNT, ReturnType::Native).await.unwrap();
    accounts::disable(&transport, ACCOUNT, ReturnType::Native).await.unwrap();
    accounts::enable(&transport, ACCOUNT, ReturnType::Native).await.unwrap();
    accounts::get_all_users(&transport, ACCOUNT, ReturnType::Native)
        .await
        .unwrap();

    let calls = transport.calls();
    assert_eq!(calls.len(), 6);
    assert!(calls.iter().all(|call| call.secure));

    assert_eq!(calls[1].method, HttpMethod::Post);
    assert_eq!(calls[1].path, "/api/zios/accounts.json");
    assert_eq!(calls[1].body.as_deref(), Some(r#"{"name":"accounting"}"#));

    assert_eq!(calls[2].method, HttpMethod::Delete);
    assert_eq!(calls[2].path, format!("/api/zios/accounts/{ACCOUNT}/cleanup.json"));
    assert_eq!(calls[3].path, format!("/api/zios/accounts/{ACCOUNT}/disable.json"));
    assert_eq!(calls[4].path, format!("/api/zios/accounts/{ACCOUNT}/enable.json"));
    assert_eq!(calls[5].method, HttpMethod::Get);
    assert_eq!(calls[5].path, format!("/api/zios/accounts/{ACCOUNT}/users.json"));

    accounts::get_all(&transport, None, Some(20), ReturnType::Native)
        .await
        .unwrap();
    assert!(!transport.last_call().secure);
}

#[tokio::test]
async fn malformed_account_ids_are_rejected() {
    let transport = RecordingTransport::ok();

    let err = accounts::enable(&transport, "91ea5bd5-cdc0-4adb", ReturnType::Native)
        .await
        .unwrap_err();
    match err {
        ZadaraError::InvalidArgument(invalid) => assert_eq!(invalid.field(), "account_id"),
        other => panic!("unexpected error: {other}"),
    }

    let err = accounts::create(&transport, "   ", ReturnType::Native)
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());

    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn logs_use_normalized_filters_and_forward_extras() {
    let transport = RecordingTransport::ok();

    let query = LogQuery::new()
        .with_sort("asc")
        .with_severity(3)
        .with_limit(50)
        .with_extra("since", "2024-03-01");

    logs::get(&transport, &query, ReturnType::Native).await.unwrap();

    let call = transport.last_call();
    assert_eq!(call.method, HttpMethod::Get);
    assert_eq!(call.path, "/api/messages.json");
    assert_eq!(call.parameters["sort"], "ASC");
    assert_eq!(call.parameters["severity"], 3);
    assert_eq!(call.parameters["limit"], 50);
    assert_eq!(call.parameters["since"], "2024-03-01");
    assert!(!call.parameters.contains_key("start"));
}

#[tokio::test]
async fn logs_reject_unknown_sort() {
    let transport = RecordingTransport::ok();
    let query = LogQuery::new().with_sort("oldest");

    let err = logs::get(&transport, &query, ReturnType::Native)
        .await
        .unwrap_err();

    assert!(err.is_invalid_argument());
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn logs_reject_typed_filters_passed_as_extras() {
    let transport = RecordingTransport::ok();
    let query = LogQuery::new()
        .with_extra("start", -1)
        .with_extra("severity", 99);

    let err = logs::get(&transport, &query, ReturnType::Native)
        .await
        .unwrap_err();

    match err {
        ZadaraError::InvalidArgument(invalid) => assert!(["severity", "start"].contains(&invalid.field())),
        other => panic!("unexpected error: {other}"),
    }

    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn json_return_type_yields_text_of_same_structure() {
    let response = json!({"response": {"status": 0, "accounts": []}});
    let transport = RecordingTransport::new(response.clone());

    let output = accounts::get_all(&transport, None, None, ReturnType::from_flag(Some("json")))
        .await
        .unwrap();

    let text = output.as_json().expect("json text output");
    let reparsed: Value = serde_json::from_str(text).unwrap();
    assert_eq!(reparsed, response);
}

#[tokio::test]
async fn transport_errors_pass_through_unchanged() {
    let transport = RecordingTransport::failing(404, "Drive not found");

    let err = drives::get(&transport, DRIVE, ReturnType::Native)
        .await
        .unwrap_err();

    match err {
        ZadaraError::Api(ApiError::Status {
            status_code,
            message,
        }) => {
            assert_eq!(status_code, 404);
            assert_eq!(message, "Drive not found");
        }
        other => panic!("unexpected error: {other}"),
    }

    assert_eq!(transport.calls().len(), 1);
}
