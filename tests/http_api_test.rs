use address_lookup::adapters::{HttpBlacklistGateway, InMemoryAddressStore};
use address_lookup::core::{Address, AddressPayload, AddressStore, BlacklistGateway, Zone};
use address_lookup::{router, AddressDirectory, AddressError, FilterPolicy, RetryPolicy};
use anyhow::Result;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use httpmock::prelude::*;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

async fn app(blacklist_url: String, filter_enabled: bool) -> Result<Router> {
    let gateway = HttpBlacklistGateway::new(blacklist_url, Duration::from_secs(5))?;
    let retry = RetryPolicy::new(3, Duration::from_millis(10));
    let filter = FilterPolicy::new(filter_enabled, Arc::new(gateway), retry);
    let directory = AddressDirectory::new(Arc::new(InMemoryAddressStore::new()), filter);
    Ok(router(Arc::new(directory), REQUEST_TIMEOUT))
}

/// 每次呼叫都先卡住 `delay` 再失敗的黑名單服務
struct StalledBlacklist {
    delay: Duration,
    calls: AtomicU32,
}

#[async_trait]
impl BlacklistGateway for StalledBlacklist {
    async fn get_all_zones(&self) -> address_lookup::Result<Vec<Zone>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        Err(AddressError::GatewayStatusError { status: 504 })
    }
}

struct UnavailableStore;

#[async_trait]
impl AddressStore for UnavailableStore {
    async fn find_all(&self) -> address_lookup::Result<Vec<Address>> {
        Err(AddressError::store("database offline"))
    }

    async fn find_by_postcode(&self, _postcode: &str) -> address_lookup::Result<Vec<Address>> {
        Err(AddressError::store("database offline"))
    }

    async fn find_by_id(&self, _id: i32) -> address_lookup::Result<Option<Address>> {
        Err(AddressError::store("database offline"))
    }

    async fn insert(&self, _payload: AddressPayload) -> address_lookup::Result<Address> {
        Err(AddressError::store("database offline"))
    }

    async fn replace(
        &self,
        _id: i32,
        _payload: AddressPayload,
    ) -> address_lookup::Result<Option<Address>> {
        Err(AddressError::store("database offline"))
    }

    async fn delete_by_id(&self, _id: i32) -> address_lookup::Result<bool> {
        Err(AddressError::store("database offline"))
    }
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Result<(StatusCode, Value)> {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))?,
        None => request.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, value))
}

fn address(building: &str, postcode: &str) -> Value {
    json!({
        "building": building,
        "street": "Church Lane",
        "town": "Norwich",
        "postcode": postcode
    })
}

#[tokio::test]
async fn test_crud_round_trip() -> Result<()> {
    let server = MockServer::start_async().await;
    let app = app(server.url("/blacklist"), true).await?;

    let (status, created) = send(&app, "POST", "/addresses", Some(address("1", "NR1 1AA"))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["postcode"], "NR1 1AA");

    let (status, fetched) = send(&app, "GET", "/addresses/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send(&app, "PUT", "/addresses/1", Some(address("1B", "NR1 1AB"))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["building"], "1B");

    let (status, body) = send(&app, "DELETE", "/addresses/1", None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, "GET", "/addresses/1", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");

    Ok(())
}

#[tokio::test]
async fn test_missing_ids_return_not_found() -> Result<()> {
    let server = MockServer::start_async().await;
    let app = app(server.url("/blacklist"), true).await?;

    let (status, _) = send(&app, "PUT", "/addresses/42", Some(address("1", "NR1 1AA"))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/addresses/42", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_invalid_payloads_return_bad_request() -> Result<()> {
    let server = MockServer::start_async().await;
    let app = app(server.url("/blacklist"), true).await?;

    let (status, body) = send(&app, "POST", "/addresses", Some(address("", "NR1 1AA"))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");

    let (status, _) = send(&app, "POST", "/addresses", Some(json!({"building": "1"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, all) = send(&app, "GET", "/addresses", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all, json!([]));

    Ok(())
}

#[tokio::test]
async fn test_blacklisted_postcode_is_hidden() -> Result<()> {
    let server = MockServer::start_async().await;
    let blacklist = server
        .mock_async(|when, then| {
            when.method(GET).path("/blacklist");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!([{"postCode": "AB1 2CD", "zone": "Z1"}]));
        })
        .await;
    let app = app(server.url("/blacklist"), true).await?;

    send(&app, "POST", "/addresses", Some(address("1", "AB1 2CD"))).await?;
    send(&app, "POST", "/addresses", Some(address("2", "XY9 8ZZ"))).await?;

    let (status, hidden) = send(&app, "GET", "/addresses?postcode=AB1%202CD", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hidden, json!([]));

    let (_, visible) = send(&app, "GET", "/addresses?postcode=XY9%208ZZ", None).await?;
    assert_eq!(visible.as_array().map(Vec::len), Some(1));
    assert_eq!(visible[0]["building"], "2");

    let (_, all) = send(&app, "GET", "/addresses", None).await?;
    assert_eq!(all.as_array().map(Vec::len), Some(2));

    // 只有帶 postcode 的兩次查詢會呼叫黑名單服務
    blacklist.assert_hits_async(2).await;
    Ok(())
}

#[tokio::test]
async fn test_blank_postcode_lists_everything() -> Result<()> {
    let server = MockServer::start_async().await;
    let blacklist = server
        .mock_async(|when, then| {
            when.method(GET).path("/blacklist");
            then.status(200).json_body(json!([]));
        })
        .await;
    let app = app(server.url("/blacklist"), true).await?;

    send(&app, "POST", "/addresses", Some(address("1", "AB1 2CD"))).await?;

    let (status, all) = send(&app, "GET", "/addresses?postcode=", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().map(Vec::len), Some(1));

    blacklist.assert_hits_async(0).await;
    Ok(())
}

#[tokio::test]
async fn test_blacklist_outage_fails_open() -> Result<()> {
    let server = MockServer::start_async().await;
    let blacklist = server
        .mock_async(|when, then| {
            when.method(GET).path("/blacklist");
            then.status(500);
        })
        .await;
    let app = app(server.url("/blacklist"), true).await?;

    send(&app, "POST", "/addresses", Some(address("1", "AB1 2CD"))).await?;

    let (status, result) = send(&app, "GET", "/addresses?postcode=AB1%202CD", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result.as_array().map(Vec::len), Some(1));

    blacklist.assert_hits_async(3).await;
    Ok(())
}

#[tokio::test]
async fn test_disabled_filter_skips_blacklist() -> Result<()> {
    let server = MockServer::start_async().await;
    let blacklist = server
        .mock_async(|when, then| {
            when.method(GET).path("/blacklist");
            then.status(200)
                .json_body(json!([{"postCode": "AB1 2CD", "zone": "Z1"}]));
        })
        .await;
    let app = app(server.url("/blacklist"), false).await?;

    send(&app, "POST", "/addresses", Some(address("1", "AB1 2CD"))).await?;

    let (_, result) = send(&app, "GET", "/addresses?postcode=AB1%202CD", None).await?;
    assert_eq!(result.as_array().map(Vec::len), Some(1));

    blacklist.assert_hits_async(0).await;
    Ok(())
}

#[tokio::test]
async fn test_health() -> Result<()> {
    let server = MockServer::start_async().await;
    let app = app(server.url("/blacklist"), true).await?;

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn test_non_numeric_id_returns_json_bad_request() -> Result<()> {
    let server = MockServer::start_async().await;
    let app = app(server.url("/blacklist"), true).await?;

    for method in ["GET", "DELETE"] {
        let (status, body) = send(&app, method, "/addresses/abc", None).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
    }

    let (status, body) = send(&app, "PUT", "/addresses/abc", Some(address("1", "NR1 1AA"))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");

    Ok(())
}

#[tokio::test]
async fn test_store_failure_returns_internal_error() -> Result<()> {
    let blacklist = Arc::new(StalledBlacklist {
        delay: Duration::ZERO,
        calls: AtomicU32::new(0),
    });
    let filter = FilterPolicy::new(false, blacklist, RetryPolicy::default());
    let directory = AddressDirectory::new(Arc::new(UnavailableStore), filter);
    let app = router(Arc::new(directory), REQUEST_TIMEOUT);

    let requests = [
        ("GET", "/addresses", None),
        ("GET", "/addresses?postcode=NR1%201AA", None),
        ("GET", "/addresses/1", None),
        ("POST", "/addresses", Some(address("1", "NR1 1AA"))),
        ("PUT", "/addresses/1", Some(address("1", "NR1 1AA"))),
        ("DELETE", "/addresses/1", None),
    ];
    for (method, uri, body) in requests {
        let (status, body) = send(&app, method, uri, body).await?;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{} {}", method, uri);
        assert_eq!(body["error"], "internal_error");
        assert_eq!(body["message"], "Address store is unavailable");
    }

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_stalled_blacklist_within_budget_still_serves_reads() -> Result<()> {
    // 3 x 8s + 2 x 1s = 26s，小於 30s 請求逾時
    let blacklist = Arc::new(StalledBlacklist {
        delay: Duration::from_secs(8),
        calls: AtomicU32::new(0),
    });
    let store = Arc::new(InMemoryAddressStore::new());
    store
        .insert(AddressPayload {
            building: "1".to_string(),
            street: "Church Lane".to_string(),
            town: "Norwich".to_string(),
            postcode: "AB1".to_string(),
        })
        .await?;
    let filter = FilterPolicy::new(true, blacklist.clone(), RetryPolicy::default());
    let directory = AddressDirectory::new(store, filter);
    let app = router(Arc::new(directory), REQUEST_TIMEOUT);

    let (status, body) = send(&app, "GET", "/addresses?postcode=AB1", None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(blacklist.calls.load(Ordering::SeqCst), 3);
    Ok(())
}
