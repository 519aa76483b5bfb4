//! Shared helpers for the HTTP-stubbed integration tests.

#![allow(dead_code, unused_imports)]

use std::sync::Once;

use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

use lightdash_rs::{ClientConfig, LightdashClient};

pub use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
pub use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "abc123";

static INIT: Once = Once::new();

/// Initialize logging for tests
pub fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Client pointed at the stub server.
pub fn client_for(server: &MockServer) -> LightdashClient {
    init_logging();
    LightdashClient::new(ClientConfig::new(server.uri(), TOKEN).expect("valid config"))
        .expect("client builds")
}

/// Wrap `results` in the Lightdash response envelope.
pub fn ok(results: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"status": "ok", "results": results}))
}

pub fn member(id: &str) -> Value {
    json!({
        "userUuid": id,
        "userCreatedAt": "2024-01-02T03:04:05.000Z",
        "userUpdatedAt": "2024-01-02T03:04:05.000Z",
        "firstName": "First",
        "lastName": id,
        "organizationUuid": "o1",
        "role": "editor",
        "isActive": true,
        "isPending": false,
        "email": format!("{id}@example.com")
    })
}

pub fn group(id: &str) -> Value {
    json!({
        "uuid": id,
        "name": format!("Group {id}"),
        "organizationUuid": "o1",
        "createdAt": "2024-05-01T00:00:00.000Z"
    })
}

/// One page of a paginated listing.
pub fn page(data: Vec<Value>, page: u32, page_size: u32, total_results: u64) -> Value {
    let total_page_count = total_results.div_ceil(u64::from(page_size)) as u32;
    json!({
        "data": data,
        "pagination": {
            "page": page,
            "pageSize": page_size,
            "totalResults": total_results,
            "totalPageCount": total_page_count
        }
    })
}
