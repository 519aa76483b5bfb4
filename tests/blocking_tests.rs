//! Integration tests for the blocking API.
//!
//! The stub server lives on its own multi-threaded runtime; the client is
//! driven from the plain test thread, the way a synchronous caller uses it.

mod common;

use std::sync::Arc;
use std::thread;

use serde_json::json;
use tokio::runtime::Runtime;

use common::*;
use lightdash_rs::api::{
    GetProject, ListGroupsParams, ListMembersParams, ListOrganizationMembers,
    ListOrganizationProjects,
};
use lightdash_rs::ProjectUuid;

fn server_runtime() -> Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("runtime builds")
}

#[test]
fn test_call_matches_acall() {
    let rt = server_runtime();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/api/v1/org/projects"))
            .and(header("Authorization", "ApiKey abc123"))
            .respond_with(ok(json!([
                {"projectUuid": "p1", "name": "P1", "type": "DEFAULT", "organizationUuid": "o1"},
                {"projectUuid": "p2", "name": "P2", "type": "PREVIEW"}
            ])))
            .expect(2)
            .mount(&server),
    );

    let client = client_for(&server);
    let caller = client.caller::<ListOrganizationProjects>();

    let blocking = caller.call(&()).expect("blocking call succeeds");
    let asynchronous = rt.block_on(caller.acall(&())).expect("async call succeeds");

    assert_eq!(blocking, asynchronous);
    assert_eq!(blocking[1].project_uuid, "p2");
}

#[test]
fn test_blocking_members_drain() {
    let rt = server_runtime();
    let server = rt.block_on(MockServer::start());

    rt.block_on(async {
        Mock::given(method("GET"))
            .and(path("/api/v1/org/users"))
            .and(query_param("page", "1"))
            .and(query_param("pageSize", "100"))
            .respond_with(ok(page(vec![member("u1"), member("u2")], 1, 100, 102)))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v1/org/users"))
            .and(query_param("page", "2"))
            .and(query_param("pageSize", "100"))
            .respond_with(ok(page(vec![member("u3")], 2, 100, 102)))
            .expect(1)
            .mount(&server)
            .await;
    });

    let client = client_for(&server);
    let members = client
        .organization()
        .all_members_blocking(None)
        .expect("drain succeeds");

    let ids: Vec<&str> = members.iter().map(|m| m.user_uuid.as_str()).collect();
    assert_eq!(ids, vec!["u1", "u2", "u3"]);
}

#[test]
fn test_blocking_drain_error_discards_items() {
    let rt = server_runtime();
    let server = rt.block_on(MockServer::start());

    rt.block_on(async {
        Mock::given(method("GET"))
            .and(path("/api/v1/org/groups"))
            .and(query_param("page", "1"))
            .respond_with(ok(page(vec![group("g1")], 1, 1, 3)))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v1/org/groups"))
            .and(query_param("page", "2"))
            .respond_with(ok(json!({"data": [{"name": "missing uuid"}]})))
            .mount(&server)
            .await;
    });

    let client = client_for(&server);
    let err = client
        .organization()
        .all_groups_blocking(ListGroupsParams::default().page_size(1))
        .expect_err("page 2 is malformed");

    assert!(err.is_invalid_response());
}

#[test]
fn test_blocking_single_page() {
    let rt = server_runtime();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/api/v1/org/users"))
            .and(query_param("page", "2"))
            .and(query_param("pageSize", "10"))
            .respond_with(ok(page(vec![member("u11")], 2, 10, 11)))
            .expect(1)
            .mount(&server),
    );

    let client = client_for(&server);
    let params = ListMembersParams {
        page: Some(2),
        ..ListMembersParams::default().page_size(10)
    };
    let page = client
        .caller::<ListOrganizationMembers>()
        .call(&params)
        .unwrap();

    assert_eq!(page.data.len(), 1);
    assert!(page.pagination.unwrap().is_last_page());
}

#[test]
fn test_blocking_calls_from_many_threads() {
    let rt = server_runtime();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/api/v1/projects/p1"))
            .respond_with(ok(json!({"projectUuid": "p1", "organizationUuid": "o1", "name": "P1"})))
            .expect(4)
            .mount(&server),
    );

    let client = Arc::new(client_for(&server));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let client = client.clone();
            thread::spawn(move || {
                client
                    .caller::<GetProject>()
                    .call(&ProjectUuid::new("p1"))
                    .map(|p| p.name)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), "P1");
    }
}

#[test]
fn test_blocking_transport_error() {
    init_logging();
    let client = lightdash_rs::LightdashClient::from_token("http://127.0.0.1:9", TOKEN).unwrap();

    let err = client
        .caller::<ListOrganizationProjects>()
        .call(&())
        .unwrap_err();

    assert!(err.is_transport());
    assert!(!err.to_string().contains(TOKEN));
}
