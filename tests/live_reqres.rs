//! The scenario catalog against the real demo service.
//!
//! Needs network access, so every test is ignored by default:
//!
//! ```text
//! REQRES_API_KEY=... cargo test --test live_reqres -- --ignored
//! ```

mod common;

use reqres_contract::client::ApiClient;
use reqres_contract::config::HarnessConfig;
use reqres_contract::schema::DirSchemaStore;
use reqres_contract::suite::{reqres_cases, Suite};

async fn run_live(name: &str) {
    let config = HarnessConfig::from_env().expect("valid REQRES_* environment");
    let client = ApiClient::new(&config).expect("client must build");
    let store = DirSchemaStore::new(common::schema_dir());

    let case = reqres_cases()
        .into_iter()
        .find(|c| c.name == name)
        .unwrap_or_else(|| panic!("unknown case {name}"));

    if let Err(e) = case.execute(&client, &store).await {
        panic!("{name} failed ({:?}): {e}", e.kind());
    }
}

#[tokio::test]
#[ignore = "hits the live reqres.in service"]
async fn get_list_of_users() {
    run_live("get_list_of_users").await;
}

#[tokio::test]
#[ignore = "hits the live reqres.in service"]
async fn get_single_user() {
    run_live("get_single_user").await;
}

#[tokio::test]
#[ignore = "hits the live reqres.in service"]
async fn create_user() {
    run_live("create_user").await;
}

#[tokio::test]
#[ignore = "hits the live reqres.in service"]
async fn single_user_not_found() {
    run_live("single_user_not_found").await;
}

#[tokio::test]
#[ignore = "hits the live reqres.in service"]
async fn list_resource() {
    run_live("list_resource").await;
}

#[tokio::test]
#[ignore = "hits the live reqres.in service"]
async fn update_users_by_put() {
    run_live("update_users_by_put").await;
}

#[tokio::test]
#[ignore = "hits the live reqres.in service"]
async fn update_users_by_patch() {
    run_live("update_users_by_patch").await;
}

#[tokio::test]
#[ignore = "hits the live reqres.in service"]
async fn delete_user() {
    run_live("delete_user").await;
}

#[tokio::test]
#[ignore = "hits the live reqres.in service"]
async fn register_successful() {
    run_live("register_successful").await;
}

#[tokio::test]
#[ignore = "hits the live reqres.in service"]
async fn register_unsuccessful() {
    run_live("register_unsuccessful").await;
}

#[tokio::test]
#[ignore = "hits the live reqres.in service"]
async fn get_scenarios_repeat_identically() {
    let config = HarnessConfig::from_env().expect("valid REQRES_* environment");
    let client = ApiClient::new(&config).expect("client must build");
    let suite = Suite::reqres(client, DirSchemaStore::new(common::schema_dir()));

    for name in ["get_list_of_users", "get_single_user", "list_resource"] {
        let first = suite.fetch(name).await.expect("case exists").unwrap();
        let second = suite.fetch(name).await.expect("case exists").unwrap();
        // `support` carries rotating promo text; the dataset lives under `data`.
        assert_eq!(first.field("/data"), second.field("/data"), "{name} data changed between runs");
    }
}
