//! In-process stand-in for the reqres.in demo service.
//!
//! Serves the same fixed dataset the scenario catalog asserts against.
//! Write endpoints use the `Form` extractor, so a JSON-encoded body is
//! rejected with 415 exactly like a form-only backend would.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;

use axum::extract::{Path, Query};
use axum::http::{header, HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get, post};
use axum::{Form, Json, Router};
use reqres_contract::client::ApiClient;
use reqres_contract::config::HarnessConfig;
use serde_json::{json, Value};
use tokio::net::TcpListener;

const USERS: [(u64, &str, &str); 6] = [
    (1, "George", "Bluth"),
    (2, "Janet", "Weaver"),
    (3, "Emma", "Wong"),
    (4, "Eve", "Holt"),
    (5, "Charles", "Morris"),
    (6, "Tracey", "Ramos"),
];

const COLORS: [(u64, &str, u64, &str, &str); 6] = [
    (1, "cerulean", 2000, "#98B2D1", "15-4020"),
    (2, "fuchsia rose", 2001, "#C74375", "17-2031"),
    (3, "true red", 2002, "#BF1932", "19-1664"),
    (4, "aqua sky", 2003, "#7BC4C4", "14-4811"),
    (5, "tigerlily", 2004, "#E2583E", "17-1456"),
    (6, "blue turquoise", 2005, "#53B0AE", "15-5217"),
];

const TIMESTAMP: &str = "2026-01-01T00:00:00.000Z";

pub fn schema_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("schemas")
}

pub fn client_for(base_url: &str) -> ApiClient {
    ApiClient::new(&HarnessConfig::new(base_url)).expect("client must build")
}

/// Bind `router` on an ephemeral local port and serve it in the background.
/// Returns the base URL.
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}")
}

pub async fn spawn_reqres() -> String {
    spawn(reqres_router()).await
}

pub fn reqres_router() -> Router {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/:id",
            get(single_user)
                .put(update_user)
                .patch(update_user)
                .delete(delete_user),
        )
        .route("/api/unknown", get(list_resource))
        .route("/api/register", post(register))
}

/// Reflects method, query, content type and raw body for any verb.
pub fn echo_router() -> Router {
    Router::new().route("/echo", any(echo))
}

async fn echo(
    method: Method,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: String,
) -> Json<Value> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    Json(json!({
        "method": method.as_str(),
        "query": query,
        "content_type": content_type,
        "body": body,
    }))
}

fn support() -> Value {
    json!({
        "url": "https://contentcaddy.io?utm_source=reqres&utm_medium=json&utm_campaign=referral",
        "text": "Tired of writing endless social media content? Let Content Caddy generate it for you."
    })
}

fn user_json((id, first, last): (u64, &str, &str)) -> Value {
    json!({
        "id": id,
        "email": format!("{}.{}@reqres.in", first.to_lowercase(), last.to_lowercase()),
        "first_name": first,
        "last_name": last,
        "avatar": format!("https://reqres.in/img/faces/{id}-image.jpg"),
    })
}

fn color_json((id, name, year, color, pantone): (u64, &str, u64, &str, &str)) -> Value {
    json!({
        "id": id,
        "name": name,
        "year": year,
        "color": color,
        "pantone_value": pantone,
    })
}

fn paginate(params: &HashMap<String, String>, items: Vec<Value>) -> Value {
    let page = params
        .get("page")
        .and_then(|p| p.parse::<usize>().ok())
        .filter(|p| *p > 0)
        .unwrap_or(1);
    let per_page = params
        .get("per_page")
        .and_then(|p| p.parse::<usize>().ok())
        .filter(|p| *p > 0)
        .unwrap_or(6);
    let total = items.len();
    let data: Vec<Value> = items.into_iter().skip((page - 1) * per_page).take(per_page).collect();
    json!({
        "page": page,
        "per_page": per_page,
        "total": total,
        "total_pages": total.div_ceil(per_page),
        "data": data,
        "support": support(),
    })
}

async fn list_users(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    Json(paginate(&params, USERS.iter().copied().map(user_json).collect()))
}

async fn list_resource(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    Json(paginate(&params, COLORS.iter().copied().map(color_json).collect()))
}

async fn single_user(Path(id): Path<u64>) -> Response {
    match USERS.iter().copied().find(|u| u.0 == id) {
        Some(user) => Json(json!({ "data": user_json(user), "support": support() })).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({}))).into_response(),
    }
}

async fn create_user(Form(form): Form<HashMap<String, String>>) -> Response {
    let mut body = json!(form);
    body["id"] = json!("871");
    body["createdAt"] = json!(TIMESTAMP);
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn update_user(Path(_id): Path<u64>, Form(form): Form<HashMap<String, String>>) -> Json<Value> {
    let mut body = json!(form);
    body["updatedAt"] = json!(TIMESTAMP);
    Json(body)
}

async fn delete_user(Path(_id): Path<u64>) -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn register(Form(form): Form<HashMap<String, String>>) -> Response {
    let email = form.get("email").filter(|e| !e.is_empty());
    let password = form.get("password").filter(|p| !p.is_empty());
    match (email, password) {
        (None, _) => bad_request("Missing email or username"),
        (Some(_), None) => bad_request("Missing password"),
        (Some(email), Some(_)) => {
            let user = USERS
                .iter()
                .copied()
                .map(user_json)
                .find(|u| u["email"] == email.as_str());
            match user {
                Some(user) => {
                    Json(json!({ "id": user["id"], "token": "QpwL5tke4Pnpja7X4" })).into_response()
                }
                None => bad_request("Note: Only defined users succeed registration"),
            }
        }
    }
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}
