use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Base path of the WordPress-style content routes.
pub const CONTENT_PREFIX: &str = "/wp-json/wp/v2";
/// Base path of the generic backend/auxiliary routes.
pub const API_PREFIX: &str = "/api";

pub const SEEDED_POSTS: u64 = 12;
pub const SEEDED_PAGES: u64 = 3;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Rendered {
    pub rendered: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: u64,
    pub date: String,
    pub slug: String,
    pub status: String,
    pub link: String,
    pub title: Rendered,
    pub content: Rendered,
    pub excerpt: Rendered,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Page {
    pub id: u64,
    pub date: String,
    pub slug: String,
    pub status: String,
    pub link: String,
    pub title: Rendered,
    pub content: Rendered,
    pub parent: u64,
    pub menu_order: i64,
}

#[derive(Deserialize)]
pub struct ListParams {
    pub per_page: Option<i64>,
}

#[derive(Default)]
pub struct Store {
    pub posts: Vec<Post>,
    pub pages: Vec<Page>,
    pub collections: HashMap<String, Vec<Value>>,
}

pub type Db = Arc<RwLock<Store>>;

type ApiResult = Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)>;

fn rendered(text: String) -> Rendered {
    Rendered { rendered: text }
}

pub fn seed() -> Store {
    let posts = (1..=SEEDED_POSTS)
        .map(|id| Post {
            id,
            date: format!("2024-01-{id:02}T09:00:00"),
            slug: format!("post-{id}"),
            status: "publish".to_string(),
            link: format!("http://localhost:8000/post-{id}/"),
            title: rendered(format!("Post {id}")),
            content: rendered(format!("<p>Body of post {id}.</p>")),
            excerpt: rendered(format!("<p>Post {id}</p>")),
        })
        .collect();
    let pages = ["home", "about", "contact"]
        .iter()
        .zip(1..=SEEDED_PAGES)
        .map(|(slug, id)| Page {
            id,
            date: "2024-01-01T00:00:00".to_string(),
            slug: slug.to_string(),
            status: "publish".to_string(),
            link: format!("http://localhost:8000/{slug}/"),
            title: rendered(slug.to_string()),
            content: rendered(format!("<p>{slug}</p>")),
            parent: 0,
            menu_order: id as i64,
        })
        .collect();
    Store {
        posts,
        pages,
        collections: HashMap::new(),
    }
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(seed()));
    let content = Router::new()
        .route("/posts", get(list_posts))
        .route("/posts/{id}", get(get_post))
        .route("/pages", get(list_pages))
        .route("/pages/{id}", get(get_page));
    let api = Router::new()
        .route("/{collection}", get(list_records).post(create_record))
        .route(
            "/{collection}/{id}",
            get(get_record).put(update_record).delete(delete_record),
        );
    Router::new()
        .nest(CONTENT_PREFIX, content)
        .nest(API_PREFIX, api)
        .route("/_debug/headers", get(echo_headers))
        .route("/_debug/status/{code}", get(respond_with_status))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn wp_error(status: StatusCode, code: &str, message: &str) -> (StatusCode, Json<Value>) {
    (
        status,
        Json(json!({"code": code, "message": message, "data": {"status": status.as_u16()}})),
    )
}

/// WordPress accepts `per_page` in 1..=100 and defaults to 10.
fn per_page(params: &ListParams) -> Result<usize, (StatusCode, Json<Value>)> {
    match params.per_page {
        None => Ok(10),
        Some(n @ 1..=100) => Ok(n as usize),
        Some(_) => Err(wp_error(
            StatusCode::BAD_REQUEST,
            "rest_invalid_param",
            "Invalid parameter(s): per_page",
        )),
    }
}

async fn list_posts(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Post>>, (StatusCode, Json<Value>)> {
    let limit = per_page(&params)?;
    let store = db.read().await;
    Ok(Json(store.posts.iter().take(limit).cloned().collect()))
}

async fn get_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Post>, (StatusCode, Json<Value>)> {
    let store = db.read().await;
    store
        .posts
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| wp_error(StatusCode::NOT_FOUND, "rest_post_invalid_id", "Invalid post ID."))
}

async fn list_pages(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Page>>, (StatusCode, Json<Value>)> {
    let limit = per_page(&params)?;
    let store = db.read().await;
    Ok(Json(store.pages.iter().take(limit).cloned().collect()))
}

async fn get_page(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Page>, (StatusCode, Json<Value>)> {
    let store = db.read().await;
    store
        .pages
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| wp_error(StatusCode::NOT_FOUND, "rest_post_invalid_id", "Invalid page ID."))
}

fn not_found(collection: &str, id: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": format!("{collection}/{id} not found")})),
    )
}

fn record_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

async fn list_records(State(db): State<Db>, Path(collection): Path<String>) -> Json<Vec<Value>> {
    let store = db.read().await;
    Json(store.collections.get(&collection).cloned().unwrap_or_default())
}

async fn create_record(
    State(db): State<Db>,
    Path(collection): Path<String>,
    Json(input): Json<Value>,
) -> ApiResult {
    let Value::Object(mut fields) = input else {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": "expected a JSON object"})),
        ));
    };
    fields.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
    let record = Value::Object(fields);
    db.write()
        .await
        .collections
        .entry(collection)
        .or_default()
        .push(record.clone());
    Ok((StatusCode::CREATED, Json(record)))
}

async fn get_record(
    State(db): State<Db>,
    Path((collection, id)): Path<(String, String)>,
) -> ApiResult {
    let store = db.read().await;
    store
        .collections
        .get(&collection)
        .and_then(|records| records.iter().find(|r| record_id(r) == Some(id.as_str())))
        .cloned()
        .map(|record| (StatusCode::OK, Json(record)))
        .ok_or_else(|| not_found(&collection, &id))
}

async fn update_record(
    State(db): State<Db>,
    Path((collection, id)): Path<(String, String)>,
    Json(input): Json<Map<String, Value>>,
) -> ApiResult {
    let mut store = db.write().await;
    let record = store
        .collections
        .get_mut(&collection)
        .and_then(|records| records.iter_mut().find(|r| record_id(r) == Some(id.as_str())))
        .ok_or_else(|| not_found(&collection, &id))?;
    if let Value::Object(fields) = record {
        for (key, value) in input {
            if key != "id" {
                fields.insert(key, value);
            }
        }
    }
    Ok((StatusCode::OK, Json(record.clone())))
}

async fn delete_record(
    State(db): State<Db>,
    Path((collection, id)): Path<(String, String)>,
) -> ApiResult {
    let mut store = db.write().await;
    let records = store
        .collections
        .get_mut(&collection)
        .ok_or_else(|| not_found(&collection, &id))?;
    let index = records
        .iter()
        .position(|r| record_id(r) == Some(id.as_str()))
        .ok_or_else(|| not_found(&collection, &id))?;
    Ok((StatusCode::OK, Json(records.remove(index))))
}

async fn echo_headers(headers: HeaderMap) -> Json<Map<String, Value>> {
    let echoed = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), Value::String(v.to_string())))
        })
        .collect();
    Json(echoed)
}

/// Only final statuses (200..=599) are answered; anything else is a 400.
async fn respond_with_status(Path(code): Path<u16>) -> Result<(StatusCode, Json<Value>), StatusCode> {
    if !(200..=599).contains(&code) {
        return Err(StatusCode::BAD_REQUEST);
    }
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok((status, Json(json!({"status": code}))))
}
