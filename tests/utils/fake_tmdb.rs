/// In-process stand-in for the TMDB v3 API.
///
/// Starts an axum server on an ephemeral port and records every request's
/// path and decoded query so tests can assert on what the client sent.
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const MISSING_ID: u64 = 404_404;
pub const BROKEN_ID: u64 = 500_500;
pub const GARBLED_ID: u64 = 777;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct FakeTmdb {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeTmdb {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, path: String, query: HashMap<String, String>) {
        self.requests
            .lock()
            .unwrap()
            .push(RecordedRequest { path, query });
    }
}

/// Bind to port 0 and return the API base URL (`http://addr/3`).
pub async fn start_server() -> (String, FakeTmdb) {
    let fake = FakeTmdb::default();
    let app = Router::new()
        .route("/3/movie/:id", get(movie))
        .route("/3/search/movie", get(search))
        .with_state(fake.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/3"), fake)
}

async fn movie(
    State(fake): State<FakeTmdb>,
    Path(id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    fake.record(format!("/movie/{id}"), query.clone());

    if id == "popular" {
        let page: u32 = query.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
        return Json(popular_page(page)).into_response();
    }

    match id.parse::<u64>() {
        Ok(MISSING_ID) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "status_code": 34,
                "status_message": "The resource you requested could not be found.",
                "success": false
            })),
        )
            .into_response(),
        Ok(BROKEN_ID) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "status_code": 11,
                "status_message": "Internal error: Something went wrong, contact TMDb.",
                "success": false
            })),
        )
            .into_response(),
        Ok(GARBLED_ID) => (StatusCode::OK, "<html>maintenance</html>").into_response(),
        Ok(id) => Json(movie_details(id)).into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn search(
    State(fake): State<FakeTmdb>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    fake.record("/search/movie".to_string(), query.clone());
    let term = query.get("query").cloned().unwrap_or_default();
    Json(json!({
        "page": 1,
        "results": [
            { "id": 11, "title": format!("{term} (1977)"), "poster_path": null, "release_date": "1977-05-25" }
        ],
        "total_pages": 1,
        "total_results": 1
    }))
    .into_response()
}

pub fn popular_page(page: u32) -> Value {
    json!({
        "page": page,
        "results": [
            {
                "id": 27205,
                "title": "Inception",
                "poster_path": "/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg",
                "backdrop_path": "/8ZTVqvKDQ8emSGUEMjsS4yHAwrp.jpg",
                "release_date": "2010-07-15",
                "vote_average": 8.4
            },
            {
                "id": 155,
                "title": "The Dark Knight",
                "poster_path": null,
                "release_date": "2008-07-16"
            }
        ],
        "total_pages": 42,
        "total_results": 834
    })
}

/// Detail payload with the edge cases the derivations care about.
pub fn movie_details(id: u64) -> Value {
    json!({
        "id": id,
        "title": "Inception",
        "tagline": "Your mind is the scene of the crime.",
        "overview": "Cobb, a skilled thief who commits corporate espionage...",
        "release_date": "2010-07-15",
        "runtime": 148,
        "genres": [ { "id": 28, "name": "Action" }, { "id": 878, "name": "Science Fiction" } ],
        "vote_average": 8.369,
        "poster_path": "/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg",
        "backdrop_path": null,
        "credits": {
            "cast": [
                { "name": "Leonardo DiCaprio", "character": "Cobb", "order": 0 },
                { "name": "Joseph Gordon-Levitt", "character": "Arthur", "order": 1 },
                { "name": "Ken Watanabe", "character": "Saito", "order": 2 },
                { "name": "Tom Hardy", "character": "Eames", "order": 3 },
                { "name": "Elliot Page", "character": "Ariadne", "order": 4 },
                { "name": "Dileep Rao", "character": "Yusuf", "order": 5 },
                { "name": "Cillian Murphy", "character": "Robert Fischer", "order": 6 }
            ],
            "crew": [
                { "name": "Emma Thomas", "job": "Producer", "department": "Production" },
                { "name": "Christopher Nolan", "job": "Director", "department": "Directing" }
            ]
        },
        "videos": {
            "results": [
                { "key": "unofficial1", "name": "Fan Trailer", "site": "YouTube", "type": "Trailer", "official": false },
                { "key": "YoHD9XEInc0", "name": "Official Trailer", "site": "YouTube", "type": "Trailer", "official": true }
            ]
        }
    })
}
