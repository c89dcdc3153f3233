//! Throwaway HTTP server standing in for the recommendation API in tests.

use std::collections::HashMap;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A small catalogue shaped like the real service's responses.
pub fn catalogue() -> Router {
    Router::new()
        .route("/books", get(|| async { Json(json!(["Dune", "Foundation"])) }))
        .route("/recommend", get(recommend))
        .route("/stats", get(stats))
}

async fn recommend(Query(params): Query<HashMap<String, String>>) -> Response {
    let Some(title) = params.get("title") else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "A 'title' query parameter is required."})),
        )
            .into_response();
    };

    match title.to_lowercase().as_str() {
        "dune" => Json(json!([
            {
                "book": "Dune Messiah",
                "author": "Frank Herbert",
                "avg_rating": 3.89,
                "num_ratings": 253711,
                "genres": "Science Fiction Fiction",
                "url": "https://example.com/dune-messiah"
            },
            {
                "book": "Hyperion",
                "author": "Dan Simmons",
                "avg_rating": 4.25,
                "num_ratings": 218490,
                "genres": "Science Fiction Space Opera",
                "url": "https://example.com/hyperion"
            }
        ]))
        .into_response(),
        "obscure" => Json(json!([])).into_response(),
        "xyz" => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Book not found"})),
        )
            .into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": format!("Book '{title}' not found in the dataset.")})),
        )
            .into_response(),
    }
}

async fn stats() -> Json<serde_json::Value> {
    Json(json!({
        "top_authors": [
            {"author": "Stephen King", "ratings": 15334283},
            {"author": "A", "ratings": 1000}
        ],
        "top_genres": [
            {"genre": "Fiction", "count": 812},
            {"genre": "Fantasy", "count": 433}
        ],
        "rating_distribution": {"ratings": [3.5, 4.0, 4.5], "counts": [12, 48, 20]}
    }))
}
