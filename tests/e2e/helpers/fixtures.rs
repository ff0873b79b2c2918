use once_cell::sync::Lazy;
use serde_json::{json, Value};

// Deliberately unsorted: the application orders by recency itself.
// `legacy-import` carries a malformed timestamp and must sort last.
static POSTS: Lazy<Vec<Value>> = Lazy::new(|| {
    vec![
        json!({
            "id": 2,
            "documentId": "doc-go",
            "title": "Go basics",
            "slug": "go-basics",
            "description": "Goroutines and channels",
            "content": "Concurrency with goroutines.",
            "createdAt": "2024-01-01T08:00:00.000Z",
            "cover": { "url": "/uploads/go.jpg" },
            "category": [ { "name": "Tech", "slug": "tech" } ]
        }),
        json!({
            "id": 1,
            "documentId": "doc-rust",
            "title": "Rust intro",
            "slug": "rust-intro",
            "description": "A gentle tour of ownership",
            "content": "# Getting started\n\nRust is **fast**.",
            "createdAt": "2024-01-15T09:30:00.000Z",
            "updatedAt": "2024-02-01T10:00:00.000Z",
            "cover": { "url": "https://cdn.example.com/rust.jpg" },
            "category": [ { "name": "Tech", "slug": "tech" } ],
            "author": { "name": "Tom", "email": "tom@example.com" }
        }),
        json!({
            "id": 3,
            "documentId": "doc-async",
            "title": "Async patterns",
            "slug": "async-patterns",
            "description": "Futures in practice",
            "content": "Working with the tokio runtime.",
            "createdAt": "2023-12-10T12:00:00.000Z",
            "category": [ { "name": "Tech", "slug": "tech" } ]
        }),
        json!({
            "id": 4,
            "documentId": "doc-slow",
            "title": "Slow living notes",
            "slug": "slow-living",
            "description": "A quieter pace",
            "content": "Less hustle, more writing.",
            "createdAt": "2023-11-05T18:30:00.000Z",
            "category": [ { "name": "Life", "slug": "life" } ]
        }),
        json!({
            "id": 5,
            "documentId": "doc-legacy",
            "title": "Imported from the old blog",
            "slug": "legacy-import",
            "description": "Archive",
            "content": "Imported archive post.",
            "createdAt": "not-a-date",
            "category": [ { "name": "Life", "slug": "life" } ]
        }),
    ]
});

static CATEGORIES: Lazy<Vec<Value>> = Lazy::new(|| {
    vec![
        json!({ "id": 1, "name": "Tech", "slug": "tech", "description": "All things code" }),
        json!({ "id": 2, "name": "Life", "slug": "life", "description": null }),
    ]
});

pub fn posts_json() -> Vec<Value> {
    POSTS.clone()
}

pub fn categories_json() -> Vec<Value> {
    CATEGORIES.clone()
}

/// Slugs of every fixture post, in the recency order the API must serve.
pub fn slugs_by_recency() -> Vec<&'static str> {
    vec![
        "rust-intro",
        "go-basics",
        "async-patterns",
        "slow-living",
        "legacy-import",
    ]
}
