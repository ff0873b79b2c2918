use crate::helpers::TestContext;
use hyper::StatusCode;
use serde_json::Value;
use test_context::test_context;

fn result_slugs(body: &Value) -> Vec<String> {
    body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap().to_string())
        .collect()
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_match_case_insensitively(ctx: &TestContext) {
    let upper = ctx.client.get("/api/search?query=TECH").await.unwrap();
    let lower = ctx.client.get("/api/search?query=tech").await.unwrap();

    upper.assert_status(StatusCode::OK);
    lower.assert_status(StatusCode::OK);

    assert_eq!(
        result_slugs(upper.body.as_ref().unwrap()),
        result_slugs(lower.body.as_ref().unwrap())
    );
    assert_eq!(upper.body.as_ref().unwrap()["pagination"]["total"], 3);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_search_across_content_and_description(ctx: &TestContext) {
    // "tokio" only appears in a post body
    let response = ctx.client.get("/api/search?query=tokio").await.unwrap();
    assert_eq!(
        result_slugs(response.body.as_ref().unwrap()),
        vec!["async-patterns"]
    );

    // "quieter" only appears in a description
    let response = ctx.client.get("/api/search?query=quieter").await.unwrap();
    assert_eq!(
        result_slugs(response.body.as_ref().unwrap()),
        vec!["slow-living"]
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_everything_for_an_empty_query(ctx: &TestContext) {
    let response = ctx.client.get("/api/search").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["pagination"]["total"], 5);
    assert_eq!(body["results"].as_array().unwrap().len(), 3);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_paginate_search_results(ctx: &TestContext) {
    let response = ctx.client.get("/api/search?page=2").await.unwrap();

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["pagination"]["page"], 2);
    assert_eq!(result_slugs(body), vec!["slow-living", "legacy-import"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_echo_the_trimmed_query(ctx: &TestContext) {
    let response = ctx
        .client
        .get("/api/search?query=%20rust%20")
        .await
        .unwrap();

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["query"], "rust");
    assert_eq!(result_slugs(body), vec!["rust-intro"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_find_nothing_for_an_unmatched_query(ctx: &TestContext) {
    let response = ctx
        .client
        .get("/api/search?query=kubernetes")
        .await
        .unwrap();

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["pagination"]["total"], 0);
    assert_eq!(body["pagination"]["page_count"], 1);
    assert!(body["results"].as_array().unwrap().is_empty());
}
