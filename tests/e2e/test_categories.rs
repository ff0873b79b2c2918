use crate::helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_all_categories(ctx: &TestContext) {
    let response = ctx.client.get("/api/categories").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Tech", "Life"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_a_category_with_its_posts(ctx: &TestContext) {
    let response = ctx.client.get("/api/categories/life").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["category"]["name"], "Life");

    let slugs: Vec<&str> = body["posts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["slow-living", "legacy-import"]);
    assert_eq!(body["pagination"]["total"], 2);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_not_found_for_an_unknown_category(ctx: &TestContext) {
    let response = ctx.client.get("/api/categories/cooking").await.unwrap();

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_error_message("not found");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_clamp_category_pages(ctx: &TestContext) {
    let response = ctx.client.get("/api/categories/tech?page=9").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    // all three tech posts fit on one page
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["posts"].as_array().unwrap().len(), 3);
}
