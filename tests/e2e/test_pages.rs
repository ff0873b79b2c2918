use crate::helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_navigation_links(ctx: &TestContext) {
    let response = ctx.client.get("/api/pages").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    let slugs: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["about", "contact"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_serve_the_about_page(ctx: &TestContext) {
    let response = ctx.client.get("/api/pages/about").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["title"], "About TOM.BLOG");
    assert!(!body["body"].as_array().unwrap().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_not_found_for_an_unknown_page(ctx: &TestContext) {
    let response = ctx.client.get("/api/pages/pricing").await.unwrap();

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_error_message("not found");
}
