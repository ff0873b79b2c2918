use crate::helpers::TestContext;
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_relay_a_valid_submission(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/contact",
            &json!({
                "name": "Tom",
                "email": "tom@example.com",
                "message": "Loved the ownership post!"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body.as_ref().unwrap()["status"], "sent");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_an_invalid_email(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/contact",
            &json!({ "name": "Tom", "email": "not-an-email", "message": "hi" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_error_message("Invalid email");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_a_blank_message(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/contact",
            &json!({ "name": "Tom", "email": "tom@example.com", "message": "   " }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_error_message("Message is required");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_surface_relay_failures(ctx: &TestContext) {
    // the stub relay rejects this exact message
    let response = ctx
        .client
        .post(
            "/api/contact",
            &json!({ "name": "Tom", "email": "tom@example.com", "message": "boom" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_error_message("email relay");
}
