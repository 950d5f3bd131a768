use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use super::*;

fn options() -> LeptosOptions {
    LeptosOptions::builder().output_name("eldercare").build()
}

#[tokio::test]
async fn healthz_is_served_through_the_full_stack() {
    let response = router(options())
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn cors_layer_answers_cross_origin_requests() {
    let response = router(options())
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .header(header::ORIGIN, "http://localhost:8080")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
}
