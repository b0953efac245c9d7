pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::answer::handlers as answer_handlers;
use crate::extract::handlers as extract_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/health", get(health::api_health_handler))
        .route("/api/parse-cv", post(extract_handlers::handle_parse_cv))
        .route("/api/parse-text", post(extract_handlers::handle_parse_text))
        .route("/api/ask-cv-question", post(answer_handlers::handle_ask))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    const SAMPLE_CV: &str = "Jane Doe\njane.doe@example.com\n(555) 123-4567\n";

    fn test_router() -> Router {
        let config = Config {
            port: 3001,
            rust_log: "info".to_string(),
            max_upload_bytes: 1024 * 1024,
        };
        build_router(AppState::new(config))
    }

    async fn body_json(body: Body) -> Value {
        let bytes = to_bytes(body, usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_post(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let router = test_router();
        let response = router
            .clone()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response.into_body()).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["services"]["cvParser"], "available");
    }

    #[tokio::test]
    async fn test_ask_before_parse_is_conflict() {
        let response = test_router()
            .oneshot(json_post(
                "/api/ask-cv-question",
                serde_json::json!({ "question": "What are my skills?" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let json = body_json(response.into_body()).await;
        assert_eq!(json["error"]["code"], "NO_PROFILE");
    }

    #[tokio::test]
    async fn test_parse_text_then_ask() {
        let router = test_router();

        let response = router
            .clone()
            .oneshot(json_post(
                "/api/parse-text",
                serde_json::json!({ "raw_text": SAMPLE_CV }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response.into_body()).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["name"], "Jane Doe");
        assert_eq!(json["data"]["email"], "jane.doe@example.com");

        let response = router
            .oneshot(json_post(
                "/api/ask-cv-question",
                serde_json::json!({ "question": "What is my contact info?" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response.into_body()).await;
        assert_eq!(
            json["answer"],
            "Your contact information: Email: jane.doe@example.com, Phone: (555) 123-4567"
        );
    }

    #[tokio::test]
    async fn test_parse_cv_multipart_txt_upload() {
        let boundary = "cv-test-boundary";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"cv\"; filename=\"resume.txt\"\r\n\
             Content-Type: text/plain\r\n\r\n\
             {SAMPLE_CV}\r\n\
             --{boundary}--\r\n"
        );

        let request = Request::builder()
            .method("POST")
            .uri("/api/parse-cv")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response.into_body()).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["name"], "Jane Doe");
    }

    #[tokio::test]
    async fn test_parse_cv_unsupported_extension() {
        let boundary = "cv-test-boundary";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"cv\"; filename=\"resume.docx\"\r\n\r\n\
             irrelevant\r\n\
             --{boundary}--\r\n"
        );

        let request = Request::builder()
            .method("POST")
            .uri("/api/parse-cv")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_parse_cv_without_file_field() {
        let boundary = "cv-test-boundary";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"other\"\r\n\r\n\
             text\r\n\
             --{boundary}--\r\n"
        );

        let request = Request::builder()
            .method("POST")
            .uri("/api/parse-cv")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_empty_question_is_rejected() {
        let response = test_router()
            .oneshot(json_post(
                "/api/ask-cv-question",
                serde_json::json!({ "question": "   " }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
