use crate::error::RedactedErrorBody;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

/// Strips `details` and `error_type` from error bodies when running in production.
/// The state is the loaded config's `is_production()` flag.
pub async fn error_details_middleware(
    State(is_production): State<bool>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if !is_production {
        return response;
    }

    let Some(RedactedErrorBody(body)) = response.extensions().get::<RedactedErrorBody>().cloned()
    else {
        return response;
    };

    let (parts, _) = response.into_parts();
    Response::from_parts(parts, Json(body).into_response().into_body())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HttpAppError;
    use axum::{http::StatusCode, routing::get, Router};
    use axum_test::TestServer;
    use melodia_core::AppError;

    async fn missing_song() -> Result<(), HttpAppError> {
        Err(AppError::NotFound("Song 42 not found".to_string()).into())
    }

    fn server(is_production: bool) -> TestServer {
        let router = Router::new()
            .route("/songs/42", get(missing_song))
            .route("/ok", get(|| async { "fine" }))
            .layer(axum::middleware::from_fn_with_state(
                is_production,
                error_details_middleware,
            ));
        TestServer::new(router).unwrap()
    }

    #[tokio::test]
    async fn test_details_kept_outside_production() {
        let response = server(false).get("/songs/42").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["code"], "NOT_FOUND");
        assert!(body["details"].as_str().unwrap().contains("Song 42"));
        assert!(body.get("error_type").is_some());
    }

    #[tokio::test]
    async fn test_details_hidden_in_production() {
        let response = server(true).get("/songs/42").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["code"], "NOT_FOUND");
        assert!(body.get("details").is_none());
        assert!(body.get("error_type").is_none());
    }

    #[tokio::test]
    async fn test_success_responses_untouched_in_production() {
        let response = server(true).get("/ok").await;

        response.assert_status_ok();
        assert_eq!(response.text(), "fine");
    }
}
