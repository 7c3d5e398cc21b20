use axum::{
    routing::{get, post},
    Router,
};
use contracts::contact::CONTACT_PATH;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

use crate::{handlers, AppState};

/// Конфигурация всех роутов приложения
///
/// Всё, что не API и не найдено в `static_dir`, отдаётся как `index.html`:
/// маршрутизация страниц происходит на клиенте.
pub fn configure_routes(state: AppState, static_dir: &Path) -> Router {
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(CONTACT_PATH, post(handlers::contact::submit))
        .with_state(state)
        .fallback_service(spa)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::EmailConfig;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn unconfigured_state() -> AppState {
        AppState {
            email: Arc::new(EmailConfig::default()),
            mailer: None,
        }
    }

    fn static_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "agency-site-{}-{}",
            name,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html>app</html>").unwrap();
        dir
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = configure_routes(unconfigured_state(), &static_dir("health"));
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "ok");
    }

    #[tokio::test]
    async fn test_malformed_json_is_invalid_payload() {
        let app = configure_routes(unconfigured_state(), &static_dir("malformed"));
        let response = app
            .oneshot(
                Request::post(CONTACT_PATH)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"name": "Jane""#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_string(response).await,
            r#"{"ok":false,"error":"invalid_payload"}"#
        );
    }

    #[tokio::test]
    async fn test_missing_field_is_invalid_payload() {
        let app = configure_routes(unconfigured_state(), &static_dir("missing"));
        let response = app
            .oneshot(
                Request::post(CONTACT_PATH)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"name":"Jane","email":"j@x.com"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_valid_payload_without_provider() {
        let app = configure_routes(unconfigured_state(), &static_dir("unconfigured"));
        let payload = serde_json::json!({
            "name": "Jane Doe",
            "email": "jane@acme.com",
            "subject": "Pricing question",
            "message": "Can you tell me more about your automation pricing tiers please?",
        });
        let response = app
            .oneshot(
                Request::post(CONTACT_PATH)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_string(response).await,
            r#"{"ok":false,"error":"resend_not_configured"}"#
        );
    }

    #[tokio::test]
    async fn test_client_routes_serve_index() {
        let dir = static_dir("spa");
        for path in ["/", "/about", "/services/web-development", "/contact"] {
            let app = configure_routes(unconfigured_state(), &dir);
            let response = app
                .oneshot(Request::get(path).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "path {}", path);
            assert_eq!(body_string(response).await, "<html>app</html>");
        }
    }
}
