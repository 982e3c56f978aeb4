//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use openship_app::ports::SkillRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves skills under `/skills`, a `/health` probe, and everything else from
/// `site_root`. Includes a [`TraceLayer`] that logs each HTTP request/response
/// at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<SR>(state: AppState<SR>, site_root: &Path) -> Router
where
    SR: SkillRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/skills/{name}", get(crate::skills::get::<SR>))
        .fallback_service(crate::site::service(site_root))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use openship_app::services::skill_service::SkillService;
    use openship_domain::error::{OpenShipError, StorageError};
    use openship_domain::skill::{Skill, SkillName};
    use tower::ServiceExt;

    const SKILL_BODY: &str = "# Open Ship\n\nShip, measure, learn, iterate.\n";

    struct StubSkillRepo;

    impl SkillRepository for StubSkillRepo {
        async fn get_by_name(&self, name: &SkillName) -> Result<Option<Skill>, OpenShipError> {
            if name.as_str() == "openship1" {
                Ok(Some(Skill {
                    name: name.clone(),
                    markdown: SKILL_BODY.to_string(),
                }))
            } else {
                Ok(None)
            }
        }
    }

    struct BrokenSkillRepo;

    impl SkillRepository for BrokenSkillRepo {
        async fn get_by_name(&self, _name: &SkillName) -> Result<Option<Skill>, OpenShipError> {
            Err(StorageError::Unavailable.into())
        }
    }

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html><body>shell</body></html>").unwrap();
        std::fs::write(dir.path().join("style.css"), "body { margin: 0; }").unwrap();
        dir
    }

    fn app(site: &tempfile::TempDir) -> Router {
        build(AppState::new(SkillService::new(StubSkillRepo)), site.path())
    }

    async fn send_get(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let site = site();
        let response = send_get(app(&site), "/health").await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_serve_skill_as_markdown() {
        let site = site();
        let response = send_get(app(&site), "/skills/openship1").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/markdown; charset=utf-8"
        );
        assert_eq!(body_string(response).await, SKILL_BODY);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_skill() {
        let site = site();
        let response = send_get(app(&site), "/skills/openship9").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_string(response).await.contains("not found"));
    }

    #[tokio::test]
    async fn should_reject_invalid_skill_name() {
        let site = site();
        let response = send_get(app(&site), "/skills/open.ship").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_hide_storage_errors() {
        let site = site();
        let app = build(AppState::new(SkillService::new(BrokenSkillRepo)), site.path());
        let response = send_get(app, "/skills/openship1").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_string(response).await,
            r#"{"error":"internal server error"}"#
        );
    }

    #[tokio::test]
    async fn should_serve_static_asset() {
        let site = site();
        let response = send_get(app(&site), "/style.css").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "body { margin: 0; }");
    }

    #[tokio::test]
    async fn should_fall_back_to_shell_page_for_client_routes() {
        let site = site();
        let response = send_get(app(&site), "/some/client/route").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("shell"));
    }
}
