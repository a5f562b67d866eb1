use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{
        contributions::{create_contribution, MAX_WEBHOOK_PAYLOAD_BYTES},
        health::health_check,
        kudos::list_kudos,
        preflight::global_options,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// There is no request timeout layer: dropping the handler future would
/// cancel an in-flight store write.
pub fn create_app(state: AppState) -> Router {
    let api_routes = Router::new()
        // Webhooks endpoint
        .route(
            "/contribution/gh",
            post(create_contribution).layer(DefaultBodyLimit::max(MAX_WEBHOOK_PAYLOAD_BYTES)),
        )
        .route("/kudos/{user}", get(list_kudos));

    Router::new()
        .route("/", get(health_check))
        .nest("/api", api_routes)
        .layer(middleware::from_fn(global_options))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use ecskudos_core::kudos::{ContributionType, Kudo};
    use ecskudos_core::storage::{KudoRepository, Result as StoreResult, StoreError};
    use ecskudos_core::webhook::sign_payload;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::storage::InMemoryRepository;

    const SECRET: &str = "s3cr3t";

    const PR_OPENED: &str = r#"{
        "action": "opened",
        "number": 5,
        "pull_request": {
            "url": "https://api.github.com/repos/acme/widgets/pulls/5",
            "title": "Fix bug",
            "user": {"login": "alice"},
            "created_at": 1700000000
        }
    }"#;

    const ISSUE_OPENED: &str = r#"{
        "action": "opened",
        "issue": {
            "url": "https://api.github.com/repos/acme/widgets/issues/9",
            "title": "Crash on start",
            "user": {"login": "alice"},
            "created_at": "2023-11-15T00:00:00Z"
        }
    }"#;

    /// Repository wrapper that counts calls, to prove the store was never hit.
    #[derive(Default)]
    struct CountingRepository {
        inner: InMemoryRepository,
        creates: AtomicUsize,
        lists: AtomicUsize,
    }

    #[async_trait]
    impl KudoRepository for CountingRepository {
        async fn create_kudo(&self, kudo: &Kudo) -> StoreResult<()> {
            self.creates.fetch_add(1, Ordering::SeqCst);
            self.inner.create_kudo(kudo).await
        }

        async fn list_kudos_by_user(&self, user: &str) -> StoreResult<Vec<Kudo>> {
            self.lists.fetch_add(1, Ordering::SeqCst);
            self.inner.list_kudos_by_user(user).await
        }
    }

    /// Repository that takes a while to answer writes.
    #[derive(Default)]
    struct SlowRepository {
        inner: CountingRepository,
    }

    #[async_trait]
    impl KudoRepository for SlowRepository {
        async fn create_kudo(&self, kudo: &Kudo) -> StoreResult<()> {
            tokio::time::sleep(Duration::from_millis(300)).await;
            self.inner.create_kudo(kudo).await
        }

        async fn list_kudos_by_user(&self, user: &str) -> StoreResult<Vec<Kudo>> {
            self.inner.list_kudos_by_user(user).await
        }
    }

    /// Repository whose every call fails.
    struct FailingRepository;

    #[async_trait]
    impl KudoRepository for FailingRepository {
        async fn create_kudo(&self, _kudo: &Kudo) -> StoreResult<()> {
            Err(StoreError::QueryFailed("Table not found".to_string()))
        }

        async fn list_kudos_by_user(&self, _user: &str) -> StoreResult<Vec<Kudo>> {
            Err(StoreError::ConnectionFailed("no route to host".to_string()))
        }
    }

    fn app_with(repo: Arc<dyn KudoRepository>) -> Router {
        create_app(AppState::build(repo, SECRET))
    }

    fn counting_app() -> (Router, Arc<CountingRepository>) {
        let repo = Arc::new(CountingRepository::default());
        (app_with(repo.clone()), repo)
    }

    fn webhook(event: &str, body: &str) -> Request<Body> {
        let signature = sign_payload(body.as_bytes(), SECRET.as_bytes()).unwrap();
        webhook_with_signature(event, body, &signature)
    }

    fn webhook_with_signature(event: &str, body: &str, signature: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/contribution/gh")
            .header("Content-Type", "application/json")
            .header("X-GitHub-Event", event)
            .header("X-GitHub-Delivery", "72d3162e-cc78-11e3-81ab-4c9367dc0958")
            .header("X-Hub-Signature-256", signature)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_string(response: Response) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    async fn list_for(app: &Router, user: &str) -> Vec<Kudo> {
        let response = app
            .clone()
            .oneshot(get_request(&format!("/api/kudos/{user}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        serde_json::from_str(&body_string(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let (app, _) = counting_app();

        let response = app.oneshot(get_request("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_opened_pull_request_is_recorded_and_listed() {
        let (app, _) = counting_app();

        let response = app
            .clone()
            .oneshot(webhook("pull_request", PR_OPENED))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let kudos = list_for(&app, "alice").await;
        assert_eq!(
            kudos,
            vec![Kudo::pull_request(
                "alice",
                chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
                "https://api.github.com/repos/acme/widgets/pulls/5",
                "Fix bug",
            )]
        );
    }

    #[tokio::test]
    async fn test_list_response_shape() {
        let (app, _) = counting_app();
        app.clone()
            .oneshot(webhook("pull_request", PR_OPENED))
            .await
            .unwrap();

        let response = app
            .oneshot(get_request("/api/kudos/alice"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "user": "alice",
                "time": 1_700_000_000,
                "contribution_type": "PullRequest",
                "contribution_url": "https://api.github.com/repos/acme/widgets/pulls/5",
                "contribution_name": "Fix bug"
            }])
        );
    }

    #[tokio::test]
    async fn test_opened_issue_is_recorded() {
        let (app, repo) = counting_app();

        let response = app
            .clone()
            .oneshot(webhook("issues", ISSUE_OPENED))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(repo.creates.load(Ordering::SeqCst), 1);

        let kudos = list_for(&app, "alice").await;
        assert_eq!(kudos.len(), 1);
        assert_eq!(kudos[0].contribution_type, ContributionType::Issue);
        assert_eq!(kudos[0].contribution_name, "Crash on start");
        assert_eq!(kudos[0].time.timestamp(), 1_700_006_400);
    }

    #[tokio::test]
    async fn test_non_opened_actions_are_accepted_without_write() {
        let (app, repo) = counting_app();

        for (event, body) in [("pull_request", PR_OPENED), ("issues", ISSUE_OPENED)] {
            let closed = body.replace("\"opened\"", "\"closed\"");
            let response = app.clone().oneshot(webhook(event, &closed)).await.unwrap();

            assert_eq!(response.status(), StatusCode::ACCEPTED);
            assert!(body_string(response).await.is_empty());
        }

        assert_eq!(repo.creates.load(Ordering::SeqCst), 0);
        assert!(list_for(&app, "alice").await.is_empty());
    }

    #[tokio::test]
    async fn test_unsupported_event_is_accepted_without_write() {
        let (app, repo) = counting_app();

        let response = app
            .oneshot(webhook("ping", r#"{"zen":"Design for failure."}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert!(body_string(response).await.is_empty());
        assert_eq!(repo.creates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_invalid_signature_is_unauthorized_and_skips_store() {
        let (app, repo) = counting_app();
        let forged = sign_payload(PR_OPENED.as_bytes(), b"wrong secret").unwrap();

        let response = app
            .oneshot(webhook_with_signature("pull_request", PR_OPENED, &forged))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_string(response).await,
            "payload signature check failed"
        );
        assert_eq!(repo.creates.load(Ordering::SeqCst), 0);
        assert_eq!(repo.lists.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_signature_is_unauthorized() {
        let (app, repo) = counting_app();

        let request = Request::builder()
            .method("POST")
            .uri("/api/contribution/gh")
            .header("Content-Type", "application/json")
            .header("X-GitHub-Event", "pull_request")
            .body(Body::from(PR_OPENED))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(repo.creates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let (app, repo) = counting_app();

        let response = app
            .oneshot(webhook("pull_request", "{\"action\": \"opened\""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_string(response)
            .await
            .starts_with("could not parse webhook payload"));
        assert_eq!(repo.creates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_event_header_is_bad_request() {
        let (app, _) = counting_app();
        let signature = sign_payload(PR_OPENED.as_bytes(), SECRET.as_bytes()).unwrap();

        let request = Request::builder()
            .method("POST")
            .uri("/api/contribution/gh")
            .header("Content-Type", "application/json")
            .header("X-Hub-Signature-256", signature)
            .body(Body::from(PR_OPENED))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_form_encoded_delivery_is_recorded() {
        let (app, repo) = counting_app();
        let body = format!(
            "payload={}",
            PR_OPENED
                .bytes()
                .map(|b| format!("%{b:02X}"))
                .collect::<String>()
        );
        let signature = sign_payload(body.as_bytes(), SECRET.as_bytes()).unwrap();

        let request = Request::builder()
            .method("POST")
            .uri("/api/contribution/gh")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("X-GitHub-Event", "pull_request")
            .header("X-Hub-Signature-256", signature)
            .body(Body::from(body))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(repo.creates.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unsigned_delivery_accepted_without_secret() {
        let repo = Arc::new(CountingRepository::default());
        let app = create_app(AppState::build(repo.clone(), ""));

        let request = Request::builder()
            .method("POST")
            .uri("/api/contribution/gh")
            .header("Content-Type", "application/json")
            .header("X-GitHub-Event", "pull_request")
            .body(Body::from(PR_OPENED))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(repo.creates.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_slow_store_write_completes() {
        let repo = Arc::new(SlowRepository::default());
        let app = app_with(repo.clone());

        let response = app
            .clone()
            .oneshot(webhook("pull_request", PR_OPENED))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(repo.inner.creates.load(Ordering::SeqCst), 1);
        assert_eq!(list_for(&app, "alice").await.len(), 1);
    }

    /// Writes carry no idempotency key, so a redelivery reaches the store
    /// twice. The in-memory backend keeps both copies; the DynamoDB table is
    /// keyed by `User` alone, so there the second put replaces the first.
    #[tokio::test]
    async fn test_redelivered_webhook_creates_duplicate() {
        let (app, _) = counting_app();

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(webhook("pull_request", PR_OPENED))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let kudos = list_for(&app, "alice").await;
        assert_eq!(kudos.len(), 2);
        assert_eq!(kudos[0], kudos[1]);
    }

    #[tokio::test]
    async fn test_list_unknown_user_is_empty_array() {
        let (app, _) = counting_app();

        let response = app
            .oneshot(get_request("/api/kudos/nobody"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "[]");
    }

    #[tokio::test]
    async fn test_store_failure_on_create_is_500() {
        let app = app_with(Arc::new(FailingRepository));

        let response = app
            .oneshot(webhook("pull_request", PR_OPENED))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_string(response).await,
            "Query failed: Table not found"
        );
    }

    #[tokio::test]
    async fn test_store_failure_on_list_is_500() {
        let app = app_with(Arc::new(FailingRepository));

        let response = app
            .oneshot(get_request("/api/kudos/alice"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_string(response).await,
            "Connection failed: no route to host"
        );
    }

    #[tokio::test]
    async fn test_options_preflight_returns_cors_headers() {
        let (app, _) = counting_app();

        for uri in ["/", "/api/kudos/alice", "/api/contribution/gh"] {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method("OPTIONS")
                        .uri(uri)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::NO_CONTENT);
            let headers = response.headers();
            assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
            assert_eq!(
                headers.get("access-control-allow-headers").unwrap(),
                "X-Requested-With"
            );
            assert_eq!(
                headers.get("access-control-allow-methods").unwrap(),
                "POST, GET, PUT, DELETE, OPTIONS"
            );
        }
    }
}
