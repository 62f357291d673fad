use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use appointment_cell::{appointment_routes, IntakeService, TriageRouter};
use auth_cell::{auth_routes, AccountService};
use booking_queue_cell::QueueMaintainer;
use doctor_cell::{doctor_routes, DoctorDirectory};
use notification_cell::{notification_routes, NotificationService, SmsGateway};
use shared_config::AppConfig;
use shared_database::ClinicStore;
use shared_utils::random::RandomSource;

pub fn create_router(
    config: &AppConfig,
    store: ClinicStore,
    random: Arc<dyn RandomSource>,
    gateway: Arc<dyn SmsGateway>,
) -> anyhow::Result<Router> {
    let directory = Arc::new(DoctorDirectory::clinic_roster());
    let queue = Arc::new(QueueMaintainer::new(
        store.clone(),
        config.max_queue_size,
        random.clone(),
    )?);
    let triage = TriageRouter::from_directory(&directory)?;

    let intake = Arc::new(IntakeService::new(queue, triage, directory.clone(), random));
    let accounts = AccountService::new(store);
    let notifications = Arc::new(NotificationService::from_config(config, gateway));

    Ok(Router::new()
        .route("/", get(|| async { "Clinic Queue API is running!" }))
        .merge(auth_routes(accounts))
        .merge(appointment_routes(intake))
        .merge(doctor_routes(directory))
        .merge(notification_routes(notifications)))
}

/// Any origin, with credentials: origins are echoed back rather than `*`.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use notification_cell::TwilioGateway;
    use serde_json::Value;
    use shared_database::connect_in_memory;
    use shared_utils::test_utils::{lowest, TestConfig};
    use tower::ServiceExt;

    async fn test_app(max_queue_size: i64) -> anyhow::Result<Router> {
        let config = TestConfig {
            max_queue_size,
            ..TestConfig::default()
        }
        .to_app_config();
        let store = ClinicStore::new(connect_in_memory().await?);
        let gateway = Arc::new(TwilioGateway::new(&config));
        create_router(&config, store, Arc::new(lowest()), gateway)
    }

    #[tokio::test]
    async fn test_liveness_root() {
        let app = test_app(6).await.unwrap();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Clinic Queue API is running!");
    }

    #[tokio::test]
    async fn test_all_cells_are_mounted() {
        let app = test_app(6).await.unwrap();

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/doctors/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let doctors: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(doctors.as_array().map(Vec::len), Some(4));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/register")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"username":"asha","password":"pw"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_preflight_mirrors_origin_with_credentials() {
        let app = test_app(6).await.unwrap().layer(cors_layer());

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/predict/")
                    .header("origin", "http://frontend.example")
                    .header("access-control-request-method", "POST")
                    .header("access-control-request-headers", "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], "http://frontend.example");
        assert_eq!(headers["access-control-allow-credentials"], "true");
        assert_eq!(headers["access-control-allow-methods"], "POST");
        assert_eq!(headers["access-control-allow-headers"], "content-type");
    }

    #[tokio::test]
    async fn test_simple_request_carries_cors_headers() {
        let app = test_app(6).await.unwrap().layer(cors_layer());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/doctors/")
                    .header("origin", "http://frontend.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "http://frontend.example"
        );
        assert_eq!(response.headers()["access-control-allow-credentials"], "true");
    }

    #[tokio::test]
    async fn test_zero_capacity_is_rejected_at_startup() {
        assert!(test_app(0).await.is_err());
    }
}
