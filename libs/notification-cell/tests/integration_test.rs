use std::sync::{Arc, Mutex};

use assert_matches::assert_matches;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{basic_auth, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use notification_cell::*;
use shared_utils::test_utils::TestConfig;

const MESSAGES_PATH: &str = "/2010-04-01/Accounts/AC_test_account_sid/Messages.json";

/// Captures outgoing messages instead of contacting a gateway.
#[derive(Default)]
struct RecordingGateway {
    sent: Mutex<Vec<OutboundSms>>,
}

#[async_trait]
impl SmsGateway for RecordingGateway {
    async fn send_message(&self, message: &OutboundSms) -> Result<String, NotificationError> {
        self.sent.lock().unwrap().push(message.clone());
        Ok("SM_recorded".to_string())
    }
}

fn sms_request(phone: &str) -> SmsRequest {
    SmsRequest {
        phone_number: phone.to_string(),
        patient_name: "Riya".to_string(),
        wait_time: "17".to_string(),
        doctor_name: "Dr. Sharma".to_string(),
    }
}

fn twilio_service(base_url: &str) -> NotificationService {
    let config = TestConfig::with_gateway(base_url).to_app_config();
    NotificationService::from_config(&config, Arc::new(TwilioGateway::new(&config)))
}

#[tokio::test]
async fn test_destination_is_normalized_before_gateway() {
    let gateway = Arc::new(RecordingGateway::default());
    let config = TestConfig::default().to_app_config();
    let service = NotificationService::from_config(&config, gateway.clone());

    service.send(&sms_request("9876543210")).await.unwrap();
    service.send(&sms_request("+19876543210")).await.unwrap();

    let sent = gateway.sent.lock().unwrap();
    assert_eq!(sent[0].to, "+919876543210");
    assert_eq!(sent[1].to, "+19876543210");
    assert_eq!(sent[0].from, "+15005550006");
    assert_eq!(
        sent[0].body,
        "Hello Riya, your appointment with Dr. Sharma is confirmed. Estimated wait time: 17 mins. - MedhTech AI"
    );
}

#[tokio::test]
async fn test_twilio_gateway_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MESSAGES_PATH))
        .and(basic_auth("AC_test_account_sid", "test-auth-token"))
        .and(body_string_contains("To=%2B919876543210"))
        .and(body_string_contains("From=%2B15005550006"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "sid": "SM1234567890",
            "status": "queued"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = twilio_service(&mock_server.uri());
    let sid = service.send(&sms_request("9876543210")).await.unwrap();

    assert_eq!(sid, "SM1234567890");
}

#[tokio::test]
async fn test_twilio_gateway_error_text_is_surfaced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MESSAGES_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": 21211,
            "message": "The 'To' number +91123 is not a valid phone number.",
            "more_info": "https://www.twilio.com/docs/errors/21211",
            "status": 400
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = twilio_service(&mock_server.uri());
    let result = service.send(&sms_request("123")).await;

    assert_matches!(
        result,
        Err(NotificationError::Gateway(msg))
            if msg == "HTTP 400 error: Unable to create record: The 'To' number +91123 is not a valid phone number."
    );
}

#[tokio::test]
async fn test_twilio_gateway_non_json_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MESSAGES_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&mock_server)
        .await;

    let service = twilio_service(&mock_server.uri());
    let result = service.send(&sms_request("9876543210")).await;

    assert_matches!(
        result,
        Err(NotificationError::Gateway(msg)) if msg.contains("HTTP 503") && msg.contains("upstream unavailable")
    );
}

#[tokio::test]
async fn test_send_sms_endpoint_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MESSAGES_PATH))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "sid": "SM1" })))
        .mount(&mock_server)
        .await;

    let app = notification_routes(Arc::new(twilio_service(&mock_server.uri())));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/send-sms/")
                .header("content-type", "application/json")
                .body(Body::from(json!({
                    "phone_number": "9876543210",
                    "patient_name": "Riya",
                    "wait_time": "17",
                    "doctor_name": "Dr. Sharma"
                }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, json!({ "message": "SMS sent successfully" }));
}

#[tokio::test]
async fn test_send_sms_endpoint_gateway_failure_is_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MESSAGES_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": 20003,
            "message": "Authenticate",
            "status": 401
        })))
        .mount(&mock_server)
        .await;

    let app = notification_routes(Arc::new(twilio_service(&mock_server.uri())));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/send-sms/")
                .header("content-type", "application/json")
                .body(Body::from(json!({
                    "phone_number": "9876543210",
                    "patient_name": "Riya",
                    "wait_time": "17",
                    "doctor_name": "Dr. Sharma"
                }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["detail"], "HTTP 401 error: Unable to create record: Authenticate");
}

#[tokio::test]
async fn test_unreachable_gateway_is_reported() {
    // Nothing listens on port 9 (discard) in the test environment.
    let service = twilio_service("http://127.0.0.1:9");

    let result = service.send(&sms_request("9876543210")).await;

    assert_matches!(result, Err(NotificationError::Gateway(msg)) if !msg.is_empty());
}
