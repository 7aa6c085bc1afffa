use campus_client::{CampusClient, Error, config::Config};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(gateway_url: &str, timeout_secs: u64) -> CampusClient {
    let mut config = Config::default();
    config.gateway.base_url = gateway_url.to_string();
    config.gateway.timeout_secs = timeout_secs;
    // Point the AI origin somewhere dead; these tests never use it.
    config.ai.base_url = "http://127.0.0.1:1".to_string();
    CampusClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_delete_accepts_204_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/students_service/7/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), 5);
    client.students().remove(7).await.unwrap();
}

#[tokio::test]
async fn test_detail_field_becomes_the_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/students_service/99/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "X"})))
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), 5);
    let err = client.students().get(99).await.unwrap_err();

    assert_eq!(err.to_string(), "X");
    assert!(matches!(err, Error::Http { status: 404, .. }));
}

#[tokio::test]
async fn test_error_field_takes_precedence_over_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/students_service/"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"error": "bad filter", "detail": "ignored"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), 5);
    let err = client.students().list().await.unwrap_err();
    assert_eq!(err.to_string(), "bad filter");
}

#[tokio::test]
async fn test_missing_error_field_falls_back_to_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/students_service/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), 5);
    let err = client.students().list().await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP Error 500");
}

#[tokio::test]
async fn test_non_json_success_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/students_service/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway login</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), 5);
    let err = client.students().list().await.unwrap_err();
    assert!(matches!(err, Error::InvalidResponse(_)));
}

#[tokio::test]
async fn test_slow_response_classifies_as_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/students_service/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_millis(1500)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), 1);
    let err = client.students().list().await.unwrap_err();
    assert!(matches!(err, Error::Timeout(_)));
}

#[tokio::test]
async fn test_connection_refused_classifies_as_unreachable() {
    let client = client_for("http://127.0.0.1:1", 2);
    let err = client.students().list().await.unwrap_err();
    assert!(matches!(err, Error::Unreachable(_)));
    assert!(err.to_string().contains("verify it is running"));
}

#[tokio::test]
async fn test_concurrent_identical_mutations_collapse_to_one_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/students_service/"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({
                    "id": 7, "first_name": "Ahmed", "last_name": "Benali", "email": "a@b.dz"
                }))
                .set_delay(Duration::from_millis(300)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), 5);
    let students = client.students();
    let payload = campus_client::clients::NewStudent {
        first_name: "Ahmed".to_string(),
        last_name: "Benali".to_string(),
        email: "a@b.dz".to_string(),
        university_id: None,
    };

    let (first, second) = tokio::join!(students.create(&payload), students.create(&payload));
    let results = [first, second];

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(
        results
            .iter()
            .any(|r| matches!(r, Err(Error::DuplicateRequest(_))))
    );
}

#[tokio::test]
async fn test_sequential_identical_mutations_both_go_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/students_service/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 7, "first_name": "Ahmed", "last_name": "Benali", "email": "a@b.dz"
        })))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), 5);
    let students = client.students();
    let payload = campus_client::clients::NewStudent {
        first_name: "Ahmed".to_string(),
        last_name: "Benali".to_string(),
        email: "a@b.dz".to_string(),
        university_id: None,
    };

    students.create(&payload).await.unwrap();
    students.create(&payload).await.unwrap();
}

#[tokio::test]
async fn test_concurrent_reads_are_never_guarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/students_service/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), 5);
    let students = client.students();

    let (first, second) = tokio::join!(students.list(), students.list());
    first.unwrap();
    second.unwrap();
}
