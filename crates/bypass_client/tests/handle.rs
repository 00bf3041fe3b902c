use std::time::Duration;

use bypass_client::{ClientHandle, ClientSettings};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn handle_delivers_one_completion_per_submission() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/bypass"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "originalUrl": "http://a",
            "finalUrl": "http://b"
        })))
        .mount(&server)
        .await;

    let settings = ClientSettings {
        endpoint: format!("{}/api/bypass", server.uri()),
        ..ClientSettings::default()
    };
    let (handle, outcome_rx) = ClientHandle::new(settings);

    handle.submit("http://a");
    let outcome = outcome_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("completion arrives");
    let resolution = outcome.expect("resolve ok");
    assert_eq!(resolution.final_url, "http://b");

    // No second completion for a single command.
    assert!(outcome_rx.recv_timeout(Duration::from_millis(200)).is_err());
}
