use serde_json::json;
use smartops_core::auth::{AuthGateway, LoginRequest};
use smartops_core::config::{ApiConfig, Endpoints};
use smartops_core::error::SmartOpsError;
use smartops_core::user::UserId;
use smartops_interaction::http::build_client;
use smartops_interaction::{ClientService, HttpAuthGateway, ProductService, ResourceClient};
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> ApiConfig {
    ApiConfig::default().with_base_url(server.uri())
}

fn resources(config: &ApiConfig) -> ResourceClient {
    ResourceClient::new(build_client(config).unwrap(), config.endpoints().unwrap())
}

fn gateway(config: &ApiConfig) -> HttpAuthGateway {
    HttpAuthGateway::new(build_client(config).unwrap(), &config.endpoints().unwrap())
}

#[tokio::test]
async fn test_login_posts_credentials_and_returns_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"email": "a@b.c", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "T1",
            "user": {"id": 1, "name": "Ana", "email": "a@b.c", "role": "admin"},
            "isFirstLogin": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = gateway(&config_for(&server))
        .login(&LoginRequest::new("a@b.c", "pw"))
        .await
        .unwrap();

    assert_eq!(response.token, "T1");
    assert!(response.user.role.is_admin());
    assert_eq!(response.extra.get("isFirstLogin"), Some(&json!(true)));
}

#[tokio::test]
async fn test_login_uses_configured_login_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"token": "T1", "user": {"id": 1}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server).with_login_path("/auth/login");
    let response = gateway(&config).login(&LoginRequest::new("a@b.c", "pw")).await.unwrap();
    assert_eq!(response.user.id, Some(UserId::Number(1)));
}

#[tokio::test]
async fn test_login_rejection_carries_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})))
        .mount(&server)
        .await;

    let err = gateway(&config_for(&server))
        .login(&LoginRequest::new("a@b.c", "wrong"))
        .await
        .unwrap_err();
    assert_eq!(err, SmartOpsError::AuthRejected("Invalid credentials".into()));
}

#[tokio::test]
async fn test_login_html_error_page_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = gateway(&config_for(&server))
        .login(&LoginRequest::new("a@b.c", "pw"))
        .await
        .unwrap_err();
    assert!(err.is_malformed_response());
    assert_eq!(err.status(), Some(502));
}

#[tokio::test]
async fn test_get_clients_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/clients"))
        .and(header("Authorization", "Bearer T1"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "companyName": "Acme Solar", "city": "Tampa", "state": "FL"},
            {"id": 2}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let clients = ClientService::new(resources(&config_for(&server)))
        .get_clients(Some("T1"))
        .await
        .unwrap();

    assert_eq!(clients.len(), 2);
    assert_eq!(clients[0].display_name(), "Acme Solar");
    assert_eq!(clients[1].display_name(), "Unnamed client");
}

#[tokio::test]
async fn test_get_clients_without_token_omits_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/clients"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = ClientService::new(resources(&config_for(&server)))
        .get_clients(None)
        .await
        .unwrap_err();
    assert_eq!(err, SmartOpsError::HttpError { status: 401 });

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_missing_client_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/clients/42"))
        .and(header("Authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not found"})))
        .expect(1)
        .mount(&server)
        .await;

    let err = ClientService::new(resources(&config_for(&server)))
        .get_client_by_id(42, Some("T1"))
        .await
        .unwrap_err();
    assert_eq!(err, SmartOpsError::HttpError { status: 404 });
}

#[tokio::test]
async fn test_zero_id_sends_nothing() {
    let server = MockServer::start().await;

    let err = ClientService::new(resources(&config_for(&server)))
        .get_client_by_id(0, Some("T1"))
        .await
        .unwrap_err();
    assert!(matches!(err, SmartOpsError::InvalidInput(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_products_are_fetched_without_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 7, "name": "Inverter", "price": 1299.5, "stock_quantity": 3}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/products/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7, "name": "Inverter"})))
        .mount(&server)
        .await;

    let products = ProductService::new(resources(&config_for(&server)));
    let all = products.get_products().await.unwrap();
    assert_eq!(all[0].formatted_price().as_deref(), Some("$1299.50"));
    assert!(all[0].in_stock());

    let one = products.get_product_by_id(7).await.unwrap();
    assert_eq!(one.display_name(), "Inverter");

    for request in server.received_requests().await.unwrap() {
        assert!(request.headers.get("authorization").is_none());
        assert_eq!(request.headers.get("content-type").unwrap(), "application/json");
    }
}

#[tokio::test]
async fn test_mixed_price_types_keep_every_product() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "price": "129.99"},
            {"id": 2, "price": 300}
        ])))
        .mount(&server)
        .await;

    let products = ProductService::new(resources(&config_for(&server)))
        .get_products()
        .await
        .unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].price, Some(129.99));
    assert_eq!(products[1].price, Some(300.0));
}

#[tokio::test]
async fn test_undecodable_records_are_skipped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/clients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "companyName": "Acme Solar"},
            "not a client",
            42,
            {"id": "3", "companyName": "Sun Co", "contacts": {"oops": true}}
        ])))
        .mount(&server)
        .await;

    let clients = ClientService::new(resources(&config_for(&server)))
        .get_clients(Some("T1"))
        .await
        .unwrap();

    let names: Vec<_> = clients.iter().map(|c| c.display_name().to_string()).collect();
    assert_eq!(names, ["Acme Solar", "Sun Co"]);
    assert_eq!(clients[1].id, Some(3));
}

#[tokio::test]
async fn test_non_array_collection_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let err = ProductService::new(resources(&config_for(&server)))
        .get_products()
        .await
        .unwrap_err();
    assert!(err.is_malformed_response());
}

#[tokio::test]
async fn test_non_json_success_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = ProductService::new(resources(&config_for(&server)))
        .get_products()
        .await
        .unwrap_err();
    assert_eq!(
        err,
        SmartOpsError::MalformedResponse {
            status: 200,
            body_snippet: "<html>maintenance</html>".into()
        }
    );
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = ApiConfig::default().with_base_url(format!("http://127.0.0.1:{}", port));

    let err = ClientService::new(resources(&config))
        .get_clients(Some("T1"))
        .await
        .unwrap_err();
    assert!(err.is_network(), "unexpected error: {:?}", err);

    let err = gateway(&config).login(&LoginRequest::new("a@b.c", "pw")).await.unwrap_err();
    assert!(err.is_network(), "unexpected error: {:?}", err);
}

#[tokio::test]
async fn test_request_deadline_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.request_timeout_secs = 1;

    let err = ProductService::new(resources(&config))
        .get_products()
        .await
        .unwrap_err();
    assert!(err.is_network());
}

#[test]
fn test_endpoints_follow_base_url() {
    let endpoints = Endpoints::new("http://127.0.0.1:9/api/", "/login");
    assert_eq!(endpoints.clients, "http://127.0.0.1:9/api/clients");
}
