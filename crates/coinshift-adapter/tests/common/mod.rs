/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for coinshift-adapter tests

use coinshift_adapter::{ClientConfig, CoinshiftClient};
use wiremock::MockServer;

/// Well-known test private key and its checksummed address
pub const TEST_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
#[allow(dead_code)]
pub const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Build a client whose Privy and Deform base URLs both point at the
/// given mock server
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> CoinshiftClient {
    CoinshiftClient::with_config_and_base_urls(
        ClientConfig::default(),
        &server.uri(),
        &server.uri(),
    )
    .expect("client init")
}

/// A successful authenticate response body with fixed tokens
#[allow(dead_code)]
pub fn authenticate_response_json() -> serde_json::Value {
    serde_json::json!({
        "user": {
            "id": "did:privy:user1",
            "created_at": 1717200000,
            "linked_accounts": [],
            "has_accepted_terms": true,
            "is_guest": false,
        },
        "token": "access-token",
        "refresh_token": "refresh-token",
        "identity_token": "identity-token",
        "is_new_user": false,
    })
}
