/*
[INPUT]:  Auth flow values (address, signed message, GraphQL operations)
[OUTPUT]: Serializable request bodies for Privy and Deform endpoints
[POS]:    Data layer - outbound request types
[UPDATE]: When request schemas or fixed login parameters change
*/

use serde::Serialize;

/// Wallet connector identity reported to Privy during authentication.
///
/// The campaign frontend authenticates as an injected OKX wallet; the
/// values are part of the wire contract.
pub const AUTH_CHAIN_ID: &str = "eip155:1";
pub const WALLET_CLIENT_TYPE: &str = "okx_wallet";
pub const CONNECTOR_TYPE: &str = "injected";
pub const AUTH_MODE: &str = "login-or-sign-up";

/// Body for POST /api/v1/siwe/init
#[derive(Debug, Clone, Serialize)]
pub struct SiweInitRequest {
    pub address: String,
}

/// Body for POST /api/v1/siwe/authenticate
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticateRequest {
    pub message: String,
    pub signature: String,
    #[serde(rename = "chainId")]
    pub chain_id: String,
    #[serde(rename = "walletClientType")]
    pub wallet_client_type: String,
    #[serde(rename = "connectorType")]
    pub connector_type: String,
    pub mode: String,
}

impl AuthenticateRequest {
    /// Build an authenticate request with the fixed login parameters
    pub fn for_login(message: String, signature: String) -> Self {
        Self {
            message,
            signature,
            chain_id: AUTH_CHAIN_ID.to_string(),
            wallet_client_type: WALLET_CLIENT_TYPE.to_string(),
            connector_type: CONNECTOR_TYPE.to_string(),
            mode: AUTH_MODE.to_string(),
        }
    }
}

/// GraphQL request envelope for the Deform endpoint
#[derive(Debug, Clone, Serialize)]
pub struct GraphQLRequest {
    #[serde(rename = "operationName")]
    pub operation_name: &'static str,
    pub variables: serde_json::Value,
    pub query: &'static str,
}
