/*
[INPUT]:  Wallet address, signed SIWE message
[OUTPUT]: Sign-in challenge and session tokens from the Privy auth service
[POS]:    HTTP layer - wallet authentication endpoints
[UPDATE]: When Privy endpoints or request schemas change
*/

use reqwest::Method;
use tracing::debug;

use crate::http::{CoinshiftClient, Result};
use crate::types::{AuthenticateRequest, AuthenticateResponse, SiweInitRequest, SiweInitResponse};

const SIWE_INIT_ENDPOINT: &str = "/api/v1/siwe/init";
const SIWE_AUTHENTICATE_ENDPOINT: &str = "/api/v1/siwe/authenticate";

impl CoinshiftClient {
    /// Request a sign-in challenge for the given wallet address.
    ///
    /// POST /api/v1/siwe/init
    ///
    /// The returned nonce is single-use and expires server-side; it must
    /// be embedded unmodified into the SIWE message of this attempt.
    pub async fn siwe_init(&self, address: &str) -> Result<SiweInitResponse> {
        debug!(address, "requesting SIWE challenge");

        let body = SiweInitRequest {
            address: address.to_string(),
        };
        let builder = self.privy_request(Method::POST, SIWE_INIT_ENDPOINT)?;
        self.send_json(builder.json(&body)).await
    }

    /// Exchange a signed SIWE message for session tokens.
    ///
    /// POST /api/v1/siwe/authenticate
    pub async fn siwe_authenticate(
        &self,
        request: &AuthenticateRequest,
    ) -> Result<AuthenticateResponse> {
        debug!("submitting SIWE signature for authentication");

        let builder = self.privy_request(Method::POST, SIWE_AUTHENTICATE_ENDPOINT)?;
        self.send_json(builder.json(request)).await
    }
}
