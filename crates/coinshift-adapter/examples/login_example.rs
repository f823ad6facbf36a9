/*
[INPUT]:  Wallet private key via environment variable
[OUTPUT]: Authenticated Privy session and platform token
[POS]:    Examples - authentication flow demonstration
[UPDATE]: When auth flow changes
*/

use coinshift_adapter::*;

/// Example: Authentication flow
///
/// This example demonstrates the complete login flow:
/// 1. Create HTTP client
/// 2. Derive the wallet address from a private key
/// 3. Request a sign-in challenge (nonce)
/// 4. Build and sign the SIWE message
/// 5. Authenticate and federate into the campaign platform
#[tokio::main]
async fn main() {
    println!("=== Coinshift Login Example ===\n");

    let private_key = match std::env::var("COINSHIFT_PRIVATE_KEY") {
        Ok(key) => key,
        Err(_) => {
            eprintln!("Set COINSHIFT_PRIVATE_KEY to a hex-encoded private key");
            return;
        }
    };

    let client = match CoinshiftClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    let wallet = match EvmWalletSigner::new(&private_key) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Failed to parse private key: {}", e);
            return;
        }
    };
    println!("✓ Wallet address: {}", wallet.address());

    let challenge = match client.siwe_init(wallet.address()).await {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Challenge request failed: {}", e);
            return;
        }
    };
    println!("✓ Nonce issued (expires {})", challenge.expires_at);

    let message = SiweMessage {
        domain: "campaign.coinshift.xyz".to_string(),
        address: wallet.address().to_string(),
        statement: Some("By signing, you are proving you own this wallet and logging in. This does not initiate a transaction or cost any fees.".to_string()),
        uri: "https://campaign.coinshift.xyz".to_string(),
        version: "1".to_string(),
        chain_id: "1".to_string(),
        nonce: challenge.nonce,
        issued_at: issued_at_now(),
        resources: vec!["https://privy.io".to_string()],
    }
    .to_message();

    let signature = match wallet.sign_message(&message).await {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Signing failed: {}", e);
            return;
        }
    };
    println!("✓ SIWE message signed");

    let request = AuthenticateRequest::for_login(message, signature);
    let session = match client.siwe_authenticate(&request).await {
        Ok(response) => match response.into_session() {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Authenticate response invalid: {}", e);
                return;
            }
        },
        Err(e) => {
            eprintln!("Authentication failed: {}", e);
            return;
        }
    };
    println!("✓ Authenticated as {}", session.user_id);

    match client.user_login(&session.token).await {
        Ok(_) => println!("✓ Federated into the campaign platform"),
        Err(e) => eprintln!("Federation login failed: {}", e),
    }
}
