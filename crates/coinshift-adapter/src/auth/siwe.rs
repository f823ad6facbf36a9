/*
[INPUT]:  Sign-in fields (domain, address, nonce, timestamp, resources)
[OUTPUT]: Canonical EIP-4361 message text ready for signing
[POS]:    Auth layer - Sign-In with Ethereum message construction
[UPDATE]: When the campaign changes its sign-in statement or resources
*/

use chrono::Utc;

/// Fields of a Sign-In with Ethereum (EIP-4361) message.
///
/// Constructed fresh per authentication attempt around a single-use
/// server-issued nonce; never persisted.
#[derive(Debug, Clone)]
pub struct SiweMessage {
    pub domain: String,
    pub address: String,
    pub statement: Option<String>,
    pub uri: String,
    pub version: String,
    pub chain_id: String,
    pub nonce: String,
    pub issued_at: String,
    pub resources: Vec<String>,
}

impl SiweMessage {
    /// Render the canonical EIP-4361 text block.
    ///
    /// Field order and the literal labels are the wire contract: the
    /// rendered text is hashed and verified server-side, so any byte of
    /// deviation invalidates the signature. No trailing newline.
    pub fn to_message(&self) -> String {
        let mut message = String::with_capacity(256);

        message.push_str(&format!(
            "{} wants you to sign in with your Ethereum account:\n",
            self.domain
        ));
        message.push_str(&format!("{}\n\n", self.address));

        match &self.statement {
            Some(statement) if !statement.is_empty() => {
                message.push_str(&format!("{statement}\n\n"));
            }
            _ => message.push('\n'),
        }

        message.push_str(&format!("URI: {}\n", self.uri));
        message.push_str(&format!("Version: {}\n", self.version));
        message.push_str(&format!("Chain ID: {}\n", self.chain_id));
        message.push_str(&format!("Nonce: {}\n", self.nonce));
        message.push_str(&format!("Issued At: {}", self.issued_at));

        if !self.resources.is_empty() {
            message.push_str("\nResources:");
            for resource in &self.resources {
                message.push_str(&format!("\n- {resource}"));
            }
        }

        message
    }
}

/// Current UTC instant in the RFC3339-millisecond form Privy expects,
/// e.g. "2025-06-01T09:30:00.123Z".
pub fn issued_at_now() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}
