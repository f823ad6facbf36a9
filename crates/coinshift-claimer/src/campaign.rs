/*
[INPUT]:  Campaign deployment literals (sign-in fields, activity ids)
[OUTPUT]: SIWE message fields and the fixed activity list
[POS]:    Configuration layer - campaign constants
[UPDATE]: When the campaign rotates its activities or sign-in statement
*/

use std::time::Duration;

use coinshift_adapter::SiweMessage;

/// Domain the campaign frontend signs in from
pub const SIWE_DOMAIN: &str = "campaign.coinshift.xyz";
/// Statement shown to the user in the wallet prompt
pub const SIWE_STATEMENT: &str = "By signing, you are proving you own this wallet and logging in. This does not initiate a transaction or cost any fees.";
pub const SIWE_URI: &str = "https://campaign.coinshift.xyz";
pub const SIWE_VERSION: &str = "1";
pub const SIWE_CHAIN_ID: &str = "1";
pub const SIWE_RESOURCES: &[&str] = &["https://privy.io"];

/// Daily check-in activities, claimed in this order
pub const ACTIVITY_IDS: &[&str] = &[
    "304a9530-3720-45c8-a778-fbd3060d5cfd",
    "e3e5f263-b471-4ef3-b285-77a66e358a69",
    "907b82a0-152f-45d7-ae35-ce01de22b481",
];

/// Pause between successive activity claims for one account
pub const ACTIVITY_DELAY: Duration = Duration::from_secs(1);

/// Build the campaign's SIWE message around a freshly issued nonce
pub fn siwe_message(address: &str, nonce: &str, issued_at: &str) -> SiweMessage {
    SiweMessage {
        domain: SIWE_DOMAIN.to_string(),
        address: address.to_string(),
        statement: Some(SIWE_STATEMENT.to_string()),
        uri: SIWE_URI.to_string(),
        version: SIWE_VERSION.to_string(),
        chain_id: SIWE_CHAIN_ID.to_string(),
        nonce: nonce.to_string(),
        issued_at: issued_at.to_string(),
        resources: SIWE_RESOURCES.iter().map(|r| r.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_siwe_message_carries_campaign_fields() {
        let message = siwe_message("0xabc", "nonce-1", "2025-06-01T09:30:00.123Z").to_message();

        assert!(message.starts_with(
            "campaign.coinshift.xyz wants you to sign in with your Ethereum account:\n0xabc"
        ));
        assert!(message.contains(SIWE_STATEMENT));
        assert!(message.contains("Nonce: nonce-1"));
        assert!(message.ends_with("Resources:\n- https://privy.io"));
    }
}
