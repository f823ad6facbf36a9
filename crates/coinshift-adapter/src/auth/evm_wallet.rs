/*
[INPUT]:  EVM private key (hex string)
[OUTPUT]: Signed personal messages and checksummed wallet address
[POS]:    Auth layer - EVM wallet implementation
[UPDATE]: When signing logic or address formatting changes
*/

use std::str::FromStr;

use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;

use crate::auth::WalletSigner;
use crate::http::{CoinshiftError, Result};

/// Signer for EVM wallets backed by a local private key
#[derive(Debug)]
pub struct EvmWalletSigner {
    signer: PrivateKeySigner,
    address: String,
}

impl EvmWalletSigner {
    /// Create a new EVM wallet signer from a hex-encoded private key.
    ///
    /// Supports both "0x"-prefixed and non-prefixed hex strings. The
    /// EIP-55 checksummed address is derived eagerly so callers can log
    /// it before any network traffic.
    pub fn new(private_key_hex: &str) -> Result<Self> {
        let private_key_hex = private_key_hex
            .strip_prefix("0x")
            .unwrap_or(private_key_hex);
        let signer = PrivateKeySigner::from_str(private_key_hex)
            .map_err(|e| CoinshiftError::InvalidKey(format!("{e}")))?;

        let address = signer.address().to_checksum(None);

        Ok(Self { signer, address })
    }
}

#[async_trait]
impl WalletSigner for EvmWalletSigner {
    fn address(&self) -> &str {
        &self.address
    }

    /// Sign with the EIP-191 personal-message scheme: the digest is
    /// keccak256("\x19Ethereum Signed Message:\n" + len(message) + message).
    /// Deterministic per key/message (RFC6979 nonce derivation).
    async fn sign_message(&self, message: &str) -> Result<String> {
        let signature = self
            .signer
            .sign_message(message.as_bytes())
            .await
            .map_err(|e| CoinshiftError::Signing(format!("{e}")))?;

        // alloy's Signature as_bytes() returns [r, s, v]
        Ok(format!("0x{}", hex::encode(signature.as_bytes())))
    }
}
