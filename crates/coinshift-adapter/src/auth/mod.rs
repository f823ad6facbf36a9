/*
[INPUT]:  Wallet credentials and sign-in message fields
[OUTPUT]: SIWE messages, signatures, and wallet addresses
[POS]:    Auth layer - wallet-based sign-in primitives
[UPDATE]: When signing flow or message format changes
*/

pub mod evm_wallet;
pub mod siwe;
pub mod wallet;

pub use evm_wallet::EvmWalletSigner;
pub use siwe::{SiweMessage, issued_at_now};
pub use wallet::{MockWalletSigner, WalletSigner};
