/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Coinshift adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    EvmWalletSigner,
    MockWalletSigner,
    SiweMessage,
    WalletSigner,
    issued_at_now,
};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    CoinshiftClient,
    CoinshiftError,
    Result,
};

// Re-export all types
pub use types::*;
