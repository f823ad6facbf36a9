/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - Privy and Deform communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod deform;
pub mod error;
pub mod headers;
pub mod privy;

pub use client::{ClientConfig, CoinshiftClient};
pub use error::{CoinshiftError, Result};
