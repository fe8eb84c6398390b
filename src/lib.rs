//! # verifone-epayment
//!
//! Client for the Verifone ePayment server interface.
//!
//! Requests are form-encoded field maps signed twice with the merchant's RSA
//! key (SHA-1 and SHA-512 over a canonical `key=value;` plaintext). Responses
//! carry the same pair of signatures made with the processor's key and are
//! rejected unless both verify.
//!
//! ```no_run
//! use verifone_epayment::{ClientConfig, VerifoneClient};
//!
//! # fn main() -> verifone_epayment::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let client = VerifoneClient::new(config)?;
//! let availability = client.is_available()?;
//! println!("{:?}", availability.get("i-f-1-1_availability"));
//! # Ok(())
//! # }
//! ```

pub mod canonical;
pub mod client;
pub mod config;
pub mod crypto;
pub mod error;
pub mod iso;
pub mod request;
pub mod response;
pub mod transform;
pub mod transport;
pub mod types;

#[cfg(test)]
mod test_keys;

// Re-exports for convenience
pub use canonical::canonicalize;
pub use client::VerifoneClient;
pub use config::ClientConfig;
pub use crypto::{payment_token, DigestAlgorithm, Signer, Verifier};
pub use error::{Result, VerifoneError};
pub use request::{BasketItem, PaymentData, ReturnUrls};
pub use transport::{Endpoints, HttpTransport, Transport, TransportResponse};
pub use types::*;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
