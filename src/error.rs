//! Error types for the Verifone client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, VerifoneError>;

/// Main error type for client operations
#[derive(Error, Debug)]
pub enum VerifoneError {
    /// Malformed or unrecognized currency code
    #[error("Invalid currency: {message}")]
    InvalidCurrency { message: String },

    /// Invalid configuration value, e.g. a mode flag outside 0/1
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Signing requested with a digest other than SHA-1 or SHA-512
    #[error("Unsupported digest: {algorithm}")]
    UnsupportedDigest { algorithm: String },

    /// Non-2xx status from the server interface
    #[error("Transport failure: HTTP {status}: {body}")]
    TransportFailure { status: u16, body: String },

    /// 2xx status without a body
    #[error("No content returned")]
    EmptyResponse,

    /// The processor answered with an error-message field
    #[error("Processor error: {message}")]
    ProcessorError { message: String },

    /// A response signature did not verify
    #[error("Signature verification failed: {reason}")]
    SignatureVerificationFailed { reason: String },

    /// Key material could not be parsed
    #[error("Invalid key: {message}")]
    InvalidKey { message: String },

    /// Alphabetic country code with no ISO 3166 entry
    #[error("Unknown country: {code}")]
    UnknownCountry { code: String },

    /// Amount that cannot be represented in minor units
    #[error("Invalid amount: {message}")]
    InvalidAmount { message: String },

    /// Caller supplied payment data that cannot be encoded
    #[error("Invalid payment data: {message}")]
    InvalidPaymentData { message: String },

    /// Response body that cannot be parsed
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// RSA signing error
    #[error("RSA error: {0}")]
    Rsa(#[from] rsa::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VerifoneError {
    /// Create an invalid currency error
    pub fn invalid_currency(message: impl Into<String>) -> Self {
        Self::InvalidCurrency {
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create an unsupported digest error
    pub fn unsupported_digest(algorithm: impl Into<String>) -> Self {
        Self::UnsupportedDigest {
            algorithm: algorithm.into(),
        }
    }

    /// Create a processor error
    pub fn processor_error(message: impl Into<String>) -> Self {
        Self::ProcessorError {
            message: message.into(),
        }
    }

    /// Create a signature verification failed error
    pub fn signature_verification_failed(reason: impl Into<String>) -> Self {
        Self::SignatureVerificationFailed {
            reason: reason.into(),
        }
    }

    /// Create an invalid key error
    pub fn invalid_key(message: impl Into<String>) -> Self {
        Self::InvalidKey {
            message: message.into(),
        }
    }

    /// Create an invalid amount error
    pub fn invalid_amount(message: impl Into<String>) -> Self {
        Self::InvalidAmount {
            message: message.into(),
        }
    }

    /// Create an invalid payment data error
    pub fn invalid_payment_data(message: impl Into<String>) -> Self {
        Self::InvalidPaymentData {
            message: message.into(),
        }
    }

    /// Create a malformed response error
    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Whether the error means the response must not be trusted
    pub fn is_untrusted_response(&self) -> bool {
        matches!(self, Self::SignatureVerificationFailed { .. })
    }
}
