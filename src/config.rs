//! Client configuration

use crate::transform::DEFAULT_CURRENCY;
use crate::transport::{Endpoints, DEFAULT_TIMEOUT};
use crate::types::{ErrorPolicy, Mode};
use crate::{Result, VerifoneError};
use std::path::Path;
use std::time::Duration;

/// Interface version sent when none is configured
pub const DEFAULT_INTERFACE_VERSION: &str = "5";

/// Configuration of a [`crate::VerifoneClient`]
#[derive(Clone)]
pub struct ClientConfig {
    /// Merchant agreement code, 1-36 characters
    pub agreement_code: String,
    /// Merchant RSA private key, PEM
    pub private_key_pem: String,
    /// Processor RSA public key, PEM
    pub processor_public_key_pem: String,
    /// Web shop software name, 1-30 characters
    pub software_name: String,
    /// Web shop software version, 1-10 characters
    pub software_version: String,
    /// Alphabetic currency code; unusable values fall back to EUR
    pub currency: String,
    /// Payment interface version, 1-11 digits
    pub interface_version: String,
    pub mode: Mode,
    pub error_policy: ErrorPolicy,
    pub timeout: Duration,
    pub endpoints: Endpoints,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("agreement_code", &self.agreement_code)
            .field("private_key_pem", &"<redacted>")
            .field("processor_public_key_pem", &"<redacted>")
            .field("software_name", &self.software_name)
            .field("software_version", &self.software_version)
            .field("currency", &self.currency)
            .field("interface_version", &self.interface_version)
            .field("mode", &self.mode)
            .field("error_policy", &self.error_policy)
            .field("timeout", &self.timeout)
            .field("endpoints", &self.endpoints)
            .finish()
    }
}

impl ClientConfig {
    /// Create a config with defaults for everything optional
    pub fn new(
        agreement_code: impl Into<String>,
        private_key_pem: impl Into<String>,
        processor_public_key_pem: impl Into<String>,
        software_name: impl Into<String>,
        software_version: impl Into<String>,
    ) -> Self {
        Self {
            agreement_code: agreement_code.into(),
            private_key_pem: private_key_pem.into(),
            processor_public_key_pem: processor_public_key_pem.into(),
            software_name: software_name.into(),
            software_version: software_version.into(),
            currency: DEFAULT_CURRENCY.to_string(),
            interface_version: DEFAULT_INTERFACE_VERSION.to_string(),
            mode: Mode::Live,
            error_policy: ErrorPolicy::Raise,
            timeout: DEFAULT_TIMEOUT,
            endpoints: Endpoints::default(),
        }
    }

    /// Build a config from `VERIFONE_*` environment variables.
    ///
    /// Required: `VERIFONE_AGREEMENT_CODE`, `VERIFONE_PRIVATE_KEY`,
    /// `VERIFONE_PUBLIC_KEY`, `VERIFONE_SOFTWARE_NAME`,
    /// `VERIFONE_SOFTWARE_VERSION`. Optional: `VERIFONE_CURRENCY`,
    /// `VERIFONE_TEST_MODE` (0 or 1).
    pub fn from_env() -> Result<Self> {
        use std::env;

        fn required(name: &str) -> Result<String> {
            env::var(name).map_err(|_| {
                VerifoneError::invalid_configuration(format!("{} must be set", name))
            })
        }

        let mut config = Self::new(
            required("VERIFONE_AGREEMENT_CODE")?,
            required("VERIFONE_PRIVATE_KEY")?,
            required("VERIFONE_PUBLIC_KEY")?,
            required("VERIFONE_SOFTWARE_NAME")?,
            required("VERIFONE_SOFTWARE_VERSION")?,
        );

        if let Ok(currency) = env::var("VERIFONE_CURRENCY") {
            config = config.with_currency(currency);
        }
        if let Ok(flag) = env::var("VERIFONE_TEST_MODE") {
            let flag: i64 = flag.trim().parse().map_err(|_| {
                VerifoneError::invalid_configuration("VERIFONE_TEST_MODE must be 0 or 1")
            })?;
            config = config.with_mode(Mode::try_from(flag)?);
        }

        Ok(config)
    }

    /// Validate lengths and formats of the metadata fields
    pub fn validate(&self) -> Result<()> {
        check_length("Agreement code", &self.agreement_code, 36)?;
        check_length("Software name", &self.software_name, 30)?;
        check_length("Software version", &self.software_version, 10)?;
        check_length("Interface version", &self.interface_version, 11)?;

        if !self.interface_version.chars().all(|c| c.is_ascii_digit()) {
            return Err(VerifoneError::invalid_configuration(
                "Interface version must be numeric",
            ));
        }

        Ok(())
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_interface_version(mut self, version: impl Into<String>) -> Self {
        self.interface_version = version.into();
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Read the merchant private key from a PEM file
    pub fn with_private_key_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        self.private_key_pem = std::fs::read_to_string(path)?;
        Ok(self)
    }

    /// Read the processor public key from a PEM file
    pub fn with_processor_key_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        self.processor_public_key_pem = std::fs::read_to_string(path)?;
        Ok(self)
    }
}

fn check_length(name: &str, value: &str, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len == 0 || len > max {
        return Err(VerifoneError::invalid_configuration(format!(
            "{} must be 1-{} characters",
            name, max
        )));
    }
    Ok(())
}
