//! HTTP boundary and endpoint selection

use crate::types::{FieldMap, Mode};
use crate::Result;
use reqwest::blocking::Client;
use std::time::Duration;

/// Primary live server interface
pub const LIVE_ENDPOINT: &str = "https://epayment1.point.fi/pw/serverinterface";
/// Secondary live server interface
pub const LIVE_ENDPOINT_SECONDARY: &str = "https://epayment2.point.fi/pw/serverinterface";
/// Test server interface
pub const TEST_ENDPOINT: &str = "https://epayment.test.point.fi/pw/serverinterface";
/// Live hosted payment page, target of browser payment forms
pub const LIVE_PAYMENT_PAGE: &str = "https://epayment1.point.fi/pw/payment";
/// Test hosted payment page
pub const TEST_PAYMENT_PAGE: &str = "https://epayment.test.point.fi/pw/payment";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Status and body of an HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends form-encoded POST requests
pub trait Transport {
    /// POST `fields` as `application/x-www-form-urlencoded` to `url`
    fn post_form(&self, url: &str, fields: &FieldMap) -> Result<TransportResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post_form(&self, url: &str, fields: &FieldMap) -> Result<TransportResponse> {
        (**self).post_form(url, fields)
    }
}

/// [`Transport`] backed by a blocking reqwest client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post_form(&self, url: &str, fields: &FieldMap) -> Result<TransportResponse> {
        tracing::debug!(url, "POST");

        let response = self.client.post(url).form(fields).send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();

        tracing::debug!(status, bytes = body.len(), "Response received");
        Ok(TransportResponse { status, body })
    }
}

/// URLs of the server interface and the hosted payment page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Live server interfaces in failover order
    pub live: Vec<String>,
    pub test: String,
    pub live_payment_page: String,
    pub test_payment_page: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            live: vec![LIVE_ENDPOINT.to_string(), LIVE_ENDPOINT_SECONDARY.to_string()],
            test: TEST_ENDPOINT.to_string(),
            live_payment_page: LIVE_PAYMENT_PAGE.to_string(),
            test_payment_page: TEST_PAYMENT_PAGE.to_string(),
        }
    }
}

impl Endpoints {
    /// Use one base URL for everything, e.g. a local mock server
    pub fn single(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/');
        let interface = format!("{}/pw/serverinterface", base_url);
        let payment_page = format!("{}/pw/payment", base_url);
        Self {
            live: vec![interface.clone()],
            test: interface,
            live_payment_page: payment_page.clone(),
            test_payment_page: payment_page,
        }
    }

    /// Server interface used without probing: the test endpoint or the
    /// primary live endpoint
    pub fn primary(&self, mode: Mode) -> &str {
        match mode {
            Mode::Test => &self.test,
            Mode::Live => self.live.first().map(String::as_str).unwrap_or(LIVE_ENDPOINT),
        }
    }

    /// Hosted payment page for the mode
    pub fn payment_page(&self, mode: Mode) -> &str {
        match mode {
            Mode::Test => &self.test_payment_page,
            Mode::Live => &self.live_payment_page,
        }
    }

    /// Pick the server interface for a request.
    ///
    /// In test mode this is always the test endpoint. In live mode each live
    /// endpoint is probed with an empty POST and the first one answering
    /// HTTP 200 wins; if none does, the primary endpoint is used.
    pub fn select<T: Transport + ?Sized>(&self, transport: &T, mode: Mode) -> String {
        if mode == Mode::Test || self.live.len() < 2 {
            return self.primary(mode).to_string();
        }

        for url in &self.live {
            match transport.post_form(url, &FieldMap::new()) {
                Ok(response) if response.status == 200 => return url.clone(),
                Ok(response) => {
                    tracing::warn!(url = %url, status = response.status, "Endpoint probe failed")
                }
                Err(e) => tracing::warn!(url = %url, error = %e, "Endpoint unreachable"),
            }
        }

        tracing::warn!("No live endpoint answered the probe, using the primary one");
        self.primary(mode).to_string()
    }
}
