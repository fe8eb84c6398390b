//! Client for the Verifone ePayment server interface

use crate::config::ClientConfig;
use crate::crypto::{Signer, Verifier};
use crate::request::{build_payment_data, build_request, format_timestamp, PaymentData, RequestMetadata};
use crate::response::{handle_response, verify_response};
use crate::transform::{currency_numeric_code, currency_or_default, normalize_country_field, validate_currency};
use crate::transport::{Endpoints, HttpTransport, Transport};
use crate::types::{fields, operations, ErrorPolicy, FieldMap, FieldValue, Mode};
use crate::{Result, VerifoneError};
use chrono::Utc;

/// Signed client for the server interface.
///
/// Every call builds one request, signs it with the merchant key, sends it
/// and verifies the processor's signatures on the answer before returning
/// the fields. Nothing is retried.
#[derive(Debug)]
pub struct VerifoneClient<T = HttpTransport> {
    metadata: RequestMetadata,
    signer: Signer,
    verifier: Verifier,
    /// Alphabetic code, re-validated on every read
    pub(crate) currency: String,
    mode: Mode,
    error_policy: ErrorPolicy,
    endpoints: Endpoints,
    transport: T,
}

impl VerifoneClient<HttpTransport> {
    /// Create a client that talks HTTP with reqwest
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout)?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> VerifoneClient<T> {
    /// Create a client on top of a custom transport.
    ///
    /// An unusable currency in `config` silently becomes EUR; use
    /// [`VerifoneClient::set_currency`] for strict validation.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        config.validate()?;

        let signer = Signer::from_pem(&config.private_key_pem)?;
        let verifier = Verifier::from_pem(&config.processor_public_key_pem)?;

        Ok(Self {
            metadata: RequestMetadata {
                agreement_code: config.agreement_code,
                software_name: config.software_name,
                software_version: config.software_version,
                interface_version: config.interface_version,
            },
            signer,
            verifier,
            currency: currency_or_default(&config.currency),
            mode: config.mode,
            error_policy: config.error_policy,
            endpoints: config.endpoints,
            transport,
        })
    }

    /// Server interface URL for the current mode, without probing
    pub fn endpoint(&self) -> &str {
        self.endpoints.primary(self.mode)
    }

    /// Hosted payment page that browser payment forms post to
    pub fn payment_page_url(&self) -> &str {
        self.endpoints.payment_page(self.mode)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Set the mode from its flag form: 1 for test, 0 for live
    pub fn set_test_mode(&mut self, flag: i64) -> Result<()> {
        self.mode = Mode::try_from(flag)?;
        Ok(())
    }

    pub fn error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }

    pub fn set_error_policy(&mut self, policy: ErrorPolicy) {
        self.error_policy = policy;
    }

    /// Numeric ISO 4217 code of the configured currency
    pub fn currency(&self) -> Result<&'static str> {
        currency_numeric_code(&self.currency)
    }

    /// Stored alphabetic currency code
    pub fn currency_code(&self) -> &str {
        &self.currency
    }

    /// Replace the currency, rejecting anything that is not a known
    /// three-letter code
    pub fn set_currency(&mut self, value: &str) -> Result<()> {
        self.currency = validate_currency(value)?;
        Ok(())
    }

    /// Connectivity, signature and access-level check.
    ///
    /// `i-f-1-1_availability` is 0 (no access), 1 (express) or 2 (advanced).
    pub fn is_available(&self) -> Result<FieldMap> {
        self.send_request(operation(operations::IS_AVAILABLE))
    }

    /// Available payment methods and their amount limits
    pub fn list_payment_methods(&self) -> Result<FieldMap> {
        let options =
            operation(operations::LIST_PAYMENT_METHODS).with(fields::CURRENCY_CODE, self.currency()?);
        self.send_request(options)
    }

    /// Cancel a payment by payment method code and transaction number
    pub fn cancel_payment(&self, data: FieldMap) -> Result<FieldMap> {
        self.send_merged(operation(operations::CANCEL_PAYMENT), data)
    }

    /// Saved payment methods of a buyer
    pub fn list_saved_payment_methods(&self, data: FieldMap) -> Result<FieldMap> {
        self.send_merged(operation(operations::LIST_SAVED_PAYMENT_METHODS), data)
    }

    /// Remove a saved payment method; `l-t-1-10_removed-count` is 0 or 1
    pub fn remove_saved_payment_method(&self, payment_method_id: impl Into<FieldValue>) -> Result<FieldMap> {
        let options = operation(operations::REMOVE_SAVED_PAYMENT_METHOD)
            .with(fields::SAVED_PAYMENT_METHOD_ID, payment_method_id);
        self.send_request(options)
    }

    /// Refund a card, electronic or invoice payment
    pub fn refund_payment(&self, data: FieldMap) -> Result<FieldMap> {
        let options = operation(operations::REFUND_PAYMENT)
            .with(fields::REFUND_CURRENCY_CODE, self.currency()?);
        self.send_merged(options, data)
    }

    /// Charge a payment without browser interaction.
    ///
    /// Payment and order timestamps default to now and an alphabetic
    /// delivery country is converted to its numeric code.
    pub fn process_payment(&self, mut data: FieldMap) -> Result<FieldMap> {
        let options = operation(operations::PROCESS_PAYMENT)
            .with(fields::ORDER_CURRENCY_CODE, self.currency()?);

        let now = format_timestamp(&Utc::now());
        data.insert_if_absent(fields::PAYMENT_TIMESTAMP, now.as_str());
        data.insert_if_absent(fields::ORDER_TIMESTAMP, now);
        normalize_country_field(&mut data)?;

        self.send_merged(options, data)
    }

    /// Supplementary authorization on an earlier transaction
    pub fn process_supplementary(&self, data: FieldMap) -> Result<FieldMap> {
        let options = operation(operations::PROCESS_SUPPLEMENTARY)
            .with(fields::ORDER_CURRENCY_CODE, self.currency()?);
        self.send_merged(options, data)
    }

    /// Status of a payment
    pub fn get_payment_status(&self, data: FieldMap) -> Result<FieldMap> {
        self.send_merged(operation(operations::GET_PAYMENT_STATUS), data)
    }

    /// Transaction numbers and payment methods of one order
    pub fn list_transaction_numbers(&self, order_number: impl Into<FieldValue>) -> Result<FieldMap> {
        let options =
            operation(operations::LIST_TRANSACTION_NUMBERS).with(fields::ORDER_NUMBER, order_number);
        self.send_request(options)
    }

    /// Create a payment link delivered by SMS or email
    pub fn generate_payment_link(&self, mut data: FieldMap) -> Result<FieldMap> {
        normalize_country_field(&mut data)?;
        let options = operation(operations::GENERATE_PAYMENT_LINK)
            .with(fields::ORDER_CURRENCY_CODE, self.currency()?);
        self.send_merged(options, data)
    }

    /// Status of a payment link: new, used, expired or canceled
    pub fn get_payment_link_status(&self, link_number: impl Into<FieldValue>) -> Result<FieldMap> {
        let options =
            operation(operations::GET_PAYMENT_LINK_STATUS).with(fields::PAYMENT_LINK_NUMBER, link_number);
        self.send_request(options)
    }

    /// Reactivate a payment link or move its expiry
    /// (`yyyy-MM-dd HH:mm:ss`). The processor emails the payer.
    pub fn reactivate_payment_link(
        &self,
        link_number: impl Into<FieldValue>,
        expiry: impl Into<FieldValue>,
    ) -> Result<FieldMap> {
        let options = operation(operations::REACTIVATE_PAYMENT_LINK)
            .with(fields::PAYMENT_LINK_NUMBER, link_number)
            .with(fields::ORDER_EXPIRY_TIMESTAMP, expiry);
        self.send_request(options)
    }

    /// Signed fields for an HTML form posted by the buyer's browser to
    /// [`VerifoneClient::payment_page_url`]. Nothing is sent.
    pub fn generate_payment_data(&self, data: &PaymentData) -> Result<FieldMap> {
        build_payment_data(&self.metadata, self.currency()?, data, &self.signer, &Utc::now())
    }

    /// Sign `options` over the protocol metadata, send them and validate the
    /// answer
    pub fn send_request(&self, options: FieldMap) -> Result<FieldMap> {
        let request = build_request(&self.metadata, options, &self.signer, &Utc::now())?;
        tracing::debug!(
            operation = %request.get_string(fields::OPERATION).unwrap_or_default(),
            request_id = %request.get_string(fields::REQUEST_ID).unwrap_or_default(),
            "Sending request"
        );

        let url = self.endpoints.select(&self.transport, self.mode);
        tracing::debug!(url = %url, "URL");

        let response = self.transport.post_form(&url, &request)?;
        if !response.is_success() {
            return Err(VerifoneError::TransportFailure {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }
        if response.body.is_empty() {
            return Err(VerifoneError::EmptyResponse);
        }

        handle_response(&response.body, self.error_policy, &self.verifier)
    }

    /// Verify the processor signatures on an already parsed response, e.g.
    /// the query of a browser returning from the payment page
    pub fn verify_response(&self, response: &FieldMap) -> Result<()> {
        verify_response(response, &self.verifier)
    }

    fn send_merged(&self, mut options: FieldMap, data: FieldMap) -> Result<FieldMap> {
        options.merge(data);
        self.send_request(options)
    }
}

fn operation(name: &str) -> FieldMap {
    FieldMap::new().with(fields::OPERATION, name)
}
