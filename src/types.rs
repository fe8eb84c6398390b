//! Core types for the Verifone server interface

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::collections::hash_map;
use std::collections::HashMap;
use std::fmt;

/// Scalar value of a protocol field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Decimal(Decimal),
}

impl FieldValue {
    /// Borrow the value as text, if it is text
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Whether the value consists only of alphabetic characters
    pub fn is_alphabetic(&self) -> bool {
        match self {
            FieldValue::Text(text) => !text.is_empty() && text.chars().all(char::is_alphabetic),
            _ => false,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Integer(number) => write!(f, "{}", number),
            FieldValue::Decimal(number) => write!(f, "{}", number),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        FieldValue::Text(value.clone())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        FieldValue::Decimal(value)
    }
}

/// Flat key/value payload of a request or response.
///
/// Iteration order is unspecified. The signed form is always derived by
/// [`crate::canonical::canonicalize`], which sorts the keys itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    fields: HashMap<String, FieldValue>,
}

impl FieldMap {
    /// Create an empty field map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, returning the previous value
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.fields.insert(key.into(), value.into())
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get a field value
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Get a field rendered as a string
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.fields.get(key).map(ToString::to_string)
    }

    /// Remove a field
    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.fields.remove(key)
    }

    /// Check whether a field is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the map has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over the fields in unspecified order
    pub fn iter(&self) -> hash_map::Iter<'_, String, FieldValue> {
        self.fields.iter()
    }

    /// Merge `other` over this map; keys in `other` win
    pub fn merge(&mut self, other: FieldMap) {
        self.fields.extend(other.fields);
    }

    /// Insert only when the key is absent
    pub fn insert_if_absent(&mut self, key: &str, value: impl Into<FieldValue>) {
        if !self.fields.contains_key(key) {
            self.fields.insert(key.to_string(), value.into());
        }
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMap
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl IntoIterator for FieldMap {
    type Item = (String, FieldValue);
    type IntoIter = hash_map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldMap {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = hash_map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.fields.iter())
    }
}

/// Two signatures over the same canonical plaintext, uppercase hex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignaturePair {
    /// RSA with SHA-1
    pub sha1: String,
    /// RSA with SHA-512
    pub sha512: String,
}

impl SignaturePair {
    /// Attach both signatures to a field map
    pub fn attach(self, fields: &mut FieldMap) {
        fields.insert(fields::SIGNATURE_ONE, self.sha1);
        fields.insert(fields::SIGNATURE_TWO, self.sha512);
    }
}

/// Server selection mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Live,
    Test,
}

impl Mode {
    /// Integer flag form, 1 for test mode
    pub fn as_flag(&self) -> i64 {
        match self {
            Mode::Live => 0,
            Mode::Test => 1,
        }
    }
}

impl TryFrom<i64> for Mode {
    type Error = crate::VerifoneError;

    fn try_from(value: i64) -> crate::Result<Self> {
        match value {
            0 => Ok(Mode::Live),
            1 => Ok(Mode::Test),
            _ => {
                tracing::debug!(value, "Wrong value for test mode");
                Err(crate::VerifoneError::invalid_configuration(
                    "Test mode can be 1 or 0",
                ))
            }
        }
    }
}

/// What to do when the processor answers with an error-message field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Return [`crate::VerifoneError::ProcessorError`]
    #[default]
    Raise,
    /// Hand the unverified response back as data
    ReturnAsData,
}

impl TryFrom<i64> for ErrorPolicy {
    type Error = crate::VerifoneError;

    fn try_from(value: i64) -> crate::Result<Self> {
        match value {
            0 => Ok(ErrorPolicy::Raise),
            1 => Ok(ErrorPolicy::ReturnAsData),
            _ => Err(crate::VerifoneError::invalid_configuration(
                "Error return flag can be 1 or 0",
            )),
        }
    }
}

/// Field names used by the protocol.
///
/// Names encode type, optionality and length bounds, e.g. `s-f-1-36_` is a
/// mandatory string of 1 to 36 characters.
pub mod fields {
    pub const OPERATION: &str = "s-f-1-30_operation";
    pub const REQUEST_ID: &str = "l-f-1-20_request-id";
    pub const REQUEST_TIMESTAMP: &str = "t-f-14-19_request-timestamp";
    pub const MERCHANT_AGREEMENT_CODE: &str = "s-f-1-36_merchant-agreement-code";
    pub const SOFTWARE: &str = "s-f-1-30_software";
    pub const SOFTWARE_VERSION: &str = "s-f-1-10_software-version";
    pub const INTERFACE_VERSION: &str = "i-f-1-11_interface-version";

    pub const SIGNATURE_ONE: &str = "s-t-256-256_signature-one";
    pub const SIGNATURE_TWO: &str = "s-t-256-256_signature-two";
    pub const ERROR_MESSAGE: &str = "s-f-1-30_error-message";
    /// Returned by the processor but not covered by its signatures
    pub const SHOP_ORDER_PHASE: &str = "s-t-1-40_shop-order__phase";

    pub const CURRENCY_CODE: &str = "i-f-1-3_currency-code";
    pub const ORDER_CURRENCY_CODE: &str = "i-f-1-3_order-currency-code";
    pub const REFUND_CURRENCY_CODE: &str = "i-f-1-3_refund-currency-code";
    pub const SAVED_PAYMENT_METHOD_ID: &str = "l-t-1-20_saved-payment-method-id";
    pub const ORDER_NUMBER: &str = "s-f-1-36_order-number";
    pub const PAYMENT_LINK_NUMBER: &str = "s-t-1-36_payment-link-number";
    pub const ORDER_EXPIRY_TIMESTAMP: &str = "t-f-14-19_order-expiry-timestamp";
    pub const PAYMENT_TIMESTAMP: &str = "t-f-14-19_payment-timestamp";
    pub const ORDER_TIMESTAMP: &str = "t-f-14-19_order-timestamp";
    pub const DELIVERY_COUNTRY_CODE: &str = "i-t-1-3_delivery-address-country-code";

    pub const PAYMENT_TOKEN: &str = "s-f-32-32_payment-token";
    pub const PAYMENT_LOCALE: &str = "locale-f-2-5_payment-locale";
    pub const ORDER_VAT_PERCENTAGE: &str = "i-t-1-4_order-vat-percentage";
    pub const ORDER_GROSS_AMOUNT: &str = "l-f-1-20_order-gross-amount";
    pub const ORDER_NET_AMOUNT: &str = "l-f-1-20_order-net-amount";
    pub const ORDER_VAT_AMOUNT: &str = "l-f-1-20_order-vat-amount";
    pub const BUYER_FIRST_NAME: &str = "s-f-1-30_buyer-first-name";
    pub const BUYER_LAST_NAME: &str = "s-f-1-30_buyer-last-name";
    pub const BUYER_EMAIL: &str = "s-f-1-100_buyer-email-address";
    pub const BUYER_PHONE: &str = "s-t-1-30_buyer-phone-number";
    pub const BUYER_EXTERNAL_ID: &str = "s-t-1-255_buyer-external-id";
    pub const DELIVERY_LINE_ONE: &str = "s-t-1-30_delivery-address-line-one";
    pub const DELIVERY_LINE_TWO: &str = "s-t-1-30_delivery-address-line-two";
    pub const DELIVERY_LINE_THREE: &str = "s-t-1-30_delivery-address-line-three";
    pub const DELIVERY_CITY: &str = "s-t-1-30_delivery-address-city";
    pub const DELIVERY_POSTAL_CODE: &str = "s-t-1-30_delivery-address-postal-code";
    pub const STYLE_CODE: &str = "s-t-1-30_style-code";
    pub const CANCEL_URL: &str = "s-f-5-256_cancel-url";
    pub const ERROR_URL: &str = "s-f-5-256_error-url";
    pub const EXPIRED_URL: &str = "s-f-5-256_expired-url";
    pub const REJECTED_URL: &str = "s-f-5-256_rejected-url";
    pub const SUCCESS_URL: &str = "s-f-5-256_success-url";
    pub const SERVER_SUCCESS_URL: &str = "s-t-5-256_change-server-to-server-success-url";
    pub const SKIP_CONFIRMATION_PAGE: &str = "i-t-1-1_skip-confirmation-page";
    pub const SAVE_PAYMENT_METHOD: &str = "i-t-1-1_save-payment-method";
    pub const PAYMENT_METHOD_CODE: &str = "s-t-1-30_payment-method-code";
    pub const ORDER_NOTE: &str = "s-t-1-36_order-note";
    pub const DYNAMIC_FEEDBACK: &str = "s-t-1-1024_dynamic-feedback";

    pub const BASKET_NAME: &str = "s-t-1-30_bi-name";
    pub const BASKET_UNIT_COUNT: &str = "i-t-1-11_bi-unit-count";
    pub const BASKET_VAT_PERCENTAGE: &str = "i-t-1-4_bi-vat-percentage";
    pub const BASKET_DISCOUNT_PERCENTAGE: &str = "i-t-1-4_bi-discount-percentage";
    pub const BASKET_NET_AMOUNT: &str = "l-t-1-20_bi-net-amount";
    pub const BASKET_GROSS_AMOUNT: &str = "l-t-1-20_bi-gross-amount";
    pub const BASKET_UNIT_GROSS_COST: &str = "l-t-1-20_bi-unit-gross-cost";
    pub const BASKET_UNIT_COST: &str = "l-t-1-20_bi-unit-cost";

    /// Indexed name of a basket item field, e.g. `s-t-1-30_bi-name-0`
    pub fn indexed(field: &str, index: usize) -> String {
        format!("{}-{}", field, index)
    }
}

/// Operation names understood by the server interface
pub mod operations {
    pub const IS_AVAILABLE: &str = "is-available";
    pub const LIST_PAYMENT_METHODS: &str = "list-payment-methods";
    pub const CANCEL_PAYMENT: &str = "cancel-payment";
    pub const LIST_SAVED_PAYMENT_METHODS: &str = "list-saved-payment-methods";
    pub const REMOVE_SAVED_PAYMENT_METHOD: &str = "remove-saved-payment-method";
    pub const REFUND_PAYMENT: &str = "refund-payment";
    pub const PROCESS_PAYMENT: &str = "process-payment";
    pub const PROCESS_SUPPLEMENTARY: &str = "process-supplementary";
    pub const GET_PAYMENT_STATUS: &str = "get-payment-status";
    pub const LIST_TRANSACTION_NUMBERS: &str = "list-transaction-numbers";
    pub const GENERATE_PAYMENT_LINK: &str = "generate-payment-link";
    pub const GET_PAYMENT_LINK_STATUS: &str = "get-payment-link-status";
    pub const REACTIVATE_PAYMENT_LINK: &str = "reactivate-payment-link";
}
