//! Field transformations applied before signing

use crate::iso;
use crate::types::{fields, FieldMap, FieldValue};
use crate::{Result, VerifoneError};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt::Display;

/// Currency used when a constructor is given an unusable code
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Validate an alphabetic ISO 4217 code and return it uppercased.
///
/// Rejects empty values, values that are not exactly three characters,
/// values with non-letters and codes missing from the registry.
pub fn validate_currency(value: &str) -> Result<String> {
    if value.is_empty() {
        tracing::debug!("Mandatory currency can not be empty");
        return Err(VerifoneError::invalid_currency(
            "Mandatory currency can not be empty",
        ));
    }
    if value.chars().count() != 3 {
        tracing::debug!(value, "The length of the currency code is not 3");
        return Err(VerifoneError::invalid_currency(
            "The length of the currency code is not 3",
        ));
    }
    if !value.chars().all(char::is_alphabetic) {
        tracing::debug!(value, "Only letters are allowed");
        return Err(VerifoneError::invalid_currency("Only letters are allowed"));
    }

    let code = value.to_uppercase();
    if iso::currency_numeric(&code).is_none() {
        return Err(VerifoneError::invalid_currency(format!(
            "Unknown currency {}",
            code
        )));
    }
    Ok(code)
}

/// Lenient variant of [`validate_currency`] used at construction time:
/// anything it would reject becomes [`DEFAULT_CURRENCY`].
pub fn currency_or_default(value: &str) -> String {
    match validate_currency(value) {
        Ok(code) => code,
        Err(_) => {
            tracing::debug!(value, "Default currency is used instead");
            DEFAULT_CURRENCY.to_string()
        }
    }
}

/// Numeric ISO 4217 code of a stored alphabetic code
pub fn currency_numeric_code(alpha: &str) -> Result<&'static str> {
    iso::currency_numeric(alpha).ok_or_else(|| {
        tracing::debug!(currency = alpha, "Wrong currency saved");
        VerifoneError::invalid_currency("Incorrect currency")
    })
}

/// Convert an alphabetic ISO 3166 code to its numeric form.
///
/// Numeric values pass through unchanged.
pub fn normalize_country(value: &FieldValue) -> Result<FieldValue> {
    if !value.is_alphabetic() {
        return Ok(value.clone());
    }

    let code = value.to_string().to_uppercase();
    iso::country_numeric(&code)
        .map(FieldValue::from)
        .ok_or(VerifoneError::UnknownCountry { code })
}

/// Normalize the delivery country of a field map in place, if present
pub fn normalize_country_field(fields: &mut FieldMap) -> Result<()> {
    if let Some(value) = fields.get(fields::DELIVERY_COUNTRY_CODE) {
        let normalized = normalize_country(value)?;
        fields.insert(fields::DELIVERY_COUNTRY_CODE, normalized);
    }
    Ok(())
}

/// Scale a major-unit amount to integer minor units: `round(x * 100)`.
///
/// Ties round to even, so `0.125` becomes `12`.
pub fn to_minor_units(amount: Decimal) -> Result<i64> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|scaled| scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven))
        .and_then(|scaled| scaled.to_i64())
        .ok_or_else(|| VerifoneError::invalid_amount(format!("{} does not fit minor units", amount)))
}

/// Stringify `value` and cut it to at most `max_len` characters
pub fn substring(value: impl Display, max_len: usize) -> String {
    let text = value.to_string();
    match text.char_indices().nth(max_len) {
        Some((end, _)) => text[..end].to_string(),
        None => text,
    }
}
