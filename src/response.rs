//! Parsing and validation of server interface responses

use crate::canonical::canonicalize;
use crate::crypto::Verifier;
use crate::types::{fields, ErrorPolicy, FieldMap, SignaturePair};
use crate::{Result, VerifoneError};

/// Parse a form-encoded response body into a field map.
///
/// Values are percent-decoded and `+` becomes a space, so timestamps such
/// as `2018-08-03+06%3A59%3A52` come out as `2018-08-03 06:59:52`.
pub fn parse_response(body: &[u8]) -> Result<FieldMap> {
    std::str::from_utf8(body)
        .map_err(|e| VerifoneError::malformed_response(format!("body is not UTF-8: {}", e)))?;

    let parsed: FieldMap = url::form_urlencoded::parse(body)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    tracing::debug!(fields = parsed.len(), "Parsed response");
    Ok(parsed)
}

/// Verify both processor signatures on a parsed response.
///
/// The signature fields and the unsigned shop-order phase are excluded from
/// the plaintext. Missing signatures count as a verification failure.
pub fn verify_response(response: &FieldMap, verifier: &Verifier) -> Result<()> {
    let mut values = response.clone();

    let sha1 = values.remove(fields::SIGNATURE_ONE);
    let sha512 = values.remove(fields::SIGNATURE_TWO);
    values.remove(fields::SHOP_ORDER_PHASE);

    let (sha1, sha512) = match (sha1, sha512) {
        (Some(sha1), Some(sha512)) => (sha1.to_string(), sha512.to_string()),
        _ => {
            return Err(VerifoneError::signature_verification_failed(
                "response is missing a signature",
            ))
        }
    };

    verifier.verify_pair(&canonicalize(&values), &SignaturePair { sha1, sha512 })
}

/// Apply the error policy and signature checks to a raw response body
pub fn handle_response(body: &[u8], policy: ErrorPolicy, verifier: &Verifier) -> Result<FieldMap> {
    let parsed = parse_response(body)?;

    if let Some(message) = parsed.get(fields::ERROR_MESSAGE) {
        tracing::debug!(error = %message, "Processor returned an error");
        return match policy {
            ErrorPolicy::ReturnAsData => Ok(parsed),
            ErrorPolicy::Raise => Err(VerifoneError::processor_error(message.to_string())),
        };
    }

    verify_response(&parsed, verifier)?;
    Ok(parsed)
}
