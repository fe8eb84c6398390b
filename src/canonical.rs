//! Canonical plaintext used as signing input

use crate::types::FieldMap;

/// Build the canonical plaintext of a field map.
///
/// Keys are sorted by byte order, each entry is rendered as `key=value`,
/// entries are joined with `;` and a trailing `;` is appended. The result
/// depends only on the set of entries, never on insertion order.
pub fn canonicalize(fields: &FieldMap) -> Vec<u8> {
    let mut entries: Vec<_> = fields.iter().collect();
    entries.sort_unstable_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));

    let mut plaintext = entries
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(";");
    plaintext.push(';');

    tracing::debug!(plaintext = %plaintext, "Plaintext for signature");

    plaintext.into_bytes()
}
