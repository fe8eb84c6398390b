//! RSA signing and verification for the server interface.
//!
//! Every request carries two PKCS#1 v1.5 signatures over the same canonical
//! plaintext, one computed with SHA-1 and one with SHA-512. Responses are
//! accepted only when both verify against the processor's public key.

use crate::canonical::canonicalize;
use crate::types::{FieldMap, SignaturePair};
use crate::{Result, VerifoneError};
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use std::fmt;
use std::str::FromStr;

/// Digest used underneath an RSA signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    Sha1,
    Sha512,
}

impl DigestAlgorithm {
    /// Protocol name of the digest
    pub fn as_str(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha1 => "SHA1",
            DigestAlgorithm::Sha512 => "SHA512",
        }
    }

    fn digest(&self, plaintext: &[u8]) -> Vec<u8> {
        match self {
            DigestAlgorithm::Sha1 => Sha1::digest(plaintext).to_vec(),
            DigestAlgorithm::Sha512 => Sha512::digest(plaintext).to_vec(),
        }
    }

    fn scheme(&self) -> Pkcs1v15Sign {
        match self {
            DigestAlgorithm::Sha1 => Pkcs1v15Sign::new::<Sha1>(),
            DigestAlgorithm::Sha512 => Pkcs1v15Sign::new::<Sha512>(),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = VerifoneError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "SHA1" | "SHA-1" => Ok(DigestAlgorithm::Sha1),
            "SHA512" | "SHA-512" => Ok(DigestAlgorithm::Sha512),
            _ => Err(VerifoneError::unsupported_digest(s)),
        }
    }
}

/// Sign `plaintext` and return the signature as uppercase hex
pub fn sign(
    plaintext: &[u8],
    algorithm: DigestAlgorithm,
    private_key: &RsaPrivateKey,
) -> Result<String> {
    let hashed = algorithm.digest(plaintext);
    let signature = private_key.sign(algorithm.scheme(), &hashed)?;
    Ok(hex::encode_upper(signature))
}

/// Sign with a digest given by name, failing on anything but SHA-1/SHA-512
pub fn sign_named(plaintext: &[u8], algorithm: &str, private_key: &RsaPrivateKey) -> Result<String> {
    sign(plaintext, algorithm.parse()?, private_key)
}

/// Check a hex signature over `plaintext`.
///
/// Malformed hex, a signature of the wrong length and a mismatch all
/// yield `false`.
pub fn verify(
    signature_hex: &str,
    algorithm: DigestAlgorithm,
    plaintext: &[u8],
    public_key: &RsaPublicKey,
) -> bool {
    let signature = match hex::decode(signature_hex) {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };
    let hashed = algorithm.digest(plaintext);
    public_key
        .verify(algorithm.scheme(), &hashed, &signature)
        .is_ok()
}

/// [`verify`] with a digest given by name; unknown names yield `false`
pub fn verify_named(
    signature_hex: &str,
    algorithm: &str,
    plaintext: &[u8],
    public_key: &RsaPublicKey,
) -> bool {
    match algorithm.parse() {
        Ok(algorithm) => verify(signature_hex, algorithm, plaintext, public_key),
        Err(_) => false,
    }
}

/// Token correlating a browser-initiated payment with the merchant.
///
/// First 32 hex characters of SHA-256 over
/// `agreement_code;order_number;payment_timestamp`, uppercased.
pub fn payment_token(agreement_code: &str, order_number: &str, payment_timestamp: &str) -> String {
    let plaintext = [agreement_code, order_number, payment_timestamp].join(";");
    tracing::debug!(plaintext = %plaintext, "Plaintext for payment token");

    let digest = hex::encode_upper(Sha256::digest(plaintext.as_bytes()));
    digest[..32].to_string()
}

/// Merchant side: signs outgoing field maps
#[derive(Clone)]
pub struct Signer {
    private_key: RsaPrivateKey,
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("private_key", &"<redacted>")
            .finish()
    }
}

impl Signer {
    /// Wrap an already parsed private key
    pub fn new(private_key: RsaPrivateKey) -> Self {
        Self { private_key }
    }

    /// Parse a PKCS#1 or PKCS#8 PEM private key
    pub fn from_pem(pem: &str) -> Result<Self> {
        let pem = pem.trim();
        let private_key = RsaPrivateKey::from_pkcs1_pem(pem)
            .or_else(|_| RsaPrivateKey::from_pkcs8_pem(pem))
            .map_err(|e| VerifoneError::invalid_key(format!("private key: {}", e)))?;
        Ok(Self { private_key })
    }

    /// Public half of the merchant key
    pub fn public_key(&self) -> RsaPublicKey {
        self.private_key.to_public_key()
    }

    /// Sign raw plaintext with one digest
    pub fn sign(&self, plaintext: &[u8], algorithm: DigestAlgorithm) -> Result<String> {
        sign(plaintext, algorithm, &self.private_key)
    }

    /// Compute both signatures over the canonical form of `fields`
    pub fn sign_fields(&self, fields: &FieldMap) -> Result<SignaturePair> {
        let plaintext = canonicalize(fields);
        Ok(SignaturePair {
            sha1: self.sign(&plaintext, DigestAlgorithm::Sha1)?,
            sha512: self.sign(&plaintext, DigestAlgorithm::Sha512)?,
        })
    }
}

/// Processor side: verifies incoming signatures
#[derive(Debug, Clone)]
pub struct Verifier {
    public_key: RsaPublicKey,
}

impl Verifier {
    /// Wrap an already parsed public key
    pub fn new(public_key: RsaPublicKey) -> Self {
        Self { public_key }
    }

    /// Parse a PKCS#1 or SubjectPublicKeyInfo PEM public key
    pub fn from_pem(pem: &str) -> Result<Self> {
        let pem = pem.trim();
        let public_key = RsaPublicKey::from_pkcs1_pem(pem)
            .or_else(|_| RsaPublicKey::from_public_key_pem(pem))
            .map_err(|e| VerifoneError::invalid_key(format!("public key: {}", e)))?;
        Ok(Self { public_key })
    }

    /// Check one signature
    pub fn verify(&self, signature_hex: &str, algorithm: DigestAlgorithm, plaintext: &[u8]) -> bool {
        verify(signature_hex, algorithm, plaintext, &self.public_key)
    }

    /// Require both signatures to verify over `plaintext`
    pub fn verify_pair(&self, plaintext: &[u8], signatures: &SignaturePair) -> Result<()> {
        for (signature, algorithm) in [
            (&signatures.sha1, DigestAlgorithm::Sha1),
            (&signatures.sha512, DigestAlgorithm::Sha512),
        ] {
            if !self.verify(signature, algorithm, plaintext) {
                tracing::debug!(
                    %algorithm,
                    plaintext = %String::from_utf8_lossy(plaintext),
                    "Signature verification failed"
                );
                return Err(VerifoneError::signature_verification_failed(format!(
                    "{} signature does not match",
                    algorithm
                )));
            }
        }
        Ok(())
    }
}
