//! RSA key pairs shared by unit tests, generated once per test binary

use rsa::pkcs1::EncodeRsaPrivateKey;
use rsa::pkcs8::{EncodePublicKey, LineEnding};
use rsa::RsaPrivateKey;
use std::sync::OnceLock;

static MERCHANT: OnceLock<RsaPrivateKey> = OnceLock::new();
static PROCESSOR: OnceLock<RsaPrivateKey> = OnceLock::new();

fn generate() -> RsaPrivateKey {
    RsaPrivateKey::new(&mut rand::thread_rng(), 1024).expect("key generation")
}

pub fn merchant_key() -> &'static RsaPrivateKey {
    MERCHANT.get_or_init(generate)
}

pub fn processor_key() -> &'static RsaPrivateKey {
    PROCESSOR.get_or_init(generate)
}

pub fn merchant_pem() -> String {
    merchant_key().to_pkcs1_pem(LineEnding::LF).expect("pem").to_string()
}

pub fn processor_public_pem() -> String {
    processor_key()
        .to_public_key()
        .to_public_key_pem(LineEnding::LF)
        .expect("pem")
}
