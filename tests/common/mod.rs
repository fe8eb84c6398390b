//! Shared fixtures: key pairs and an in-memory processor

#![allow(dead_code)]

use rsa::pkcs1::EncodeRsaPrivateKey;
use rsa::pkcs8::{EncodePublicKey, LineEnding};
use rsa::RsaPrivateKey;
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, OnceLock};
use verifone_epayment::{
    canonicalize, fields, ClientConfig, FieldMap, Result, Signer, SignaturePair, Transport,
    TransportResponse, Verifier, VerifoneError,
};

pub const AGREEMENT_CODE: &str = "demo-agreement-code";
pub const SOFTWARE: &str = "IntegrationTest";
pub const SOFTWARE_VERSION: &str = "6.0.37";

static MERCHANT: OnceLock<RsaPrivateKey> = OnceLock::new();
static PROCESSOR: OnceLock<RsaPrivateKey> = OnceLock::new();

fn generate() -> RsaPrivateKey {
    RsaPrivateKey::new(&mut rand::thread_rng(), 1024).unwrap()
}

pub fn merchant_key() -> &'static RsaPrivateKey {
    MERCHANT.get_or_init(generate)
}

pub fn processor_key() -> &'static RsaPrivateKey {
    PROCESSOR.get_or_init(generate)
}

pub fn merchant_private_pem() -> String {
    merchant_key().to_pkcs1_pem(LineEnding::LF).unwrap().to_string()
}

pub fn processor_public_pem() -> String {
    processor_key()
        .to_public_key()
        .to_public_key_pem(LineEnding::LF)
        .unwrap()
}

pub fn config() -> ClientConfig {
    ClientConfig::new(
        AGREEMENT_CODE,
        merchant_private_pem(),
        processor_public_pem(),
        SOFTWARE,
        SOFTWARE_VERSION,
    )
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Check the merchant signatures on an outgoing request
pub fn verify_request(request: &FieldMap) -> Result<()> {
    let mut values = request.clone();
    let sha1 = values.remove(fields::SIGNATURE_ONE);
    let sha512 = values.remove(fields::SIGNATURE_TWO);
    let (sha1, sha512) = match (sha1, sha512) {
        (Some(sha1), Some(sha512)) => (sha1.to_string(), sha512.to_string()),
        _ => return Err(VerifoneError::signature_verification_failed("unsigned request")),
    };

    Verifier::new(merchant_key().to_public_key())
        .verify_pair(&canonicalize(&values), &SignaturePair { sha1, sha512 })
}

/// Sign fields the way the processor does
pub fn sign_as_processor(mut response: FieldMap) -> FieldMap {
    Signer::new(processor_key().clone())
        .sign_fields(&response)
        .unwrap()
        .attach(&mut response);
    response
}

pub fn form_encode(fields: &FieldMap) -> Vec<u8> {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in fields {
        serializer.append_pair(key, &value.to_string());
    }
    serializer.finish().into_bytes()
}

/// Scripted answer of the in-memory processor
pub enum Reply {
    /// Fields signed with the processor key
    Signed(FieldMap),
    /// Fields sent as they are
    Unsigned(FieldMap),
    Raw { status: u16, body: Vec<u8> },
}

/// Processor double: answers queued replies, or a signed echo of the
/// operation when the queue is empty, and records every request
#[derive(Default)]
pub struct MockProcessor {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<(String, FieldMap)>>,
    probe_statuses: HashMap<String, u16>,
}

impl MockProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status answered to empty probe requests per URL; unknown URLs get 200
    pub fn with_probe_status(mut self, url: &str, status: u16) -> Self {
        self.probe_statuses.insert(url.to_string(), status);
        self
    }

    pub fn reply(&self, reply: Reply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    /// Requests carrying fields, excluding endpoint probes
    pub fn requests(&self) -> Vec<(String, FieldMap)> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, fields)| !fields.is_empty())
            .cloned()
            .collect()
    }

    pub fn probes(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, fields)| fields.is_empty())
            .map(|(url, _)| url.clone())
            .collect()
    }

    pub fn last_request(&self) -> FieldMap {
        self.requests().pop().map(|(_, fields)| fields).unwrap()
    }

    fn echo(request: &FieldMap) -> FieldMap {
        let request_id = request.get_string(fields::REQUEST_ID).unwrap_or_default();
        FieldMap::new()
            .with(fields::OPERATION, request.get_string(fields::OPERATION).unwrap_or_default())
            .with(fields::REQUEST_ID, request_id.as_str())
            .with("l-f-1-20_response-id", request_id)
            .with("t-f-14-19_response-timestamp", "2018-06-12 11:03:10")
    }
}

impl Transport for MockProcessor {
    fn post_form(&self, url: &str, request: &FieldMap) -> Result<TransportResponse> {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), request.clone()));

        if request.is_empty() {
            let status = self.probe_statuses.get(url).copied().unwrap_or(200);
            return Ok(TransportResponse { status, body: Vec::new() });
        }

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Reply::Signed(Self::echo(request)));

        Ok(match reply {
            Reply::Signed(fields) => TransportResponse {
                status: 200,
                body: form_encode(&sign_as_processor(fields)),
            },
            Reply::Unsigned(fields) => TransportResponse {
                status: 200,
                body: form_encode(&fields),
            },
            Reply::Raw { status, body } => TransportResponse { status, body },
        })
    }
}
