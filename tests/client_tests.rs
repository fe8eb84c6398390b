//! End-to-end client tests against an in-memory processor

mod common;

use common::{config, init_tracing, verify_request, MockProcessor, Reply, AGREEMENT_CODE};
use rust_decimal::Decimal;
use std::str::FromStr;
use verifone_epayment::transport::{LIVE_ENDPOINT, LIVE_ENDPOINT_SECONDARY, TEST_ENDPOINT};
use verifone_epayment::{
    fields, operations, payment_token, BasketItem, Endpoints, ErrorPolicy, FieldMap, Mode,
    PaymentData, ReturnUrls, VerifoneClient, VerifoneError,
};

fn test_client(processor: &MockProcessor) -> VerifoneClient<&MockProcessor> {
    init_tracing();
    VerifoneClient::with_transport(config().with_mode(Mode::Test), processor).unwrap()
}

fn text(fields: &FieldMap, key: &str) -> String {
    fields.get_string(key).unwrap_or_default()
}

fn urls() -> ReturnUrls {
    ReturnUrls {
        cancel: "https://cancel.url".to_string(),
        error: "https://error.url".to_string(),
        expired: "https://expired.url".to_string(),
        rejected: "https://rejected.url".to_string(),
        success: "https://success.url".to_string(),
        success_server: "https://server.success.url".to_string(),
    }
}

#[test]
fn test_is_available() {
    let processor = MockProcessor::new();
    let client = test_client(&processor);
    processor.reply(Reply::Signed(
        FieldMap::new()
            .with(fields::OPERATION, operations::IS_AVAILABLE)
            .with("i-f-1-1_availability", "2")
            .with(fields::REQUEST_ID, "2018061214031073563"),
    ));

    let response = client.is_available().unwrap();
    assert_eq!(text(&response, "i-f-1-1_availability"), "2");

    let requests = processor.requests();
    assert_eq!(requests.len(), 1);
    let (url, request) = &requests[0];
    assert_eq!(url, TEST_ENDPOINT);
    assert_eq!(text(request, fields::OPERATION), "is-available");
    assert_eq!(text(request, fields::MERCHANT_AGREEMENT_CODE), AGREEMENT_CODE);
    assert_eq!(text(request, fields::SOFTWARE), "IntegrationTest");
    assert_eq!(text(request, fields::SOFTWARE_VERSION), "6.0.37");
    assert_eq!(text(request, fields::INTERFACE_VERSION), "5");
    assert!(request.contains_key(fields::REQUEST_ID));
    assert!(request.contains_key(fields::REQUEST_TIMESTAMP));
    verify_request(request).unwrap();
}

#[test]
fn test_signatures_are_uppercase_hex() {
    let processor = MockProcessor::new();
    let client = test_client(&processor);
    client.is_available().unwrap();

    let request = processor.last_request();
    for key in [fields::SIGNATURE_ONE, fields::SIGNATURE_TWO] {
        let signature = text(&request, key);
        // 1024-bit keys give 128-byte signatures
        assert_eq!(signature.len(), 256);
        assert!(signature
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }
}

#[test]
fn test_list_payment_methods_sends_currency() {
    let processor = MockProcessor::new();
    let mut client = test_client(&processor);

    client.list_payment_methods().unwrap();
    assert_eq!(text(&processor.last_request(), fields::CURRENCY_CODE), "978");

    client.set_currency("SEK").unwrap();
    client.list_payment_methods().unwrap();
    let request = processor.last_request();
    assert_eq!(text(&request, fields::OPERATION), "list-payment-methods");
    assert_eq!(text(&request, fields::CURRENCY_CODE), "752");
    verify_request(&request).unwrap();
}

#[test]
fn test_cancel_payment() {
    let processor = MockProcessor::new();
    let client = test_client(&processor);

    let data = FieldMap::new()
        .with(fields::PAYMENT_METHOD_CODE, "visa")
        .with("l-f-1-20_transaction-number", 2_620_000_i64);
    client.cancel_payment(data).unwrap();

    let request = processor.last_request();
    assert_eq!(text(&request, fields::OPERATION), "cancel-payment");
    assert_eq!(text(&request, fields::PAYMENT_METHOD_CODE), "visa");
    assert_eq!(text(&request, "l-f-1-20_transaction-number"), "2620000");
    verify_request(&request).unwrap();
}

#[test]
fn test_saved_payment_methods() {
    let processor = MockProcessor::new();
    let client = test_client(&processor);

    let data = FieldMap::new()
        .with(fields::BUYER_FIRST_NAME, "Test")
        .with(fields::BUYER_LAST_NAME, "Tester")
        .with(fields::DELIVERY_COUNTRY_CODE, "246");
    client.list_saved_payment_methods(data).unwrap();
    let request = processor.last_request();
    assert_eq!(text(&request, fields::OPERATION), "list-saved-payment-methods");
    assert_eq!(text(&request, fields::BUYER_LAST_NAME), "Tester");

    processor.reply(Reply::Signed(
        FieldMap::new().with("l-t-1-10_removed-count", "1"),
    ));
    let response = client.remove_saved_payment_method(123_i64).unwrap();
    assert_eq!(text(&response, "l-t-1-10_removed-count"), "1");

    let request = processor.last_request();
    assert_eq!(text(&request, fields::OPERATION), "remove-saved-payment-method");
    assert_eq!(text(&request, fields::SAVED_PAYMENT_METHOD_ID), "123");
}

#[test]
fn test_refund_payment_adds_refund_currency() {
    let processor = MockProcessor::new();
    let client = test_client(&processor);

    let data = FieldMap::new()
        .with("l-f-1-20_refund-amount", 100_i64)
        .with(fields::PAYMENT_METHOD_CODE, "visa")
        .with("l-f-1-20_transaction-number", 2_620_000_i64);
    client.refund_payment(data).unwrap();

    let request = processor.last_request();
    assert_eq!(text(&request, fields::OPERATION), "refund-payment");
    assert_eq!(text(&request, fields::REFUND_CURRENCY_CODE), "978");
    assert_eq!(text(&request, "l-f-1-20_refund-amount"), "100");
}

#[test]
fn test_process_payment_defaults() {
    let processor = MockProcessor::new();
    let client = test_client(&processor);

    let data = FieldMap::new()
        .with(fields::ORDER_NUMBER, "58459")
        .with(fields::ORDER_GROSS_AMOUNT, 2)
        .with(fields::DELIVERY_COUNTRY_CODE, "fi")
        .with(fields::SAVED_PAYMENT_METHOD_ID, 123_i64);
    client.process_payment(data).unwrap();

    let request = processor.last_request();
    assert_eq!(text(&request, fields::OPERATION), "process-payment");
    assert_eq!(text(&request, fields::ORDER_CURRENCY_CODE), "978");
    assert_eq!(text(&request, fields::DELIVERY_COUNTRY_CODE), "246");
    assert_eq!(text(&request, fields::PAYMENT_TIMESTAMP).len(), 19);
    assert_eq!(
        text(&request, fields::PAYMENT_TIMESTAMP),
        text(&request, fields::ORDER_TIMESTAMP)
    );
    verify_request(&request).unwrap();
}

#[test]
fn test_process_payment_keeps_caller_values() {
    let processor = MockProcessor::new();
    let client = test_client(&processor);

    let data = FieldMap::new()
        .with(fields::ORDER_NUMBER, "58459")
        .with(fields::PAYMENT_TIMESTAMP, "2018-08-02 09:14:12")
        .with(fields::ORDER_CURRENCY_CODE, "840")
        .with(fields::DELIVERY_COUNTRY_CODE, "246");
    client.process_payment(data).unwrap();

    let request = processor.last_request();
    assert_eq!(text(&request, fields::PAYMENT_TIMESTAMP), "2018-08-02 09:14:12");
    assert_eq!(text(&request, fields::ORDER_CURRENCY_CODE), "840");
    assert_eq!(text(&request, fields::DELIVERY_COUNTRY_CODE), "246");
}

#[test]
fn test_unknown_country_sends_nothing() {
    let processor = MockProcessor::new();
    let client = test_client(&processor);

    let data = FieldMap::new().with(fields::DELIVERY_COUNTRY_CODE, "XX");
    match client.process_payment(data.clone()) {
        Err(VerifoneError::UnknownCountry { code }) => assert_eq!(code, "XX"),
        other => panic!("expected unknown country, got {:?}", other),
    }
    assert!(client.generate_payment_link(data).is_err());
    assert!(processor.requests().is_empty());
}

#[test]
fn test_process_supplementary() {
    let processor = MockProcessor::new();
    let client = test_client(&processor);

    let data = FieldMap::new()
        .with("l-f-1-20_original-transaction-number", "2620000")
        .with(fields::ORDER_GROSS_AMOUNT, 2);
    client.process_supplementary(data).unwrap();

    let request = processor.last_request();
    assert_eq!(text(&request, fields::OPERATION), "process-supplementary");
    assert_eq!(text(&request, fields::ORDER_CURRENCY_CODE), "978");
}

#[test]
fn test_payment_status_and_transactions() {
    let processor = MockProcessor::new();
    let client = test_client(&processor);

    client
        .get_payment_status(
            FieldMap::new()
                .with(fields::PAYMENT_METHOD_CODE, "visa")
                .with("l-f-1-20_transaction-number", "2620000"),
        )
        .unwrap();
    let request = processor.last_request();
    assert_eq!(text(&request, fields::OPERATION), "get-payment-status");
    assert_eq!(text(&request, "l-f-1-20_transaction-number"), "2620000");

    client.list_transaction_numbers("58459").unwrap();
    let request = processor.last_request();
    assert_eq!(text(&request, fields::OPERATION), "list-transaction-numbers");
    assert_eq!(text(&request, fields::ORDER_NUMBER), "58459");
}

#[test]
fn test_payment_links() {
    let processor = MockProcessor::new();
    let client = test_client(&processor);

    let data = FieldMap::new()
        .with(fields::ORDER_NUMBER, "58459")
        .with(fields::ORDER_GROSS_AMOUNT, 151)
        .with(fields::DELIVERY_COUNTRY_CODE, "se");
    client.generate_payment_link(data).unwrap();
    let request = processor.last_request();
    assert_eq!(text(&request, fields::OPERATION), "generate-payment-link");
    assert_eq!(text(&request, fields::ORDER_CURRENCY_CODE), "978");
    assert_eq!(text(&request, fields::DELIVERY_COUNTRY_CODE), "752");

    processor.reply(Reply::Signed(
        FieldMap::new().with("s-f-1-30_payment-link-status", "new"),
    ));
    let status = client.get_payment_link_status(12_345_678_i64).unwrap();
    assert_eq!(text(&status, "s-f-1-30_payment-link-status"), "new");
    let request = processor.last_request();
    assert_eq!(text(&request, fields::OPERATION), "get-payment-link-status");
    assert_eq!(text(&request, fields::PAYMENT_LINK_NUMBER), "12345678");

    client
        .reactivate_payment_link(12_345_678_i64, "2018-09-01 12:00:00")
        .unwrap();
    let request = processor.last_request();
    assert_eq!(text(&request, fields::OPERATION), "reactivate-payment-link");
    assert_eq!(
        text(&request, fields::ORDER_EXPIRY_TIMESTAMP),
        "2018-09-01 12:00:00"
    );
    verify_request(&request).unwrap();
}

#[test]
fn test_tampered_response_rejected() {
    let processor = MockProcessor::new();
    let client = test_client(&processor);

    let mut response = common::sign_as_processor(
        FieldMap::new().with("i-f-1-1_availability", "2"),
    );
    response.insert("i-f-1-1_availability", "0");
    processor.reply(Reply::Unsigned(response));

    let err = client.is_available().unwrap_err();
    assert!(err.is_untrusted_response(), "unexpected error: {}", err);
}

#[test]
fn test_unsigned_response_rejected() {
    let processor = MockProcessor::new();
    let client = test_client(&processor);
    processor.reply(Reply::Unsigned(
        FieldMap::new().with("i-f-1-1_availability", "2"),
    ));

    assert!(matches!(
        client.is_available(),
        Err(VerifoneError::SignatureVerificationFailed { .. })
    ));
}

#[test]
fn test_shop_order_phase_not_signed() {
    let processor = MockProcessor::new();
    let client = test_client(&processor);

    let mut response = common::sign_as_processor(
        FieldMap::new().with("i-f-1-1_availability", "2"),
    );
    response.insert(fields::SHOP_ORDER_PHASE, "payment-page");
    processor.reply(Reply::Unsigned(response));

    let response = client.is_available().unwrap();
    assert_eq!(text(&response, fields::SHOP_ORDER_PHASE), "payment-page");
}

#[test]
fn test_processor_error_policy() {
    let processor = MockProcessor::new();
    let mut client = test_client(&processor);
    let error = || {
        Reply::Unsigned(
            FieldMap::new()
                .with(fields::ERROR_MESSAGE, "invalid-request")
                .with(fields::REQUEST_ID, "1"),
        )
    };

    processor.reply(error());
    match client.is_available() {
        Err(VerifoneError::ProcessorError { message }) => assert_eq!(message, "invalid-request"),
        other => panic!("expected processor error, got {:?}", other),
    }

    client.set_error_policy(ErrorPolicy::ReturnAsData);
    processor.reply(error());
    let response = client.is_available().unwrap();
    assert_eq!(text(&response, fields::ERROR_MESSAGE), "invalid-request");
}

#[test]
fn test_transport_failure() {
    let processor = MockProcessor::new();
    let client = test_client(&processor);
    processor.reply(Reply::Raw {
        status: 500,
        body: b"Internal Server Error".to_vec(),
    });

    match client.is_available() {
        Err(VerifoneError::TransportFailure { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("expected transport failure, got {:?}", other),
    }
}

#[test]
fn test_empty_response() {
    let processor = MockProcessor::new();
    let client = test_client(&processor);
    processor.reply(Reply::Raw {
        status: 200,
        body: Vec::new(),
    });

    assert!(matches!(
        client.is_available(),
        Err(VerifoneError::EmptyResponse)
    ));
}

#[test]
fn test_live_mode_probes_endpoints() {
    init_tracing();
    let processor = MockProcessor::new().with_probe_status(LIVE_ENDPOINT, 503);
    let client = VerifoneClient::with_transport(config(), &processor).unwrap();

    client.is_available().unwrap();

    assert_eq!(processor.probes(), vec![LIVE_ENDPOINT, LIVE_ENDPOINT_SECONDARY]);
    assert_eq!(processor.requests()[0].0, LIVE_ENDPOINT_SECONDARY);
}

#[test]
fn test_live_mode_falls_back_to_primary() {
    init_tracing();
    let processor = MockProcessor::new()
        .with_probe_status(LIVE_ENDPOINT, 500)
        .with_probe_status(LIVE_ENDPOINT_SECONDARY, 502);
    let client = VerifoneClient::with_transport(config(), &processor).unwrap();

    client.is_available().unwrap();
    assert_eq!(processor.requests()[0].0, LIVE_ENDPOINT);
}

#[test]
fn test_single_endpoint_skips_probe() {
    init_tracing();
    let processor = MockProcessor::new();
    let config = config().with_endpoints(Endpoints::single("http://localhost:8080"));
    let client = VerifoneClient::with_transport(config, &processor).unwrap();

    client.is_available().unwrap();
    assert!(processor.probes().is_empty());
    assert_eq!(
        processor.requests()[0].0,
        "http://localhost:8080/pw/serverinterface"
    );
}

#[test]
fn test_generate_payment_data() {
    let processor = MockProcessor::new();
    let client = test_client(&processor);

    let mut data = PaymentData::new("58459", "fi_FI", "Test", "Tester", "test@test.com", urls());
    data.amount_gross = Some(Decimal::from_str("1.51").unwrap());
    data.amount_net = Some(Decimal::from_str("1.22").unwrap());
    data.vat_amount = Some(Decimal::from_str("0.29").unwrap());
    data.country = Some("fi".to_string());
    data.payment_timestamp = Some("2018-08-02 09:14:12".to_string());
    data.products = vec![BasketItem::new("Product", 1, Decimal::from_str("24.00").unwrap())
        .with_amount_gross(Decimal::from_str("1.51").unwrap())];

    let form = client.generate_payment_data(&data).unwrap();

    assert_eq!(
        text(&form, fields::PAYMENT_TOKEN),
        payment_token(AGREEMENT_CODE, "58459", "2018-08-02 09:14:12")
    );
    assert_eq!(text(&form, fields::ORDER_CURRENCY_CODE), "978");
    assert_eq!(text(&form, fields::ORDER_GROSS_AMOUNT), "151");
    assert_eq!(text(&form, fields::ORDER_NET_AMOUNT), "122");
    assert_eq!(text(&form, fields::ORDER_VAT_AMOUNT), "29");
    assert_eq!(text(&form, fields::DELIVERY_COUNTRY_CODE), "246");
    assert_eq!(text(&form, &fields::indexed(fields::BASKET_NAME, 0)), "Product");
    verify_request(&form).unwrap();

    // nothing goes over the wire
    assert!(processor.requests().is_empty());
    assert_eq!(
        client.payment_page_url(),
        "https://epayment.test.point.fi/pw/payment"
    );
}

#[test]
fn test_verify_browser_return() {
    let processor = MockProcessor::new();
    let client = test_client(&processor);

    let mut returned = common::sign_as_processor(
        FieldMap::new()
            .with(fields::ORDER_NUMBER, "58459")
            .with("l-f-1-20_transaction-number", "2620000"),
    );
    client.verify_response(&returned).unwrap();

    returned.insert(fields::ORDER_NUMBER, "58460");
    assert!(client.verify_response(&returned).is_err());
}

#[test]
fn test_invalid_stored_currency_blocks_requests() {
    let processor = MockProcessor::new();
    let mut client = test_client(&processor);
    assert!(client.set_currency("XYZ").is_err());

    // still the previous, valid currency
    client.refund_payment(FieldMap::new()).unwrap();
    assert_eq!(
        text(&processor.last_request(), fields::REFUND_CURRENCY_CODE),
        "978"
    );
}
