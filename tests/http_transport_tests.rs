//! Client over real HTTP against a mock server

mod common;

use common::{config, form_encode, init_tracing, merchant_private_pem, processor_public_pem, sign_as_processor};
use mockito::Matcher;
use std::io::Write;
use tempfile::NamedTempFile;
use verifone_epayment::{
    fields, ClientConfig, Endpoints, FieldMap, Mode, VerifoneClient, VerifoneError,
};

fn availability_body() -> Vec<u8> {
    form_encode(&sign_as_processor(
        FieldMap::new()
            .with(fields::OPERATION, "is-available")
            .with("i-f-1-1_availability", "2")
            .with("t-f-14-19_response-timestamp", "2018-08-03 06:59:52"),
    ))
}

#[test]
fn test_is_available_over_http() {
    init_tracing();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/pw/serverinterface")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("s-f-1-30_operation".into(), "is-available".into()),
            Matcher::UrlEncoded(
                "s-f-1-36_merchant-agreement-code".into(),
                common::AGREEMENT_CODE.into(),
            ),
        ]))
        .with_status(200)
        .with_body(availability_body())
        .create();

    let client =
        VerifoneClient::new(config().with_endpoints(Endpoints::single(server.url()))).unwrap();
    let response = client.is_available().unwrap();

    mock.assert();
    assert_eq!(
        response.get_string("i-f-1-1_availability").as_deref(),
        Some("2")
    );
    assert_eq!(
        response.get_string("t-f-14-19_response-timestamp").as_deref(),
        Some("2018-08-03 06:59:52")
    );
}

#[test]
fn test_http_error_status() {
    init_tracing();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/pw/serverinterface")
        .with_status(503)
        .with_body("Service Unavailable")
        .create();

    let client = VerifoneClient::new(
        config()
            .with_mode(Mode::Test)
            .with_endpoints(Endpoints::single(server.url())),
    )
    .unwrap();

    let err = client.is_available().unwrap_err();
    mock.assert();
    assert!(
        matches!(err, VerifoneError::TransportFailure { status: 503, .. }),
        "unexpected error: {}",
        err
    );
    assert!(err.to_string().contains("Service Unavailable"));
}

#[test]
fn test_empty_body() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/pw/serverinterface")
        .with_status(200)
        .create();

    let client =
        VerifoneClient::new(config().with_endpoints(Endpoints::single(server.url()))).unwrap();
    assert!(matches!(
        client.is_available(),
        Err(VerifoneError::EmptyResponse)
    ));
}

#[test]
fn test_live_failover_over_http() {
    init_tracing();
    let mut server = mockito::Server::new();
    let primary_probe = server
        .mock("POST", "/primary")
        .with_status(503)
        .expect(1)
        .create();
    let secondary_probe = server
        .mock("POST", "/secondary")
        .match_body(Matcher::Exact(String::new()))
        .with_status(200)
        .expect(1)
        .create();
    let secondary = server
        .mock("POST", "/secondary")
        .match_body(Matcher::UrlEncoded(
            "s-f-1-30_operation".into(),
            "is-available".into(),
        ))
        .with_status(200)
        .with_body(availability_body())
        .expect(1)
        .create();

    let endpoints = Endpoints {
        live: vec![
            format!("{}/primary", server.url()),
            format!("{}/secondary", server.url()),
        ],
        ..Endpoints::single(server.url())
    };
    let client = VerifoneClient::new(config().with_endpoints(endpoints)).unwrap();

    client.is_available().unwrap();
    primary_probe.assert();
    secondary_probe.assert();
    secondary.assert();
}

#[test]
fn test_keys_from_files() {
    let mut private_file = NamedTempFile::new().unwrap();
    private_file
        .write_all(merchant_private_pem().as_bytes())
        .unwrap();
    let mut public_file = NamedTempFile::new().unwrap();
    public_file
        .write_all(processor_public_pem().as_bytes())
        .unwrap();

    let config = ClientConfig::new("demo-agreement-code", "", "", "IntegrationTest", "6.0.37")
        .with_private_key_file(private_file.path())
        .unwrap()
        .with_processor_key_file(public_file.path())
        .unwrap();

    assert!(VerifoneClient::new(config).is_ok());
}

#[test]
fn test_missing_key_file() {
    let result = config().with_private_key_file("/nonexistent/merchant.pem");
    assert!(matches!(result, Err(VerifoneError::Io(_))));
}
