use httpmock::prelude::*;
use order_capture::domain::cart::{CartSnapshot, LineItem, Quantity};
use order_capture::domain::form::{ContactForm, FormField};
use order_capture::domain::payload::{FieldMapping, compose};
use order_capture::domain::ports::{SubmissionGateway, SubmissionOutcome};
use order_capture::infrastructure::http_gateway::HttpSubmissionGateway;
use reqwest::Url;
use rust_decimal_macros::dec;

fn payload() -> order_capture::domain::payload::OrderPayload {
    let mut form = ContactForm::new();
    form.set(FormField::Name, "Linh");
    form.set(FormField::Email, "a@b.com");
    form.set(FormField::Phone, "0901234567");
    form.set(FormField::Address, "123 Main St");
    let cart = CartSnapshot::new(
        vec![LineItem::new("Latte", Quantity::new(2).unwrap(), "50,000")],
        dec!(100000),
    );
    compose(&form, &cart, &FieldMapping::default())
}

fn gateway(url: String) -> HttpSubmissionGateway {
    HttpSubmissionGateway::new(Url::parse(&url).unwrap()).unwrap()
}

#[tokio::test]
async fn test_posts_form_encoded_entries() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/formResponse")
                .header("content-type", "application/x-www-form-urlencoded")
                .x_www_form_urlencoded_tuple("entry.1013124254", "Linh")
                .x_www_form_urlencoded_tuple("entry.153116173", "a@b.com")
                .x_www_form_urlencoded_tuple("entry.1776952615", "123 Main St")
                .body_contains("entry.684873411=");
            then.status(200);
        })
        .await;

    let outcome = gateway(server.url("/formResponse")).submit(&payload()).await;

    assert_eq!(outcome, SubmissionOutcome::Sent);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_is_still_sent() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/formResponse");
            then.status(400).body("validation failed");
        })
        .await;

    let outcome = gateway(server.url("/formResponse")).submit(&payload()).await;

    assert_eq!(outcome, SubmissionOutcome::Sent);
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error() {
    let outcome = gateway("http://127.0.0.1:1/formResponse".to_string())
        .submit(&payload())
        .await;

    assert!(matches!(outcome, SubmissionOutcome::TransportError(_)));
}
