use crate::mock::{MockHttpSend, RecordedRequest};
use crate::{authorization, test_client, EMPTY_DIGEST, TEST_DATE};
use anyhow::Result;
use http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use satispay::payments::{
    CreatePaymentRequest, Flow, ListPaymentsRequest, PaymentStatus, UpdateAction,
    UpdatePaymentRequest,
};
use satispay::{Context, ErrorKind};
use satispay_core::time::from_timestamp_millis;

const PAYMENT: &str = r#"{
    "id": "my-payment-id",
    "code_identifier": "S6Y-PAY--MY-PAYMENT",
    "type": "TO_BUSINESS",
    "amount_unit": 100,
    "currency": "EUR",
    "status": "PENDING",
    "expired": false,
    "receiver": {"id": "shop-id", "type": "SHOP"},
    "insert_date": "2000-01-01T00:00:00.000Z",
    "expire_date": "2000-01-01T00:25:00.000Z"
}"#;

fn assert_signed(
    req: &RecordedRequest,
    method: Method,
    uri: &str,
    digest: &str,
    signature: &str,
) {
    assert_eq!(req.method, method);
    assert_eq!(req.uri, uri);
    assert_eq!(req.headers["host"], "authservices.satispay.com");
    assert_eq!(req.headers["date"], TEST_DATE);
    assert_eq!(req.headers["digest"], digest);
    assert_eq!(req.headers["authorization"], authorization(signature).as_str());
    assert_eq!(req.headers["accept"], "application/json");
    assert_eq!(req.headers["content-type"], "application/json");
}

#[tokio::test]
async fn test_create_match_code() -> Result<()> {
    let http = MockHttpSend::new().respond(StatusCode::OK, PAYMENT);
    let client = test_client(Context::new().with_http_send(http.clone()));

    let payment = client
        .payments()
        .create(&CreatePaymentRequest::new(Flow::MatchCode, 100))
        .await?;
    assert_eq!(payment.id, "my-payment-id");
    assert_eq!(payment.status, PaymentStatus::Pending);

    let requests = http.requests();
    assert_eq!(requests.len(), 1);
    assert_signed(
        &requests[0],
        Method::POST,
        "https://authservices.satispay.com/g_business/v1/payments",
        "SHA-256=jWjmI6cdwHPUs3tNU1lXxaKxar4Kee+elPnr1dj2Pqg=",
        "mHSjbdftBVlPM1EuHN22x6JokZ05Z5M/qoO8bJ5x/AaWPvzjcC8UrDXqKO50jpyZV4dXGtZAU6AcnZa5PCgWGwu2IL9T79JpWENkHAnIGDvwjlXGkDxD0gcfh+5pn+JuH/jAGpPEWys9hn9FGwU7lmPEAhkFwPhlll+6Ks0IPvANwonTPARiCBXjYCtb8d2hDi41I7Dx7sh+9U8VEY9TBPkC/Danwe8Q65uwZeicGm8+rm2gvY8k+K/GIna1hJbjknwCbNt2UFzZuShdaVm3KlvMyGNHHeJELC+LZR0MIkmmiMB8nd/WwRdseN2PosM718kKBeD4H4Z9J9PQUPrTbw==",
    );
    assert_eq!(
        requests[0].body.as_ref(),
        br#"{"flow":"MATCH_CODE","amount_unit":100,"currency":"EUR"}"#
    );
    Ok(())
}

#[tokio::test]
async fn test_get_payment() -> Result<()> {
    let http = MockHttpSend::new().respond(StatusCode::OK, PAYMENT);
    let client = test_client(Context::new().with_http_send(http.clone()));

    let payment = client.payments().get("my-payment-id").await?;
    assert_eq!(payment.amount_unit, 100);

    let requests = http.requests();
    assert_signed(
        &requests[0],
        Method::GET,
        "https://authservices.satispay.com/g_business/v1/payments/my-payment-id",
        EMPTY_DIGEST,
        "sDeC7VJVzlOkzCqpZgdxj86kn02j4yT2xIeNvyxakeXlZY6Wdn2Al8tUwmdwC+GqaOuc9n21weu/HgjVBeC7o90ZTKQr6Iewp6GtOaa3uNqwhw9u9j2kZP81F68nRdd8y9V9kgAQxPsDBjUT3Q17y1munFCtsgNKGs0v1Pv1r++nJxXKHuyLZHBK8wk836R7Y5XV/lMCCYVWWOZ/Pa4vbVyTfCa2OzQN2Q7X7qhsbApe1rrT5trrojBfICk97duTVBikspJ3C5WaJ2YKxPjT7hVv/o9BQUaevE8WolOt+Su9z3XWJO8vheFk+pMo6WUlYkoQFT9drnHFMhCeGHOW+g==",
    );
    assert!(requests[0].body.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_list_payments_with_all_filters() -> Result<()> {
    let http = MockHttpSend::new().respond(
        StatusCode::OK,
        &format!(r#"{{"has_more":false,"data":[{PAYMENT}]}}"#),
    );
    let client = test_client(Context::new().with_http_send(http.clone()));

    let req = ListPaymentsRequest::new()
        .with_status(PaymentStatus::Canceled)
        .with_limit(42)
        .with_starting_after("my_starting_after")
        .with_starting_after_time(from_timestamp_millis(1_577_836_800_000)?);
    let resp = client.payments().list(&req).await?;
    assert!(!resp.has_more);
    assert_eq!(resp.data.len(), 1);
    assert_eq!(req.next_page(&resp), None);

    assert_signed(
        &http.requests()[0],
        Method::GET,
        "https://authservices.satispay.com/g_business/v1/payments?status=CANCELED&limit=42&starting_after=my_starting_after&starting_after_timestamp=1577836800000",
        EMPTY_DIGEST,
        "pdbaZrUiuruDLzCWuNf+XPVxGGMHU7K/TFPS63gTDHUusqq2qF4eK4JDFOSFL0mO6mjlIQ1yhGUuo40ViJFZtNDs3WflUyT6kQiPdjUpml8X8Jsg+0SOR2X8M+Xzf3W5syPTXol2bOsTuUo1qGLGjoUlnPHjWq78Dz4lU53ZbmYoa7UptHtYXaM2W9WVzXwQIPe5xGhA6LUoS0UEW/lUJ+DqKgYA1TA2u7X/OXGomWpjpFjRAwuR3zRLTjdqvk/w9YEc5/eOFbQu4xB3v71fd7e0ysdVl5HA+R9g5iuczDgX3jHVNzIhOHL5Uqvq0x/5mA4++rE1csTWraoJHnGNlQ==",
    );
    Ok(())
}

#[tokio::test]
async fn test_list_payments_walks_pages() -> Result<()> {
    let http = MockHttpSend::new()
        .respond(
            StatusCode::OK,
            &format!(r#"{{"has_more":true,"data":[{PAYMENT}]}}"#),
        )
        .respond(StatusCode::OK, r#"{"has_more":false,"data":[]}"#);
    let client = test_client(Context::new().with_http_send(http.clone()));

    let mut pages = 0;
    let mut req = Some(ListPaymentsRequest::new().with_limit(1));
    while let Some(page) = req {
        let resp = client.payments().list(&page).await?;
        pages += 1;
        req = page.next_page(&resp);
    }
    assert_eq!(pages, 2);

    let uris: Vec<_> = http.requests().into_iter().map(|r| r.uri).collect();
    assert_eq!(
        uris,
        vec![
            "https://authservices.satispay.com/g_business/v1/payments?limit=1".to_string(),
            "https://authservices.satispay.com/g_business/v1/payments?limit=1&starting_after=my-payment-id".to_string(),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_list_payments_without_filters() -> Result<()> {
    let http = MockHttpSend::new().respond(StatusCode::OK, r#"{"has_more":false,"data":[]}"#);
    let client = test_client(Context::new().with_http_send(http.clone()));

    client.payments().list(&ListPaymentsRequest::new()).await?;

    assert_eq!(
        http.requests()[0].uri,
        "https://authservices.satispay.com/g_business/v1/payments"
    );
    Ok(())
}

#[tokio::test]
async fn test_update_payment() -> Result<()> {
    let http = MockHttpSend::new().respond(StatusCode::OK, PAYMENT);
    let client = test_client(Context::new().with_http_send(http.clone()));

    client
        .payments()
        .update(&UpdatePaymentRequest::new(
            "my-payment-id",
            UpdateAction::CancelOrRefund,
        ))
        .await?;

    let requests = http.requests();
    assert_signed(
        &requests[0],
        Method::PUT,
        "https://authservices.satispay.com/g_business/v1/payments/my-payment-id",
        "SHA-256=YHP0TMJCE7ChcZhkNdq6b0tZ45GCjrTUAMRVOoips84=",
        "YRzL73lCC8Whdoz5H6Yl5uGNax/2ceU2m2707tNKt4p74zBFMzSRfCU0yIBm5U9oJEflRzDxWFidlV84QowaVDGWkBy62WC8euk+IBcOLrs7K9oS8/OdWrW/eVeaom0bnce2Enpc8+iodCYdMPfAfHlaTenjNJ1RQoWIxgZMi/rq7W/enr3gHeM3BTWmbNPVGqN56qkJaiL0VxwGfOqcMLC+RIGd61Gk100SMOCcnegFAjsTdlCtTmv6UD+PXJ2je5lEtvoyG48iR1/Xl0XVlF6zPXPZJ3AwP04Olc5qtX/EaJ+xeflq5/6I/P6xcOyHL+zq1Hc/bheEVQj10ZbirQ==",
    );
    assert_eq!(requests[0].body.as_ref(), br#"{"action":"CANCEL_OR_REFUND"}"#);
    Ok(())
}

#[tokio::test]
async fn test_invalid_input_never_reaches_transport() -> Result<()> {
    let http = MockHttpSend::new();
    let client = test_client(Context::new().with_http_send(http.clone()));

    let err = client
        .payments()
        .create(&CreatePaymentRequest::new(
            Flow::Refund {
                parent_payment_uid: String::new(),
            },
            100,
        ))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);

    let err = client
        .payments()
        .list(&ListPaymentsRequest::new().with_limit(0))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);

    let err = client
        .payments()
        .list(&ListPaymentsRequest {
            starting_after_timestamp: Some("yesterday".to_string()),
            ..ListPaymentsRequest::new()
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);

    let err = client.payments().get("").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);

    assert!(http.requests().is_empty());
    Ok(())
}
