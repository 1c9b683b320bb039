use crate::mock::MockHttpSend;
use anyhow::Result;
use http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use satispay::authentication::authenticate_with_token;
use satispay::{Context, Environment, ErrorKind};

const PUBLIC_KEY: &str = include_str!("../../testdata/public_key.pem");

#[tokio::test]
async fn test_authenticate_with_token() -> Result<()> {
    let http = MockHttpSend::new().respond(StatusCode::OK, r#"{"key_id":"new-key-id"}"#);
    let ctx = Context::new().with_http_send(http.clone());

    let key = authenticate_with_token(&ctx, Environment::Sandbox, "623ECX", PUBLIC_KEY).await?;
    assert_eq!(key.key_id, "new-key-id");

    let requests = http.requests();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.method, Method::POST);
    assert_eq!(
        req.uri,
        "https://staging.authservices.satispay.com/g_business/v1/authentication_keys"
    );
    assert_eq!(req.headers["accept"], "application/json");
    assert_eq!(req.headers["content-type"], "application/json");
    // Activation is never signed.
    assert!(req.headers.get("authorization").is_none());
    assert!(req.headers.get("digest").is_none());

    let body: serde_json::Value = serde_json::from_slice(&req.body)?;
    assert_eq!(body["public_key"], PUBLIC_KEY);
    assert_eq!(body["token"], "623ECX");
    Ok(())
}

#[tokio::test]
async fn test_authenticate_with_invalid_token() -> Result<()> {
    let http = MockHttpSend::new().respond(
        StatusCode::NOT_FOUND,
        r#"{"code":41,"message":"Not found"}"#,
    );
    let ctx = Context::new().with_http_send(http);

    let err = authenticate_with_token(&ctx, Environment::Production, "nope", PUBLIC_KEY)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Api);
    let api = err.api_error().expect("api error must be present");
    assert_eq!(api.status, 404);
    assert_eq!(api.code, "ERR_BAD_REQUEST");
    Ok(())
}
