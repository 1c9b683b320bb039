use anyhow::Result;
use log::{debug, warn};
use satispay::payments::{CreatePaymentRequest, Flow, ListPaymentsRequest, PaymentStatus};
use satispay::{default_context, Client, Environment};
use std::env;

fn init_client() -> Option<Client> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("SATISPAY_TEST").is_err() || env::var("SATISPAY_TEST").unwrap() != "on" {
        return None;
    }

    let client = Client::from_env(default_context()).expect("client must be configured");
    assert_eq!(
        client.environment(),
        Environment::Sandbox,
        "live tests only run against the sandbox"
    );
    Some(client)
}

#[tokio::test]
async fn test_live_create_and_get() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("SATISPAY_TEST is not set, skipped");
        return Ok(());
    };

    let created = client
        .payments()
        .create(&CreatePaymentRequest::new(Flow::MatchCode, 100))
        .await?;
    debug!("created payment: {created:?}");
    assert_eq!(created.status, PaymentStatus::Pending);

    let got = client.payments().get(&created.id).await?;
    assert_eq!(got.id, created.id);
    Ok(())
}

#[tokio::test]
async fn test_live_list() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("SATISPAY_TEST is not set, skipped");
        return Ok(());
    };

    let resp = client
        .payments()
        .list(&ListPaymentsRequest::new().with_limit(5))
        .await?;
    debug!("listed {} payments, has_more: {}", resp.data.len(), resp.has_more);
    assert!(resp.data.len() <= 5);
    Ok(())
}
