//! Integration tests for the mock donation flow.

use std::time::Duration;

use safewater::services::donation::{
    DonationFlow, DonationReceipt, DonationRequest, DonationStatus, MockGateway, format_usd,
};

fn request(amount: f64) -> DonationRequest {
    DonationRequest {
        amount,
        donor_name: "Jane Donor".to_string(),
        donor_email: "jane@example.org".to_string(),
    }
}

#[tokio::test(start_paused = true)]
async fn test_donation_flow_reaches_success() -> anyhow::Result<()> {
    // 1. The form starts idle
    let mut flow = DonationFlow::default();
    assert_eq!(flow.status(), DonationStatus::Idle);

    // 2. Submitting moves it to processing
    assert!(flow.begin(50.0));
    assert_eq!(flow.status(), DonationStatus::Processing);

    // 3. The mock gateway waits out its fixed delay, then succeeds
    let started = tokio::time::Instant::now();
    let receipt = MockGateway::new().process(&request(50.0)).await?;
    assert!(started.elapsed() >= Duration::from_secs(2));

    // 4. Completion reaches success and displays the formatted amount
    flow.complete(receipt);
    assert_eq!(flow.status(), DonationStatus::Success);
    let receipt = flow.receipt().expect("receipt present after success");
    assert_eq!(format_usd(receipt.amount), "$50.00");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_gateway_rejects_non_positive_amounts() {
    let gateway = MockGateway::with_delay(Duration::from_millis(10));
    assert!(gateway.process(&request(0.0)).await.is_err());
    assert!(gateway.process(&request(-20.0)).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_receipts_carry_unique_ids() -> anyhow::Result<()> {
    let gateway = MockGateway::with_delay(Duration::from_millis(1));
    let first = gateway.process(&request(25.0)).await?;
    let second = gateway.process(&request(25.0)).await?;
    assert_ne!(first.id, second.id);
    Ok(())
}

#[test]
fn test_donate_again_resets_to_idle() {
    let mut flow = DonationFlow::default();
    assert!(flow.begin(10.0));
    flow.complete(DonationReceipt {
        id: uuid::Uuid::new_v4(),
        amount: 10.0,
        completed_at: time::OffsetDateTime::now_utc(),
    });
    assert_eq!(flow.status(), DonationStatus::Success);

    flow.reset();
    assert_eq!(flow.status(), DonationStatus::Idle);
    assert!(flow.receipt().is_none());
}
