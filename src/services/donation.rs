//! Mock donation processing.
//!
//! Stand-in for a real payment gateway: a fixed-duration delay followed by
//! unconditional success. The form's `idle -> processing -> success` state
//! lives in [`DonationFlow`] so the front end only forwards events.

use std::time::Duration;

use anyhow::bail;
use time::OffsetDateTime;
use tracing::debug;
use uuid::Uuid;

/// Suggested amounts shown on the donate page.
pub const PRESET_AMOUNTS: [f64; 5] = [10.0, 25.0, 50.0, 100.0, 250.0];

/// Simulated round trip to the payment processor.
const PROCESSING_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
pub struct DonationRequest {
    pub amount: f64,
    pub donor_name: String,
    pub donor_email: String,
}

#[derive(Debug, Clone)]
pub struct DonationReceipt {
    pub id: Uuid,
    pub amount: f64,
    pub completed_at: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DonationStatus {
    #[default]
    Idle,
    Processing,
    Success,
}

#[derive(Debug, Clone)]
pub struct MockGateway {
    delay: Duration,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            delay: PROCESSING_DELAY,
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// "Charge" the donor: waits out the configured delay and always
    /// succeeds. Non-positive amounts are rejected before the delay.
    pub async fn process(&self, request: &DonationRequest) -> anyhow::Result<DonationReceipt> {
        if !(request.amount > 0.0) {
            bail!("Donation amount must be positive");
        }
        tokio::time::sleep(self.delay).await;
        let receipt = DonationReceipt {
            id: Uuid::new_v4(),
            amount: request.amount,
            completed_at: OffsetDateTime::now_utc(),
        };
        debug!(id = %receipt.id, amount = receipt.amount, "donation processed");
        Ok(receipt)
    }
}

/// Status of the donation form.
#[derive(Debug, Clone, Default)]
pub struct DonationFlow {
    status: DonationStatus,
    receipt: Option<DonationReceipt>,
}

impl DonationFlow {
    pub fn status(&self) -> DonationStatus {
        self.status
    }

    pub fn receipt(&self) -> Option<&DonationReceipt> {
        self.receipt.as_ref()
    }

    /// Move `idle -> processing`. Returns `false` (and stays put) for a
    /// non-positive amount or when a donation is already in flight.
    pub fn begin(&mut self, amount: f64) -> bool {
        if !(amount > 0.0) || self.status == DonationStatus::Processing {
            return false;
        }
        self.status = DonationStatus::Processing;
        self.receipt = None;
        true
    }

    /// Move `processing -> success` with the gateway's receipt.
    pub fn complete(&mut self, receipt: DonationReceipt) {
        self.status = DonationStatus::Success;
        self.receipt = Some(receipt);
    }

    /// Back to `idle` ("donate again", or a gateway error).
    pub fn reset(&mut self) {
        self.status = DonationStatus::Idle;
        self.receipt = None;
    }
}

/// `50.0` formats as `$50.00`.
pub fn format_usd(amount: f64) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_and_fractional_amounts() {
        assert_eq!(format_usd(50.0), "$50.00");
        assert_eq!(format_usd(12.5), "$12.50");
        assert_eq!(format_usd(0.0), "$0.00");
    }

    #[test]
    fn flow_rejects_non_positive_amounts() {
        let mut flow = DonationFlow::default();
        assert!(!flow.begin(0.0));
        assert!(!flow.begin(-5.0));
        assert_eq!(flow.status(), DonationStatus::Idle);
    }

    #[test]
    fn flow_ignores_double_submit() {
        let mut flow = DonationFlow::default();
        assert!(flow.begin(25.0));
        assert!(!flow.begin(25.0));
        assert_eq!(flow.status(), DonationStatus::Processing);
    }
}
