// Neonfolio contact form - transport trait
//
// Where a submitted message goes. The page ships with a simulated transport
// that only waits; a real relay would implement the same trait.

use std::time::Duration;

use async_trait::async_trait;

use neonfolio_utils::contact::ContactFields;

use super::error::ContactResult;

/// Delivery of a validated contact message.
///
/// # Example
///
/// ```ignore
/// struct SmtpRelay { host: String }
///
/// #[async_trait]
/// impl ContactTransport for SmtpRelay {
///     async fn send(&self, fields: &ContactFields) -> ContactResult<()> {
///         // hand the message to the relay
///     }
///
///     fn name(&self) -> &str {
///         "smtp"
///     }
/// }
/// ```
#[async_trait]
pub trait ContactTransport: Send + Sync {
    /// Deliver one message. Fields have already been validated.
    async fn send(&self, fields: &ContactFields) -> ContactResult<()>;

    /// Name for logs
    fn name(&self) -> &str;
}

/// Waits a fixed delay, then reports success. Never fails.
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

#[async_trait]
impl ContactTransport for SimulatedTransport {
    async fn send(&self, fields: &ContactFields) -> ContactResult<()> {
        log::debug!(
            "Simulating delivery of {:?} from {} ({:?})",
            fields.subject,
            fields.email,
            self.delay
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }

    fn name(&self) -> &str {
        "simulated"
    }
}
