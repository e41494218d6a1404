// Neonfolio contact form - mock transport
//
// Scriptable transport for tests: choose the outcome and the latency, then
// check what was sent.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use neonfolio_utils::contact::ContactFields;

use super::error::{ContactError, ContactResult};
use super::transport::ContactTransport;

/// Mock transport for exercising every form status, including the error path
/// the simulated transport never takes.
///
/// ```ignore
/// let mock = MockTransport::new();
/// mock.fail_with("relay unreachable");
/// let form = ContactForm::new(Arc::new(mock.clone()), ContactConfig::default());
/// ```
#[derive(Clone)]
pub struct MockTransport {
    /// `Err` carries the message the next sends fail with
    response: Arc<Mutex<Result<(), String>>>,

    delay: Arc<Mutex<Duration>>,

    send_count: Arc<AtomicUsize>,

    last_fields: Arc<Mutex<Option<ContactFields>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            response: Arc::new(Mutex::new(Ok(()))),
            delay: Arc::new(Mutex::new(Duration::ZERO)),
            send_count: Arc::new(AtomicUsize::new(0)),
            last_fields: Arc::new(Mutex::new(None)),
        }
    }

    pub fn succeed(&self) {
        *self.response.lock().unwrap() = Ok(());
    }

    pub fn fail_with(&self, message: &str) {
        *self.response.lock().unwrap() = Err(message.to_string());
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = delay;
    }

    pub fn send_count(&self) -> usize {
        self.send_count.load(Ordering::Relaxed)
    }

    pub fn last_fields(&self) -> Option<ContactFields> {
        self.last_fields.lock().unwrap().clone()
    }

    pub fn reset(&self) {
        self.send_count.store(0, Ordering::Relaxed);
        *self.last_fields.lock().unwrap() = None;
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactTransport for MockTransport {
    async fn send(&self, fields: &ContactFields) -> ContactResult<()> {
        self.send_count.fetch_add(1, Ordering::Relaxed);
        *self.last_fields.lock().unwrap() = Some(fields.clone());

        let delay = *self.delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let response = self.response.lock().unwrap().clone();
        response.map_err(ContactError::Transport)
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> ContactFields {
        ContactFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_records_sends() {
        let mock = MockTransport::new();
        mock.send(&fields()).await.unwrap();
        assert_eq!(mock.send_count(), 1);
        assert_eq!(mock.last_fields(), Some(fields()));

        mock.reset();
        assert_eq!(mock.send_count(), 0);
        assert!(mock.last_fields().is_none());
    }

    #[tokio::test]
    async fn test_mock_failure() {
        let mock = MockTransport::new();
        mock.fail_with("relay unreachable");
        let result = mock.send(&fields()).await;
        assert_eq!(
            result,
            Err(ContactError::Transport("relay unreachable".to_string()))
        );

        mock.succeed();
        assert!(mock.send(&fields()).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_mock_delay() {
        let mock = MockTransport::new();
        mock.set_delay(Duration::from_millis(250));
        let start = tokio::time::Instant::now();
        mock.send(&fields()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(250));
        assert_eq!(mock.name(), "mock");
    }
}
