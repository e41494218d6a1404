// Neonfolio contact form - controller
//
// idle -> sending -> success -> (reset delay) -> idle
//                 \-> error (fields kept, no retry)

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;

use neonfolio_utils::config::ContactConfig;
use neonfolio_utils::contact::{ContactField, ContactFields, SubmitStatus};
use neonfolio_utils::notification::Notification;
use neonfolio_utils::Section;

use super::error::{ContactError, ContactResult};
use super::transport::{ContactTransport, SimulatedTransport};
use crate::effects::EffectGroup;
use crate::notifications::NotificationBus;

/// What the contact section shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    pub fields: ContactFields,
    pub status: SubmitStatus,
}

pub struct ContactForm {
    transport: Arc<dyn ContactTransport>,
    config: ContactConfig,
    state: Arc<watch::Sender<ContactState>>,
    bus: Arc<Mutex<NotificationBus>>,
    group: EffectGroup,
    /// Bumped by every submission that gets past validation
    round: Arc<AtomicU64>,
}

impl ContactForm {
    pub fn new(transport: Arc<dyn ContactTransport>, config: ContactConfig) -> Self {
        let (tx, _) = watch::channel(ContactState::default());
        Self {
            transport,
            config,
            state: Arc::new(tx),
            bus: Arc::new(Mutex::new(NotificationBus::new())),
            group: EffectGroup::new("contact"),
            round: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Form backed by the simulated transport, waiting `send_delay`
    pub fn simulated(config: ContactConfig) -> Self {
        let transport = SimulatedTransport::new(config.send_delay());
        Self::new(Arc::new(transport), config)
    }

    /// Share a notification bus with other sections
    pub fn with_bus(mut self, bus: Arc<Mutex<NotificationBus>>) -> Self {
        self.bus = bus;
        self
    }

    pub fn subscribe(&self) -> watch::Receiver<ContactState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ContactState {
        self.state.borrow().clone()
    }

    pub fn status(&self) -> SubmitStatus {
        self.state.borrow().status.clone()
    }

    pub fn fields(&self) -> ContactFields {
        self.state.borrow().fields.clone()
    }

    pub fn set_field(&self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|s| s.fields.set(field, value));
    }

    pub fn take_notification(&self) -> Option<Notification> {
        self.lock_bus().take(Section::Contact)
    }

    /// Validate, send through the transport and publish every status change.
    pub async fn submit(&self) -> ContactResult<()> {
        let fields = match self.begin() {
            Ok(fields) => fields,
            Err(err) => {
                if let ContactError::Validation(_) = err {
                    self.notify(Notification::warning(err.to_string()));
                }
                return Err(err);
            },
        };
        let round = self.round.fetch_add(1, Ordering::SeqCst) + 1;

        log::info!("Sending contact message via {}", self.transport.name());
        let token = self.group.scheduler().token().clone();
        let outcome = tokio::select! {
            biased;
            _ = token.cancelled() => Err(ContactError::ShutdownRequested),
            result = self.transport.send(&fields) => result,
        };

        match outcome {
            Ok(()) => {
                self.succeed(round);
                Ok(())
            },
            Err(ContactError::ShutdownRequested) => {
                self.state.send_modify(|s| s.status = SubmitStatus::Idle);
                Err(ContactError::ShutdownRequested)
            },
            Err(err) => {
                log::warn!("Contact message failed: {}", err);
                let detail = err.to_string();
                self.state
                    .send_modify(|s| s.status = SubmitStatus::Error(detail.clone()));
                self.notify(Notification::error(detail));
                Err(err)
            },
        }
    }

    /// Stop any in-flight submission and the pending reset.
    pub fn shutdown(&self) {
        self.group.cancel();
    }

    /// Atomically check the form and flip it to `Sending`.
    fn begin(&self) -> ContactResult<ContactFields> {
        if self.group.is_cancelled() {
            return Err(ContactError::ShutdownRequested);
        }
        let mut outcome = Err(ContactError::AlreadySending);
        self.state.send_if_modified(|s| {
            if s.status.is_sending() {
                return false;
            }
            let problems = s.fields.validate();
            if !problems.is_empty() {
                outcome = Err(ContactError::Validation(problems));
                return false;
            }
            outcome = Ok(s.fields.clone());
            s.status = SubmitStatus::Sending;
            true
        });
        outcome
    }

    fn succeed(&self, round: u64) {
        self.state.send_modify(|s| {
            s.status = SubmitStatus::Success;
            s.fields.clear();
        });
        log::info!("Contact message sent");
        self.notify(Notification::success(SubmitStatus::Success.button_label()));

        let state = Arc::clone(&self.state);
        let latest = Arc::clone(&self.round);
        self.group.spawn_after(self.config.reset_delay(), move || {
            if latest.load(Ordering::SeqCst) != round {
                log::debug!("Skipping reset of submission {}, a newer one owns the status", round);
                return;
            }
            state.send_if_modified(|s| {
                if s.status == SubmitStatus::Success {
                    s.status = SubmitStatus::Idle;
                    true
                } else {
                    false
                }
            });
        });
    }

    fn notify(&self, notification: Notification) {
        self.lock_bus().notify(Section::Contact, notification);
    }

    fn lock_bus(&self) -> std::sync::MutexGuard<'_, NotificationBus> {
        self.bus.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
