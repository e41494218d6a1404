// Neonfolio notification bus
//
// Routes notifications to the section that raised them. A section shows at
// most one notification; a newer one replaces it.

use std::collections::HashMap;

use neonfolio_utils::notification::Notification;
use neonfolio_utils::Section;

pub struct NotificationBus {
    /// Section -> Notification (last write wins)
    pending: HashMap<Section, Notification>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
        }
    }

    pub fn notify(&mut self, section: Section, notification: Notification) {
        log::debug!(
            "Notification for {}: {} {}",
            section,
            notification.style,
            notification.message
        );
        self.pending.insert(section, notification);
    }

    /// Consume the pending notification for a section
    pub fn take(&mut self, section: Section) -> Option<Notification> {
        self.pending.remove(&section)
    }

    /// Look without consuming
    pub fn peek(&self, section: Section) -> Option<&Notification> {
        self.pending.get(&section)
    }

    pub fn clear(&mut self, section: Section) {
        self.pending.remove(&section);
    }

    pub fn has_notification(&self, section: Section) -> bool {
        self.pending.contains_key(&section)
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new()
    }
}
