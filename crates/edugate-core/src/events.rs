//! Application-wide notifications published by the login dialog.
//!
//! Publishing never blocks and never fails: with no subscriber the event is
//! dropped, and a lagging subscriber loses the oldest events.

use tokio::sync::broadcast;

use crate::session::StudentSession;

const CHANNEL_CAPACITY: usize = 32;

/// Events other parts of the application react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A student logged in; carries the stored session record.
    StudentLoginSuccess(StudentSession),
    /// A teacher logged in and the faculty portal should open.
    OpenFacultyPortal,
}

impl AppEvent {
    /// Wire name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::StudentLoginSuccess(_) => "studentLoginSuccess",
            AppEvent::OpenFacultyPortal => "openFacultyPortal",
        }
    }
}

pub type EventSubscriber = broadcast::Receiver<AppEvent>;

/// Publish/subscribe bus for [`AppEvent`]s. Clones share the same channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> EventSubscriber {
        self.tx.subscribe()
    }

    /// Publishes to every current subscriber; returns how many received it.
    pub fn publish(&self, event: AppEvent) -> usize {
        let name = event.name();
        match self.tx.send(event) {
            Ok(receivers) => {
                tracing::debug!(event = name, receivers, "event published");
                receivers
            }
            Err(_) => {
                tracing::debug!(event = name, "event dropped: no subscribers");
                0
            }
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_subscriber_receives_event() {
        let bus = EventBus::new();
        let mut a = bus.subscribe();
        let mut b = bus.clone().subscribe();

        assert_eq!(bus.publish(AppEvent::OpenFacultyPortal), 2);
        assert_eq!(a.try_recv().unwrap(), AppEvent::OpenFacultyPortal);
        assert_eq!(b.try_recv().unwrap(), AppEvent::OpenFacultyPortal);
    }

    #[test]
    fn test_publish_without_subscribers_is_dropped() {
        let bus = EventBus::new();
        assert_eq!(bus.publish(AppEvent::OpenFacultyPortal), 0);

        let mut late = bus.subscribe();
        assert!(late.try_recv().is_err());
    }

    #[test]
    fn test_event_names() {
        assert_eq!(AppEvent::OpenFacultyPortal.name(), "openFacultyPortal");
        let session = StudentSession {
            id: None,
            name: None,
            email: None,
            roll_number: None,
            class_name: None,
            program: None,
            semester: "V".to_string(),
            batch: "2023".to_string(),
        };
        assert_eq!(
            AppEvent::StudentLoginSuccess(session).name(),
            "studentLoginSuccess"
        );
    }
}
