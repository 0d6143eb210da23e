use tracing::warn;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;

// EventPublisher is handed to services at construction so that nothing in the
// domain reaches for a process-wide logger.
pub trait EventPublisher: Sync + Send {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError>;
}

// publish_quietly reports an event after a mutation has already succeeded, so a
// failure is logged rather than handed back to the caller.
pub fn publish_quietly(publisher: &dyn EventPublisher, event: serde_json::Result<DomainEvent>) {
    let res = event.map_err(LibraryError::from).and_then(|e| publisher.publish(&e));
    if let Err(err) = res {
        warn!("failed to publish domain event: {}", err);
    }
}
