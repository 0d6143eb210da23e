use serde::{Deserialize, Serialize};
use tracing::{info, Level, Subscriber};
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher turns every domain event into a structured tracing record.
#[derive(Debug, Default)]
pub struct LogPublisher;

impl LogPublisher {
    pub fn new() -> Self {
        Self
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        info!(
            event_id = event.event_id.as_str(),
            group = event.group.as_str(),
            key = event.key.as_str(),
            kind = ?event.kind,
            data = event.json_data.as_str(),
            "{}", event.name);
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum LogFormat {
    // colored, human readable lines for a terminal
    Text,
    // one JSON object per line for log collectors
    Json,
}

pub fn build_subscriber(format: LogFormat) -> Box<dyn Subscriber + Send + Sync> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        // module names add nothing for a single-crate service.
        .with_target(false);
    match format {
        LogFormat::Text => Box::new(builder.finish()),
        // collectors stamp their own ingestion time and do not render colors.
        LogFormat::Json => Box::new(builder.with_ansi(false).without_time().json().finish()),
    }
}

pub fn setup_tracing(format: LogFormat) {
    if let Err(err) = tracing::subscriber::set_global_default(build_subscriber(format)) {
        eprintln!("tracing already initialized: {}", err);
    }
}
