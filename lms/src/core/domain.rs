use serde::{Deserialize, Serialize};
use crate::gateway::GatewayPublisherVia;
use crate::gateway::logs::LogFormat;
use crate::strategy::allocation::AllocationPolicy;

// Identifiable defines common traits that can be shared by catalog objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts config options for the lending desk of a branch
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub book_loan_days: i64,
    pub allocation: AllocationPolicy,
    pub publisher: GatewayPublisherVia,
    pub log_format: LogFormat,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            book_loan_days: 14,
            allocation: AllocationPolicy::FirstAvailable,
            publisher: GatewayPublisherVia::Logs,
            log_format: LogFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;
    use crate::gateway::logs::LogFormat;
    use crate::strategy::allocation::AllocationPolicy;

    #[test]
    fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!(14, config.book_loan_days);
        assert_eq!(AllocationPolicy::FirstAvailable, config.allocation);
        assert_eq!(GatewayPublisherVia::Logs, config.publisher);
        assert_eq!(LogFormat::Text, config.log_format);
    }
}
