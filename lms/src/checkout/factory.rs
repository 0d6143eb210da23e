use std::sync::Arc;
use crate::checkout::domain::service::LendingServiceImpl;
use crate::core::clock::Clock;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;
use crate::inventory::domain::ShelfAccess;
use crate::strategy::allocation::create_allocation_strategy;

pub fn create_lending_service(config: &Configuration, inventory: Arc<dyn ShelfAccess>,
                              clock: Arc<dyn Clock>, publisher: Arc<dyn EventPublisher>) -> Arc<LendingServiceImpl> {
    let allocation_strategy = create_allocation_strategy(config.allocation);
    Arc::new(LendingServiceImpl::new(config, inventory, allocation_strategy, clock, publisher))
}
