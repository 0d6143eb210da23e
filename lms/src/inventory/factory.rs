use std::sync::Arc;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;
use crate::inventory::domain::service::InventoryServiceImpl;

pub fn create_inventory_service(config: &Configuration, publisher: Arc<dyn EventPublisher>) -> Arc<InventoryServiceImpl> {
    Arc::new(InventoryServiceImpl::new(config, publisher))
}
