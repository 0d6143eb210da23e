use std::sync::Arc;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookCopyDto;
use crate::core::command::{Command, CommandError};
use crate::inventory::domain::InventoryService;

pub struct AddCopyCommand {
    inventory_service: Arc<dyn InventoryService>,
}

impl AddCopyCommand {
    pub fn new(inventory_service: Arc<dyn InventoryService>) -> Self {
        Self {
            inventory_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddCopyCommandRequest {
    pub isbn: String,
    pub copy_id: String,
}

impl AddCopyCommandRequest {
    pub fn new(isbn: &str, copy_id: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            copy_id: copy_id.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct AddCopyCommandResponse {
    pub copy: BookCopyDto,
}

impl AddCopyCommandResponse {
    pub fn new(copy: BookCopyDto) -> Self {
        Self {
            copy,
        }
    }
}

impl Command<AddCopyCommandRequest, AddCopyCommandResponse> for AddCopyCommand {
    fn execute(&self, req: AddCopyCommandRequest) -> Result<AddCopyCommandResponse, CommandError> {
        self.inventory_service.add_copy(req.isbn.as_str(), req.copy_id.as_str())
            .map_err(CommandError::from).map(AddCopyCommandResponse::new)
    }
}
