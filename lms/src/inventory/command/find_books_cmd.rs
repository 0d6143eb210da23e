use std::sync::Arc;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::inventory::domain::InventoryService;

pub struct FindBooksCommand {
    inventory_service: Arc<dyn InventoryService>,
}

impl FindBooksCommand {
    pub fn new(inventory_service: Arc<dyn InventoryService>) -> Self {
        Self {
            inventory_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FindBooksCommandRequest {
    pub title: String,
}

impl FindBooksCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FindBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl FindBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

impl Command<FindBooksCommandRequest, FindBooksCommandResponse> for FindBooksCommand {
    fn execute(&self, req: FindBooksCommandRequest) -> Result<FindBooksCommandResponse, CommandError> {
        Ok(FindBooksCommandResponse::new(self.inventory_service.find_books_by_title(req.title.as_str())))
    }
}
