use std::sync::Arc;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::inventory::domain::InventoryService;

pub struct AddBookCommand {
    inventory_service: Arc<dyn InventoryService>,
}

impl AddBookCommand {
    pub fn new(inventory_service: Arc<dyn InventoryService>) -> Self {
        Self {
            inventory_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
}

impl AddBookCommandRequest {
    pub fn new(isbn: &str, title: &str, author: &str, publication_year: i32) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            publication_year,
        }
    }
    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.isbn.as_str(), self.title.as_str(), self.author.as_str(), self.publication_year)
    }
}


#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
    pub cataloged: bool,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto, cataloged: bool) -> Self {
        Self {
            book,
            cataloged,
        }
    }
}

impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        let cataloged = self.inventory_service.add_book(book.clone());
        Ok(AddBookCommandResponse::new(book, cataloged))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::gateway::factory::create_publisher;
    use crate::gateway::GatewayPublisherVia;
    use crate::inventory::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::inventory::factory::create_inventory_service;

    #[test]
    fn test_should_run_add_book() {
        let svc = create_inventory_service(&Configuration::new("test"), create_publisher(GatewayPublisherVia::Memory));
        let cmd = AddBookCommand::new(svc);

        let res = cmd.execute(AddBookCommandRequest::new("isbn", "test book", "author", 2020)).expect("should add book");
        assert!(res.cataloged);
        let res = cmd.execute(AddBookCommandRequest::new("isbn", "other book", "author", 2020)).expect("should ignore duplicate");
        assert!(!res.cataloged);
    }

    #[test]
    fn test_should_parse_add_book_request() {
        let req: AddBookCommandRequest = serde_json::from_str(
            r#"{"isbn":"978-0201633610","title":"Design Patterns","author":"Erich Gamma","publication_year":1994}"#)
            .expect("should parse request");
        assert_eq!(1994, req.build_book().publication_year);
    }
}
