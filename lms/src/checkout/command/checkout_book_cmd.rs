use std::sync::Arc;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookCopyDto;
use crate::checkout::domain::LendingService;
use crate::core::command::{Command, CommandError};

pub struct CheckoutBookCommand {
    lending_service: Arc<dyn LendingService>,
}

impl CheckoutBookCommand {
    pub fn new(lending_service: Arc<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckoutBookCommandRequest {
    isbn: String,
    patron_id: String,
}

impl CheckoutBookCommandRequest {
    pub fn new(isbn: &str, patron_id: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            patron_id: patron_id.to_string(),
        }
    }
}


// `copy` is None when every copy of the title is out.
#[derive(Debug, Serialize)]
pub struct CheckoutBookCommandResponse {
    pub copy: Option<BookCopyDto>,
}

impl CheckoutBookCommandResponse {
    pub fn new(copy: Option<BookCopyDto>) -> Self {
        Self {
            copy,
        }
    }
}

impl Command<CheckoutBookCommandRequest, CheckoutBookCommandResponse> for CheckoutBookCommand {
    fn execute(&self, req: CheckoutBookCommandRequest) -> Result<CheckoutBookCommandResponse, CommandError> {
        self.lending_service.checkout(req.isbn.as_str(), req.patron_id.as_str())
            .map_err(CommandError::from).map(CheckoutBookCommandResponse::new)
    }
}
