use std::sync::Arc;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::LendingService;
use crate::checkout::dto::ReturnReceipt;
use crate::core::command::{Command, CommandError};

pub struct ReturnBookCommand {
    lending_service: Arc<dyn LendingService>,
}

impl ReturnBookCommand {
    pub fn new(lending_service: Arc<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    copy_id: String,
}

impl ReturnBookCommandRequest {
    pub fn new(copy_id: &str) -> Self {
        Self {
            copy_id: copy_id.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub receipt: ReturnReceipt,
}

impl ReturnBookCommandResponse {
    pub fn new(receipt: ReturnReceipt) -> Self {
        Self {
            receipt,
        }
    }
}

impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.lending_service.return_book_with_receipt(req.copy_id.as_str())
            .map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}
