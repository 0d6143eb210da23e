use std::sync::Arc;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::LendingService;
use crate::core::command::{Command, CommandError};
use crate::core::library::PatronTier;
use crate::patrons::dto::PatronDto;

pub struct AddPatronCommand {
    lending_service: Arc<dyn LendingService>,
}

impl AddPatronCommand {
    pub fn new(lending_service: Arc<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddPatronCommandRequest {
    pub patron_id: String,
    pub name: String,
    pub tier: PatronTier,
    pub email: String,
}

impl AddPatronCommandRequest {
    pub fn new(patron_id: &str, name: &str, tier: PatronTier, email: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            name: name.to_string(),
            tier,
            email: email.to_string(),
        }
    }
    pub fn build_patron(&self) -> PatronDto {
        PatronDto::new(self.patron_id.as_str(), self.name.as_str(), self.tier, self.email.as_str())
    }
}


#[derive(Debug, Serialize)]
pub struct AddPatronCommandResponse {
    pub patron: PatronDto,
}

impl AddPatronCommandResponse {
    pub fn new(patron: PatronDto) -> Self {
        Self {
            patron,
        }
    }
}

impl Command<AddPatronCommandRequest, AddPatronCommandResponse> for AddPatronCommand {
    fn execute(&self, req: AddPatronCommandRequest) -> Result<AddPatronCommandResponse, CommandError> {
        let patron = req.build_patron();
        self.lending_service.register_patron(patron.clone());
        Ok(AddPatronCommandResponse::new(patron))
    }
}
