use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::PatronTier;
use crate::patrons::Patron;

// Patron abstracts library member.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct PatronDto {
    pub patron_id: String,
    pub name: String,
    pub tier: PatronTier,
    pub email: String,
}

impl PatronDto {
    pub fn new(patron_id: &str, name: &str, tier: PatronTier, email: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            name: name.to_string(),
            tier,
            email: email.to_string(),
        }
    }
}

impl Identifiable for PatronDto {
    fn id(&self) -> String {
        self.patron_id.to_string()
    }
}

impl Patron for PatronDto {
    fn tier(&self) -> PatronTier {
        self.tier
    }
}
