use crate::core::domain::Identifiable;
use crate::core::library::PatronTier;

pub mod command;
pub mod dto;

pub trait Patron: Identifiable {
    fn tier(&self) -> PatronTier;
}
