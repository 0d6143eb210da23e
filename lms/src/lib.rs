pub mod core;
pub mod utils;
pub mod gateway;
pub mod books;
pub mod patrons;
pub mod strategy;
pub mod inventory;
pub mod checkout;
