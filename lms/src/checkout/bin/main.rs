use std::sync::Arc;
use serde::Serialize;
use tracing::error;
use lms_lending::checkout::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
use lms_lending::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use lms_lending::checkout::factory::create_lending_service;
use lms_lending::core::clock::{Clock, FixedClock, SystemClock};
use lms_lending::core::command::{Command, CommandError};
use lms_lending::core::domain::Configuration;
use lms_lending::core::library::PatronTier;
use lms_lending::gateway::factory::create_publisher;
use lms_lending::gateway::logs::setup_tracing;
use lms_lending::inventory::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use lms_lending::inventory::command::add_copy_cmd::{AddCopyCommand, AddCopyCommandRequest};
use lms_lending::inventory::command::find_books_cmd::{FindBooksCommand, FindBooksCommandRequest};
use lms_lending::inventory::factory::create_inventory_service;
use lms_lending::patrons::command::add_patron_cmd::{AddPatronCommand, AddPatronCommandRequest};

const CLEAN_CODER: &str = "978-0137081073";
const DESIGN_PATTERNS: &str = "978-0201633610";

fn main() -> Result<(), CommandError> {
    let config = Configuration::new("main");
    setup_tracing(config.log_format);
    println!("Welcome to the Library Management System\n");

    let publisher = create_publisher(config.publisher);
    // the demo moves this clock forward to produce a late return
    let clock = Arc::new(FixedClock::new(SystemClock.today()));
    let inventory = create_inventory_service(&config, publisher.clone());
    let lending = create_lending_service(&config, inventory.clone(), clock.clone(), publisher);

    let add_book = AddBookCommand::new(inventory.clone());
    let add_copy = AddCopyCommand::new(inventory.clone());
    add_book.execute(AddBookCommandRequest::new(CLEAN_CODER, "The Clean Coder", "Robert C. Martin", 2011))?;
    add_copy.execute(AddCopyCommandRequest::new(CLEAN_CODER, "ITEM-101"))?;
    add_copy.execute(AddCopyCommandRequest::new(CLEAN_CODER, "ITEM-102"))?;
    add_book.execute(AddBookCommandRequest::new(DESIGN_PATTERNS, "Design Patterns", "Erich Gamma", 1994))?;
    add_copy.execute(AddCopyCommandRequest::new(DESIGN_PATTERNS, "ITEM-201"))?;

    let add_patron = AddPatronCommand::new(lending.clone());
    add_patron.execute(AddPatronCommandRequest::new("P-100", "Jordan Hayes", PatronTier::Standard, "jordan.h@example.com"))?;
    add_patron.execute(AddPatronCommandRequest::new("P-200", "Maria Rodriguez", PatronTier::Vip, "m.rodriguez@library.org"))?;

    let found = FindBooksCommand::new(inventory).execute(FindBooksCommandRequest::new("clean"))?;
    print_json("Search for \"clean\"", &found);

    println!("\nProcessing Checkout Request");
    let checkout = CheckoutBookCommand::new(lending.clone())
        .execute(CheckoutBookCommandRequest::new(CLEAN_CODER, "P-100"))?;
    match &checkout.copy {
        Some(copy) => println!("Checkout successful! Jordan now has {}", copy.book.title),
        None => println!("Checkout failed: Book is currently unavailable."),
    }
    print_json("Checkout", &checkout);

    println!("\nProcessing Return Request");
    // five days past the fourteen day loan
    clock.advance(config.book_loan_days + 5);
    let returned = ReturnBookCommand::new(lending).execute(ReturnBookCommandRequest::new("ITEM-101"))?;
    if returned.receipt.fee > 0.0 {
        println!("Late return processed. Fee applied: ${:.2}", returned.receipt.fee);
    } else {
        println!("Return successful, No late fees applied.");
    }
    print_json("Return", &returned);

    println!("\nEnd of the LMS!");
    Ok(())
}

fn print_json<T: Serialize>(label: &str, value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}: {}", label, json),
        Err(err) => error!("failed to render {}: {}", label, err),
    }
}
