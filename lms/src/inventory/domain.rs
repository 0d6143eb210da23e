pub mod service;

use crate::books::dto::{BookCopyDto, BookDto};
use crate::core::library::LibraryResult;

pub trait InventoryService: Sync + Send {
    // Catalogs a title. A second book with the same isbn is ignored with a warning
    // and the call returns false.
    fn add_book(&self, book: BookDto) -> bool;
    fn add_copy(&self, isbn: &str, copy_id: &str) -> LibraryResult<BookCopyDto>;
    fn copies_of(&self, isbn: &str) -> Vec<BookCopyDto>;
    fn count_available(&self, isbn: &str) -> usize;
    fn find_copy(&self, copy_id: &str) -> Option<BookCopyDto>;
    fn find_book(&self, isbn: &str) -> Option<BookDto>;
    fn find_books_by_title(&self, fragment: &str) -> Vec<BookDto>;
}

/// Exclusive access to the copies of one title.
///
/// Lending changes copy status only through this, so a checkout allocates and records
/// its loan inside one critical section per title.
pub trait ShelfAccess: Sync + Send {
    // Returns false, without calling `f`, when the title has no shelf.
    fn with_shelf(&self, isbn: &str, f: &mut dyn FnMut(&mut Vec<BookCopyDto>)) -> bool;
}
