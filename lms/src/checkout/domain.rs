pub mod service;

use crate::books::dto::BookCopyDto;
use crate::checkout::dto::{LoanDto, ReturnReceipt};
use crate::core::library::LibraryResult;
use crate::patrons::dto::PatronDto;

pub trait LendingService: Sync + Send {
    // Registering an id twice replaces the earlier patron.
    fn register_patron(&self, patron: PatronDto);
    fn find_patron(&self, patron_id: &str) -> Option<PatronDto>;

    /// Lends a copy of `isbn` to `patron_id`.
    ///
    /// `Ok(None)` means no copy is on the shelf; that is an ordinary outcome, not an error.
    fn checkout(&self, isbn: &str, patron_id: &str) -> LibraryResult<Option<BookCopyDto>>;

    /// Takes a copy back and returns the late fee, zero when returned on time.
    fn return_book(&self, copy_id: &str) -> LibraryResult<f64> {
        self.return_book_with_receipt(copy_id).map(|r| r.fee)
    }

    fn return_book_with_receipt(&self, copy_id: &str) -> LibraryResult<ReturnReceipt>;
    fn find_loan(&self, copy_id: &str) -> Option<LoanDto>;
    fn loans_for_patron(&self, patron_id: &str) -> Vec<LoanDto>;
    fn query_overdue(&self) -> Vec<LoanDto>;
}
