use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use chrono::{Duration, NaiveDate};
use tracing::{error, info, warn};
use crate::books::dto::BookCopyDto;
use crate::checkout::domain::LendingService;
use crate::checkout::dto::{LoanDto, ReturnReceipt};
use crate::core::clock::Clock;
use crate::core::domain::Configuration;
use crate::core::events::{DomainEvent, DomainEventType};
use crate::core::library::{BookStatus, LibraryError, LibraryResult, PatronTier};
use crate::gateway::events::{publish_quietly, EventPublisher};
use crate::inventory::domain::ShelfAccess;
use crate::patrons::Patron;
use crate::patrons::dto::PatronDto;
use crate::strategy::allocation::AllocationStrategy;
use crate::strategy::fee::fee_strategy_for;

pub struct LendingServiceImpl {
    branch_id: String,
    book_loan_days: i64,
    inventory: Arc<dyn ShelfAccess>,
    allocation_strategy: Box<dyn AllocationStrategy>,
    clock: Arc<dyn Clock>,
    patrons: RwLock<HashMap<String, PatronDto>>,
    // copy_id -> active loan. Only written while the copy's shelf lock is held.
    loans: RwLock<HashMap<String, LoanDto>>,
    events_publisher: Arc<dyn EventPublisher>,
}

impl LendingServiceImpl {
    pub fn new(config: &Configuration, inventory: Arc<dyn ShelfAccess>,
               allocation_strategy: Box<dyn AllocationStrategy>, clock: Arc<dyn Clock>,
               events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_loan_days: config.book_loan_days,
            inventory,
            allocation_strategy,
            clock,
            patrons: RwLock::new(HashMap::new()),
            loans: RwLock::new(HashMap::new()),
            events_publisher,
        }
    }

    fn not_checked_out(copy_id: &str) -> LibraryError {
        LibraryError::not_found(
            format!("return failed: item {} is not currently checked out", copy_id).as_str())
    }

    fn missing_from_inventory(copy_id: &str) -> LibraryError {
        error!("copy {} has an active loan but is missing from inventory", copy_id);
        LibraryError::consistency(
            format!("copy {} missing from inventory", copy_id).as_str())
    }

    // Allocates a copy and records its loan. Called with the title's shelf held.
    fn lend(&self, copies: &mut [BookCopyDto], patron_id: &str,
            today: NaiveDate, due_at: NaiveDate) -> Option<(BookCopyDto, LoanDto)> {
        let idx = self.allocation_strategy.allocate(copies)?;
        let copy = copies.get_mut(idx)?;
        let mut loans = self.loans.write().unwrap_or_else(PoisonError::into_inner);
        copy.status = BookStatus::Borrowed;
        let loan = LoanDto::new(self.branch_id.as_str(), copy, patron_id, today, due_at);
        loans.insert(copy.copy_id.to_string(), loan.clone());
        Some((copy.clone(), loan))
    }

    // Ends the loan of `copy_id` and shelves the copy again. Called with the title's shelf held.
    fn release(&self, copies: &mut [BookCopyDto], copy_id: &str) -> LibraryResult<LoanDto> {
        let mut loans = self.loans.write().unwrap_or_else(PoisonError::into_inner);
        let loan = loans.remove(copy_id).ok_or_else(|| Self::not_checked_out(copy_id))?;
        let copy = copies.iter_mut().find(|c| c.copy_id == copy_id)
            .ok_or_else(|| Self::missing_from_inventory(copy_id))?;
        copy.status = BookStatus::Available;
        Ok(loan)
    }

    fn calculate_fee(&self, patron_id: &str, days_overdue: i64) -> f64 {
        if days_overdue <= 0 {
            return 0.0;
        }
        let patron = self.find_patron(patron_id);
        let tier = match &patron {
            Some(p) => p.tier(),
            None => {
                warn!("patron {} of a late return is not registered, charging standard fee", patron_id);
                PatronTier::Standard
            }
        };
        let fee = fee_strategy_for(tier).calculate_fee(days_overdue);
        if fee > 0.0 {
            let name = patron.as_ref().map(|p| p.name.as_str()).unwrap_or(patron_id);
            info!("late return by {} ({} days), fine: ${:.2}", name, days_overdue, fee);
        }
        fee
    }

    #[cfg(test)]
    pub(crate) fn set_due_date(&self, copy_id: &str, due_at: NaiveDate) {
        if let Some(loan) = self.loans.write().unwrap_or_else(PoisonError::into_inner).get_mut(copy_id) {
            loan.due_at = due_at;
        }
    }
}

impl LendingService for LendingServiceImpl {
    fn register_patron(&self, patron: PatronDto) {
        info!("member registered: {}", patron.name);
        let previous = self.patrons.write().unwrap_or_else(PoisonError::into_inner)
            .insert(patron.patron_id.to_string(), patron.clone());
        let kind = match previous {
            Some(_) => DomainEventType::Updated,
            None => DomainEventType::Added,
        };
        publish_quietly(self.events_publisher.as_ref(), DomainEvent::new(
            kind, "patron_registered", "lending", patron.patron_id.as_str(), &patron));
    }

    fn find_patron(&self, patron_id: &str) -> Option<PatronDto> {
        self.patrons.read().unwrap_or_else(PoisonError::into_inner).get(patron_id).cloned()
    }

    fn checkout(&self, isbn: &str, patron_id: &str) -> LibraryResult<Option<BookCopyDto>> {
        let patron = self.find_patron(patron_id).ok_or_else(|| LibraryError::not_found(
            format!("checkout failed: patron {} not found", patron_id).as_str()))?;
        let today = self.clock.today();
        let due_at = today + Duration::days(self.book_loan_days);

        let mut checked_out = None;
        self.inventory.with_shelf(isbn, &mut |copies| {
            checked_out = self.lend(copies, patron_id, today, due_at);
        });

        match checked_out {
            Some((copy, loan)) => {
                info!("checkout: [{}] borrowed by {}", copy.book.title, patron.name);
                publish_quietly(self.events_publisher.as_ref(), DomainEvent::new(
                    DomainEventType::Added, "book_checked_out", "lending", copy.copy_id.as_str(), &loan)
                    .map(|e| e.with_metadata("patron_id", patron_id)));
                Ok(Some(copy))
            }
            None => {
                warn!("checkout failed: no copies available for isbn {}", isbn);
                Ok(None)
            }
        }
    }

    fn return_book_with_receipt(&self, copy_id: &str) -> LibraryResult<ReturnReceipt> {
        let isbn = self.loans.read().unwrap_or_else(PoisonError::into_inner)
            .get(copy_id).map(|l| l.isbn.to_string())
            .ok_or_else(|| Self::not_checked_out(copy_id))?;
        let today = self.clock.today();

        let mut released = Err(Self::not_checked_out(copy_id));
        let shelved = self.inventory.with_shelf(isbn.as_str(), &mut |copies| {
            released = self.release(copies, copy_id);
        });
        if !shelved {
            // the loan points at a title with no shelf at all
            let removed = self.loans.write().unwrap_or_else(PoisonError::into_inner).remove(copy_id);
            return match removed {
                Some(_) => Err(Self::missing_from_inventory(copy_id)),
                None => Err(Self::not_checked_out(copy_id)),
            };
        }
        let loan = released?;

        let days_overdue = loan.days_overdue(today);
        let receipt = ReturnReceipt {
            copy_id: loan.copy_id.to_string(),
            patron_id: loan.patron_id.to_string(),
            due_at: loan.due_at,
            returned_at: today,
            days_overdue,
            fee: self.calculate_fee(loan.patron_id.as_str(), days_overdue),
        };
        publish_quietly(self.events_publisher.as_ref(), DomainEvent::new(
            DomainEventType::Deleted, "book_returned", "lending", copy_id, &receipt));
        Ok(receipt)
    }

    fn find_loan(&self, copy_id: &str) -> Option<LoanDto> {
        self.loans.read().unwrap_or_else(PoisonError::into_inner).get(copy_id).cloned()
    }

    fn loans_for_patron(&self, patron_id: &str) -> Vec<LoanDto> {
        let mut loans: Vec<LoanDto> = self.loans.read().unwrap_or_else(PoisonError::into_inner)
            .values().filter(|l| l.patron_id == patron_id).cloned().collect();
        loans.sort_by(|a, b| a.due_at.cmp(&b.due_at).then_with(|| a.copy_id.cmp(&b.copy_id)));
        loans
    }

    fn query_overdue(&self) -> Vec<LoanDto> {
        let today = self.clock.today();
        let mut loans: Vec<LoanDto> = self.loans.read().unwrap_or_else(PoisonError::into_inner)
            .values().filter(|l| l.due_at < today).cloned().collect();
        loans.sort_by(|a, b| a.due_at.cmp(&b.due_at).then_with(|| a.copy_id.cmp(&b.copy_id)));
        loans
    }
}
