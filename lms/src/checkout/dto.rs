use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::books::dto::BookCopyDto;
use crate::core::domain::Identifiable;
use crate::utils::date::day_serializer;

// LoanDto is the active loan of one copy. It exists exactly while the copy is borrowed,
// so the due date can never outlive the loan.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LoanDto {
    pub loan_id: String,
    pub branch_id: String,
    pub copy_id: String,
    pub isbn: String,
    pub patron_id: String,
    #[serde(with = "day_serializer")]
    pub checkout_at: NaiveDate,
    #[serde(with = "day_serializer")]
    pub due_at: NaiveDate,
}

impl LoanDto {
    pub fn new(branch_id: &str, copy: &BookCopyDto, patron_id: &str,
               checkout_at: NaiveDate, due_at: NaiveDate) -> Self {
        Self {
            loan_id: Uuid::new_v4().to_string(),
            branch_id: branch_id.to_string(),
            copy_id: copy.copy_id.to_string(),
            isbn: copy.isbn().to_string(),
            patron_id: patron_id.to_string(),
            checkout_at,
            due_at,
        }
    }

    pub fn days_overdue(&self, today: NaiveDate) -> i64 {
        (today - self.due_at).num_days().max(0)
    }
}

impl Identifiable for LoanDto {
    fn id(&self) -> String {
        self.loan_id.to_string()
    }
}

// ReturnReceipt summarises a completed return.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ReturnReceipt {
    pub copy_id: String,
    pub patron_id: String,
    #[serde(with = "day_serializer")]
    pub due_at: NaiveDate,
    #[serde(with = "day_serializer")]
    pub returned_at: NaiveDate,
    pub days_overdue: i64,
    pub fee: f64,
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use chrono::NaiveDate;
    use crate::books::dto::{BookCopyDto, BookDto};
    use crate::checkout::dto::LoanDto;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).expect("valid date")
    }

    #[test]
    fn test_should_build_loan() {
        let copy = BookCopyDto::new("ITEM-1", Arc::new(BookDto::new("isbn", "title", "author", 2000)));
        let loan = LoanDto::new("branch", &copy, "patron1", day(1), day(15));
        assert_eq!("ITEM-1", loan.copy_id.as_str());
        assert_eq!("isbn", loan.isbn.as_str());
        assert_eq!("patron1", loan.patron_id.as_str());
        assert_eq!(day(15), loan.due_at);
    }

    #[test]
    fn test_should_count_days_overdue() {
        let copy = BookCopyDto::new("ITEM-1", Arc::new(BookDto::new("isbn", "title", "author", 2000)));
        let loan = LoanDto::new("branch", &copy, "patron1", day(1), day(15));
        assert_eq!(0, loan.days_overdue(day(10)));
        assert_eq!(0, loan.days_overdue(day(15)));
        assert_eq!(5, loan.days_overdue(day(20)));
    }
}
