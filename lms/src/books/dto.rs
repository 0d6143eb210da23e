use std::sync::Arc;
use serde::{Deserialize, Serialize};
use crate::books::Book;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

// BookDto describes a title in the catalog. It never changes once cataloged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDto {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str, author: &str, publication_year: i32) -> BookDto {
        BookDto {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            publication_year,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

// BookCopyDto abstracts physical book in the library; there can be many copies
// of the same title, each with its own barcode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookCopyDto {
    pub copy_id: String,
    pub book: Arc<BookDto>,
    pub status: BookStatus,
}

impl BookCopyDto {
    pub fn new(copy_id: &str, book: Arc<BookDto>) -> BookCopyDto {
        BookCopyDto {
            copy_id: copy_id.to_string(),
            book,
            status: BookStatus::Available,
        }
    }

    pub fn isbn(&self) -> &str {
        self.book.isbn.as_str()
    }
}

impl Identifiable for BookCopyDto {
    fn id(&self) -> String {
        self.copy_id.to_string()
    }
}

impl Book for BookCopyDto {
    fn status(&self) -> BookStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::Book;
    use crate::books::dto::{BookCopyDto, BookDto};
    use crate::core::domain::Identifiable;
    use crate::core::library::BookStatus;

    #[test]
    fn test_should_build_books() {
        let book = BookDto::new("isbn", "title", "author", 2011);
        assert_eq!("isbn", book.id().as_str());
        assert_eq!("title", book.title.as_str());
        assert_eq!(2011, book.publication_year);
    }

    #[test]
    fn test_should_build_available_copy() {
        let book = Arc::new(BookDto::new("isbn", "title", "author", 2011));
        let mut copy = BookCopyDto::new("ITEM-1", book);
        assert_eq!("ITEM-1", copy.id().as_str());
        assert_eq!("isbn", copy.isbn());
        assert!(copy.is_available());
        copy.status = BookStatus::Borrowed;
        assert!(!copy.is_available());
    }
}
