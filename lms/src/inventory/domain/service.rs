use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::{debug, info, warn};
use crate::books::Book;
use crate::books::dto::{BookCopyDto, BookDto};
use crate::core::domain::Configuration;
use crate::core::events::{DomainEvent, DomainEventType};
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::{publish_quietly, EventPublisher};
use crate::inventory::domain::{InventoryService, ShelfAccess};

// Copies of one title, in the order they were added. Each shelf has its own lock so
// that appends and checkouts on different titles never contend.
type Shelf = Arc<Mutex<Vec<BookCopyDto>>>;

pub struct InventoryServiceImpl {
    catalog: RwLock<BTreeMap<String, Arc<BookDto>>>,
    shelves: RwLock<HashMap<String, Shelf>>,
    copy_ids: Mutex<HashSet<String>>,
    events_publisher: Arc<dyn EventPublisher>,
}

impl InventoryServiceImpl {
    pub fn new(_config: &Configuration, events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            catalog: RwLock::new(BTreeMap::new()),
            shelves: RwLock::new(HashMap::new()),
            copy_ids: Mutex::new(HashSet::new()),
            events_publisher,
        }
    }

    fn shelf(&self, isbn: &str) -> Option<Shelf> {
        self.shelves.read().unwrap_or_else(PoisonError::into_inner).get(isbn).cloned()
    }

    // None when the title has no shelf.
    fn with_copies<R>(&self, isbn: &str, f: impl FnOnce(&mut Vec<BookCopyDto>) -> R) -> Option<R> {
        let shelf = self.shelf(isbn)?;
        let mut copies = shelf.lock().unwrap_or_else(PoisonError::into_inner);
        Some(f(&mut copies))
    }
}

impl ShelfAccess for InventoryServiceImpl {
    fn with_shelf(&self, isbn: &str, f: &mut dyn FnMut(&mut Vec<BookCopyDto>)) -> bool {
        self.with_copies(isbn, |copies| f(copies)).is_some()
    }
}

impl InventoryService for InventoryServiceImpl {
    fn add_book(&self, book: BookDto) -> bool {
        let book = Arc::new(book);
        {
            let mut catalog = self.catalog.write().unwrap_or_else(PoisonError::into_inner);
            if catalog.contains_key(&book.isbn) {
                warn!("attempted to add duplicate book isbn: {}", book.isbn);
                return false;
            }
            catalog.insert(book.isbn.to_string(), book.clone());
            self.shelves.write().unwrap_or_else(PoisonError::into_inner)
                .insert(book.isbn.to_string(), Arc::new(Mutex::new(vec![])));
        }
        info!("cataloged new book: {}", book.title);
        publish_quietly(self.events_publisher.as_ref(), DomainEvent::new(
            DomainEventType::Added, "book_cataloged", "inventory", book.isbn.as_str(), book.as_ref()));
        true
    }

    fn add_copy(&self, isbn: &str, copy_id: &str) -> LibraryResult<BookCopyDto> {
        let not_found = || LibraryError::not_found(
            format!("cannot add copy, isbn {} not found in catalog", isbn).as_str());
        let book = self.catalog.read().unwrap_or_else(PoisonError::into_inner)
            .get(isbn).cloned().ok_or_else(not_found)?;
        let shelf = self.shelf(isbn).ok_or_else(not_found)?;
        if !self.copy_ids.lock().unwrap_or_else(PoisonError::into_inner).insert(copy_id.to_string()) {
            return Err(LibraryError::duplicate_key(
                format!("copy {} already exists in inventory", copy_id).as_str()));
        }
        let copy = BookCopyDto::new(copy_id, book);
        shelf.lock().unwrap_or_else(PoisonError::into_inner).push(copy.clone());
        debug!("added copy {} of {}", copy_id, isbn);
        publish_quietly(self.events_publisher.as_ref(), DomainEvent::new(
            DomainEventType::Added, "copy_added", "inventory", copy_id, &copy)
            .map(|e| e.with_metadata("isbn", isbn)));
        Ok(copy)
    }

    fn copies_of(&self, isbn: &str) -> Vec<BookCopyDto> {
        self.with_copies(isbn, |copies| copies.clone()).unwrap_or_default()
    }

    fn count_available(&self, isbn: &str) -> usize {
        self.with_copies(isbn, |copies| copies.iter().filter(|c| c.is_available()).count())
            .unwrap_or_default()
    }

    fn find_copy(&self, copy_id: &str) -> Option<BookCopyDto> {
        let shelves: Vec<Shelf> = self.shelves.read().unwrap_or_else(PoisonError::into_inner)
            .values().cloned().collect();
        shelves.iter().find_map(|shelf| {
            shelf.lock().unwrap_or_else(PoisonError::into_inner)
                .iter().find(|c| c.copy_id == copy_id).cloned()
        })
    }

    fn find_book(&self, isbn: &str) -> Option<BookDto> {
        self.catalog.read().unwrap_or_else(PoisonError::into_inner)
            .get(isbn).map(|b| b.as_ref().clone())
    }

    fn find_books_by_title(&self, fragment: &str) -> Vec<BookDto> {
        if fragment.trim().is_empty() {
            return vec![];
        }
        let query = fragment.to_lowercase();
        self.catalog.read().unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|b| b.title.to_lowercase().contains(&query))
            .map(|b| b.as_ref().clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;
    use crate::books::dto::BookDto;
    use crate::core::domain::Configuration;
    use crate::core::library::{BookStatus, LibraryError};
    use crate::gateway::memory::MemoryPublisher;
    use crate::inventory::domain::{InventoryService, ShelfAccess};
    use crate::inventory::domain::service::InventoryServiceImpl;

    fn build_service() -> (InventoryServiceImpl, Arc<MemoryPublisher>) {
        let publisher = Arc::new(MemoryPublisher::new());
        (InventoryServiceImpl::new(&Configuration::new("test"), publisher.clone()), publisher)
    }

    fn clean_coder() -> BookDto {
        BookDto::new("978-0137081073", "The Clean Coder", "Robert C. Martin", 2011)
    }

    #[test]
    fn test_should_add_book() {
        let (svc, publisher) = build_service();
        assert!(svc.add_book(clean_coder()));

        let loaded = svc.find_book("978-0137081073").expect("should return book");
        assert_eq!(clean_coder(), loaded);
        assert!(svc.copies_of("978-0137081073").is_empty());
        assert_eq!(vec!["book_cataloged".to_string()], publisher.names());
    }

    #[test]
    fn test_should_keep_first_book_on_duplicate_isbn() {
        let (svc, publisher) = build_service();
        assert!(svc.add_book(clean_coder()));
        let _ = svc.add_copy("978-0137081073", "ITEM-101").expect("should add copy");

        assert!(!svc.add_book(BookDto::new("978-0137081073", "Imposter", "Someone Else", 1999)));

        let loaded = svc.find_book("978-0137081073").expect("should return book");
        assert_eq!("The Clean Coder", loaded.title.as_str());
        assert_eq!(1, svc.copies_of("978-0137081073").len());
        assert_eq!(vec!["book_cataloged".to_string(), "copy_added".to_string()], publisher.names());
    }

    #[test]
    fn test_should_add_available_copies_in_order() {
        let (svc, _) = build_service();
        svc.add_book(clean_coder());
        let first = svc.add_copy("978-0137081073", "ITEM-101").expect("should add copy");
        let _ = svc.add_copy("978-0137081073", "ITEM-102").expect("should add copy");

        assert_eq!(BookStatus::Available, first.status);
        assert_eq!("The Clean Coder", first.book.title.as_str());
        let ids: Vec<String> = svc.copies_of("978-0137081073").into_iter().map(|c| c.copy_id).collect();
        assert_eq!(vec!["ITEM-101".to_string(), "ITEM-102".to_string()], ids);
        assert_eq!(2, svc.count_available("978-0137081073"));
    }

    #[test]
    fn test_should_fail_copy_for_unknown_isbn() {
        let (svc, publisher) = build_service();
        let res = svc.add_copy("missing", "ITEM-1");
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
        assert!(svc.find_copy("ITEM-1").is_none());
        assert!(publisher.names().is_empty());
    }

    #[test]
    fn test_should_reject_duplicate_copy_id() {
        let (svc, _) = build_service();
        svc.add_book(clean_coder());
        svc.add_book(BookDto::new("978-0201633610", "Design Patterns", "Erich Gamma", 1994));
        let _ = svc.add_copy("978-0137081073", "ITEM-101").expect("should add copy");

        let res = svc.add_copy("978-0201633610", "ITEM-101");
        assert!(matches!(res, Err(LibraryError::DuplicateKey { .. })));
        assert!(svc.copies_of("978-0201633610").is_empty());
    }

    #[test]
    fn test_should_return_empty_copies_for_unknown_isbn() {
        let (svc, _) = build_service();
        assert!(svc.copies_of("missing").is_empty());
        assert_eq!(0, svc.count_available("missing"));
    }

    #[test]
    fn test_should_find_copy_across_titles() {
        let (svc, _) = build_service();
        svc.add_book(clean_coder());
        svc.add_book(BookDto::new("978-0201633610", "Design Patterns", "Erich Gamma", 1994));
        let _ = svc.add_copy("978-0137081073", "ITEM-101").expect("should add copy");
        let _ = svc.add_copy("978-0201633610", "ITEM-201").expect("should add copy");

        let copy = svc.find_copy("ITEM-201").expect("should find copy");
        assert_eq!("978-0201633610", copy.isbn());
        assert!(svc.find_copy("ITEM-999").is_none());
        assert!(svc.find_book("missing").is_none());
    }

    #[test]
    fn test_should_find_books_by_title_ignoring_case() {
        let (svc, _) = build_service();
        svc.add_book(clean_coder());
        svc.add_book(BookDto::new("978-0201633610", "Design Patterns", "Erich Gamma", 1994));

        let res = svc.find_books_by_title("CLEAN");
        assert_eq!(1, res.len());
        assert_eq!("978-0137081073", res[0].isbn.as_str());
        assert_eq!(2, svc.find_books_by_title("e").len());
        assert!(svc.find_books_by_title("cobol").is_empty());
    }

    #[test]
    fn test_should_not_match_blank_title_fragment() {
        let (svc, _) = build_service();
        svc.add_book(clean_coder());
        assert!(svc.find_books_by_title("").is_empty());
        assert!(svc.find_books_by_title("   ").is_empty());
    }

    #[test]
    fn test_should_not_lose_concurrent_copies() {
        let (svc, _) = build_service();
        svc.add_book(clean_coder());

        thread::scope(|s| {
            for t in 0..8 {
                let svc = &svc;
                s.spawn(move || {
                    for i in 0..25 {
                        svc.add_copy("978-0137081073", format!("ITEM-{}-{}", t, i).as_str())
                            .expect("should add copy");
                    }
                });
            }
        });

        assert_eq!(200, svc.copies_of("978-0137081073").len());
    }

    #[test]
    fn test_should_give_shelf_access_only_for_cataloged_titles() {
        let (svc, _) = build_service();
        svc.add_book(clean_coder());
        let _ = svc.add_copy("978-0137081073", "ITEM-101").expect("should add copy");

        let mut seen = 0;
        assert!(!svc.with_shelf("missing", &mut |copies| seen = copies.len()));
        assert_eq!(0, seen);

        assert!(svc.with_shelf("978-0137081073", &mut |copies| copies[0].status = BookStatus::Borrowed));
        assert_eq!(0, svc.count_available("978-0137081073"));
    }
}
