pub mod add_book_cmd;
pub mod add_copy_cmd;
pub mod find_books_cmd;
