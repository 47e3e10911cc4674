use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::RwLock;

use tracing::{debug, info, warn};

use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{Book, BookId, DestructDraftBook, DraftBook};
use kernel::KernelError;

use crate::error::{ConvertError, DriverError};

/// Process-local book store.
///
/// A single collection-wide `RwLock` keeps every read-modify-write on one id
/// atomic; the id sequence is an independent atomic counter incremented once
/// per create, so ids are never reused across deletions and concurrent
/// creates never collide.
pub struct InMemoryBookRepository {
    books: RwLock<HashMap<BookId, Book>>,
    sequence: AtomicI32,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: RwLock::new(HashMap::new()),
            sequence: AtomicI32::new(0),
        }
    }

    fn next_id(&self) -> BookId {
        BookId::new(self.sequence.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl BookQuery for InMemoryBookRepository {
    async fn find_by_id(&self, id: &BookId) -> error_stack::Result<Option<Book>, KernelError> {
        debug!("Looking up book with id={id}");
        let books = self
            .books
            .read()
            .map_err(|_| DriverError::LockPoisoned)
            .convert_error()?;
        let found = books.get(id).cloned();
        match &found {
            Some(book) => info!("Found book: {id} -> {}", book.title().as_ref()),
            None => warn!("Book not found for id={id}"),
        }
        Ok(found)
    }

    async fn find_all(&self) -> error_stack::Result<Vec<Book>, KernelError> {
        let books = self
            .books
            .read()
            .map_err(|_| DriverError::LockPoisoned)
            .convert_error()?;
        debug!("Fetching all books (count={})", books.len());
        Ok(books.values().cloned().collect())
    }
}

#[async_trait::async_trait]
impl BookModifier for InMemoryBookRepository {
    async fn create(&self, draft: DraftBook) -> error_stack::Result<Book, KernelError> {
        let id = self.next_id();
        let DestructDraftBook {
            title,
            author,
            isbn,
            published_year,
        } = draft.into_destruct();
        let book = Book::new(id, title, author, isbn, published_year);
        let mut books = self
            .books
            .write()
            .map_err(|_| DriverError::LockPoisoned)
            .convert_error()?;
        books.insert(id, book.clone());
        info!("Created book id={id} title='{}'", book.title().as_ref());
        Ok(book)
    }

    async fn update(
        &self,
        id: &BookId,
        draft: DraftBook,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        debug!("Updating book id={id}");
        let DestructDraftBook {
            title,
            author,
            isbn,
            published_year,
        } = draft.into_destruct();
        let mut books = self
            .books
            .write()
            .map_err(|_| DriverError::LockPoisoned)
            .convert_error()?;
        let Some(existing) = books.get_mut(id) else {
            warn!("Cannot update, no book found with id={id}");
            return Ok(None);
        };
        let updated = existing.clone().reconstruct(|book| {
            book.title = title;
            book.author = author;
            book.isbn = isbn;
            book.published_year = published_year;
        });
        *existing = updated.clone();
        info!("Updated book id={id} -> title='{}'", updated.title().as_ref());
        Ok(Some(updated))
    }

    async fn delete(&self, id: &BookId) -> error_stack::Result<bool, KernelError> {
        debug!("Deleting book with id={id}");
        let mut books = self
            .books
            .write()
            .map_err(|_| DriverError::LockPoisoned)
            .convert_error()?;
        let removed = books.remove(id).is_some();
        if removed {
            info!("Deleted book id={id}");
        } else {
            warn!("Cannot delete, no book found with id={id}");
        }
        Ok(removed)
    }
}

impl DependOnBookQuery for InMemoryBookRepository {
    type BookQuery = Self;
    fn book_query(&self) -> &Self::BookQuery {
        self
    }
}

impl DependOnBookModifier for InMemoryBookRepository {
    type BookModifier = Self;
    fn book_modifier(&self) -> &Self::BookModifier {
        self
    }
}
