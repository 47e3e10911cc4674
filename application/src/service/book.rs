use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{BookAuthor, BookId, BookTitle, DraftBook, Isbn, PublishedYear};
use kernel::KernelError;

use crate::transfer::{BookDto, CreateBookDto, DeleteBookDto, GetBookDto, UpdateBookDto};

#[async_trait::async_trait]
pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDto>, KernelError> {
        let id = BookId::new(dto.id);
        let book = self.book_query().find_by_id(&id).await?;
        Ok(book.map(BookDto::from))
    }

    async fn get_all_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let books = self.book_query().find_all().await?;
        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait CreateBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let draft = DraftBook::new(
            BookTitle::new(dto.title),
            BookAuthor::new(dto.author),
            dto.isbn.map(Isbn::new),
            dto.published_year.map(PublishedYear::new),
        );
        let book = self.book_modifier().create(draft).await?;
        Ok(BookDto::from(book))
    }
}

impl<T> CreateBookService for T where T: DependOnBookModifier {}

#[async_trait::async_trait]
pub trait UpdateBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn update_book(
        &self,
        dto: UpdateBookDto,
    ) -> error_stack::Result<Option<BookDto>, KernelError> {
        let id = BookId::new(dto.id);
        let draft = DraftBook::new(
            BookTitle::new(dto.title),
            BookAuthor::new(dto.author),
            dto.isbn.map(Isbn::new),
            dto.published_year.map(PublishedYear::new),
        );
        let book = self.book_modifier().update(&id, draft).await?;
        Ok(book.map(BookDto::from))
    }
}

impl<T> UpdateBookService for T where T: DependOnBookModifier {}

#[async_trait::async_trait]
pub trait DeleteBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn delete_book(&self, dto: DeleteBookDto) -> error_stack::Result<bool, KernelError> {
        let id = BookId::new(dto.id);
        self.book_modifier().delete(&id).await
    }
}

impl<T> DeleteBookService for T where T: DependOnBookModifier {}
