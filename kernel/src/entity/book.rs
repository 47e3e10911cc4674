mod author;
mod id;
mod isbn;
mod published_year;
mod title;

pub use self::{author::*, id::*, isbn::*, published_year::*, title::*};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: BookAuthor,
    isbn: Option<Isbn>,
    published_year: Option<PublishedYear>,
}

impl Book {
    pub fn new(
        id: BookId,
        title: BookTitle,
        author: BookAuthor,
        isbn: Option<Isbn>,
        published_year: Option<PublishedYear>,
    ) -> Self {
        Self {
            id,
            title,
            author,
            isbn,
            published_year,
        }
    }
}

/// A book candidate before the store has assigned it an id.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct DraftBook {
    title: BookTitle,
    author: BookAuthor,
    isbn: Option<Isbn>,
    published_year: Option<PublishedYear>,
}

impl DraftBook {
    pub fn new(
        title: BookTitle,
        author: BookAuthor,
        isbn: Option<Isbn>,
        published_year: Option<PublishedYear>,
    ) -> Self {
        Self {
            title,
            author,
            isbn,
            published_year,
        }
    }
}
