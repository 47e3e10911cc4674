use crate::controller::{Intake, TryIntake};
use crate::error::ApiError;
use application::transfer::{CreateBookDto, DeleteBookDto, GetBookDto, UpdateBookDto};
use serde::Deserialize;

// Required fields are deserialized as Option so that a missing title/author
// lands in the same 400 body as a blank one instead of a rejection from the
// Json extractor.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    title: Option<String>,
    author: Option<String>,
    isbn: Option<String>,
    published_year: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    title: Option<String>,
    author: Option<String>,
    isbn: Option<String>,
    published_year: Option<i32>,
}

#[derive(Debug)]
pub struct DeleteRequest {
    id: i32,
}

impl DeleteRequest {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct GetRequest {
    id: i32,
}

impl GetRequest {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}

fn require(field: Option<String>, message: &str, errors: &mut Vec<String>) -> String {
    match field {
        Some(value) if !value.trim().is_empty() => value,
        _ => {
            errors.push(message.to_string());
            String::new()
        }
    }
}

pub struct Transformer;

impl TryIntake<CreateRequest> for Transformer {
    type To = CreateBookDto;
    type Error = ApiError;
    fn emit(&self, input: CreateRequest) -> Result<Self::To, Self::Error> {
        let mut errors = Vec::new();
        let title = require(input.title, "Title is required", &mut errors);
        let author = require(input.author, "Author is required", &mut errors);
        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }
        Ok(CreateBookDto {
            title,
            author,
            isbn: input.isbn,
            published_year: input.published_year,
        })
    }
}

impl TryIntake<(i32, UpdateRequest)> for Transformer {
    type To = UpdateBookDto;
    type Error = ApiError;
    fn emit(&self, input: (i32, UpdateRequest)) -> Result<Self::To, Self::Error> {
        let (id, input) = input;
        let mut errors = Vec::new();
        let title = require(input.title, "Title is required", &mut errors);
        let author = require(input.author, "Author is required", &mut errors);
        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }
        Ok(UpdateBookDto {
            id,
            title,
            author,
            isbn: input.isbn,
            published_year: input.published_year,
        })
    }
}

impl Intake<GetRequest> for Transformer {
    type To = GetBookDto;
    fn emit(&self, input: GetRequest) -> Self::To {
        GetBookDto { id: input.id }
    }
}

impl Intake<DeleteRequest> for Transformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteRequest) -> Self::To {
        DeleteBookDto { id: input.id }
    }
}
