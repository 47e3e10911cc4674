use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

// No format validation, any client-supplied string is accepted.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct Isbn(String);

impl Isbn {
    pub fn new(isbn: impl Into<String>) -> Self {
        Self(isbn.into())
    }
}
