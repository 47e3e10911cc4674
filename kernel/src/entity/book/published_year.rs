use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct PublishedYear(i32);

impl PublishedYear {
    pub fn new(year: impl Into<i32>) -> Self {
        Self(year.into())
    }
}
