pub use self::book::*;

mod book;
