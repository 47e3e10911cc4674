use crate::entity::{Book, BookId, DraftBook};
use crate::KernelError;

/// Mutating half of the store contract. Implementations own id assignment:
/// ids come from a single monotonic sequence and are never reused, even
/// after a delete.
#[async_trait::async_trait]
pub trait BookModifier: Sync + Send + 'static {
    async fn create(&self, draft: DraftBook) -> error_stack::Result<Book, KernelError>;

    /// Replaces every field except the id. `None` when no book has this id;
    /// the check and the write are atomic with respect to concurrent
    /// update/delete on the same id.
    async fn update(
        &self,
        id: &BookId,
        draft: DraftBook,
    ) -> error_stack::Result<Option<Book>, KernelError>;

    /// `false` when no book has this id.
    async fn delete(&self, id: &BookId) -> error_stack::Result<bool, KernelError>;
}

pub trait DependOnBookModifier: Sync + Send + 'static {
    type BookModifier: BookModifier;
    fn book_modifier(&self) -> &Self::BookModifier;
}
