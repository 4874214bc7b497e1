use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the address book between runs.
///
/// Provides abstraction over where and how the book is stored, so the
/// command loop never touches the file system directly.
pub trait BookRepository {
    /// Load the stored book, or an empty one if nothing has been saved yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Persist the whole book, replacing any earlier copy.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
