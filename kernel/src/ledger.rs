use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Book, BookId};
use crate::KernelError;

/// Inventory movements for the borrow and return paths. All three
/// operations run inside the caller's transaction; nothing here commits.
#[async_trait::async_trait]
pub trait BookInventoryLedger: 'static + Sync + Send {
    type Transaction: Transaction;

    /// Reads the book row under a row-level exclusive lock. The lock is
    /// held until the surrounding transaction commits or rolls back.
    async fn lock(
        &self,
        con: &mut Self::Transaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError>;

    /// Takes one copy out of inventory. The decrement is guarded so the
    /// count can never drop below zero; an exhausted row reports
    /// [`KernelError::InventoryExhausted`] and leaves the row untouched.
    async fn borrow_copy(
        &self,
        con: &mut Self::Transaction,
        id: &BookId,
    ) -> error_stack::Result<(), KernelError>;

    /// Puts one copy back. Counting the copy against the original stock
    /// is the caller's job, not checked here.
    async fn return_copy(
        &self,
        con: &mut Self::Transaction,
        id: &BookId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookInventoryLedger: 'static + Sync + Send + DependOnDatabaseConnection {
    type BookInventoryLedger: BookInventoryLedger<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn book_inventory_ledger(&self) -> &Self::BookInventoryLedger;
}
