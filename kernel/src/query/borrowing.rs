use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Borrowing, BorrowingId, SelectLimit, SelectOffset, UserId};
use crate::KernelError;

#[derive(Debug, Clone, Default)]
pub struct BorrowingFilter {
    pub is_active: Option<bool>,
    pub user_id: Option<UserId>,
    pub limit: SelectLimit,
    pub offset: SelectOffset,
}

#[async_trait::async_trait]
pub trait BorrowingQuery: Sync + Send + 'static {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &BorrowingId,
    ) -> error_stack::Result<Option<Borrowing>, KernelError>;
    async fn find_all(
        &self,
        con: &mut Self::Transaction,
        filter: &BorrowingFilter,
    ) -> error_stack::Result<Vec<Borrowing>, KernelError>;
}

pub trait DependOnBorrowingQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type BorrowingQuery: BorrowingQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn borrowing_query(&self) -> &Self::BorrowingQuery;
}
