use crate::KernelError;

#[async_trait::async_trait]
pub trait DatabaseConnection: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError>;
}

pub trait DependOnDatabaseConnection: 'static + Sync + Send {
    type DatabaseConnection: DatabaseConnection;
    fn database_connection(&self) -> &Self::DatabaseConnection;
}

impl<T> DependOnDatabaseConnection for T
where
    T: DatabaseConnection,
{
    type DatabaseConnection = T;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        self
    }
}

/// Unit of work handed out by [`DatabaseConnection::transact`].
///
/// Every operation of the borrowing lifecycle runs inside one of these. Row
/// locks taken while the transaction is open (the book row on the borrow
/// path) are held until [`commit`](Transaction::commit) or
/// [`roll_back`](Transaction::roll_back). Implementations must roll back a
/// transaction that is dropped without an explicit commit, so an early `?`
/// return leaves no partial state behind.
#[async_trait::async_trait]
pub trait Transaction: 'static + Sync + Send {
    async fn commit(self) -> error_stack::Result<(), KernelError>;
    async fn roll_back(self) -> error_stack::Result<(), KernelError>;
}
