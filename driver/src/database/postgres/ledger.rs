use error_stack::Report;
use sqlx::PgConnection;

use kernel::interface::ledger::{BookInventoryLedger, DependOnBookInventoryLedger};
use kernel::prelude::entity::{Book, BookId};
use kernel::KernelError;

use crate::database::postgres::book::BookRow;
use crate::database::postgres::{PostgresDatabase, PostgresTransaction};
use crate::error::ConvertError;

pub struct PostgresBookInventoryLedger;

#[async_trait::async_trait]
impl BookInventoryLedger for PostgresBookInventoryLedger {
    type Transaction = PostgresTransaction;

    async fn lock(
        &self,
        con: &mut PostgresTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        PgLedgerInternal::lock(con, id).await
    }

    async fn borrow_copy(
        &self,
        con: &mut PostgresTransaction,
        id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        PgLedgerInternal::borrow_copy(con, id).await
    }

    async fn return_copy(
        &self,
        con: &mut PostgresTransaction,
        id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        PgLedgerInternal::return_copy(con, id).await
    }
}

impl DependOnBookInventoryLedger for PostgresDatabase {
    type BookInventoryLedger = PostgresBookInventoryLedger;
    fn book_inventory_ledger(&self) -> &Self::BookInventoryLedger {
        &PostgresBookInventoryLedger
    }
}

pub(in crate::database) struct PgLedgerInternal;

impl PgLedgerInternal {
    /// `FOR UPDATE` keeps the row locked until the surrounding
    /// transaction ends, serializing competing borrows of one book.
    async fn lock(
        con: &mut PgConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, title, author, cover, inventory, daily_fee
            FROM books
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(Book::try_from).transpose()
    }

    async fn borrow_copy(
        con: &mut PgConnection,
        id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        let result = sqlx::query(
            // language=postgresql
            r#"
            UPDATE books
            SET inventory = inventory - 1
            WHERE id = $1
              AND inventory > 0
            "#,
        )
        .bind(id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        if result.rows_affected() == 0 {
            return Err(Report::new(KernelError::InventoryExhausted)
                .attach_printable(format!("book {}", id.as_ref())));
        }
        Ok(())
    }

    async fn return_copy(
        con: &mut PgConnection,
        id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        let result = sqlx::query(
            // language=postgresql
            r#"
            UPDATE books
            SET inventory = inventory + 1
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        if result.rows_affected() == 0 {
            return Err(Report::new(KernelError::NotFound("book"))
                .attach_printable(format!("book {}", id.as_ref())));
        }
        Ok(())
    }
}
