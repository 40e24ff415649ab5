use sqlx::PgConnection;
use time::Date;
use uuid::Uuid;

use kernel::interface::query::{BorrowingFilter, BorrowingQuery, DependOnBorrowingQuery};
use kernel::interface::update::{BorrowingModifier, DependOnBorrowingModifier};
use kernel::prelude::entity::{
    BookId, BorrowDate, Borrowing, BorrowingId, ExpectedReturnDate, ReturnStatus, UserId,
};
use kernel::KernelError;

use crate::database::postgres::{PostgresDatabase, PostgresTransaction};
use crate::error::ConvertError;

pub struct PostgresBorrowingRepository;

#[async_trait::async_trait]
impl BorrowingQuery for PostgresBorrowingRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &BorrowingId,
    ) -> error_stack::Result<Option<Borrowing>, KernelError> {
        PgBorrowingInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
        filter: &BorrowingFilter,
    ) -> error_stack::Result<Vec<Borrowing>, KernelError> {
        PgBorrowingInternal::find_all(con, filter).await
    }
}

#[async_trait::async_trait]
impl BorrowingModifier for PostgresBorrowingRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        borrowing: &Borrowing,
    ) -> error_stack::Result<(), KernelError> {
        PgBorrowingInternal::create(con, borrowing).await
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        borrowing: &Borrowing,
    ) -> error_stack::Result<(), KernelError> {
        PgBorrowingInternal::update(con, borrowing).await
    }

    async fn delete(
        &self,
        con: &mut PostgresTransaction,
        borrowing_id: &BorrowingId,
    ) -> error_stack::Result<(), KernelError> {
        PgBorrowingInternal::delete(con, borrowing_id).await
    }
}

impl DependOnBorrowingQuery for PostgresDatabase {
    type BorrowingQuery = PostgresBorrowingRepository;
    fn borrowing_query(&self) -> &Self::BorrowingQuery {
        &PostgresBorrowingRepository
    }
}

impl DependOnBorrowingModifier for PostgresDatabase {
    type BorrowingModifier = PostgresBorrowingRepository;
    fn borrowing_modifier(&self) -> &Self::BorrowingModifier {
        &PostgresBorrowingRepository
    }
}

#[derive(sqlx::FromRow)]
struct BorrowingRow {
    id: Uuid,
    book_id: Uuid,
    user_id: Uuid,
    borrow_date: Date,
    expected_return_date: Date,
    actual_return_date: Option<Date>,
}

impl From<BorrowingRow> for Borrowing {
    fn from(value: BorrowingRow) -> Self {
        Borrowing::new(
            BorrowingId::new(value.id),
            BookId::new(value.book_id),
            UserId::new(value.user_id),
            BorrowDate::new(value.borrow_date),
            ExpectedReturnDate::new(value.expected_return_date),
            ReturnStatus::from(value.actual_return_date),
        )
    }
}

pub(in crate::database) struct PgBorrowingInternal;

impl PgBorrowingInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &BorrowingId,
    ) -> error_stack::Result<Option<Borrowing>, KernelError> {
        let row = sqlx::query_as::<_, BorrowingRow>(
            // language=postgresql
            r#"
            SELECT id, book_id, user_id, borrow_date, expected_return_date, actual_return_date
            FROM borrowings
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Borrowing::from))
    }

    async fn find_all(
        con: &mut PgConnection,
        filter: &BorrowingFilter,
    ) -> error_stack::Result<Vec<Borrowing>, KernelError> {
        let rows = sqlx::query_as::<_, BorrowingRow>(
            // language=postgresql
            r#"
            SELECT id, book_id, user_id, borrow_date, expected_return_date, actual_return_date
            FROM borrowings
            WHERE ($1::boolean IS NULL OR (actual_return_date IS NULL) = $1)
              AND ($2::uuid IS NULL OR user_id = $2)
            ORDER BY borrow_date DESC, id
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(filter.is_active)
        .bind(filter.user_id.as_ref().map(|id| id.as_ref()))
        .bind(filter.limit.as_ref())
        .bind(filter.offset.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Borrowing::from).collect())
    }

    async fn create(
        con: &mut PgConnection,
        borrowing: &Borrowing,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO borrowings (id, book_id, user_id, borrow_date, expected_return_date, actual_return_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(borrowing.id().as_ref())
        .bind(borrowing.book_id().as_ref())
        .bind(borrowing.user_id().as_ref())
        .bind(borrowing.borrow_date().as_ref())
        .bind(borrowing.expected_return_date().as_ref())
        .bind(borrowing.return_status().returned_on().copied())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(
        con: &mut PgConnection,
        borrowing: &Borrowing,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE borrowings
            SET expected_return_date = $2, actual_return_date = $3
            WHERE id = $1
            "#,
        )
        .bind(borrowing.id().as_ref())
        .bind(borrowing.expected_return_date().as_ref())
        .bind(borrowing.return_status().returned_on().copied())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn delete(
        con: &mut PgConnection,
        borrowing_id: &BorrowingId,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM borrowings
            WHERE id = $1
            "#,
        )
        .bind(borrowing_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
