use std::collections::HashMap;

use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::ledger::{BookInventoryLedger, DependOnBookInventoryLedger};
use kernel::interface::policy::{borrowing_access, staff_only, Access};
use kernel::interface::query::{
    BookQuery, BorrowingFilter, BorrowingQuery, DependOnBookQuery, DependOnBorrowingQuery,
    DependOnUserQuery, UserQuery,
};
use kernel::interface::update::{BorrowingModifier, DependOnBorrowingModifier};
use kernel::prelude::entity::{
    Book, BookId, BookInventory, Borrowing, BorrowingAction, BorrowingId, ExpectedReturnDate, User,
    UserId,
};
use kernel::KernelError;

use crate::transfer::{
    BorrowingDto, CreateBorrowingDto, DeleteBorrowingDto, GetAllBorrowingsDto, GetBorrowingDto,
    ManageBorrowingDto,
};

#[async_trait::async_trait]
pub trait BorrowBookService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnBookInventoryLedger
    + DependOnBorrowingModifier
{
    /// Opens a borrowing and takes one copy out of inventory in a single
    /// transaction. The book row stays locked from the first read to the
    /// commit, so two competing borrows of the last copy serialize and
    /// the loser sees the exhausted count.
    async fn borrow_book(
        &self,
        dto: CreateBorrowingDto,
    ) -> error_stack::Result<BorrowingDto, KernelError> {
        let actor = User::from(dto.actor);

        let mut connection = self.database_connection().transact().await?;

        let book_id = BookId::new(dto.book_id);
        let book = self
            .book_inventory_ledger()
            .lock(&mut connection, &book_id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound("book")))?;
        let available = *book.inventory().as_ref();
        if available <= 0 {
            return Err(Report::new(KernelError::InventoryExhausted));
        }

        let borrowing = Borrowing::open(
            BorrowingId::new(Uuid::new_v4()),
            book_id.clone(),
            actor.id().clone(),
            ExpectedReturnDate::new(dto.expected_return_date),
        )?;
        self.borrowing_modifier()
            .create(&mut connection, &borrowing)
            .await?;
        self.book_inventory_ledger()
            .borrow_copy(&mut connection, &book_id)
            .await?;

        connection.commit().await?;
        tracing::debug!(
            "borrowing {} opened for book {}",
            borrowing.id().as_ref(),
            book_id.as_ref()
        );

        let book = book.reconstruct(|b| b.inventory = BookInventory::new(available - 1));
        Ok(BorrowingDto::new(borrowing, book, actor.email().clone()))
    }
}

impl<T> BorrowBookService for T where
    T: DependOnDatabaseConnection + DependOnBookInventoryLedger + DependOnBorrowingModifier
{
}

#[async_trait::async_trait]
pub trait ManageBorrowingService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnBorrowingQuery
    + DependOnBorrowingModifier
    + DependOnBookInventoryLedger
    + DependOnBookQuery
{
    /// The return path. Only the owning user may manage a borrowing,
    /// staff included in the denial. A terminal record rejects every
    /// action; `keep` on an active one writes nothing.
    async fn manage_borrowing(
        &self,
        dto: ManageBorrowingDto,
    ) -> error_stack::Result<BorrowingDto, KernelError> {
        let actor = User::from(dto.actor);
        let action = match dto.action {
            Some(raw) => BorrowingAction::new(raw)?,
            None => BorrowingAction::default(),
        };

        let mut connection = self.database_connection().transact().await?;

        let id = BorrowingId::new(dto.id);
        let borrowing = self
            .borrowing_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound("borrowing")))?;
        borrowing_access(&actor, borrowing.user_id(), Access::Manage)?;
        if !borrowing.return_status().is_active() {
            return Err(Report::new(KernelError::AlreadyReturned));
        }

        let borrowing = match action {
            BorrowingAction::Keep => borrowing,
            BorrowingAction::Return => {
                let borrowing = borrowing.close()?;
                borrowing.validate()?;
                self.borrowing_modifier()
                    .update(&mut connection, &borrowing)
                    .await?;
                self.book_inventory_ledger()
                    .return_copy(&mut connection, borrowing.book_id())
                    .await?;
                tracing::debug!("borrowing {} returned", borrowing.id().as_ref());
                borrowing
            }
        };

        let book = self
            .book_query()
            .find_by_id(&mut connection, borrowing.book_id())
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound("book")))?;

        connection.commit().await?;

        Ok(BorrowingDto::new(borrowing, book, actor.email().clone()))
    }
}

impl<T> ManageBorrowingService for T where
    T: DependOnDatabaseConnection
        + DependOnBorrowingQuery
        + DependOnBorrowingModifier
        + DependOnBookInventoryLedger
        + DependOnBookQuery
{
}

#[async_trait::async_trait]
pub trait GetBorrowingService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnBorrowingQuery
    + DependOnBookQuery
    + DependOnUserQuery
{
    async fn get_borrowing(
        &self,
        dto: GetBorrowingDto,
    ) -> error_stack::Result<BorrowingDto, KernelError> {
        let actor = User::from(dto.actor);

        let mut connection = self.database_connection().transact().await?;

        let id = BorrowingId::new(dto.id);
        let borrowing = self
            .borrowing_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound("borrowing")))?;
        borrowing_access(&actor, borrowing.user_id(), Access::Read)?;

        let book = self
            .book_query()
            .find_by_id(&mut connection, borrowing.book_id())
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound("book")))?;
        let owner = self
            .user_query()
            .find_by_id(&mut connection, borrowing.user_id())
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound("user")))?;

        Ok(BorrowingDto::new(borrowing, book, owner.email().clone()))
    }
}

impl<T> GetBorrowingService for T where
    T: DependOnDatabaseConnection + DependOnBorrowingQuery + DependOnBookQuery + DependOnUserQuery
{
}

#[async_trait::async_trait]
pub trait GetAllBorrowingsService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnBorrowingQuery
    + DependOnBookQuery
    + DependOnUserQuery
{
    /// Staff may list anything and narrow by `user_id`; everyone else is
    /// scoped to their own records.
    async fn get_all_borrowings(
        &self,
        dto: GetAllBorrowingsDto,
    ) -> error_stack::Result<Vec<BorrowingDto>, KernelError> {
        let actor = User::from(dto.actor);
        let is_active = match dto.is_active {
            None => None,
            Some(raw) => Some(parse_is_active(raw)?),
        };
        let user_id = match dto.user_id {
            None => None,
            Some(id) => {
                staff_only(&actor, "filter by user_id")?;
                Some(UserId::new(id))
            }
        };
        let user_id = if bool::from(*actor.is_staff()) {
            user_id
        } else {
            Some(actor.id().clone())
        };

        let mut connection = self.database_connection().transact().await?;

        let filter = BorrowingFilter {
            is_active,
            user_id,
            limit: dto.limit,
            offset: dto.offset,
        };
        let borrowings = self
            .borrowing_query()
            .find_all(&mut connection, &filter)
            .await?;

        let book_ids = borrowings
            .iter()
            .map(|borrowing| borrowing.book_id().clone())
            .collect::<Vec<_>>();
        let books = self
            .book_query()
            .find_by_ids(&mut connection, &book_ids)
            .await?
            .into_iter()
            .map(|book| (book.id().clone(), book))
            .collect::<HashMap<BookId, Book>>();
        let user_ids = borrowings
            .iter()
            .map(|borrowing| borrowing.user_id().clone())
            .collect::<Vec<_>>();
        let owners = self
            .user_query()
            .find_by_ids(&mut connection, &user_ids)
            .await?
            .into_iter()
            .map(|user| (user.id().clone(), user))
            .collect::<HashMap<UserId, User>>();

        let mut records = Vec::with_capacity(borrowings.len());
        for borrowing in borrowings {
            let book = books
                .get(borrowing.book_id())
                .cloned()
                .ok_or_else(|| Report::new(KernelError::NotFound("book")))?;
            let owner = owners
                .get(borrowing.user_id())
                .ok_or_else(|| Report::new(KernelError::NotFound("user")))?;
            records.push(BorrowingDto::new(borrowing, book, owner.email().clone()));
        }
        Ok(records)
    }
}

impl<T> GetAllBorrowingsService for T where
    T: DependOnDatabaseConnection + DependOnBorrowingQuery + DependOnBookQuery + DependOnUserQuery
{
}

#[async_trait::async_trait]
pub trait DeleteBorrowingService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnBorrowingQuery
    + DependOnBorrowingModifier
{
    async fn delete_borrowing(
        &self,
        dto: DeleteBorrowingDto,
    ) -> error_stack::Result<(), KernelError> {
        let actor = User::from(dto.actor);

        let mut connection = self.database_connection().transact().await?;

        let id = BorrowingId::new(dto.id);
        let borrowing = self
            .borrowing_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound("borrowing")))?;
        borrowing_access(&actor, borrowing.user_id(), Access::Destroy)?;

        self.borrowing_modifier()
            .delete(&mut connection, &id)
            .await?;

        connection.commit().await?;

        Ok(())
    }
}

impl<T> DeleteBorrowingService for T where
    T: DependOnDatabaseConnection + DependOnBorrowingQuery + DependOnBorrowingModifier
{
}

fn parse_is_active(raw: String) -> error_stack::Result<bool, KernelError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(Report::new(KernelError::InvalidFilterValue(raw))),
    }
}
