//! In-memory stand-ins for the Postgres repositories. Writes land
//! immediately; the services order their checks so no test path relies
//! on rollback.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::ledger::{BookInventoryLedger, DependOnBookInventoryLedger};
use kernel::interface::query::{
    BookFilter, BookQuery, BorrowingFilter, BorrowingQuery, DependOnBookQuery,
    DependOnBorrowingQuery, DependOnUserQuery, UserQuery,
};
use kernel::interface::update::{
    BookModifier, BorrowingModifier, DependOnBookModifier, DependOnBorrowingModifier,
    DependOnUserModifier, UserModifier,
};
use kernel::prelude::entity::{
    Book, BookId, BookInventory, Borrowing, BorrowingId, User, UserId,
};
use kernel::KernelError;

use crate::transfer::UserDto;

type Table<T> = Arc<Mutex<HashMap<Uuid, T>>>;

pub(crate) fn staff() -> UserDto {
    UserDto {
        id: Uuid::new_v4(),
        email: format!("admin-{}@library.test", Uuid::new_v4().simple()),
        is_staff: true,
    }
}

pub(crate) fn visitor() -> UserDto {
    UserDto {
        id: Uuid::new_v4(),
        email: format!("reader-{}@library.test", Uuid::new_v4().simple()),
        is_staff: false,
    }
}

pub(crate) struct MockDatabase {
    books: Table<Book>,
    borrowings: Table<Borrowing>,
    users: Table<User>,
}

impl MockDatabase {
    pub(crate) fn new() -> Self {
        Self {
            books: Table::default(),
            borrowings: Table::default(),
            users: Table::default(),
        }
    }

    pub(crate) fn with_book(self, book: Book) -> Self {
        self.books.lock().unwrap().insert(*book.id().as_ref(), book);
        self
    }

    pub(crate) fn with_borrowing(self, borrowing: Borrowing) -> Self {
        self.borrowings
            .lock()
            .unwrap()
            .insert(*borrowing.id().as_ref(), borrowing);
        self
    }

    pub(crate) fn with_account(self, account: &UserDto) -> Self {
        let user = User::from(account.clone());
        self.users.lock().unwrap().insert(*user.id().as_ref(), user);
        self
    }

    pub(crate) fn book(&self, id: &BookId) -> Option<Book> {
        self.books.lock().unwrap().get(id.as_ref()).cloned()
    }

    pub(crate) fn borrowing(&self, id: &BorrowingId) -> Option<Borrowing> {
        self.borrowings.lock().unwrap().get(id.as_ref()).cloned()
    }

    pub(crate) fn borrowing_count(&self) -> usize {
        self.borrowings.lock().unwrap().len()
    }
}

pub(crate) struct MockTransaction {
    books: Table<Book>,
    borrowings: Table<Borrowing>,
    users: Table<User>,
}

#[async_trait::async_trait]
impl DatabaseConnection for MockDatabase {
    type Transaction = MockTransaction;

    async fn transact(&self) -> error_stack::Result<MockTransaction, KernelError> {
        Ok(MockTransaction {
            books: Arc::clone(&self.books),
            borrowings: Arc::clone(&self.borrowings),
            users: Arc::clone(&self.users),
        })
    }
}

#[async_trait::async_trait]
impl Transaction for MockTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

pub(crate) struct MockBookRepository;

#[async_trait::async_trait]
impl BookQuery for MockBookRepository {
    type Transaction = MockTransaction;

    async fn find_by_id(
        &self,
        con: &mut MockTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(con.books.lock().unwrap().get(id.as_ref()).cloned())
    }

    async fn find_all(
        &self,
        con: &mut MockTransaction,
        filter: &BookFilter,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        let mut books = con
            .books
            .lock()
            .unwrap()
            .values()
            .filter(|book| {
                contains_fold(book.title().as_ref(), filter.title.as_deref())
                    && contains_fold(book.author().as_ref(), filter.author.as_deref())
            })
            .cloned()
            .collect::<Vec<_>>();
        books.sort_by(|a, b| a.title().as_ref().cmp(b.title().as_ref()));
        Ok(paged(books, *filter.offset.as_ref(), *filter.limit.as_ref()))
    }

    async fn find_by_ids(
        &self,
        con: &mut MockTransaction,
        ids: &[BookId],
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        Ok(con
            .books
            .lock()
            .unwrap()
            .values()
            .filter(|book| ids.contains(book.id()))
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl BookModifier for MockBookRepository {
    type Transaction = MockTransaction;

    async fn create(
        &self,
        con: &mut MockTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        con.books
            .lock()
            .unwrap()
            .insert(*book.id().as_ref(), book.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut MockTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        con.books
            .lock()
            .unwrap()
            .insert(*book.id().as_ref(), book.clone());
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut MockTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        con.books.lock().unwrap().remove(book_id.as_ref());
        Ok(())
    }
}

pub(crate) struct MockBookInventoryLedger;

#[async_trait::async_trait]
impl BookInventoryLedger for MockBookInventoryLedger {
    type Transaction = MockTransaction;

    async fn lock(
        &self,
        con: &mut MockTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(con.books.lock().unwrap().get(id.as_ref()).cloned())
    }

    async fn borrow_copy(
        &self,
        con: &mut MockTransaction,
        id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        let mut books = con.books.lock().unwrap();
        let Some(book) = books.get(id.as_ref()).cloned() else {
            return Err(error_stack::Report::new(KernelError::InventoryExhausted));
        };
        let current = *book.inventory().as_ref();
        if current <= 0 {
            return Err(error_stack::Report::new(KernelError::InventoryExhausted));
        }
        let book = book.reconstruct(|b| b.inventory = BookInventory::new(current - 1));
        books.insert(*id.as_ref(), book);
        Ok(())
    }

    async fn return_copy(
        &self,
        con: &mut MockTransaction,
        id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        let mut books = con.books.lock().unwrap();
        let Some(book) = books.get(id.as_ref()).cloned() else {
            return Err(error_stack::Report::new(KernelError::NotFound("book")));
        };
        let current = *book.inventory().as_ref();
        let book = book.reconstruct(|b| b.inventory = BookInventory::new(current + 1));
        books.insert(*id.as_ref(), book);
        Ok(())
    }
}

pub(crate) struct MockBorrowingRepository;

#[async_trait::async_trait]
impl BorrowingQuery for MockBorrowingRepository {
    type Transaction = MockTransaction;

    async fn find_by_id(
        &self,
        con: &mut MockTransaction,
        id: &BorrowingId,
    ) -> error_stack::Result<Option<Borrowing>, KernelError> {
        Ok(con.borrowings.lock().unwrap().get(id.as_ref()).cloned())
    }

    async fn find_all(
        &self,
        con: &mut MockTransaction,
        filter: &BorrowingFilter,
    ) -> error_stack::Result<Vec<Borrowing>, KernelError> {
        let mut borrowings = con
            .borrowings
            .lock()
            .unwrap()
            .values()
            .filter(|borrowing| {
                filter
                    .is_active
                    .map_or(true, |active| borrowing.return_status().is_active() == active)
                    && filter
                        .user_id
                        .as_ref()
                        .map_or(true, |user_id| borrowing.user_id() == user_id)
            })
            .cloned()
            .collect::<Vec<_>>();
        borrowings.sort_by(|a, b| {
            b.borrow_date()
                .as_ref()
                .cmp(a.borrow_date().as_ref())
                .then_with(|| a.id().as_ref().cmp(b.id().as_ref()))
        });
        Ok(paged(
            borrowings,
            *filter.offset.as_ref(),
            *filter.limit.as_ref(),
        ))
    }
}

#[async_trait::async_trait]
impl BorrowingModifier for MockBorrowingRepository {
    type Transaction = MockTransaction;

    async fn create(
        &self,
        con: &mut MockTransaction,
        borrowing: &Borrowing,
    ) -> error_stack::Result<(), KernelError> {
        con.borrowings
            .lock()
            .unwrap()
            .insert(*borrowing.id().as_ref(), borrowing.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut MockTransaction,
        borrowing: &Borrowing,
    ) -> error_stack::Result<(), KernelError> {
        con.borrowings
            .lock()
            .unwrap()
            .insert(*borrowing.id().as_ref(), borrowing.clone());
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut MockTransaction,
        borrowing_id: &BorrowingId,
    ) -> error_stack::Result<(), KernelError> {
        con.borrowings.lock().unwrap().remove(borrowing_id.as_ref());
        Ok(())
    }
}

pub(crate) struct MockUserRepository;

#[async_trait::async_trait]
impl UserQuery for MockUserRepository {
    type Transaction = MockTransaction;

    async fn find_by_id(
        &self,
        con: &mut MockTransaction,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        Ok(con.users.lock().unwrap().get(id.as_ref()).cloned())
    }

    async fn find_by_ids(
        &self,
        con: &mut MockTransaction,
        ids: &[UserId],
    ) -> error_stack::Result<Vec<User>, KernelError> {
        Ok(con
            .users
            .lock()
            .unwrap()
            .values()
            .filter(|user| ids.contains(user.id()))
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl UserModifier for MockUserRepository {
    type Transaction = MockTransaction;

    async fn create(
        &self,
        con: &mut MockTransaction,
        user: &User,
    ) -> error_stack::Result<(), KernelError> {
        con.users
            .lock()
            .unwrap()
            .insert(*user.id().as_ref(), user.clone());
        Ok(())
    }
}

impl DependOnBookQuery for MockDatabase {
    type BookQuery = MockBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &MockBookRepository
    }
}

impl DependOnBookModifier for MockDatabase {
    type BookModifier = MockBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &MockBookRepository
    }
}

impl DependOnBookInventoryLedger for MockDatabase {
    type BookInventoryLedger = MockBookInventoryLedger;
    fn book_inventory_ledger(&self) -> &Self::BookInventoryLedger {
        &MockBookInventoryLedger
    }
}

impl DependOnBorrowingQuery for MockDatabase {
    type BorrowingQuery = MockBorrowingRepository;
    fn borrowing_query(&self) -> &Self::BorrowingQuery {
        &MockBorrowingRepository
    }
}

impl DependOnBorrowingModifier for MockDatabase {
    type BorrowingModifier = MockBorrowingRepository;
    fn borrowing_modifier(&self) -> &Self::BorrowingModifier {
        &MockBorrowingRepository
    }
}

impl DependOnUserQuery for MockDatabase {
    type UserQuery = MockUserRepository;
    fn user_query(&self) -> &Self::UserQuery {
        &MockUserRepository
    }
}

impl DependOnUserModifier for MockDatabase {
    type UserModifier = MockUserRepository;
    fn user_modifier(&self) -> &Self::UserModifier {
        &MockUserRepository
    }
}

fn contains_fold(haystack: &str, needle: Option<&str>) -> bool {
    needle.map_or(true, |needle| {
        haystack.to_lowercase().contains(&needle.to_lowercase())
    })
}

fn paged<T>(rows: Vec<T>, offset: i32, limit: i32) -> Vec<T> {
    rows.into_iter()
        .skip(offset.max(0) as usize)
        .take(limit.max(0) as usize)
        .collect()
}
