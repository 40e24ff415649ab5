use time::Date;
use uuid::Uuid;

use kernel::prelude::entity::{Book, Borrowing, DestructBorrowing, SelectLimit, SelectOffset};

use crate::transfer::{BookDto, UserDto};

/// A borrowing joined with its book and the owner's email, which is how
/// every read surface presents the record.
#[derive(Debug, Clone)]
pub struct BorrowingDto {
    pub id: Uuid,
    pub book: BookDto,
    pub user: String,
    pub borrow_date: Date,
    pub expected_return_date: Date,
    pub actual_return_date: Option<Date>,
}

impl BorrowingDto {
    pub fn new(borrowing: Borrowing, book: Book, owner_email: impl Into<String>) -> Self {
        let DestructBorrowing {
            id,
            borrow_date,
            expected_return_date,
            return_status,
            ..
        } = borrowing.into_destruct();
        Self {
            id: id.into(),
            book: BookDto::from(book),
            user: owner_email.into(),
            borrow_date: borrow_date.into(),
            expected_return_date: expected_return_date.into(),
            actual_return_date: return_status.into(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.actual_return_date.is_none()
    }
}

pub struct CreateBorrowingDto {
    pub actor: UserDto,
    pub book_id: Uuid,
    pub expected_return_date: Date,
}

pub struct GetBorrowingDto {
    pub actor: UserDto,
    pub id: Uuid,
}

pub struct GetAllBorrowingsDto {
    pub actor: UserDto,
    /// Raw query value; only `true`/`false` (case-insensitive) parse.
    pub is_active: Option<String>,
    pub user_id: Option<Uuid>,
    pub limit: SelectLimit,
    pub offset: SelectOffset,
}

pub struct ManageBorrowingDto {
    pub actor: UserDto,
    pub id: Uuid,
    /// Omitted means `keep`.
    pub action: Option<String>,
}

pub struct DeleteBorrowingDto {
    pub actor: UserDto,
    pub id: Uuid,
}
