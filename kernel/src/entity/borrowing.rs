mod action;
mod borrow_date;
mod expected_return_date;
mod id;
mod return_status;

pub use self::{action::*, borrow_date::*, expected_return_date::*, id::*, return_status::*};
use destructure::{Destructure, Mutation};
use error_stack::Report;

use crate::entity::{BookId, UserId};
use crate::error::KernelError;

#[derive(Debug, Clone, Eq, PartialEq, Destructure, Mutation)]
pub struct Borrowing {
    id: BorrowingId,
    book_id: BookId,
    user_id: UserId,
    borrow_date: BorrowDate,
    expected_return_date: ExpectedReturnDate,
    return_status: ReturnStatus,
}

impl Borrowing {
    pub fn new(
        id: BorrowingId,
        book_id: BookId,
        user_id: UserId,
        borrow_date: BorrowDate,
        expected_return_date: ExpectedReturnDate,
        return_status: ReturnStatus,
    ) -> Self {
        Self {
            id,
            book_id,
            user_id,
            borrow_date,
            expected_return_date,
            return_status,
        }
    }

    /// Opens a new borrowing stamped with today's date and checks the
    /// return window before the record exists anywhere.
    pub fn open(
        id: BorrowingId,
        book_id: BookId,
        user_id: UserId,
        expected_return_date: ExpectedReturnDate,
    ) -> error_stack::Result<Self, KernelError> {
        let borrowing = Self::new(
            id,
            book_id,
            user_id,
            BorrowDate::today(),
            expected_return_date,
            ReturnStatus::Active,
        );
        borrowing.validate()?;
        Ok(borrowing)
    }

    /// The expected return date may never precede the borrow date.
    pub fn validate(&self) -> error_stack::Result<(), KernelError> {
        let borrowed = self.borrow_date.as_ref();
        let expected = self.expected_return_date.as_ref();
        if expected < borrowed {
            return Err(Report::new(KernelError::InvalidReturnWindow {
                expected: *expected,
                borrowed: *borrowed,
            }));
        }
        Ok(())
    }

    /// Transitions `Active` to `Returned` stamped with today. A record
    /// that is already returned never changes again.
    pub fn close(self) -> error_stack::Result<Self, KernelError> {
        if !self.return_status.is_active() {
            return Err(Report::new(KernelError::AlreadyReturned));
        }
        Ok(self.reconstruct(|borrowing| borrowing.return_status = ReturnStatus::returned_today()))
    }

    pub fn id(&self) -> &BorrowingId {
        &self.id
    }

    pub fn book_id(&self) -> &BookId {
        &self.book_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn borrow_date(&self) -> &BorrowDate {
        &self.borrow_date
    }

    pub fn expected_return_date(&self) -> &ExpectedReturnDate {
        &self.expected_return_date
    }

    pub fn return_status(&self) -> &ReturnStatus {
        &self.return_status
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;
    use time::{Duration, OffsetDateTime};
    use uuid::Uuid;

    use crate::entity::{
        BookId, BorrowDate, Borrowing, BorrowingId, ExpectedReturnDate, ReturnStatus, UserId,
    };
    use crate::KernelError;

    fn borrowing(borrowed: time::Date, expected: time::Date) -> Borrowing {
        Borrowing::new(
            BorrowingId::new(Uuid::new_v4()),
            BookId::new(Uuid::new_v4()),
            UserId::new(Uuid::new_v4()),
            BorrowDate::new(borrowed),
            ExpectedReturnDate::new(expected),
            ReturnStatus::Active,
        )
    }

    #[test]
    fn open_stamps_today_and_starts_active() {
        let today = OffsetDateTime::now_utc().date();
        let opened = Borrowing::open(
            BorrowingId::new(Uuid::new_v4()),
            BookId::new(Uuid::new_v4()),
            UserId::new(Uuid::new_v4()),
            ExpectedReturnDate::new(today + Duration::days(7)),
        )
        .unwrap();
        assert_eq!(opened.borrow_date().as_ref(), &today);
        assert!(opened.return_status().is_active());
    }

    #[test]
    fn open_rejects_return_before_borrow() {
        let yesterday = OffsetDateTime::now_utc().date() - Duration::days(1);
        let report = Borrowing::open(
            BorrowingId::new(Uuid::new_v4()),
            BookId::new(Uuid::new_v4()),
            UserId::new(Uuid::new_v4()),
            ExpectedReturnDate::new(yesterday),
        )
        .unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::InvalidReturnWindow { .. }
        ));
    }

    #[test]
    fn same_day_return_window_is_valid() {
        let record = borrowing(date!(2024 - 01 - 08), date!(2024 - 01 - 08));
        assert!(record.validate().is_ok());
    }

    #[test]
    fn close_marks_the_record_returned() {
        let record = borrowing(date!(2024 - 01 - 08), date!(2024 - 01 - 15));
        let closed = record.close().unwrap();
        assert!(!closed.return_status().is_active());
        assert!(closed.return_status().returned_on().is_some());
    }

    #[test]
    fn closed_record_never_closes_again() {
        let record = borrowing(date!(2024 - 01 - 08), date!(2024 - 01 - 15));
        let closed = record.close().unwrap();
        let report = closed.close().unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::AlreadyReturned
        ));
    }
}
