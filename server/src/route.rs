mod book;
mod borrowing;

pub use self::book::BookRouter;
pub use self::borrowing::BorrowingRouter;
