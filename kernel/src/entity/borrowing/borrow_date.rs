use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BorrowDate(Date);

impl BorrowDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }

    pub fn today() -> Self {
        Self(OffsetDateTime::now_utc().date())
    }
}

impl From<BorrowDate> for Date {
    fn from(date: BorrowDate) -> Self {
        date.0
    }
}

impl AsRef<Date> for BorrowDate {
    fn as_ref(&self) -> &Date {
        &self.0
    }
}
