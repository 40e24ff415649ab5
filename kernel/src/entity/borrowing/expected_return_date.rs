use serde::{Deserialize, Serialize};
use time::Date;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExpectedReturnDate(Date);

impl ExpectedReturnDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }
}

impl From<ExpectedReturnDate> for Date {
    fn from(date: ExpectedReturnDate) -> Self {
        date.0
    }
}

impl AsRef<Date> for ExpectedReturnDate {
    fn as_ref(&self) -> &Date {
        &self.0
    }
}
