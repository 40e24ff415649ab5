use time::{Date, OffsetDateTime};

/// Lifecycle state of a borrowing. `Returned` is terminal.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ReturnStatus {
    Active,
    Returned { date: Date },
}

impl ReturnStatus {
    pub fn returned_today() -> Self {
        ReturnStatus::Returned {
            date: OffsetDateTime::now_utc().date(),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ReturnStatus::Active)
    }

    pub fn returned_on(&self) -> Option<&Date> {
        match self {
            ReturnStatus::Active => None,
            ReturnStatus::Returned { date } => Some(date),
        }
    }
}

impl From<Option<Date>> for ReturnStatus {
    fn from(date: Option<Date>) -> Self {
        match date {
            None => ReturnStatus::Active,
            Some(date) => ReturnStatus::Returned { date },
        }
    }
}

impl From<ReturnStatus> for Option<Date> {
    fn from(status: ReturnStatus) -> Self {
        match status {
            ReturnStatus::Active => None,
            ReturnStatus::Returned { date } => Some(date),
        }
    }
}
