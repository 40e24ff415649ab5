use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BookDailyFee(Decimal);

impl BookDailyFee {
    pub fn new(fee: impl Into<Decimal>) -> Self {
        Self(fee.into())
    }
}

impl From<BookDailyFee> for Decimal {
    fn from(fee: BookDailyFee) -> Self {
        fee.0
    }
}

impl AsRef<Decimal> for BookDailyFee {
    fn as_ref(&self) -> &Decimal {
        &self.0
    }
}
