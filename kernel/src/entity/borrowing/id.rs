use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BorrowingId(Uuid);

impl BorrowingId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}

impl From<BorrowingId> for Uuid {
    fn from(id: BorrowingId) -> Self {
        id.0
    }
}

impl AsRef<Uuid> for BorrowingId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}
