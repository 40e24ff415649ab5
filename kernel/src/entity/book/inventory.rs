use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BookInventory(i32);

impl BookInventory {
    pub fn new(inventory: impl Into<i32>) -> Self {
        Self(inventory.into())
    }
}

impl From<BookInventory> for i32 {
    fn from(inventory: BookInventory) -> Self {
        inventory.0
    }
}

impl AsRef<i32> for BookInventory {
    fn as_ref(&self) -> &i32 {
        &self.0
    }
}
