use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectLimit(i32);

impl SelectLimit {
    pub fn new(value: impl Into<i32>) -> Self {
        SelectLimit(value.into())
    }
}

impl Default for SelectLimit {
    fn default() -> Self {
        Self::new(30)
    }
}

impl From<SelectLimit> for i32 {
    fn from(value: SelectLimit) -> Self {
        value.0
    }
}

impl AsRef<i32> for SelectLimit {
    fn as_ref(&self) -> &i32 {
        &self.0
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOffset(i32);

impl SelectOffset {
    pub fn new(value: impl Into<i32>) -> Self {
        SelectOffset(value.into())
    }
}

impl From<SelectOffset> for i32 {
    fn from(value: SelectOffset) -> Self {
        value.0
    }
}

impl AsRef<i32> for SelectOffset {
    fn as_ref(&self) -> &i32 {
        &self.0
    }
}
