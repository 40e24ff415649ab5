use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::error::KernelError;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookCover {
    Hard,
    Soft,
}

impl BookCover {
    pub fn new(value: impl AsRef<str>) -> error_stack::Result<Self, KernelError> {
        match value.as_ref() {
            "HARD" => Ok(BookCover::Hard),
            "SOFT" => Ok(BookCover::Soft),
            other => Err(Report::new(KernelError::InvalidField {
                field: "cover",
                message: format!("{other:?} is not a valid choice."),
            })),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookCover::Hard => "HARD",
            BookCover::Soft => "SOFT",
        }
    }
}
