use std::fmt::Display;

use error_stack::Context;
use time::Date;

#[derive(Debug)]
pub enum KernelError {
    InventoryExhausted,
    InvalidReturnWindow { expected: Date, borrowed: Date },
    AlreadyReturned,
    Forbidden(&'static str),
    NotFound(&'static str),
    InvalidFilterValue(String),
    InvalidAction(String),
    InvalidField { field: &'static str, message: String },
    Unauthenticated,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::InventoryExhausted => {
                write!(f, "No more copies available to borrow.")
            }
            KernelError::InvalidReturnWindow { expected, borrowed } => write!(
                f,
                "Expected return date {expected} cannot be earlier than the borrow date {borrowed}."
            ),
            KernelError::AlreadyReturned => write!(f, "The book has already been returned."),
            KernelError::Forbidden(action) => {
                write!(f, "You do not have permission to {action}.")
            }
            KernelError::NotFound(entity) => write!(f, "{entity} does not exist"),
            KernelError::InvalidFilterValue(value) => write!(
                f,
                "Invalid value {value:?} for is_active. Use 'true' or 'false'."
            ),
            KernelError::InvalidAction(value) => {
                write!(f, "{value:?} is not a valid choice.")
            }
            KernelError::InvalidField { field, message } => write!(f, "{field}: {message}"),
            KernelError::Unauthenticated => {
                write!(f, "Authentication credentials were not provided.")
            }
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}

#[cfg(test)]
mod test {
    use time::macros::date;

    use crate::KernelError;

    #[test]
    fn return_window_message_carries_both_dates() {
        let error = KernelError::InvalidReturnWindow {
            expected: date!(2024 - 01 - 01),
            borrowed: date!(2024 - 01 - 08),
        };
        let message = error.to_string();
        assert!(message.contains("2024-01-01"));
        assert!(message.contains("2024-01-08"));
    }

    #[test]
    fn forbidden_message_names_the_action() {
        let error = KernelError::Forbidden("filter by user_id");
        assert_eq!(
            error.to_string(),
            "You do not have permission to filter by user_id."
        );
    }
}
