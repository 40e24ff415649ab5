use error_stack::Report;

use crate::error::KernelError;

/// What a borrower asks for on the manage endpoint. `keep` leaves the
/// record untouched.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum BorrowingAction {
    #[default]
    Keep,
    Return,
}

impl BorrowingAction {
    pub fn new(value: impl AsRef<str>) -> error_stack::Result<Self, KernelError> {
        match value.as_ref() {
            "keep" => Ok(BorrowingAction::Keep),
            "return" => Ok(BorrowingAction::Return),
            other => Err(Report::new(KernelError::InvalidAction(other.to_string()))),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::entity::BorrowingAction;
    use crate::KernelError;

    #[test]
    fn parses_known_actions() {
        assert_eq!(BorrowingAction::new("keep").unwrap(), BorrowingAction::Keep);
        assert_eq!(
            BorrowingAction::new("return").unwrap(),
            BorrowingAction::Return
        );
    }

    #[test]
    fn rejects_unknown_action() {
        let report = BorrowingAction::new("extend").unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::InvalidAction(value) if value == "extend"
        ));
        assert_eq!(
            report.current_context().to_string(),
            "\"extend\" is not a valid choice."
        );
    }

    #[test]
    fn defaults_to_keep() {
        assert_eq!(BorrowingAction::default(), BorrowingAction::Keep);
    }
}
