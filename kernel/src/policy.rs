use error_stack::Report;

use crate::entity::{User, UserId};
use crate::error::KernelError;

/// What a caller wants to do with a borrowing record.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Access {
    Read,
    Manage,
    Destroy,
}

/// Single place deciding who may touch a borrowing. Staff read and
/// destroy anything, but the return path belongs to the borrower alone.
pub fn borrowing_access(
    actor: &User,
    owner: &UserId,
    access: Access,
) -> error_stack::Result<(), KernelError> {
    let is_owner = actor.id() == owner;
    let is_staff = bool::from(*actor.is_staff());
    match access {
        Access::Read if is_owner || is_staff => Ok(()),
        Access::Read => Err(Report::new(KernelError::Forbidden(
            "access this borrowing",
        ))),
        Access::Manage if is_owner => Ok(()),
        Access::Manage => Err(Report::new(KernelError::Forbidden(
            "modify this borrowing",
        ))),
        Access::Destroy if is_owner || is_staff => Ok(()),
        Access::Destroy => Err(Report::new(KernelError::Forbidden("perform this action"))),
    }
}

/// Gate for operations reserved to administrators.
pub fn staff_only(actor: &User, action: &'static str) -> error_stack::Result<(), KernelError> {
    if bool::from(*actor.is_staff()) {
        Ok(())
    } else {
        Err(Report::new(KernelError::Forbidden(action)))
    }
}
