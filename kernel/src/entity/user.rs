mod email;
mod id;
mod staff;

pub use self::{email::*, id::*, staff::*};
use destructure::Destructure;

#[derive(Debug, Clone, Eq, PartialEq, Destructure)]
pub struct User {
    id: UserId,
    email: UserEmail,
    is_staff: IsStaff,
}

impl User {
    pub fn new(id: UserId, email: UserEmail, is_staff: IsStaff) -> Self {
        Self { id, email, is_staff }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &UserEmail {
        &self.email
    }

    pub fn is_staff(&self) -> &IsStaff {
        &self.is_staff
    }
}
