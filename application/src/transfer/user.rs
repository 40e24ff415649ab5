use uuid::Uuid;

use kernel::prelude::entity::{DestructUser, IsStaff, User, UserEmail, UserId};

/// Caller identity resolved by the server layer. Travels inside request
/// DTOs so the services can apply the access rules themselves.
#[derive(Debug, Clone)]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub is_staff: bool,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let DestructUser {
            id,
            email,
            is_staff,
        } = value.into_destruct();
        Self {
            id: id.into(),
            email: email.into(),
            is_staff: is_staff.into(),
        }
    }
}

impl From<UserDto> for User {
    fn from(value: UserDto) -> Self {
        User::new(
            UserId::new(value.id),
            UserEmail::new(value.email),
            IsStaff::new(value.is_staff),
        )
    }
}

pub struct GetUserDto {
    pub id: Uuid,
}
