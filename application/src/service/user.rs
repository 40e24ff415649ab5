use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{DependOnUserQuery, UserQuery};
use kernel::prelude::entity::UserId;
use kernel::KernelError;

use crate::transfer::{GetUserDto, UserDto};

/// Resolves the caller identity carried in the bearer token against the
/// users table. Unknown ids come back as `None`; the server layer turns
/// that into an authentication failure.
#[async_trait::async_trait]
pub trait GetUserService: 'static + Sync + Send + DependOnDatabaseConnection + DependOnUserQuery {
    async fn get_user(&self, dto: GetUserDto) -> error_stack::Result<Option<UserDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = UserId::new(dto.id);
        let user = self.user_query().find_by_id(&mut connection, &id).await?;

        Ok(user.map(UserDto::from))
    }
}

impl<T> GetUserService for T where T: DependOnDatabaseConnection + DependOnUserQuery {}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use kernel::KernelError;

    use crate::service::mock::{visitor, MockDatabase};
    use crate::service::GetUserService;
    use crate::transfer::GetUserDto;

    #[tokio::test]
    async fn known_and_unknown_ids() -> error_stack::Result<(), KernelError> {
        let account = visitor();
        let db = MockDatabase::new().with_account(&account);

        let found = db.get_user(GetUserDto { id: account.id }).await?;
        assert_eq!(found.map(|user| user.email), Some(account.email));

        let missing = db.get_user(GetUserDto { id: Uuid::new_v4() }).await?;
        assert!(missing.is_none());
        Ok(())
    }
}
