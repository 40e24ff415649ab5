use application::service::GetUserService;
use application::transfer::{GetUserDto, UserDto};
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use error_stack::Report;
use kernel::KernelError;
use uuid::Uuid;

use crate::error::ErrorStatus;
use crate::handler::AppModule;

/// Caller identity for guarded routes. The bearer token carries the user id
/// issued by the identity service and must resolve against the users table.
pub struct CurrentUser(pub UserDto);

#[axum::async_trait]
impl FromRequestParts<AppModule> for CurrentUser {
    type Rejection = ErrorStatus;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppModule,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| unauthenticated())?;
        let id = Uuid::parse_str(bearer.token()).map_err(|_| unauthenticated())?;
        state
            .pgpool()
            .get_user(GetUserDto { id })
            .await
            .map_err(ErrorStatus::from)?
            .map(CurrentUser)
            .ok_or_else(unauthenticated)
    }
}

fn unauthenticated() -> ErrorStatus {
    ErrorStatus::from(Report::new(KernelError::Unauthenticated))
}
