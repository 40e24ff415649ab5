use crate::controller::Intake;
use application::transfer::{
    CreateBorrowingDto, DeleteBorrowingDto, GetAllBorrowingsDto, GetBorrowingDto,
    ManageBorrowingDto, UserDto,
};
use kernel::prelude::entity::{SelectLimit, SelectOffset};
use serde::Deserialize;
use time::Date;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    book: Uuid,
    expected_return_date: Date,
}

/// Unknown payload fields are ignored, so clients resending a full record
/// do not trip over the readonly ones. Omitting the action keeps the
/// borrowing as it is.
#[derive(Debug, Deserialize)]
pub struct ManageRequest {
    manage_this_borrowing: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GetAllRequest {
    is_active: Option<String>,
    user_id: Option<Uuid>,
    #[serde(default)]
    limit: SelectLimit,
    #[serde(default)]
    offset: SelectOffset,
}

#[derive(Debug)]
pub struct GetRequest {
    user: UserDto,
    id: Uuid,
}

impl GetRequest {
    pub fn new(user: UserDto, id: Uuid) -> Self {
        Self { user, id }
    }
}

#[derive(Debug)]
pub struct DeleteRequest {
    user: UserDto,
    id: Uuid,
}

impl DeleteRequest {
    pub fn new(user: UserDto, id: Uuid) -> Self {
        Self { user, id }
    }
}

pub struct Transformer;

impl Intake<(UserDto, CreateRequest)> for Transformer {
    type To = CreateBorrowingDto;
    fn emit(&self, (user, input): (UserDto, CreateRequest)) -> Self::To {
        CreateBorrowingDto {
            actor: user,
            book_id: input.book,
            expected_return_date: input.expected_return_date,
        }
    }
}

impl Intake<(UserDto, GetAllRequest)> for Transformer {
    type To = GetAllBorrowingsDto;
    fn emit(&self, (user, input): (UserDto, GetAllRequest)) -> Self::To {
        GetAllBorrowingsDto {
            actor: user,
            is_active: input.is_active,
            user_id: input.user_id,
            limit: input.limit,
            offset: input.offset,
        }
    }
}

impl Intake<GetRequest> for Transformer {
    type To = GetBorrowingDto;
    fn emit(&self, input: GetRequest) -> Self::To {
        GetBorrowingDto {
            actor: input.user,
            id: input.id,
        }
    }
}

impl Intake<(UserDto, Uuid, ManageRequest)> for Transformer {
    type To = ManageBorrowingDto;
    fn emit(&self, (user, id, input): (UserDto, Uuid, ManageRequest)) -> Self::To {
        ManageBorrowingDto {
            actor: user,
            id,
            action: input.manage_this_borrowing,
        }
    }
}

impl Intake<DeleteRequest> for Transformer {
    type To = DeleteBorrowingDto;
    fn emit(&self, input: DeleteRequest) -> Self::To {
        DeleteBorrowingDto {
            actor: input.user,
            id: input.id,
        }
    }
}
