use crate::controller::Intake;
use application::transfer::{
    CreateBookDto, DeleteBookDto, GetAllBooksDto, GetBookDto, UpdateBookDto, UserDto,
};
use kernel::prelude::entity::{SelectLimit, SelectOffset};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    title: String,
    author: String,
    cover: String,
    inventory: i32,
    daily_fee: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    title: Option<String>,
    author: Option<String>,
    cover: Option<String>,
    inventory: Option<i32>,
    daily_fee: Option<Decimal>,
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

#[derive(Debug, Deserialize)]
pub struct GetAllRequest {
    title: Option<String>,
    author: Option<String>,
    #[serde(default)]
    limit: SelectLimit,
    #[serde(default)]
    offset: SelectOffset,
}

#[derive(Debug)]
pub struct GetRequest {
    id: Uuid,
}

impl GetRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

pub struct Transformer;

impl Intake<(UserDto, CreateRequest)> for Transformer {
    type To = CreateBookDto;
    fn emit(&self, (user, input): (UserDto, CreateRequest)) -> Self::To {
        CreateBookDto {
            actor: user,
            title: input.title,
            author: input.author,
            cover: input.cover,
            inventory: input.inventory,
            daily_fee: input.daily_fee,
        }
    }
}

impl Intake<(UserDto, Uuid, UpdateRequest)> for Transformer {
    type To = UpdateBookDto;
    fn emit(&self, (user, id, input): (UserDto, Uuid, UpdateRequest)) -> Self::To {
        UpdateBookDto {
            actor: user,
            id,
            title: input.title,
            author: input.author,
            cover: input.cover,
            inventory: input.inventory,
            daily_fee: input.daily_fee,
        }
    }
}

impl Intake<DeleteRequest> for Transformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteRequest) -> Self::To {
        DeleteBookDto {
            actor: input.user,
            id: input.id,
        }
    }
}

impl Intake<GetRequest> for Transformer {
    type To = GetBookDto;
    fn emit(&self, input: GetRequest) -> Self::To {
        GetBookDto { id: input.id }
    }
}

impl Intake<GetAllRequest> for Transformer {
    type To = GetAllBooksDto;
    fn emit(&self, input: GetAllRequest) -> Self::To {
        GetAllBooksDto {
            title: input.title,
            author: input.author,
            limit: input.limit,
            offset: input.offset,
        }
    }
}
