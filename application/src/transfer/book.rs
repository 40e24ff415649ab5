use rust_decimal::Decimal;
use uuid::Uuid;

use kernel::prelude::entity::{Book, DestructBook, SelectLimit, SelectOffset};

use crate::transfer::UserDto;

#[derive(Debug, Clone)]
pub struct BookDto {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub cover: String,
    pub inventory: i32,
    pub daily_fee: Decimal,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            author,
            cover,
            inventory,
            daily_fee,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            cover: cover.as_str().to_string(),
            inventory: inventory.into(),
            daily_fee: daily_fee.into(),
        }
    }
}

pub struct GetBookDto {
    pub id: Uuid,
}

pub struct GetAllBooksDto {
    pub title: Option<String>,
    pub author: Option<String>,
    pub limit: SelectLimit,
    pub offset: SelectOffset,
}

pub struct CreateBookDto {
    pub actor: UserDto,
    pub title: String,
    pub author: String,
    pub cover: String,
    pub inventory: i32,
    pub daily_fee: Decimal,
}

pub struct UpdateBookDto {
    pub actor: UserDto,
    pub id: Uuid,
    pub title: Option<String>,
    pub author: Option<String>,
    pub cover: Option<String>,
    pub inventory: Option<i32>,
    pub daily_fee: Option<Decimal>,
}

pub struct DeleteBookDto {
    pub actor: UserDto,
    pub id: Uuid,
}
