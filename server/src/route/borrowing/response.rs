use crate::controller::Exhaust;
use application::transfer::{BookDto, BorrowingDto};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use rust_decimal::Decimal;
use serde::Serialize;
use time::Date;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct BookDetailResponse {
    title: String,
    author: String,
    cover: String,
    daily_fee: Decimal,
}

impl From<BookDto> for BookDetailResponse {
    fn from(value: BookDto) -> Self {
        Self {
            title: value.title,
            author: value.author,
            cover: value.cover,
            daily_fee: value.daily_fee,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BorrowingResponse {
    id: Uuid,
    borrow_date: Date,
    expected_return_date: Date,
    actual_return_date: Option<Date>,
    book: Uuid,
    book_detail: BookDetailResponse,
    user: String,
    is_active: bool,
}

impl From<BorrowingDto> for BorrowingResponse {
    fn from(value: BorrowingDto) -> Self {
        let is_active = value.is_active();
        Self {
            id: value.id,
            borrow_date: value.borrow_date,
            expected_return_date: value.expected_return_date,
            actual_return_date: value.actual_return_date,
            book: value.book.id,
            book_detail: BookDetailResponse::from(value.book),
            user: value.user,
            is_active,
        }
    }
}

impl IntoResponse for BorrowingResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Creation answers without the return column, which cannot be set yet.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    id: Uuid,
    borrow_date: Date,
    expected_return_date: Date,
    book: Uuid,
    book_detail: BookDetailResponse,
    user: String,
    is_active: bool,
}

impl From<BorrowingDto> for CreatedResponse {
    fn from(value: BorrowingDto) -> Self {
        let is_active = value.is_active();
        Self {
            id: value.id,
            borrow_date: value.borrow_date,
            expected_return_date: value.expected_return_date,
            book: value.book.id,
            book_detail: BookDetailResponse::from(value.book),
            user: value.user,
            is_active,
        }
    }
}

impl IntoResponse for CreatedResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self)).into_response()
    }
}

/// Management answers with the joined detail only, not the raw book id.
#[derive(Debug, Serialize)]
pub struct ManagedResponse {
    id: Uuid,
    borrow_date: Date,
    expected_return_date: Date,
    actual_return_date: Option<Date>,
    book_detail: BookDetailResponse,
    user: String,
    is_active: bool,
}

impl From<BorrowingDto> for ManagedResponse {
    fn from(value: BorrowingDto) -> Self {
        let is_active = value.is_active();
        Self {
            id: value.id,
            borrow_date: value.borrow_date,
            expected_return_date: value.expected_return_date,
            actual_return_date: value.actual_return_date,
            book_detail: BookDetailResponse::from(value.book),
            user: value.user,
            is_active,
        }
    }
}

impl IntoResponse for ManagedResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub struct Presenter;

impl Exhaust<BorrowingDto> for Presenter {
    type To = BorrowingResponse;
    fn emit(&self, input: BorrowingDto) -> Self::To {
        BorrowingResponse::from(input)
    }
}

impl Exhaust<Vec<BorrowingDto>> for Presenter {
    type To = Json<Vec<BorrowingResponse>>;
    fn emit(&self, input: Vec<BorrowingDto>) -> Self::To {
        let result = input
            .into_iter()
            .map(BorrowingResponse::from)
            .collect::<Vec<_>>();

        Json::from(result)
    }
}

impl Exhaust<()> for Presenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}

pub struct CreatedPresenter;

impl Exhaust<BorrowingDto> for CreatedPresenter {
    type To = CreatedResponse;
    fn emit(&self, input: BorrowingDto) -> Self::To {
        CreatedResponse::from(input)
    }
}

pub struct ManagedPresenter;

impl Exhaust<BorrowingDto> for ManagedPresenter {
    type To = ManagedResponse;
    fn emit(&self, input: BorrowingDto) -> Self::To {
        ManagedResponse::from(input)
    }
}
