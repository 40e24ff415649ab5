mod request;
mod response;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::extract::CurrentUser;
use crate::handler::AppModule;
use crate::route::borrowing::request::{
    CreateRequest, DeleteRequest, GetAllRequest, GetRequest, ManageRequest, Transformer,
};
use crate::route::borrowing::response::{CreatedPresenter, ManagedPresenter, Presenter};
use application::service::{
    BorrowBookService, DeleteBorrowingService, GetAllBorrowingsService, GetBorrowingService,
    ManageBorrowingService,
};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

pub trait BorrowingRouter {
    fn route_borrowing(self) -> Self;
}

impl BorrowingRouter for Router<AppModule> {
    fn route_borrowing(self) -> Self {
        self.route(
            "/borrowings",
            get(
                |State(module): State<AppModule>,
                 CurrentUser(user): CurrentUser,
                 Query(req): Query<GetAllRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake((user, req))
                        .handle(|dto| module.pgpool().get_all_borrowings(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>,
                 CurrentUser(user): CurrentUser,
                 Json(req): Json<CreateRequest>| async move {
                    Controller::new(Transformer, CreatedPresenter)
                        .intake((user, req))
                        .handle(|dto| module.pgpool().borrow_book(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/borrowings/:id",
            get(
                |State(module): State<AppModule>,
                 CurrentUser(user): CurrentUser,
                 Path(id): Path<Uuid>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(GetRequest::new(user, id))
                        .handle(|dto| module.pgpool().get_borrowing(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .patch(
                |State(module): State<AppModule>,
                 CurrentUser(user): CurrentUser,
                 Path(id): Path<Uuid>,
                 Json(req): Json<ManageRequest>| async move {
                    Controller::new(Transformer, ManagedPresenter)
                        .intake((user, id, req))
                        .handle(|dto| module.pgpool().manage_borrowing(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>,
                 CurrentUser(user): CurrentUser,
                 Path(id): Path<Uuid>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(DeleteRequest::new(user, id))
                        .handle(|dto| module.pgpool().delete_borrowing(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
