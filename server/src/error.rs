use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::Report;
use kernel::KernelError;
use serde_json::{json, Value};
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

/// Validation failures answer with a JSON body keyed by the offending field,
/// access failures with a `detail` message, infrastructure failures with a bare
/// status.
impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let context = self.0.current_context();
        let (status, body) = match context {
            KernelError::InventoryExhausted => (
                StatusCode::BAD_REQUEST,
                Some(json!({ "book": context.to_string() })),
            ),
            KernelError::InvalidReturnWindow { .. } => (
                StatusCode::BAD_REQUEST,
                Some(json!({ "expected_return_date": context.to_string() })),
            ),
            KernelError::AlreadyReturned => (
                StatusCode::BAD_REQUEST,
                Some(json!({ "detail": context.to_string() })),
            ),
            KernelError::Forbidden(_) => (
                StatusCode::FORBIDDEN,
                Some(json!({ "detail": context.to_string() })),
            ),
            KernelError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Some(json!({ "detail": "Not found." })),
            ),
            KernelError::InvalidFilterValue(_) => (
                StatusCode::BAD_REQUEST,
                Some(json!({ "is_active": context.to_string() })),
            ),
            KernelError::InvalidAction(_) => (
                StatusCode::BAD_REQUEST,
                Some(json!({ "manage_this_borrowing": context.to_string() })),
            ),
            KernelError::InvalidField { field, message } => {
                let mut body = serde_json::Map::new();
                body.insert((*field).to_string(), Value::String(message.clone()));
                (StatusCode::BAD_REQUEST, Some(Value::Object(body)))
            }
            KernelError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                Some(json!({ "detail": context.to_string() })),
            ),
            KernelError::Timeout => (StatusCode::REQUEST_TIMEOUT, None),
            KernelError::Internal => {
                tracing::error!("{:?}", self.0);
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };
        match body {
            Some(body) => (status, Json(body)).into_response(),
            None => status.into_response(),
        }
    }
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use error_stack::Report;
    use kernel::KernelError;
    use serde_json::Value;

    use crate::error::ErrorStatus;

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn statuses_follow_the_failure_kind() {
        let cases = [
            (KernelError::InventoryExhausted, StatusCode::BAD_REQUEST),
            (KernelError::AlreadyReturned, StatusCode::BAD_REQUEST),
            (
                KernelError::Forbidden("perform this action"),
                StatusCode::FORBIDDEN,
            ),
            (KernelError::NotFound("book"), StatusCode::NOT_FOUND),
            (KernelError::Unauthenticated, StatusCode::UNAUTHORIZED),
            (KernelError::Timeout, StatusCode::REQUEST_TIMEOUT),
            (KernelError::Internal, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (error, expected) in cases {
            let response = ErrorStatus::from(Report::new(error)).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[tokio::test]
    async fn exhausted_inventory_is_scoped_to_the_book_field() {
        let response =
            ErrorStatus::from(Report::new(KernelError::InventoryExhausted)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["book"], "No more copies available to borrow.");
    }

    #[tokio::test]
    async fn field_errors_use_the_field_name_as_key() {
        let report = Report::new(KernelError::InvalidField {
            field: "title",
            message: "This field may not be blank.".to_string(),
        });
        let body = body_json(ErrorStatus::from(report).into_response()).await;
        assert_eq!(body["title"], "This field may not be blank.");
    }

    #[tokio::test]
    async fn missing_records_answer_with_a_plain_detail() {
        let response =
            ErrorStatus::from(Report::new(KernelError::NotFound("book"))).into_response();
        let body = body_json(response).await;
        assert_eq!(body["detail"], "Not found.");
    }

    #[tokio::test]
    async fn timeouts_carry_no_body() {
        let response = ErrorStatus::from(Report::new(KernelError::Timeout)).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());
    }
}
