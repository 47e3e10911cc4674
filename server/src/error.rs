use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::Report;
use kernel::KernelError;
use serde::Serialize;
use std::process::{ExitCode, Termination};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::{error, info, warn};

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

/// Everything a handler can answer with besides a success body. All three
/// variants render the same `{timestamp, status, errors}` JSON shape.
#[derive(Debug)]
pub enum ApiError {
    Validation(Vec<String>),
    NotFound(i32),
    Internal(Report<KernelError>),
}

impl From<Report<KernelError>> for ApiError {
    fn from(e: Report<KernelError>) -> Self {
        ApiError::Internal(e)
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    timestamp: String,
    status: u16,
    errors: Vec<String>,
}

impl ErrorBody {
    fn new(status: StatusCode, errors: Vec<String>) -> Self {
        let timestamp = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| String::from("unknown"));
        Self {
            timestamp,
            status: status.as_u16(),
            errors,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, errors) = match self {
            ApiError::Validation(errors) => {
                info!("Validation failed: {errors:?}");
                (StatusCode::BAD_REQUEST, errors)
            }
            ApiError::NotFound(id) => {
                warn!("Book not found with id={id}");
                (
                    StatusCode::NOT_FOUND,
                    vec![format!("Book not found with id: {id}")],
                )
            }
            ApiError::Internal(report) => {
                error!("Unhandled error: {report:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec![format!("An unexpected error occurred: {report}")],
                )
            }
        };
        (status, Json(ErrorBody::new(status, errors))).into_response()
    }
}
