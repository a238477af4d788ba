use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::Error;

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidConfiguration(_) | Error::DatabaseUnavailable(_) | Error::DatabaseCorrupt(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            // actix-web has no 499; 408 is the closest registered status for a query
            // the caller gave up on.
            Error::QueryCancelled => StatusCode::REQUEST_TIMEOUT,
            Error::TransientDatabaseError(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(RestErrorBody {
            kind: self.kind().to_string(),
            message: self.to_string(),
        })
    }
}

#[derive(serde::Serialize)]
struct RestErrorBody {
    kind: String,
    message: String,
}
