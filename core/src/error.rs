//! Error types for request exchanges and response assertions.
//!
//! # Design
//! `ExchangeError::Http` is anything the HTTP client itself reported: a
//! non-2xx status (with a response) or a transport failure (usually without
//! one). Everything else is `Unexpected` and must reach the caller as is,
//! never dressed up as an HTTP error.

use thiserror::Error;

use crate::descriptor::RequestDescriptor;
use crate::http::HttpResponse;

/// Failure of one request exchange.
#[derive(Debug, Clone, Error)]
pub enum ExchangeError {
    /// The HTTP client reported an error.
    #[error("{message}")]
    Http {
        message: String,
        request: Option<RequestDescriptor>,
        response: Option<HttpResponse>,
    },

    /// Something other than the HTTP client failed.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl ExchangeError {
    /// The server answered with an error status.
    pub fn status(request: RequestDescriptor, response: HttpResponse) -> Self {
        ExchangeError::Http {
            message: format!("request failed with status code {}", response.status),
            request: Some(request),
            response: Some(response),
        }
    }

    /// The request never produced a response.
    pub fn transport(request: Option<RequestDescriptor>, message: impl Into<String>) -> Self {
        ExchangeError::Http {
            message: message.into(),
            request,
            response: None,
        }
    }

    pub fn request(&self) -> Option<&RequestDescriptor> {
        match self {
            ExchangeError::Http { request, .. } => request.as_ref(),
            ExchangeError::Unexpected(_) => None,
        }
    }

    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            ExchangeError::Http { response, .. } => response.as_ref(),
            ExchangeError::Unexpected(_) => None,
        }
    }
}

/// Returned when an exchange outcome is not the kind a caller asserted.
#[derive(Debug, Error)]
pub enum AssertError {
    #[error("the error is not an HTTP client error: {0}")]
    NotAnHttpError(ExchangeError),

    #[error("the HTTP client error does not contain a response: {0}")]
    MissingResponse(ExchangeError),

    #[error("the outcome is not an HTTP response: {0}")]
    NotAResponse(ExchangeError),

    #[error("expected an HTTP error but the request succeeded with status {status}")]
    UnexpectedSuccess { status: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> HttpResponse {
        HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: r#"{"title":"Not Found"}"#.to_string(),
        }
    }

    #[test]
    fn status_error_carries_request_and_response() {
        let req = RequestDescriptor::new("get", "http://h/users/1");
        let err = ExchangeError::status(req.clone(), not_found());
        assert_eq!(err.to_string(), "request failed with status code 404");
        assert_eq!(err.request(), Some(&req));
        assert_eq!(err.response().map(|r| r.status), Some(404));
    }

    #[test]
    fn transport_error_has_no_response() {
        let err = ExchangeError::transport(None, "connection refused");
        assert_eq!(err.to_string(), "connection refused");
        assert!(err.request().is_none());
        assert!(err.response().is_none());
    }

    #[test]
    fn unexpected_error_message() {
        let err = ExchangeError::Unexpected("boom".to_string());
        assert_eq!(err.to_string(), "unexpected failure: boom");
        assert!(err.response().is_none());
    }
}
