//! Narrow an exchange outcome to the kind a test expects.
//!
//! These mirror the two questions end-to-end tests keep asking: "did this
//! produce a response?" and "is this an HTTP error that carries a response?".
//! Anything else is reported as an `AssertError` instead of being coerced.

use crate::descriptor::RequestDescriptor;
use crate::error::{AssertError, ExchangeError};
use crate::http::{Exchange, HttpResponse};

/// An HTTP client error known to carry a response.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpFailure {
    pub message: String,
    pub request: Option<RequestDescriptor>,
    pub response: HttpResponse,
}

/// Require a completed exchange.
pub fn expect_response(
    outcome: Result<Exchange, ExchangeError>,
) -> Result<Exchange, AssertError> {
    outcome.map_err(AssertError::NotAResponse)
}

/// Require an HTTP client error that carries a response.
pub fn expect_http_error(
    outcome: Result<Exchange, ExchangeError>,
) -> Result<HttpFailure, AssertError> {
    match outcome {
        Ok(exchange) => Err(AssertError::UnexpectedSuccess {
            status: exchange.response.status,
        }),
        Err(err @ ExchangeError::Unexpected(_)) => Err(AssertError::NotAnHttpError(err)),
        Err(ExchangeError::Http {
            message,
            request,
            response: Some(response),
        }) => Ok(HttpFailure {
            message,
            request,
            response,
        }),
        Err(err) => Err(AssertError::MissingResponse(err)),
    }
}
