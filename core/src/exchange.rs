//! Execute-and-log wrapper around one HTTP exchange.
//!
//! # Design
//! `send_request` does no I/O of its own. The caller passes a closure that runs
//! the round-trip with whatever client it uses; the wrapper logs the rendered
//! `curl` command next to the response (or error) and hands the outcome back
//! untouched. Logging goes through `tracing`, so the sink is whatever
//! subscriber the host installed.

use crate::error::ExchangeError;
use crate::http::Exchange;
use crate::render::render;

/// Run one exchange and log it.
///
/// On success logs the request command and the compact response body. On an
/// HTTP client error logs the request command (when the error knows the
/// request), the status code, and the error body. Unexpected failures are
/// logged as such and returned unchanged.
pub fn send_request<F>(exchange: F) -> Result<Exchange, ExchangeError>
where
    F: FnOnce() -> Result<Exchange, ExchangeError>,
{
    let outcome = exchange();
    match &outcome {
        Ok(done) => {
            tracing::info!("Request {}", render(&done.request));
            tracing::info!("Response {}", done.response.json_text());
        }
        Err(err @ ExchangeError::Http { .. }) => log_http_error(err),
        Err(ExchangeError::Unexpected(reason)) => {
            tracing::error!("Unexpected failure while sending request: {reason}");
        }
    }
    outcome
}

fn log_http_error(err: &ExchangeError) {
    if let Some(request) = err.request() {
        tracing::warn!("Request {}", render(request));
    }
    match err.response() {
        Some(response) => {
            tracing::warn!("Response error. Status code: {}", response.status);
            tracing::warn!("Response {}", response.json_text());
        }
        None => tracing::warn!("Response error. Status code: none ({err})"),
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::descriptor::RequestDescriptor;
    use crate::http::HttpResponse;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    /// Run `f` with a subscriber that writes plain log lines into a buffer.
    fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let sink = Captured::default();
        let writer = sink.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        let out = tracing::subscriber::with_default(subscriber, f);
        (out, sink.text())
    }

    fn create_user() -> RequestDescriptor {
        RequestDescriptor::new("post", "http://localhost:4010/users")
            .with_header("Content-Type", "application/json")
            .with_body(serde_json::json!({"name": "Ann"}))
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn success_logs_command_and_body() {
        let (outcome, logs) = capture_logs(|| {
            send_request(|| {
                Ok(Exchange {
                    request: create_user(),
                    response: response(201, "{ \"id\": 1 }"),
                })
            })
        });

        let exchange = outcome.unwrap();
        assert_eq!(exchange.response.status, 201);
        assert!(logs.contains(
            r#"Request curl -X POST -H "Content-Type:application/json" --data '{"name":"Ann"}' "http://localhost:4010/users""#
        ));
        assert!(logs.contains(r#"Response {"id":1}"#));
    }

    #[test]
    fn status_error_logs_command_status_and_body() {
        let (outcome, logs) = capture_logs(|| {
            send_request(|| {
                Err(ExchangeError::status(
                    create_user(),
                    response(400, r#"{"error":"bad","code":"VALIDATION_ERROR"}"#),
                ))
            })
        });

        let err = outcome.unwrap_err();
        assert_eq!(err.response().map(|r| r.status), Some(400));
        assert!(logs.contains("Request curl -X POST"));
        assert!(logs.contains("Response error. Status code: 400"));
        assert!(logs.contains(r#"Response {"error":"bad","code":"VALIDATION_ERROR"}"#));
    }

    #[test]
    fn transport_error_without_request_skips_command() {
        let (outcome, logs) = capture_logs(|| {
            send_request(|| Err(ExchangeError::transport(None, "connection refused")))
        });

        assert!(outcome.is_err());
        assert!(!logs.contains("Request curl"));
        assert!(logs.contains("Response error. Status code: none (connection refused)"));
    }

    #[test]
    fn unexpected_failure_is_propagated_not_reported_as_http() {
        let (outcome, logs) = capture_logs(|| {
            send_request(|| Err(ExchangeError::Unexpected("worker panicked".to_string())))
        });

        assert!(matches!(outcome, Err(ExchangeError::Unexpected(ref r)) if r == "worker panicked"));
        assert!(logs.contains("Unexpected failure while sending request: worker panicked"));
        assert!(!logs.contains("Status code"));
    }
}
