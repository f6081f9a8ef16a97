//! Render HTTP request descriptions as reproducible `curl` commands.
//!
//! # Overview
//! The host describes a request it sent (or is about to send) as a
//! `RequestDescriptor`; `render` turns it into one `curl` command line for
//! debug output. `send_request` wraps one host-executed exchange and logs the
//! command next to the response or error.
//!
//! # Design
//! - Rendering is pure: it borrows the descriptor, performs no I/O, and never
//!   fails. Missing or odd fields degrade to placeholder or empty segments.
//! - The core never talks to the network (host-does-IO pattern). The mock
//!   server crate and the integration tests supply the actual HTTP.
//! - Descriptors are independent of any concrete HTTP client; the
//!   per-method `"common"` header layout some clients use is resolved in one
//!   place, `RequestDescriptor::resolved_headers`.

pub mod asserts;
pub mod descriptor;
pub mod error;
pub mod exchange;
pub mod http;
pub mod render;

pub use asserts::{expect_http_error, expect_response, HttpFailure};
pub use descriptor::{RequestDescriptor, ABSENT_FIELD, COMMON_HEADERS_KEY};
pub use error::{AssertError, ExchangeError};
pub use exchange::send_request;
pub use http::{Exchange, HttpResponse};
pub use render::{render, CurlCommand};
