//! Minimal HTTP/1.1 request and response model.
//!
//! Messages are serialized to and parsed from plain wire text. This crate is
//! sans-IO apart from the small adapters in [`io`]; opening sockets is left to
//! the caller.
//!
//! ```
//! use sendreq::{request::Request, response::Response};
//!
//! let request = Request::new("GET", "/", "example.com", "")?
//!     .with_header("user-agent", "sendreq");
//! let wire = request.to_string();
//! assert_eq!(Request::parse(&wire)?, request);
//!
//! let response = Response::parse("HTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\nOK\r\n")?;
//! assert_eq!(response.body, "OK");
//! # Ok::<(), sendreq::error::GeneralError>(())
//! ```
pub mod error;
pub mod header;
pub mod io;
mod parse;
pub mod request;
pub mod response;
pub mod status;

#[cfg(feature = "bin")]
#[doc(hidden)]
pub mod app;
