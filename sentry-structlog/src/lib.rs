//! Sentry integration for structured log handlers.
//!
//! This crate provides a small structured logging front-end ([`Logger`],
//! [`Record`], [`Attr`]) built around the [`Handler`] trait, and the
//! [`SentryHandler`], which wraps any other handler and reports selected
//! records to Sentry before passing them on.
//!
//! Which records are reported is configured with a set of [`Level`]s. For
//! records at one of these levels:
//!
//! * `ERROR` records capture the error attached under the `err` or `error`
//!   key as an exception event.
//! * `DEBUG`, `INFO` and `WARN` records capture their message as an
//!   informational message event.
//!
//! All other attributes end up in the `slog` context of the event.
//!
//! # Examples
//!
//! ```
//! use sentry_structlog::{Context, Handler, Level, LogHandler, Record, SentryHandler};
//!
//! let handler = SentryHandler::new(LogHandler::default(), [Level::WARN, Level::ERROR]);
//! let ctx = Context::new();
//!
//! # let events = sentry::test::with_captured_events(|| {
//! let record = Record::new(Level::WARN, "disk almost full").with_attr("free_mb", 120);
//! handler.handle(&ctx, &record).unwrap();
//! # });
//! # let event = events.into_iter().next().unwrap();
//!
//! assert_eq!(event.message.as_deref(), Some("disk almost full"));
//! assert_eq!(event.level, sentry::Level::Info);
//! ```
//!
//! Errors are attached with [`Value::error`]:
//!
//! ```
//! use std::io;
//!
//! use sentry_structlog::{Context, Discard, Handler, Level, Record, SentryHandler, Value};
//!
//! let handler = SentryHandler::new(Discard, [Level::ERROR]);
//!
//! # let events = sentry::test::with_captured_events(|| {
//! let error = io::Error::new(io::ErrorKind::Other, "connection reset");
//! let record = Record::new(Level::ERROR, "request failed").with_attr("error", Value::error(error));
//! handler.handle(&Context::new(), &record).unwrap();
//! # });
//! # let event = events.into_iter().next().unwrap();
//!
//! assert_eq!(
//!     event.exception.last().unwrap().value.as_deref(),
//!     Some("connection reset")
//! );
//! ```
//!
//! Reports go to the hub bound to the [`Context`] if there is one, and to the
//! current thread's hub otherwise.

#![doc(html_favicon_url = "https://sentry-brand.storage.googleapis.com/favicon.ico")]
#![doc(html_logo_url = "https://sentry-brand.storage.googleapis.com/sentry-glyph-black.png")]
#![warn(missing_docs)]
#![deny(unsafe_code)]

mod context;
pub mod converters;
mod error;
mod handler;
mod level;
#[cfg(feature = "log")]
mod log_handler;
mod logger;
mod record;
mod sentry_handler;
mod value;

pub use context::Context;
pub use error::{LogError, ReportError};
pub use handler::{Discard, Handler};
pub use level::Level;
#[cfg(feature = "log")]
pub use log_handler::{convert_to_log_level, LogHandler};
pub use logger::Logger;
pub use record::{Record, Source};
pub use sentry_handler::SentryHandler;
pub use value::{Attr, Value};
