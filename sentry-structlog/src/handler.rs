use std::convert::Infallible;
use std::sync::Arc;

use crate::{Attr, Context, Level, Record};

/// A destination for [`Record`]s.
///
/// Handlers only ever see records through this trait, so any backend can be
/// wrapped by another handler such as [`SentryHandler`](crate::SentryHandler).
/// Deriving a handler with [`with_attrs`](Handler::with_attrs) or
/// [`with_group`](Handler::with_group) returns a new value and leaves the
/// receiver untouched.
pub trait Handler {
    /// The error returned when handling a record fails.
    type Err;

    /// Reports whether this handler records events at `level`.
    fn enabled(&self, ctx: &Context, level: Level) -> bool;

    /// Handles a single record.
    fn handle(&self, ctx: &Context, record: &Record) -> Result<(), Self::Err>;

    /// Returns a handler that includes `attrs` with every record it handles.
    fn with_attrs(&self, attrs: &[Attr]) -> Self
    where
        Self: Sized;

    /// Returns a handler that qualifies all following attribute keys with
    /// the group `name`.
    fn with_group(&self, name: &str) -> Self
    where
        Self: Sized;
}

impl<H: Handler> Handler for Arc<H> {
    type Err = H::Err;

    fn enabled(&self, ctx: &Context, level: Level) -> bool {
        (**self).enabled(ctx, level)
    }

    fn handle(&self, ctx: &Context, record: &Record) -> Result<(), Self::Err> {
        (**self).handle(ctx, record)
    }

    fn with_attrs(&self, attrs: &[Attr]) -> Self {
        Arc::new((**self).with_attrs(attrs))
    }

    fn with_group(&self, name: &str) -> Self {
        Arc::new((**self).with_group(name))
    }
}

/// A handler that drops every record.
#[derive(Clone, Copy, Debug, Default)]
pub struct Discard;

impl Handler for Discard {
    type Err = Infallible;

    fn enabled(&self, _ctx: &Context, _level: Level) -> bool {
        false
    }

    fn handle(&self, _ctx: &Context, _record: &Record) -> Result<(), Self::Err> {
        Ok(())
    }

    fn with_attrs(&self, _attrs: &[Attr]) -> Self {
        Discard
    }

    fn with_group(&self, _name: &str) -> Self {
        Discard
    }
}
