use std::collections::BTreeSet;
use std::error::Error;
use std::sync::Arc;

use sentry_core::protocol;
use sentry_core::types::Uuid;
use sentry_core::Hub;

use crate::converters::{extract_record_data, ATTRIBUTES_CONTEXT};
use crate::{Attr, Context, Handler, Level, Record, ReportError};

/// A [`Handler`] that reports records to Sentry before passing them on.
///
/// Records whose level is part of the configured set are reported:
///
/// * `ERROR` records capture the error attached under `err` or `error` as an
///   exception. Without such an attribute nothing is captured.
/// * `DEBUG`, `INFO` and `WARN` records capture their message as an `Info`
///   level event.
///
/// All remaining attributes are attached as the `slog` context. Every record
/// is then handed to the wrapped handler, whether reporting happened or not.
///
/// Events are captured on a hub forked from the resolved one, so
/// [`Hub::last_event_id`] of the resolved hub does not reflect them. Use the
/// id returned by [`report`](Self::report) instead.
#[derive(Clone, Debug)]
pub struct SentryHandler<H> {
    handler: H,
    levels: Arc<BTreeSet<Level>>,
}

impl<H: Handler> SentryHandler<H> {
    /// Creates a new `SentryHandler` that reports records at any of `levels`
    /// and forwards all records to `handler`.
    pub fn new<I>(handler: H, levels: I) -> Self
    where
        I: IntoIterator<Item = Level>,
    {
        Self {
            handler,
            levels: Arc::new(levels.into_iter().collect()),
        }
    }

    /// The levels that get reported to Sentry.
    pub fn levels(&self) -> &BTreeSet<Level> {
        &self.levels
    }

    /// The wrapped handler.
    pub fn inner(&self) -> &H {
        &self.handler
    }

    /// Reports `record` to Sentry without forwarding it.
    ///
    /// Returns the id of the captured event, or `None` if the record did not
    /// qualify or nothing was captured.
    pub fn report(&self, ctx: &Context, record: &Record) -> Result<Option<Uuid>, ReportError> {
        if !self.levels.contains(&record.level()) {
            return Ok(None);
        }
        let hub = ctx.resolve_hub().ok_or(ReportError::NoHub)?;
        let data = extract_record_data(record);

        // a private hub keeps the scope below away from concurrent callers
        // sharing the resolved one
        let hub = Hub::new_from_top(&hub);
        let context = data.context;
        let event_id = hub.with_scope(
            |scope| {
                if !context.is_empty() {
                    scope.set_context(ATTRIBUTES_CONTEXT, protocol::Context::Other(context));
                }
            },
            || capture(&hub, record, data.error),
        );

        Ok(event_id.filter(|id| !id.is_nil()))
    }
}

fn capture(
    hub: &Hub,
    record: &Record,
    error: Option<&(dyn Error + Send + Sync + 'static)>,
) -> Option<Uuid> {
    match record.level() {
        Level::ERROR => error.map(|error| hub.capture_error(error)),
        Level::DEBUG | Level::INFO | Level::WARN => {
            Some(hub.capture_message(record.message(), sentry_core::Level::Info))
        }
        _ => None,
    }
}

impl<H: Handler> Handler for SentryHandler<H> {
    type Err = H::Err;

    fn enabled(&self, ctx: &Context, level: Level) -> bool {
        self.handler.enabled(ctx, level)
    }

    fn handle(&self, ctx: &Context, record: &Record) -> Result<(), Self::Err> {
        if let Err(err) = self.report(ctx, record) {
            sentry_core::sentry_debug!("skipped reporting `{}` record: {}", record.level(), err);
        }
        self.handler.handle(ctx, record)
    }

    fn with_attrs(&self, attrs: &[Attr]) -> Self {
        Self {
            handler: self.handler.with_attrs(attrs),
            levels: self.levels.clone(),
        }
    }

    fn with_group(&self, name: &str) -> Self {
        Self {
            handler: self.handler.with_group(name),
            levels: self.levels.clone(),
        }
    }
}
