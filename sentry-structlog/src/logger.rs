use crate::{Attr, Context, Handler, Level, Record, Source};

/// The front-end that turns log calls into [`Record`]s for a [`Handler`].
///
/// Records are only built when the handler is enabled for their level.
/// Each record carries the location of the log call.
#[derive(Clone, Debug, Default)]
pub struct Logger<H> {
    handler: H,
}

impl<H: Handler> Logger<H> {
    /// Creates a logger writing to `handler`.
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    /// The handler records are passed to.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Returns a logger that includes `attrs` with every record.
    #[must_use]
    pub fn with(&self, attrs: &[Attr]) -> Self {
        Self::new(self.handler.with_attrs(attrs))
    }

    /// Returns a logger that qualifies attributes with the group `name`.
    #[must_use]
    pub fn with_group(&self, name: &str) -> Self {
        Self::new(self.handler.with_group(name))
    }

    /// Emits a record at `level`.
    #[track_caller]
    pub fn log(
        &self,
        ctx: &Context,
        level: Level,
        message: &str,
        attrs: &[Attr],
    ) -> Result<(), H::Err> {
        if !self.handler.enabled(ctx, level) {
            return Ok(());
        }
        let record = Record::new(level, message)
            .with_source(Source::caller())
            .with_attrs(attrs.iter().cloned());
        self.handler.handle(ctx, &record)
    }

    /// Emits a record at [`Level::DEBUG`].
    #[track_caller]
    pub fn debug(&self, ctx: &Context, message: &str, attrs: &[Attr]) -> Result<(), H::Err> {
        self.log(ctx, Level::DEBUG, message, attrs)
    }

    /// Emits a record at [`Level::INFO`].
    #[track_caller]
    pub fn info(&self, ctx: &Context, message: &str, attrs: &[Attr]) -> Result<(), H::Err> {
        self.log(ctx, Level::INFO, message, attrs)
    }

    /// Emits a record at [`Level::WARN`].
    #[track_caller]
    pub fn warn(&self, ctx: &Context, message: &str, attrs: &[Attr]) -> Result<(), H::Err> {
        self.log(ctx, Level::WARN, message, attrs)
    }

    /// Emits a record at [`Level::ERROR`].
    #[track_caller]
    pub fn error(&self, ctx: &Context, message: &str, attrs: &[Attr]) -> Result<(), H::Err> {
        self.log(ctx, Level::ERROR, message, attrs)
    }
}
