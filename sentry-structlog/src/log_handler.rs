use std::convert::Infallible;

use crate::{Attr, Context, Handler, Level, Record};

/// Converts a [`Level`] to a [`log::Level`].
pub fn convert_to_log_level(level: Level) -> log::Level {
    if level < Level::DEBUG {
        log::Level::Trace
    } else if level < Level::INFO {
        log::Level::Debug
    } else if level < Level::WARN {
        log::Level::Info
    } else if level < Level::ERROR {
        log::Level::Warn
    } else {
        log::Level::Error
    }
}

/// A [`Handler`] that writes records to the [`log`] facade.
///
/// Attributes are appended to the message as `key=value` pairs. Keys of
/// record attributes are qualified with the groups opened through
/// [`with_group`](Handler::with_group), joined by `.`.
#[derive(Clone, Debug)]
pub struct LogHandler {
    target: String,
    prefix: String,
    attrs: Vec<Attr>,
}

impl LogHandler {
    /// Creates a handler that logs to `target`.
    pub fn new<T: Into<String>>(target: T) -> Self {
        Self {
            target: target.into(),
            prefix: String::new(),
            attrs: Vec::new(),
        }
    }

    /// The `log` target records are written to.
    pub fn target(&self) -> &str {
        &self.target
    }

    fn format(&self, record: &Record) -> String {
        let mut line = record.message().to_owned();
        for attr in &self.attrs {
            line.push(' ');
            line.push_str(&attr.to_string());
        }
        for attr in record.attrs() {
            line.push(' ');
            line.push_str(&self.prefix);
            line.push_str(&attr.to_string());
        }
        line
    }
}

impl Default for LogHandler {
    fn default() -> Self {
        Self::new("structlog")
    }
}

impl Handler for LogHandler {
    type Err = Infallible;

    fn enabled(&self, _ctx: &Context, level: Level) -> bool {
        let level = convert_to_log_level(level);
        level <= log::max_level()
            && log::logger().enabled(
                &log::Metadata::builder()
                    .level(level)
                    .target(&self.target)
                    .build(),
            )
    }

    fn handle(&self, _ctx: &Context, record: &Record) -> Result<(), Self::Err> {
        let line = self.format(record);
        let source = record.source();
        log::logger().log(
            &log::Record::builder()
                .args(format_args!("{line}"))
                .level(convert_to_log_level(record.level()))
                .target(&self.target)
                .file_static(source.map(|s| s.file))
                .line(source.map(|s| s.line))
                .build(),
        );
        Ok(())
    }

    fn with_attrs(&self, attrs: &[Attr]) -> Self {
        let mut handler = self.clone();
        handler.attrs.extend(attrs.iter().map(|attr| Attr {
            key: format!("{}{}", self.prefix, attr.key),
            value: attr.value.clone(),
        }));
        handler
    }

    fn with_group(&self, name: &str) -> Self {
        let mut handler = self.clone();
        if !name.is_empty() {
            handler.prefix.push_str(name);
            handler.prefix.push('.');
        }
        handler
    }
}
