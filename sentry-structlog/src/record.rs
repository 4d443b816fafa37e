use std::panic::Location;
use std::time::SystemTime;

use crate::{Attr, Level, Value};

/// The source code location a [`Record`] was emitted from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Source {
    /// The source file.
    pub file: &'static str,
    /// The line within `file`.
    pub line: u32,
    /// The column within `line`.
    pub column: u32,
}

impl Source {
    /// Returns the location of the caller.
    ///
    /// Inside functions annotated with `#[track_caller]` this resolves to
    /// the outermost untracked call site.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Source {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }
}

/// A single structured log event.
///
/// Handlers receive records by reference and must not hold on to them past
/// the call.
#[derive(Clone, Debug)]
pub struct Record {
    time: SystemTime,
    level: Level,
    message: String,
    source: Option<Source>,
    attrs: Vec<Attr>,
}

impl Record {
    /// Creates a record stamped with the current time.
    pub fn new<M: Into<String>>(level: Level, message: M) -> Self {
        Record {
            time: SystemTime::now(),
            level,
            message: message.into(),
            source: None,
            attrs: Vec::new(),
        }
    }

    /// Overrides the timestamp.
    #[must_use]
    pub fn with_time(mut self, time: SystemTime) -> Self {
        self.time = time;
        self
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    /// Appends a single attribute.
    #[must_use]
    pub fn with_attr<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.attrs.push(Attr::new(key, value));
        self
    }

    /// Appends all given attributes.
    #[must_use]
    pub fn with_attrs<I: IntoIterator<Item = Attr>>(mut self, attrs: I) -> Self {
        self.attrs.extend(attrs);
        self
    }

    /// The time the record was created.
    pub fn time(&self) -> SystemTime {
        self.time
    }

    /// The severity of the record.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The log message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where the record was emitted, if known.
    pub fn source(&self) -> Option<Source> {
        self.source
    }

    /// The attributes in insertion order.
    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }
}
