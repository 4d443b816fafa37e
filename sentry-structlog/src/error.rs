use std::error::Error;
use std::fmt;

/// Errors on the reporting path of a [`SentryHandler`](crate::SentryHandler).
///
/// These never surface from [`Handler::handle`](crate::Handler::handle);
/// they are only returned by [`SentryHandler::report`](crate::SentryHandler::report).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ReportError {
    /// Neither the context nor the current thread provides a usable hub.
    #[error("no sentry hub is available")]
    NoHub,
}

/// An error with an optional message and an optional underlying cause.
///
/// Useful for attaching context to an error before logging it under the
/// `error` key.
#[derive(Debug, Default)]
pub struct LogError {
    message: String,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

impl LogError {
    /// Creates an error with only a message.
    pub fn new<M: Into<String>>(message: M) -> Self {
        LogError {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an error that adds `message` to `source`.
    pub fn wrap<M, E>(message: M, source: E) -> Self
    where
        M: Into<String>,
        E: Into<Box<dyn Error + Send + Sync + 'static>>,
    {
        LogError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Creates an error that only forwards `source`.
    pub fn from_source<E>(source: E) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync + 'static>>,
    {
        LogError {
            message: String::new(),
            source: Some(source.into()),
        }
    }

    /// The message, which may be empty.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.message.is_empty(), &self.source) {
            (false, Some(source)) => write!(f, "{}: {}", self.message, source),
            (true, Some(source)) => write!(f, "{source}"),
            (_, None) => f.write_str(&self.message),
        }
    }
}

impl Error for LogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn Error + 'static))
    }
}
