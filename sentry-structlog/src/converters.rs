//! Helpers for turning [`Record`]s into Sentry data.

use std::error::Error;

use sentry_core::protocol::{Map, Value};

use crate::Record;

/// Key under which a record's timestamp is rendered.
pub const TIME_KEY: &str = "time";
/// Key under which a record's level is rendered.
pub const LEVEL_KEY: &str = "level";
/// Key under which a record's source location is rendered.
pub const SOURCE_KEY: &str = "source";
/// Key under which a record's message is rendered.
pub const MESSAGE_KEY: &str = "msg";
/// Short attribute key for an error attached to a record.
pub const SHORT_ERROR_KEY: &str = "err";
/// Long attribute key for an error attached to a record.
pub const LONG_ERROR_KEY: &str = "error";

/// Name of the Sentry context holding a record's attributes.
pub const ATTRIBUTES_CONTEXT: &str = "slog";

/// Keys that never end up in the attributes context.
pub const EXCLUDED_KEYS: [&str; 6] = [
    TIME_KEY,
    LEVEL_KEY,
    SOURCE_KEY,
    MESSAGE_KEY,
    SHORT_ERROR_KEY,
    LONG_ERROR_KEY,
];

/// The parts of a [`Record`] that get reported to Sentry.
#[derive(Debug, Default)]
pub struct RecordData<'a> {
    /// Every attribute outside of [`EXCLUDED_KEYS`], rendered as a string.
    pub context: Map<String, Value>,
    /// The error stored under [`SHORT_ERROR_KEY`] or [`LONG_ERROR_KEY`].
    pub error: Option<&'a (dyn Error + Send + Sync + 'static)>,
}

/// Collects the attributes context and the attached error of a record.
///
/// When more than one error attribute is present the last one wins. A value
/// under an error key that is not an error is skipped.
pub fn extract_record_data(record: &Record) -> RecordData<'_> {
    let mut data = RecordData::default();

    for attr in record.attrs() {
        let key = attr.key.as_str();
        if key == SHORT_ERROR_KEY || key == LONG_ERROR_KEY {
            match attr.value.as_error() {
                Some(error) => data.error = Some(error),
                None => {
                    sentry_core::sentry_debug!(
                        "ignoring `{}` attribute that does not hold an error: {}",
                        key,
                        attr.value
                    );
                }
            }
        } else if !EXCLUDED_KEYS.contains(&key) {
            data.context
                .insert(attr.key.clone(), Value::from(attr.value.to_string()));
        }
    }

    data
}
