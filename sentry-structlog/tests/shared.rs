#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use sentry::protocol::{Context, Event, Map, Value};
use sentry::test::TestTransport;
use sentry::{ClientOptions, Hub};
use sentry_structlog::{Attr, Handler, Level, Record};

/// Creates a standalone hub whose events end up in the returned transport.
pub fn test_hub() -> (Arc<Hub>, Arc<TestTransport>) {
    let transport = TestTransport::new();
    let options = ClientOptions {
        dsn: Some("https://public@sentry-structlog.invalid/1".parse().unwrap()),
        transport: Some(Arc::new(transport.clone())),
        sample_rate: 1.0,
        ..ClientOptions::default()
    };
    let hub = Arc::new(Hub::new(
        Some(Arc::new(options.into())),
        Default::default(),
    ));
    (hub, transport)
}

pub fn fetch_events(transport: &TestTransport) -> Vec<Event<'static>> {
    transport
        .fetch_and_clear_envelopes()
        .into_iter()
        .filter_map(|envelope| envelope.event().cloned())
        .collect()
}

/// Returns the attributes context of an event, if present.
pub fn attributes<'a>(event: &'a Event<'static>) -> Option<&'a Map<String, Value>> {
    match event.contexts.get("slog") {
        Some(Context::Other(map)) => Some(map),
        Some(other) => panic!("expected `slog` to be a generic context, got {other:?}"),
        None => None,
    }
}

/// A handler that records everything it is given.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub records: Arc<Mutex<Vec<Record>>>,
    pub attrs: Vec<String>,
    pub groups: Vec<String>,
    pub fail: bool,
}

impl Recorder {
    pub fn failing() -> Self {
        Recorder {
            fail: true,
            ..Default::default()
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|record| record.message().to_owned())
            .collect()
    }

    pub fn levels(&self) -> Vec<Level> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(Record::level)
            .collect()
    }
}

impl Handler for Recorder {
    type Err = io::Error;

    fn enabled(&self, _ctx: &sentry_structlog::Context, _level: Level) -> bool {
        true
    }

    fn handle(&self, _ctx: &sentry_structlog::Context, record: &Record) -> Result<(), io::Error> {
        self.records.lock().unwrap().push(record.clone());
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
        }
        Ok(())
    }

    fn with_attrs(&self, attrs: &[Attr]) -> Self {
        let mut handler = self.clone();
        handler.attrs.extend(attrs.iter().map(ToString::to_string));
        handler
    }

    fn with_group(&self, name: &str) -> Self {
        let mut handler = self.clone();
        handler.groups.push(name.to_owned());
        handler
    }
}
