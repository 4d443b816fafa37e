#![cfg(feature = "log")]

use std::sync::{Mutex, Once};

use sentry_structlog::{Attr, Context, Handler, Level, LogHandler, Logger, Record, SentryHandler};

#[derive(Debug)]
struct Captured {
    target: String,
    level: log::Level,
    message: String,
    file: Option<String>,
    line: Option<u32>,
}

static CAPTURED: Mutex<Vec<Captured>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::Level::Info
    }

    fn log(&self, record: &log::Record<'_>) {
        CAPTURED.lock().unwrap().push(Captured {
            target: record.target().to_owned(),
            level: record.level(),
            message: record.args().to_string(),
            file: record.file().map(ToOwned::to_owned),
            line: record.line(),
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

fn init() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        log::set_logger(&LOGGER)
            .map(|()| log::set_max_level(log::LevelFilter::Info))
            .unwrap();
    });
}

fn take(target: &str) -> Vec<Captured> {
    let mut captured = CAPTURED.lock().unwrap();
    let (mine, rest): (Vec<_>, Vec<_>) = captured.drain(..).partition(|c| c.target == target);
    *captured = rest;
    mine
}

#[test]
fn test_enabled_follows_logger() {
    init();
    let handler = LogHandler::new("enabled");
    let ctx = Context::new();

    assert!(!handler.enabled(&ctx, Level::DEBUG));
    assert!(handler.enabled(&ctx, Level::INFO));
    assert!(handler.enabled(&ctx, Level::WARN));
    assert!(handler.enabled(&ctx, Level::ERROR));
}

#[test]
fn test_records_are_written_to_log() {
    init();
    let logger = Logger::new(LogHandler::new("written"))
        .with(&[Attr::new("service", "api")])
        .with_group("http");
    let ctx = Context::new();

    let line = line!() + 1;
    logger.warn(&ctx, "slow request", &[Attr::new("ms", 1200)]).unwrap();
    logger.debug(&ctx, "filtered out", &[]).unwrap();

    let captured = take("written");
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].level, log::Level::Warn);
    assert_eq!(captured[0].message, "slow request service=api http.ms=1200");
    assert_eq!(captured[0].file.as_deref(), Some(file!()));
    assert_eq!(captured[0].line, Some(line));
}

#[test]
fn test_sentry_handler_wrapping_log_handler() {
    init();
    let handler = SentryHandler::new(LogHandler::new("wrapped"), [Level::ERROR]);
    let ctx = Context::new();

    let events = sentry::test::with_captured_events(|| {
        let record = Record::new(Level::ERROR, "payment declined").with_attr(
            "error",
            sentry_structlog::Value::error(sentry_structlog::LogError::new("card expired")),
        );
        handler.handle(&ctx, &record).unwrap();
    });

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].exception[0].value.as_deref(), Some("card expired"));

    let captured = take("wrapped");
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].level, log::Level::Error);
    assert_eq!(captured[0].message, "payment declined error=card expired");
    assert_eq!(captured[0].line, None);
}
