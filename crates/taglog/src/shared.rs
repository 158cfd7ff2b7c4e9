//! A lock-guarded logger and its bridge to the `log` facade.
//!
//! [`Logger`] is single-threaded: it mutates its remembered level on every
//! call. [`SharedLogger`] serializes all calls behind one mutex so a logger can
//! be shared between threads or installed as the process-wide `log` backend.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use taglog_format::{Level, Value};

use crate::destination::Destination;
use crate::error::Result;
use crate::logger::Logger;
use crate::signal::{AnsiSignal, LevelSignal};

/// A [`Logger`] behind a mutex.
///
/// # Example
///
/// ```no_run
/// use taglog::Logger;
///
/// taglog::init(Logger::new().newline(true), log::LevelFilter::Info).unwrap();
/// log::warn!("disk at {}%", 91);
/// ```
pub struct SharedLogger<S: LevelSignal = AnsiSignal> {
    inner: Mutex<Logger<S>>,
}

impl<S: LevelSignal> SharedLogger<S> {
    pub fn new(logger: Logger<S>) -> Self {
        Self {
            inner: Mutex::new(logger),
        }
    }

    /// Logs to the default destination.
    pub fn log(&self, level: Level, template: &str, args: &[Value<'_>]) -> Result<()> {
        self.lock().log(level, template, args)
    }

    /// Logs to an explicit destination.
    pub fn log_to(
        &self,
        level: Level,
        template: &str,
        destination: &Destination,
        args: &[Value<'_>],
    ) -> Result<()> {
        self.lock().log_to(level, template, destination, args)
    }

    pub fn last_level(&self) -> Level {
        self.lock().last_level()
    }

    pub fn into_inner(self) -> Logger<S> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    // A panic mid-call can at worst leave a stale level; keep logging.
    fn lock(&self) -> MutexGuard<'_, Logger<S>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: LevelSignal> From<Logger<S>> for SharedLogger<S> {
    fn from(logger: Logger<S>) -> Self {
        Self::new(logger)
    }
}

/// Maps a `log` record level onto a logger level.
///
/// There are no debug or trace tags, so those fold into `Info`.
pub fn level_for(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warning,
        log::Level::Info | log::Level::Debug | log::Level::Trace => Level::Info,
    }
}

impl<S: LevelSignal + Send> log::Log for SharedLogger<S> {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        // Filtering is left to `log::set_max_level`.
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        let message = record.args().to_string();
        let mut logger = self.lock();
        let template = if logger.appends_newline() { "{0}" } else { "{0}\n" };
        // `log::Log` has no error channel.
        let _ = logger.log(level_for(record.level()), template, &[Value::from(message)]);
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

/// Installs `logger` as the global `log` backend.
pub fn init<S>(logger: Logger<S>, max_level: log::LevelFilter) -> std::result::Result<(), log::SetLoggerError>
where
    S: LevelSignal + Send + 'static,
{
    log::set_boxed_logger(Box::new(SharedLogger::new(logger)))?;
    log::set_max_level(max_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::NoSignal;
    use std::sync::Arc;

    #[test]
    fn test_level_mapping() {
        assert_eq!(level_for(log::Level::Error), Level::Error);
        assert_eq!(level_for(log::Level::Warn), Level::Warning);
        assert_eq!(level_for(log::Level::Info), Level::Info);
        assert_eq!(level_for(log::Level::Debug), Level::Info);
        assert_eq!(level_for(log::Level::Trace), Level::Info);
    }

    #[test]
    fn test_record_is_prefixed_and_terminated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bridge.log");
        let shared = SharedLogger::new(Logger::with_signal(NoSignal).destination(path.clone()));

        log::Log::log(
            &shared,
            &log::Record::builder()
                .level(log::Level::Warn)
                .args(format_args!("disk at {}%", 91))
                .build(),
        );

        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "Warning: disk at 91%\n"
        );
        assert_eq!(shared.last_level(), Level::Warning);
    }

    #[test]
    fn test_record_text_is_not_a_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bridge.log");
        let shared = SharedLogger::new(
            Logger::with_signal(NoSignal)
                .destination(path.clone())
                .newline(true),
        );

        log::Log::log(
            &shared,
            &log::Record::builder()
                .level(log::Level::Error)
                .args(format_args!("brace {{0"))
                .build(),
        );

        assert_eq!(std::fs::read_to_string(path).unwrap(), "Error: brace {0\n");
    }

    #[test]
    fn test_concurrent_calls_do_not_interleave() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("threads.log");
        let shared = Arc::new(SharedLogger::new(
            Logger::with_signal(NoSignal).destination(path.clone()),
        ));

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || {
                    for i in 0..25 {
                        shared
                            .log(Level::Info, "{0}-{1}\n", &[Value::from(t), Value::from(i)])
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let content = std::fs::read_to_string(path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 100);
        assert!(lines.iter().all(|l| l.starts_with("Info: ")));
    }
}
