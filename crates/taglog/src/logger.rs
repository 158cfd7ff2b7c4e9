//! The tagged logger.

use taglog_format::{Formatter, Level, Value};

use crate::config::LoggerConfig;
use crate::destination::Destination;
use crate::error::Result;
use crate::signal::{AnsiSignal, LevelSignal};

/// Writes level-tagged, templated messages to the console or a file.
///
/// The logger remembers the level of its last message and fires its
/// [`LevelSignal`] only when the level changes, so a run of warnings recolors
/// the terminal once.
///
/// Each call is evaluated completely in memory before anything is written. A
/// call that fails to format writes nothing, fires no signal, and leaves the
/// remembered level unchanged.
///
/// # Example
///
/// ```
/// use taglog::{Level, Logger, NoSignal, Value};
///
/// let logger = Logger::with_signal(NoSignal);
/// let text = logger
///     .render(Level::Warning, "Here we go: {0} {2} {1} {0}", &[
///         Value::from("zero"),
///         Value::from(1.0),
///         Value::from(2),
///     ])
///     .unwrap();
/// assert_eq!(text, "Warning: Here we go: zero 2 1.000000 zero");
/// ```
pub struct Logger<S: LevelSignal = AnsiSignal> {
    formatter: Formatter,
    signal: S,
    last_level: Level,
    destination: Destination,
    newline: bool,
}

impl Logger<AnsiSignal> {
    /// Creates a console logger with automatic color detection.
    pub fn new() -> Self {
        Self::with_signal(AnsiSignal::default())
    }

    /// Creates a logger from configuration.
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::with_signal(AnsiSignal::new(config.color))
            .formatter(Formatter::with_options(config.format_options()))
            .destination(config.destination())
            .newline(config.newline)
            .initial_level(config.initial_level)
    }
}

impl Default for Logger<AnsiSignal> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: LevelSignal> Logger<S> {
    /// Creates a console logger that reports level changes to `signal`.
    pub fn with_signal(signal: S) -> Self {
        Self {
            formatter: Formatter::new(),
            signal,
            last_level: Level::default(),
            destination: Destination::Console,
            newline: false,
        }
    }

    /// Replaces the signal, keeping every other setting.
    pub fn signal<T: LevelSignal>(self, signal: T) -> Logger<T> {
        Logger {
            formatter: self.formatter,
            signal,
            last_level: self.last_level,
            destination: self.destination,
            newline: self.newline,
        }
    }

    /// Sets the destination used by [`log`](Self::log).
    pub fn destination(mut self, destination: impl Into<Destination>) -> Self {
        self.destination = destination.into();
        self
    }

    /// Appends `\n` after every message when enabled.
    pub fn newline(mut self, enabled: bool) -> Self {
        self.newline = enabled;
        self
    }

    pub fn formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Sets the level assumed before the first message.
    ///
    /// A first message at this level does not fire the signal.
    pub fn initial_level(mut self, level: Level) -> Self {
        self.last_level = level;
        self
    }

    /// The level of the last message that changed the terminal state.
    pub fn last_level(&self) -> Level {
        self.last_level
    }

    pub fn default_destination(&self) -> &Destination {
        &self.destination
    }

    pub fn appends_newline(&self) -> bool {
        self.newline
    }

    pub fn signal_ref(&self) -> &S {
        &self.signal
    }

    /// Logs to the default destination.
    pub fn log(&mut self, level: Level, template: &str, args: &[Value<'_>]) -> Result<()> {
        let destination = self.destination.clone();
        self.log_to(level, template, &destination, args)
    }

    /// Logs to an explicit destination.
    pub fn log_to(
        &mut self,
        level: Level,
        template: &str,
        destination: &Destination,
        args: &[Value<'_>],
    ) -> Result<()> {
        let mut text = self.render(level, template, args)?;
        if self.newline {
            text.push('\n');
        }

        if !level.is_noop() && level != self.last_level {
            self.signal.level_changed(level)?;
            self.last_level = level;
        }

        destination.write_text(&text)?;
        Ok(())
    }

    /// Produces the text a call would write, without writing it.
    ///
    /// With no arguments the template is returned verbatim: no prefix and no
    /// placeholder processing.
    pub fn render(&self, level: Level, template: &str, args: &[Value<'_>]) -> Result<String> {
        if args.is_empty() {
            return Ok(template.to_string());
        }
        Ok(self.formatter.evaluate(level, template, args)?)
    }
}
