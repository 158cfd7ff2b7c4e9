//! Call-site logging macros.
//!
//! The macros convert each argument with `Value::from` and log through any
//! value with a `log(level, template, args)` method ([`Logger`] or
//! [`SharedLogger`]). A call without arguments still goes through the
//! evaluator, with a single `0` argument, so every macro line carries its level
//! prefix. In release builds they expand to `Ok(())` without evaluating the
//! logger or the arguments.
//!
//! ```
//! use taglog::{warning_log, Logger, NoSignal};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let mut logger = Logger::with_signal(NoSignal).destination(dir.path().join("app.log"));
//! warning_log!(logger, "Hello {1} {0}\n", "world", "my").unwrap();
//! ```
//!
//! [`Logger`]: crate::Logger
//! [`SharedLogger`]: crate::SharedLogger

/// Logs at an explicit level. Active only with `debug_assertions`.
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $template:expr $(,)?) => {{
        if cfg!(debug_assertions) {
            $logger.log($level, $template, &[$crate::Value::Int(0)])
        } else {
            ::core::result::Result::<(), $crate::LogError>::Ok(())
        }
    }};
    ($logger:expr, $level:expr, $template:expr, $($arg:expr),+ $(,)?) => {{
        if cfg!(debug_assertions) {
            $logger.log($level, $template, &[$($crate::Value::from($arg)),+])
        } else {
            ::core::result::Result::<(), $crate::LogError>::Ok(())
        }
    }};
}

/// Logs at [`Level::Warning`](crate::Level::Warning).
#[macro_export]
macro_rules! warning_log {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::Level::Warning, $template $(, $arg)*)
    };
}

/// Logs at [`Level::Error`](crate::Level::Error).
#[macro_export]
macro_rules! error_log {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::Level::Error, $template $(, $arg)*)
    };
}

/// Logs at [`Level::Info`](crate::Level::Info).
#[macro_export]
macro_rules! info_log {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::Level::Info, $template $(, $arg)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Level, Logger, NoSignal, SharedLogger};

    #[test]
    fn test_macros_write_tagged_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("macros.log");
        let mut logger = Logger::with_signal(NoSignal).destination(path.clone());

        warning_log!(logger, "Hello {1} {0}\n", "world", "my").unwrap();
        error_log!(logger, "code {0}\n", 7u8).unwrap();
        info_log!(logger, "plain\n").unwrap();
        log_at!(logger, Level::None, "{0}{1}\n", 'x', String::from("y"),).unwrap();

        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "Warning: Hello my world\nError: code 7\nInfo: plain\nxy\n"
        );
    }

    #[test]
    fn test_bare_template_is_tagged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bare.log");
        let mut logger = Logger::with_signal(NoSignal).destination(path.clone());

        info_log!(logger, "plain\n").unwrap();
        warning_log!(logger, "slot {0}\n",).unwrap();
        logger.log(Level::Error, "direct\n", &[]).unwrap();

        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "Info: plain\nWarning: slot 0\ndirect\n"
        );
    }

    #[test]
    fn test_macros_accept_shared_logger() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shared.log");
        let shared = SharedLogger::new(Logger::with_signal(NoSignal).destination(path.clone()));

        info_log!(shared, "{0}", 1.5f32).unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "Info: 1.500000");
    }

    #[test]
    fn test_macro_surfaces_format_errors() {
        let mut logger = Logger::with_signal(NoSignal);
        assert!(error_log!(logger, "{3}", 1).is_err());
    }
}
