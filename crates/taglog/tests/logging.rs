//! End-to-end tests for the logger writing to files.

use std::path::PathBuf;

use proptest::prelude::*;
use taglog::{
    Destination, FormatError, Level, LevelSignal, LogError, Logger, LoggerConfig, NoSignal, Value,
};

// ============================================================================
// Test helpers
// ============================================================================

#[derive(Default)]
struct CountingSignal {
    changes: Vec<Level>,
}

impl LevelSignal for CountingSignal {
    fn level_changed(&mut self, level: Level) -> std::io::Result<()> {
        self.changes.push(level);
        Ok(())
    }
}

struct Fixture {
    _dir: tempfile::TempDir,
    path: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taglog.log");
        Self { _dir: dir, path }
    }

    fn logger(&self) -> Logger<CountingSignal> {
        Logger::with_signal(CountingSignal::default()).destination(self.path.clone())
    }

    fn read(&self) -> String {
        std::fs::read_to_string(&self.path).unwrap_or_default()
    }
}

// ============================================================================
// Examples
// ============================================================================

#[test]
fn warning_with_reordered_indices() {
    let fx = Fixture::new();
    let mut logger = fx.logger();

    logger
        .log(
            Level::Warning,
            "Here we go: {0} {2} {1} {0}",
            &[Value::from("zero"), Value::from(1.0), Value::from(2)],
        )
        .unwrap();

    assert_eq!(fx.read(), "Warning: Here we go: zero 2 1.000000 zero");
}

#[test]
fn info_with_repeated_index() {
    let fx = Fixture::new();
    let mut logger = fx.logger();

    logger
        .log(
            Level::Info,
            "different params: {0} {0} {0} {0}",
            &[Value::from("haha")],
        )
        .unwrap();

    assert_eq!(fx.read(), "Info: different params: haha haha haha haha");
}

#[test]
fn single_integer() {
    let fx = Fixture::new();
    let mut logger = fx.logger();

    logger.log(Level::Error, "{0}", &[Value::from(15)]).unwrap();

    assert_eq!(fx.read(), "Error: 15");
}

#[test]
fn malformed_template_is_rejected() {
    let fx = Fixture::new();
    let mut logger = fx.logger();

    let err = logger
        .log(Level::Warning, "{0", &[Value::from(15)])
        .unwrap_err();

    assert!(matches!(
        err,
        LogError::Format(FormatError::MalformedTemplate { position: 0 })
    ));
    assert_eq!(fx.read(), "");
    assert!(!fx.path.exists());
}

#[test]
fn invalid_index_is_rejected() {
    let fx = Fixture::new();
    let mut logger = fx.logger();

    let err = logger
        .log(Level::Info, "{zero}", &[Value::from(15)])
        .unwrap_err();

    assert!(matches!(
        err,
        LogError::Format(FormatError::InvalidIndex { position: 1, .. })
    ));
}

#[test]
fn empty_argument_list_writes_template_verbatim() {
    let fx = Fixture::new();
    let mut logger = fx.logger();

    logger.log(Level::Warning, "no args {0}\n", &[]).unwrap();

    assert_eq!(fx.read(), "no args {0}\n");
    assert_eq!(logger.signal_ref().changes, vec![Level::Warning]);
}

#[test]
fn every_call_appends() {
    let fx = Fixture::new();
    let mut logger = fx.logger().newline(true);

    for i in 0..3 {
        logger.log(Level::Info, "line {0}", &[Value::from(i)]).unwrap();
    }

    assert_eq!(fx.read(), "Info: line 0\nInfo: line 1\nInfo: line 2\n");
}

#[test]
fn configured_file_destination() {
    let fx = Fixture::new();
    let yaml = format!(
        "file: {}\ncolor: never\nnewline: true\n",
        fx.path.display()
    );
    let config = LoggerConfig::from_yaml(&yaml).unwrap();
    let mut logger = Logger::from_config(&config);

    assert_eq!(logger.default_destination(), &Destination::file(&fx.path));
    logger
        .log(Level::Error, "{0} of {1}", &[Value::from(b'3'), Value::from(4u64)])
        .unwrap();

    assert_eq!(fx.read(), "Error: 51 of 4\n");
}

#[test]
fn argument_limit_from_config() {
    let fx = Fixture::new();
    let config = LoggerConfig::from_yaml("color: never\nmax_argument_len: 3").unwrap();
    let mut logger = Logger::from_config(&config).destination(fx.path.clone());

    logger.log(Level::Info, "{0}", &[Value::from("abc")]).unwrap();
    let err = logger
        .log(Level::Info, "{0}", &[Value::from("abcd")])
        .unwrap_err();

    assert!(matches!(
        err,
        LogError::Format(FormatError::ScratchOverflow { len: 4, limit: 3, .. })
    ));
    assert_eq!(fx.read(), "Info: abc");
}

#[test]
fn no_signal_logger_still_tracks_level() {
    let fx = Fixture::new();
    let mut logger = Logger::with_signal(NoSignal).destination(fx.path.clone());

    logger.log(Level::Error, "x", &[]).unwrap();

    assert_eq!(logger.last_level(), Level::Error);
}

// ============================================================================
// Property tests
// ============================================================================

fn level_strategy() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::Warning),
        Just(Level::Error),
        Just(Level::Info),
        Just(Level::None),
    ]
}

/// Expected signal calls: one per run of equal non-None levels, starting
/// from the initial Info state.
fn expected_changes(levels: &[Level]) -> Vec<Level> {
    let mut last = Level::Info;
    let mut changes = Vec::new();
    for &level in levels {
        if !level.is_noop() && level != last {
            changes.push(level);
            last = level;
        }
    }
    changes
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The signal fires once per level transition, never once per call.
    #[test]
    fn signal_fires_once_per_transition(levels in prop::collection::vec(level_strategy(), 0..30)) {
        let fx = Fixture::new();
        let mut logger = fx.logger();

        for &level in &levels {
            logger.log(level, "{0}", &[Value::from(0)]).unwrap();
        }

        prop_assert_eq!(&logger.signal_ref().changes, &expected_changes(&levels));
    }
}
