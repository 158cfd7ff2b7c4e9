//! Where log output goes.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Destination for a log message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Destination {
    /// Write to standard output.
    #[default]
    Console,
    /// Append to a file.
    ///
    /// The file is opened, written and closed on every call; no handle is
    /// kept between messages.
    File(PathBuf),
}

impl Destination {
    /// Convenience constructor for [`Destination::File`].
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Destination::File(path.into())
    }

    /// Writes `content` exactly as given, without adding a newline.
    pub fn write_text(&self, content: &str) -> io::Result<()> {
        match self {
            Destination::Console => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(content.as_bytes())?;
                handle.flush()
            }
            Destination::File(path) => {
                ensure_parent_dir(path)?;
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                file.write_all(content.as_bytes())
            }
        }
    }
}

impl From<PathBuf> for Destination {
    fn from(path: PathBuf) -> Self {
        Destination::File(path)
    }
}

impl From<Option<PathBuf>> for Destination {
    fn from(path: Option<PathBuf>) -> Self {
        path.map(Destination::File).unwrap_or_default()
    }
}

/// Fails with `NotFound`, naming the file, when its directory is missing.
fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.is_dir() => Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!(
                "cannot log to {}: directory {} is missing",
                path.display(),
                dir.display()
            ),
        )),
        _ => Ok(()),
    }
}
