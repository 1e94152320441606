//! Command input: a named file or standard input, read one line at a time.

use crate::error::RunError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::info;

/// Where commands come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceOrigin {
    File(PathBuf),
    Stdin,
    /// An in-memory or otherwise caller-supplied reader.
    Custom,
}

/// An open command stream.
pub struct CommandSource {
    origin: SourceOrigin,
    reader: Box<dyn BufRead>,
}

impl CommandSource {
    /// Opens `path`, or standard input when `path` is `None`.
    ///
    /// # Errors
    ///
    /// [`RunError::UnreadableSource`] if the file cannot be opened.
    pub fn open(path: Option<&Path>) -> Result<Self, RunError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::stdin()),
        }
    }

    /// # Errors
    ///
    /// [`RunError::UnreadableSource`] if the file cannot be opened.
    pub fn from_file(path: &Path) -> Result<Self, RunError> {
        let file = File::open(path).map_err(|source| RunError::UnreadableSource {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "reading commands from file");
        Ok(Self {
            origin: SourceOrigin::File(path.to_path_buf()),
            reader: Box::new(BufReader::new(file)),
        })
    }

    pub fn stdin() -> Self {
        info!("reading commands from standard input");
        Self {
            origin: SourceOrigin::Stdin,
            reader: Box::new(io::stdin().lock()),
        }
    }

    pub fn from_reader(reader: impl BufRead + 'static) -> Self {
        Self {
            origin: SourceOrigin::Custom,
            reader: Box::new(reader),
        }
    }

    pub fn origin(&self) -> &SourceOrigin {
        &self.origin
    }

    /// Consumes the source, yielding its lines lazily.
    pub fn lines(self) -> Lines {
        Lines {
            reader: self.reader,
            buf: Vec::new(),
        }
    }
}

/// Lines of a [`CommandSource`], with the terminator and leading whitespace removed.
///
/// Ends at end of input. Bytes that are not valid UTF-8 are replaced with
/// U+FFFD, so a garbled line reaches the parser and is rejected there. Only a
/// failing read is yielded as [`RunError::Read`].
pub struct Lines {
    reader: Box<dyn BufRead>,
    buf: Vec<u8>,
}

impl Iterator for Lines {
    type Item = Result<String, RunError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                let mut line = self.buf.as_slice();
                if let Some(rest) = line.strip_suffix(b"\n") {
                    line = rest.strip_suffix(b"\r").unwrap_or(rest);
                }
                Some(Ok(String::from_utf8_lossy(line).trim_start().to_owned()))
            }
            Err(e) => Some(Err(RunError::Read(e))),
        }
    }
}
