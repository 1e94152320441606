//! Error types.
//!
//! Errors are split by how the caller must react to them:
//!
//! * [`RunError`] ends the run. The input could not be read, output could not
//!   be written, or the interpreter was misconfigured.
//! * [`CommandError`] rejects a single command. The robot is left exactly as
//!   it was, a diagnostic is printed, and the next line is processed.

use crate::robot::Heading;
use glam::IVec2;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal, source-level failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The named input file could not be opened.
    #[error("cannot open input file `{}`", .path.display())]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading a line from the input failed part way through the stream.
    #[error("failed to read command input")]
    Read(#[source] io::Error),

    /// Writing a report or diagnostic failed.
    #[error("failed to write output")]
    Write(#[source] io::Error),

    /// The interpreter configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Recoverable, per-command failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Unknown verb, or a PLACE whose argument list cannot be parsed.
    #[error("Ignoring invalid command `{line}`: {reason}")]
    MalformedCommand { line: String, reason: String },

    /// A syntactically valid PLACE that cannot be honoured.
    #[error(transparent)]
    InvalidPlacement(#[from] PlacementError),

    /// A MOVE that would take the robot off the table.
    #[error(
        "Ignoring attempt to move robot off table from x={}, y={} facing {heading}",
        .from.x,
        .from.y
    )]
    IllegalMoveAttempt { from: IVec2, heading: Heading },
}

impl CommandError {
    pub(crate) fn malformed(line: &str, reason: impl Into<String>) -> Self {
        Self::MalformedCommand {
            line: line.to_owned(),
            reason: reason.into(),
        }
    }
}

/// Why a PLACE was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// Coordinates are kept wide so integers past `i32` still land here.
    #[error("Ignoring invalid PLACE co-ordinates x={x}, y={y}")]
    OutOfBounds { x: i64, y: i64 },

    #[error("Invalid direction `{0}`")]
    UnknownDirection(String),
}
